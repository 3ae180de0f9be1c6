pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod types;

pub use camera::{Camera, Direction};
pub use config::Settings;
pub use error::SettingsError;
pub use input::{Action, FrameInput, InputState};
pub use scene::SceneState;
