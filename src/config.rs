//! Viewer settings with JSON file support.
//!
//! Every section uses `#[serde(default)]` so a partial file (for example
//! one that only sets `camera.movement_speed`) fills the rest from
//! defaults. Command-line flags are layered on top with
//! [`Settings::apply_cli`].

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{self, Camera};
use crate::cli::Cli;
use crate::error::SettingsError;
use crate::scene::{self, SceneState};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Prism Viewer".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Initial camera placement and tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    /// Degrees
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: camera::DEFAULT_YAW,
            pitch: camera::DEFAULT_PITCH,
            movement_speed: camera::DEFAULT_SPEED,
            mouse_sensitivity: camera::DEFAULT_SENSITIVITY,
            zoom: camera::DEFAULT_ZOOM,
        }
    }
}

impl CameraSettings {
    pub fn build(&self) -> Camera {
        let mut camera = Camera::with_orientation(
            Vec3::from_array(self.position),
            Vec3::from_array(self.world_up),
            self.yaw,
            self.pitch,
        );
        camera.movement_speed = self.movement_speed;
        camera.mouse_sensitivity = self.mouse_sensitivity;
        camera.set_zoom(self.zoom);
        camera
    }
}

/// Model manipulation rates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlSettings {
    /// Radians per second
    pub rotation_rate: f32,
    /// Units per second
    pub translation_rate: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            rotation_rate: scene::DEFAULT_ROTATION_RATE,
            translation_rate: scene::DEFAULT_TRANSLATION_RATE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub controls: ControlSettings,
    /// Seconds per frame; `None` uses wall-clock time
    pub fixed_step: Option<f32>,
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            camera: CameraSettings::default(),
            controls: ControlSettings::default(),
            fixed_step: None,
            show_hud: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)?;
        std::fs::write(path, content).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then the `--config` file if given, then the flags
    pub fn resolve(cli: &Cli) -> Result<Self, SettingsError> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_cli(cli);
        Ok(settings)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.no_ui {
            self.show_hud = false;
        }
        if let Some(step) = cli.fixed_step {
            self.fixed_step = Some(step);
        }
        if let Some(speed) = cli.speed {
            self.camera.movement_speed = speed;
        }
        if let Some(sensitivity) = cli.sensitivity {
            self.camera.mouse_sensitivity = sensitivity;
        }
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
    }

    pub fn build_scene(&self) -> SceneState {
        let mut scene = SceneState::new(self.camera.build());
        scene.rotation_rate = self.controls.rotation_rate;
        scene.translation_rate = self.controls.translation_rate;
        scene
    }
}
