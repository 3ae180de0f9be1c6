use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::input::{Action, Axis, FrameInput};
use crate::types::TransformUniform;

/// Model spin in radians per second while a rotate key is held
pub const DEFAULT_ROTATION_RATE: f32 = 1.0;
/// Model slide in world units per second while a translate key is held
pub const DEFAULT_TRANSLATION_RATE: f32 = 1.0;

/// Everything the render loop mutates between frames
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub camera: Camera,
    /// Model rotation about X, Y, Z in radians
    pub rotation: Vec3,
    /// Model offset, applied to the view as the inverse translation
    pub offset: Vec3,
    pub rotation_rate: f32,
    pub translation_rate: f32,
}

impl SceneState {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            rotation: Vec3::ZERO,
            offset: Vec3::ZERO,
            rotation_rate: DEFAULT_ROTATION_RATE,
            translation_rate: DEFAULT_TRANSLATION_RATE,
        }
    }

    /// Advance by one frame of input
    pub fn apply(&mut self, input: &FrameInput, delta_time: f32) {
        for &action in &input.held {
            match action {
                Action::Rotate(axis) => {
                    *axis_mut(&mut self.rotation, axis) += self.rotation_rate * delta_time;
                }
                Action::Translate(axis, sign) => {
                    *axis_mut(&mut self.offset, axis) +=
                        sign.factor() * self.translation_rate * delta_time;
                }
                Action::Fly(direction) => self.camera.process_movement(direction, delta_time),
                Action::Quit => {}
            }
        }

        if input.look != glam::Vec2::ZERO {
            self.camera.process_orientation(input.look.x, input.look.y);
        }
        if input.scroll != 0.0 {
            self.camera.process_zoom(input.scroll);
        }
    }

    /// X, then Y, then Z rotation
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix() * Mat4::from_translation(-self.offset)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        self.camera.projection_matrix(aspect)
    }

    pub fn transforms(&self, aspect: f32) -> TransformUniform {
        TransformUniform::new(
            self.model_matrix(),
            self.view_matrix(),
            self.projection_matrix(aspect),
        )
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

fn axis_mut(v: &mut Vec3, axis: Axis) -> &mut f32 {
    match axis {
        Axis::X => &mut v.x,
        Axis::Y => &mut v.y,
        Axis::Z => &mut v.z,
    }
}
