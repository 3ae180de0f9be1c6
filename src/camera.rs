use glam::{Mat4, Vec3};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch never reaches this magnitude (degrees)
pub const PITCH_LIMIT: f32 = 89.0;
const PITCH_MARGIN: f32 = 1.0e-3;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Movement command for `Camera::process_movement`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The direction that undoes this one
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// First-person fly camera driven by yaw/pitch angles in degrees.
///
/// `front`, `right` and `up` are derived from `yaw`, `pitch` and `world_up`
/// and are recomputed whenever any of those change, so they always form an
/// orthonormal basis. Pitch stays inside (-89°, 89°) and zoom inside
/// [`MIN_ZOOM`, `MAX_ZOOM`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
}

impl Camera {
    /// Camera at `position` with +Y up, looking down -Z
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Camera with an explicit world-up reference and initial angles.
    ///
    /// A zero `world_up` falls back to +Y. `pitch` is clamped like any
    /// later orientation change.
    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let world_up = world_up.try_normalize().unwrap_or(Vec3::Y);
        let mut camera = Self {
            position,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch: clamp_pitch(pitch),
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Look-at transform from `position` towards `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using `zoom` as the vertical field of view
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, Z_NEAR, Z_FAR)
    }

    /// Displace the eye by `movement_speed * delta_time` along `direction`.
    ///
    /// Left/right follow the camera's `right` vector, up/down follow
    /// `world_up` so vertical flight ignores the current pitch.
    pub fn process_movement(&mut self, direction: Direction, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let axis = match direction {
            Direction::Forward => self.front,
            Direction::Backward => -self.front,
            Direction::Right => self.right,
            Direction::Left => -self.right,
            Direction::Up => self.world_up,
            Direction::Down => -self.world_up,
        };
        self.position += axis * velocity;
    }

    /// Apply pointer offsets to yaw and pitch.
    ///
    /// Positive `y_offset` pitches the camera up; callers whose input
    /// source grows downwards must invert it first.
    pub fn process_orientation(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch = clamp_pitch(self.pitch + y_offset * self.mouse_sensitivity);
        self.update_vectors();
    }

    /// Narrow (positive offset) or widen the field of view
    pub fn process_zoom(&mut self, offset: f32) {
        self.set_zoom(self.zoom - offset);
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        let (east, south) = horizontal_basis(self.world_up);

        self.front = (east * (yaw_cos * pitch_cos)
            + self.world_up * pitch_sin
            + south * (yaw_sin * pitch_cos))
            .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

fn clamp_pitch(pitch: f32) -> f32 {
    let limit = PITCH_LIMIT - PITCH_MARGIN;
    pitch.clamp(-limit, limit)
}

/// Two horizontal axes perpendicular to `up`. For +Y up these are +X and +Z,
/// which gives the usual yaw convention where -90° faces -Z.
fn horizontal_basis(up: Vec3) -> (Vec3, Vec3) {
    let east = (Vec3::X - up * up.x)
        .try_normalize()
        .unwrap_or_else(|| up.any_orthonormal_vector());
    (east, east.cross(up))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < EPS);
        assert!((r.length() - 1.0).abs() < EPS);
        assert!((u.length() - 1.0).abs() < EPS);
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    #[test]
    fn default_basis_faces_negative_z() {
        let camera = Camera::new(Vec3::ZERO);
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn z_up_world_keeps_basis_orthonormal() {
        let mut camera = Camera::with_orientation(Vec3::ZERO, Vec3::Z, 30.0, 10.0);
        assert_orthonormal(&camera);
        assert!(camera.up().dot(Vec3::Z) > 0.0);

        camera.process_orientation(400.0, 300.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn world_up_along_x_uses_fallback_basis() {
        let camera = Camera::with_orientation(Vec3::ZERO, Vec3::X, 0.0, 0.0);
        assert_orthonormal(&camera);
        assert!(camera.front().dot(Vec3::X).abs() < EPS);
    }

    #[test]
    fn zero_world_up_falls_back_to_y() {
        let camera = Camera::with_orientation(Vec3::ZERO, Vec3::ZERO, DEFAULT_YAW, 0.0);
        assert_eq!(camera.world_up(), Vec3::Y);
    }

    #[test]
    fn initial_pitch_is_clamped() {
        let camera = Camera::with_orientation(Vec3::ZERO, Vec3::Y, 0.0, 120.0);
        assert!(camera.pitch() < PITCH_LIMIT);
        assert_orthonormal(&camera);
    }

    #[test]
    fn vertical_movement_ignores_pitch() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_orientation(0.0, 400.0);
        camera.process_movement(Direction::Up, 1.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, DEFAULT_SPEED, 0.0), EPS));
    }

    #[test]
    fn direction_opposites_pair_up() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        let eye = camera.view_matrix().transform_point3(camera.position);
        assert!(eye.abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn set_zoom_clamps() {
        let mut camera = Camera::default();
        camera.set_zoom(500.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
        camera.set_zoom(-3.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
    }
}
