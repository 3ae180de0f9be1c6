use glam::Vec3;
use prism_viewer::camera::{Camera, Direction, MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT};

const EPS: f32 = 1e-4;

fn assert_basis_orthonormal(camera: &Camera) {
    let (front, right, up) = (camera.front(), camera.right(), camera.up());
    for v in [front, right, up] {
        assert!((v.length() - 1.0).abs() < EPS, "not unit length: {:?}", v);
    }
    assert!(front.dot(right).abs() < EPS, "front·right = {}", front.dot(right));
    assert!(front.dot(up).abs() < EPS, "front·up = {}", front.dot(up));
    assert!(right.dot(up).abs() < EPS, "right·up = {}", right.dot(up));
}

/// Deterministic pseudo-random offsets in [-range, range)
fn offsets(count: usize, range: f32) -> impl Iterator<Item = (f32, f32)> {
    let mut state: u32 = 0x9e37_79b9;
    std::iter::repeat_with(move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let a = (state & 0xffff) as f32 / 65536.0;
        let b = (state >> 16) as f32 / 65536.0;
        ((a * 2.0 - 1.0) * range, (b * 2.0 - 1.0) * range)
    })
    .take(count)
}

#[cfg(test)]
mod orientation_tests {
    use super::*;

    #[test]
    fn test_pitch_stays_strictly_inside_limits() {
        let mut camera = Camera::default();
        for (dx, dy) in offsets(500, 2000.0) {
            camera.process_orientation(dx, dy);
            assert!(camera.pitch() > -PITCH_LIMIT && camera.pitch() < PITCH_LIMIT);
        }
    }

    #[test]
    fn test_pitch_saturates_on_large_offsets() {
        let mut camera = Camera::default();
        camera.process_orientation(0.0, 1.0e6);
        assert!(camera.pitch() < PITCH_LIMIT);
        assert!(camera.pitch() > PITCH_LIMIT - 0.01);

        camera.process_orientation(0.0, -1.0e7);
        assert!(camera.pitch() > -PITCH_LIMIT);
        assert!(camera.pitch() < -PITCH_LIMIT + 0.01);
    }

    #[test]
    fn test_basis_orthonormal_after_every_update() {
        let mut camera = Camera::default();
        assert_basis_orthonormal(&camera);
        for (dx, dy) in offsets(500, 900.0) {
            camera.process_orientation(dx, dy);
            assert_basis_orthonormal(&camera);
        }
    }

    #[test]
    fn test_basis_orthonormal_at_pitch_limit() {
        let mut camera = Camera::default();
        camera.process_orientation(123.0, 1.0e5);
        assert_basis_orthonormal(&camera);
        assert!(camera.up().y > 0.0, "up vector flipped");
    }

    #[test]
    fn test_zero_offset_keeps_front() {
        let mut camera = Camera::new(Vec3::ZERO);
        let before = camera.front();
        camera.process_orientation(0.0, 0.0);

        assert_eq!(camera.yaw(), -90.0);
        assert_eq!(camera.pitch(), 0.0);
        assert!(camera.front().abs_diff_eq(before, EPS));
        assert!(camera.front().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
    }

    #[test]
    fn test_offsets_scaled_by_sensitivity() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.mouse_sensitivity = 0.5;
        camera.process_orientation(10.0, 4.0);
        assert!((camera.yaw() - (-85.0)).abs() < EPS);
        assert!((camera.pitch() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_positive_y_offset_looks_up() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_orientation(0.0, 100.0);
        assert!(camera.front().y > 0.0);
    }

    #[test]
    fn test_yaw_turns_towards_right() {
        let mut camera = Camera::new(Vec3::ZERO);
        let right = camera.right();
        camera.process_orientation(900.0, 0.0);
        assert!(camera.front().abs_diff_eq(right, EPS));
    }
}

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn test_forward_scenario() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.movement_speed = 2.5;
        camera.process_movement(Direction::Forward, 1.0);
        assert!(
            camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), EPS),
            "got {:?}",
            camera.position
        );
    }

    #[test]
    fn test_forward_then_backward_returns() {
        let mut camera = Camera::new(Vec3::new(1.0, -2.0, 3.0));
        camera.process_orientation(37.0, -12.0);
        let start = camera.position;

        camera.process_movement(Direction::Forward, 0.37);
        camera.process_movement(Direction::Backward, 0.37);
        assert!(camera.position.abs_diff_eq(start, EPS));
    }

    #[test]
    fn test_every_direction_reverses() {
        let start = Vec3::new(0.5, 0.5, 0.5);
        for direction in Direction::ALL {
            let mut camera = Camera::new(start);
            camera.process_movement(direction, 0.8);
            assert!(!camera.position.abs_diff_eq(start, EPS), "{:?} did not move", direction);
            camera.process_movement(direction.opposite(), 0.8);
            assert!(camera.position.abs_diff_eq(start, EPS), "{:?} did not reverse", direction);
        }
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        for direction in Direction::ALL {
            camera.process_movement(direction, 0.0);
        }
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_strafe_uses_right_vector() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.movement_speed = 1.0;
        camera.process_movement(Direction::Right, 2.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
        camera.process_movement(Direction::Left, 4.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(-2.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn test_up_follows_world_up() {
        let mut camera = Camera::with_orientation(Vec3::ZERO, Vec3::Z, 0.0, 30.0);
        camera.movement_speed = 1.0;
        camera.process_movement(Direction::Up, 1.0);
        assert!(camera.position.abs_diff_eq(Vec3::Z, EPS));
        camera.process_movement(Direction::Down, 3.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPS));
    }
}

#[cfg(test)]
mod zoom_tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_at_minimum() {
        let mut camera = Camera::default();
        assert_eq!(camera.zoom(), 45.0);
        for _ in 0..5 {
            camera.process_zoom(50.0);
            assert_eq!(camera.zoom(), MIN_ZOOM);
        }
    }

    #[test]
    fn test_zoom_clamps_at_maximum() {
        let mut camera = Camera::default();
        camera.process_zoom(-10.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_zoom_stays_in_range() {
        let mut camera = Camera::default();
        for (offset, _) in offsets(300, 30.0) {
            camera.process_zoom(offset);
            assert!(camera.zoom() >= MIN_ZOOM && camera.zoom() <= MAX_ZOOM);
        }
    }

    #[test]
    fn test_small_zoom_step() {
        let mut camera = Camera::default();
        camera.process_zoom(5.0);
        assert_eq!(camera.zoom(), 40.0);
    }
}

#[cfg(test)]
mod matrix_tests {
    use super::*;

    #[test]
    fn test_view_matrix_matches_look_at() {
        let mut camera = Camera::new(Vec3::new(2.0, 1.0, 5.0));
        camera.process_orientation(42.0, -17.0);

        let expected = glam::Mat4::look_at_rh(
            camera.position,
            camera.position + camera.front(),
            camera.up(),
        );
        assert!(camera.view_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_view_matrix_is_pure() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let first = camera.view_matrix();
        let second = camera.view_matrix();
        assert_eq!(first, second);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_point_ahead_has_negative_eye_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let eye = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(eye.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), EPS));
    }

    #[test]
    fn test_projection_depth_range() {
        let camera = Camera::default();
        let proj = camera.projection_matrix(800.0 / 600.0);

        let near = proj.project_point3(Vec3::new(0.0, 0.0, -prism_viewer::camera::Z_NEAR));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -prism_viewer::camera::Z_FAR));
        assert!(near.z.abs() < EPS);
        assert!((far.z - 1.0).abs() < EPS);
    }

    #[test]
    fn test_narrower_zoom_magnifies() {
        let mut camera = Camera::default();
        let point = Vec3::new(0.5, 0.0, -5.0);
        let wide = camera.projection_matrix(1.0).project_point3(point);
        camera.process_zoom(20.0);
        let narrow = camera.projection_matrix(1.0).project_point3(point);
        assert!(narrow.x > wide.x);
    }
}
