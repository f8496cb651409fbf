use glam::{Mat4, Vec3};

/// Fixed axis the model spins around.
pub const ROTATION_AXIS: Vec3 = Vec3::NEG_X;

/// Model matrix after `elapsed_seconds` of spin: a rotation of that many
/// radians about [`ROTATION_AXIS`]. Identity at t = 0.
pub fn model_matrix(elapsed_seconds: f32) -> Mat4 {
    Mat4::from_axis_angle(ROTATION_AXIS, elapsed_seconds)
}

/// Orthographic projection for the given aspect ratio.
///
/// Horizontal bounds are [-aspect, +aspect], vertical [-1, +1], so a unit of
/// vertical extent is a unit of horizontal extent regardless of window
/// shape. Near/far are intentionally reversed (1, -1); depth is unused by
/// this flat draw and z = 0 geometry lands at zero depth.
pub fn projection_matrix(aspect_ratio: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(-aspect_ratio, aspect_ratio, -1.0, 1.0, 1.0, -1.0)
}

/// Combined transform for one frame: projection applied after the model
/// rotation.
pub fn mvp_matrix(elapsed_seconds: f32, aspect_ratio: f32) -> Mat4 {
    projection_matrix(aspect_ratio) * model_matrix(elapsed_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat3, Vec4};

    #[test]
    fn model_is_identity_at_start() {
        assert!(model_matrix(0.0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn model_is_a_rotation_about_the_fixed_axis() {
        for t in [0.25_f32, 1.0, 2.5, 7.0] {
            let rotation = Mat3::from_mat4(model_matrix(t));
            let expected = Mat3::from_axis_angle(ROTATION_AXIS, t);
            assert!(rotation.abs_diff_eq(expected, 1e-6), "t = {t}");
        }
    }

    #[test]
    fn model_never_translates() {
        for t in [0.0_f32, 1.0, 3.5, 100.0] {
            assert!(model_matrix(t).w_axis.abs_diff_eq(Vec4::W, 1e-6));
        }
    }

    #[test]
    fn projection_maps_frustum_corners_to_clip_corners() {
        for aspect in [0.5_f32, 1.0, 640.0 / 480.0, 16.0 / 9.0] {
            let p = projection_matrix(aspect);
            let lower = p.project_point3(Vec3::new(-aspect, -1.0, 0.0));
            let upper = p.project_point3(Vec3::new(aspect, 1.0, 0.0));
            assert!((lower.x + 1.0).abs() < 1e-6, "aspect = {aspect}");
            assert!((lower.y + 1.0).abs() < 1e-6, "aspect = {aspect}");
            assert!((upper.x - 1.0).abs() < 1e-6, "aspect = {aspect}");
            assert!((upper.y - 1.0).abs() < 1e-6, "aspect = {aspect}");
        }
    }

    #[test]
    fn projection_keeps_flat_geometry_at_zero_depth() {
        let p = projection_matrix(1.5);
        let v = p.project_point3(Vec3::new(0.3, -0.2, 0.0));
        assert!(v.z.abs() < 1e-6);
    }

    #[test]
    fn mvp_composes_projection_after_model() {
        let expected = projection_matrix(1.6) * model_matrix(1.2);
        assert_eq!(mvp_matrix(1.2, 1.6), expected);
    }

    #[test]
    fn mvp_is_deterministic_for_equal_inputs() {
        let a = mvp_matrix(5.2, 1.77);
        let b = mvp_matrix(5.2, 1.77);
        assert_eq!(a.to_cols_array(), b.to_cols_array());
    }
}
