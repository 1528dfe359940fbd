use crate::constants::{Z_FAR, Z_NEAR};
use crate::core::camera::view_matrix;
use crate::core::constants::CAMERA_FOV_Y_DEG;
use crate::core::CameraPose;
use glam::{Mat4, Vec3, Vec4};

#[inline]
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(CAMERA_FOV_Y_DEG.to_radians(), aspect.max(1e-3), Z_NEAR, Z_FAR)
}

#[inline]
pub fn view_proj(pose: &CameraPose, aspect: f32) -> Mat4 {
    projection(aspect) * view_matrix(pose)
}

/// Compute a world-space ray from canvas pixel coordinates.
///
/// `width`/`height` are the canvas backing-store size and `pose` is the
/// camera used for the last rendered frame. Returns `(origin, direction)`.
pub fn screen_to_world_ray(
    pose: &CameraPose,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let width = width.max(1.0);
    let height = height.max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = view_proj(pose, width / height).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = pose.position;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}
