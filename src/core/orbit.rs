use super::artifacts::{position_of, ArtifactKey, ARTIFACT_COUNT};
use super::constants::{RING_EASE_PER_SEC, RING_Y_OFFSET};
use glam::{Quat, Vec3};
use std::f32::consts::TAU;

/// Angle of ring slot `index` out of `total`, measured around +Y from +Z.
#[inline]
pub fn orbit_angle(index: usize, total: usize) -> f32 {
    (index as f32 / total.max(1) as f32) * TAU
}

/// Point on the horizontal circle of `radius` for slot `index`.
///
/// Slots are evenly spaced; slot 0 sits on +Z, facing the default camera.
#[inline]
pub fn orbit_position(index: usize, total: usize, radius: f32) -> Vec3 {
    let angle = orbit_angle(index, total);
    Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius)
}

/// Ring rotation that brings the selected artifact to the front, or 0.
#[inline]
pub fn ring_target_rotation(selected: Option<ArtifactKey>) -> f32 {
    match selected {
        Some(key) => -orbit_angle(position_of(key), ARTIFACT_COUNT),
        None => 0.0,
    }
}

/// World-space center of a ring slot after applying the ring's rotation and
/// vertical offset. Used for picking and drawing.
#[inline]
pub fn ring_world_position(index: usize, total: usize, radius: f32, ring_rotation: f32) -> Vec3 {
    Quat::from_rotation_y(ring_rotation) * orbit_position(index, total, radius)
        + Vec3::new(0.0, RING_Y_OFFSET, 0.0)
}

/// Vertical bob of a floating artifact. Each slot gets its own phase so the
/// ring never moves in lockstep.
#[inline]
pub fn float_offset(index: usize, elapsed_sec: f32, speed: f32, amplitude: f32) -> f32 {
    (elapsed_sec * speed + index as f32 * 1.7).sin() * amplitude
}

/// Where artifact `key` is actually drawn: its ring slot plus the bob.
#[inline]
pub fn artifact_center(
    key: ArtifactKey,
    radius: f32,
    ring_rotation: f32,
    elapsed_sec: f32,
    amplitude: f32,
) -> Vec3 {
    let i = position_of(key);
    let bob = float_offset(i, elapsed_sec, key.artifact().float_speed, amplitude);
    ring_world_position(i, ARTIFACT_COUNT, radius, ring_rotation) + Vec3::new(0.0, bob, 0.0)
}

/// Lerp factor for exponential decay at `rate_per_sec`. Composes exactly, so
/// two half frames move as far as one full frame.
#[inline]
pub fn damp_factor(rate_per_sec: f32, dt_sec: f32) -> f32 {
    1.0 - (-rate_per_sec.max(0.0) * dt_sec.max(0.0)).exp()
}

/// Current orientation of the ring about its vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingState {
    pub rotation: f32,
}

impl RingState {
    /// Ease toward `target`; returns the new rotation.
    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        let a = damp_factor(RING_EASE_PER_SEC, dt_sec);
        self.rotation += (target - self.rotation) * a;
        self.rotation
    }
}
