// Host-side tests for camera behaviors and scripted tracks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
include!("support/core_tree.rs");

use crate::core::camera::*;
use crate::core::constants::{HALL_EYE, HOME_EYE, MENU_EYE};
use crate::core::intro::IntroPhase;
use crate::core::track::*;
use glam::{Quat, Vec3};

const EPS: f32 = 1e-4;

fn pose_at(x: f32, y: f32, z: f32) -> CameraPose {
    CameraPose {
        position: Vec3::new(x, y, z),
        orientation: Quat::IDENTITY,
    }
}

#[test]
fn selection_outranks_every_phase() {
    for phase in [IntroPhase::Title, IntroPhase::Scroll, IntroPhase::Explore] {
        assert_eq!(camera_mode(phase, true), CameraMode::Scripted);
    }
    assert_eq!(camera_mode(IntroPhase::Scroll, false), CameraMode::IntroDolly);
    assert_eq!(camera_mode(IntroPhase::Explore, false), CameraMode::Idle);
    assert_eq!(camera_mode(IntroPhase::Title, false), CameraMode::Hold);
}

#[test]
fn easing_is_symmetric_and_anchored() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert!((ease_in_out(0.5) - 0.5).abs() < EPS);
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        assert!((ease_in_out(t) + ease_in_out(1.0 - t) - 1.0).abs() < EPS);
    }
    let mut last = 0.0;
    for i in 0..=100 {
        let v = ease_in_out(i as f32 / 100.0);
        assert!(v >= last - EPS);
        last = v;
    }
}

#[test]
fn dolly_runs_from_hall_to_menu() {
    let (eye0, _) = intro_dolly(0.0);
    let (eye1, target1) = intro_dolly(1.0);
    assert!((eye0 - HALL_EYE).length() < EPS);
    assert!((eye1 - MENU_EYE).length() < EPS);
    assert!(target1.length() < EPS);
}

#[test]
fn hold_and_unresolved_track_keep_the_pose() {
    let prev = pose_at(1.0, 2.0, 3.0);
    assert_eq!(camera_transform(prev, CameraInput::Hold, 1.0, 0.016), prev);
    assert_eq!(camera_transform(prev, CameraInput::Scripted(None), 1.0, 0.016), prev);
}

#[test]
fn scripted_pull_is_ten_percent_per_reference_frame() {
    assert!((track_pull_factor(1.0 / 60.0) - 0.1).abs() < 1e-4);
    assert_eq!(track_pull_factor(0.0), 0.0);
    // Two half-frames equal one full frame
    let half = track_pull_factor(1.0 / 120.0);
    let combined = 1.0 - (1.0 - half) * (1.0 - half);
    assert!((combined - 0.1).abs() < 1e-4);

    let prev = pose_at(0.0, 0.0, 0.0);
    let target = pose_at(10.0, 0.0, 0.0);
    let next = camera_transform(prev, CameraInput::Scripted(Some(target)), 0.0, 1.0 / 60.0);
    assert!((next.position.x - 1.0).abs() < 1e-3);
}

#[test]
fn idle_drifts_home() {
    let mut pose = menu_pose();
    for i in 0..600 {
        pose = camera_transform(pose, CameraInput::Idle, i as f32 / 60.0, 1.0 / 60.0);
    }
    assert!((pose.position - HOME_EYE).length() < 1e-3);
    assert!(pose.orientation.is_normalized());
}

#[test]
fn menu_pose_looks_at_origin() {
    let pose = menu_pose();
    let forward = pose.orientation * Vec3::NEG_Z;
    assert!((forward - Vec3::NEG_Z).length() < EPS);
    let v = view_matrix(&pose);
    let origin_in_view = v.transform_point3(Vec3::ZERO);
    assert!((origin_in_view - Vec3::new(0.0, 0.0, -10.0)).length() < EPS);
}

#[test]
fn controller_reports_the_active_mode() {
    let mut c = CameraController::default();
    assert_eq!(c.mode(), CameraMode::Hold);
    c.update(CameraInput::IntroDolly { progress01: 0.0 }, 0.0, 0.016);
    assert_eq!(c.mode(), CameraMode::IntroDolly);
    assert!((c.pose().position - HALL_EYE).length() < EPS);
}

const TRACK_JSON: &str = r#"{
    "keyframes": [
        { "time": 2.0, "position": [10.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 1.0] },
        { "time": 0.0, "position": [0.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 2.0] }
    ]
}"#;

#[test]
fn track_sorts_normalizes_and_samples() {
    let track = CameraTrack::from_json(TRACK_JSON).expect("valid track");
    assert_eq!(track.duration(), 2.0);
    assert_eq!(track.sample(-1.0).position, Vec3::ZERO);
    assert!(track.sample(0.0).orientation.is_normalized());
    assert!((track.sample(1.0).position.x - 5.0).abs() < EPS);
    assert_eq!(track.sample(99.0).position, Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn track_duration_can_be_explicit() {
    let json = r#"{ "duration": 4.5, "keyframes": [
        { "time": 0.0, "position": [1.0, 2.0, 3.0], "rotation": [0.0, 0.0, 0.0, 1.0] }
    ] }"#;
    let track = CameraTrack::from_json(json).expect("valid track");
    assert_eq!(track.duration(), 4.5);
    assert_eq!(track.sample(3.0).position, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn short_duration_still_reaches_the_last_keyframe() {
    let json = r#"{ "duration": 1.0, "keyframes": [
        { "time": 0.0, "position": [0.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 1.0] },
        { "time": 2.0, "position": [8.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 1.0] }
    ] }"#;
    let track = CameraTrack::from_json(json).expect("valid track");
    assert_eq!(track.duration(), 2.0);
    let mut p = TrackPlayback::once();
    p.advance(10.0, track.duration());
    assert!(p.is_finished());
    assert_eq!(track.sample(p.time()).position, Vec3::new(8.0, 0.0, 0.0));
}

#[test]
fn bad_tracks_are_rejected() {
    assert!(matches!(
        CameraTrack::from_json(r#"{ "keyframes": [] }"#),
        Err(TrackError::Empty)
    ));
    assert!(matches!(CameraTrack::from_json("not json"), Err(TrackError::Json(_))));
    let json = r#"{ "duration": -1.0, "keyframes": [
        { "time": 0.0, "position": [0.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 1.0] }
    ] }"#;
    assert!(matches!(CameraTrack::from_json(json), Err(TrackError::NonFinite(_))));
}

#[test]
fn playback_once_holds_the_last_frame() {
    let mut p = TrackPlayback::once();
    p.advance(0.5, 2.0);
    assert!((p.time() - 0.5).abs() < EPS);
    assert!(!p.is_finished());
    p.advance(5.0, 2.0);
    assert!(p.is_finished());
    assert_eq!(p.time(), 2.0);
    p.advance(1.0, 2.0);
    assert_eq!(p.time(), 2.0);
}

#[test]
fn playback_loops_when_not_once() {
    let mut p = TrackPlayback::default();
    p.advance(1.0, 2.0);
    assert_eq!(p.time(), 0.0); // not playing yet
    p.play();
    p.advance(2.5, 2.0);
    assert!((p.time() - 0.5).abs() < EPS);
    p.set_loop_once(true).hold_on_finish(false);
    p.advance(2.0, 2.0);
    assert!(p.is_finished());
    assert_eq!(p.time(), 0.0);
    p.reset().play();
    assert!(!p.is_finished());
}
