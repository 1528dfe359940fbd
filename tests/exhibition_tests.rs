// Host-side tests for the orchestrator: commands, deep links, effects and
// per-frame output.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
include!("support/core_tree.rs");

use crate::core::artifacts::ArtifactKey;
use crate::core::camera::CameraMode;
use crate::core::constants::{HALL_EYE, HOME_EYE, MENU_EYE};
use crate::core::controls::Command;
use crate::core::exhibition::*;
use crate::core::intro::IntroPhase;
use crate::core::route::Navigator;
use crate::core::track::{CameraTrack, TrackError};
use std::f32::consts::TAU;

#[derive(Default)]
struct RecordingNavigator {
    pushes: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, path: &str) {
        self.pushes.push(path.to_string());
    }
}

const DT: f32 = 1.0 / 60.0;

fn at(path: &str) -> Exhibition<RecordingNavigator> {
    Exhibition::new(ExhibitConfig::default(), path, RecordingNavigator::default())
}

/// Title → scroll → explore via skip, then drain the transition frame.
fn exploring() -> Exhibition<RecordingNavigator> {
    let mut ex = at("/");
    ex.apply(Command::Enter, 0.0);
    ex.apply(Command::Skip, 0.0);
    ex.frame(1000.0, DT);
    assert_eq!(ex.phase(), IntroPhase::Explore);
    ex
}

fn run_frames(ex: &mut Exhibition<RecordingNavigator>, n: usize) -> FrameOutput {
    let mut out = ex.frame(0.0, DT);
    for _ in 1..n {
        out = ex.frame(0.0, DT);
    }
    out
}

fn still_track(x: f32, y: f32, z: f32) -> CameraTrack {
    let json = format!(
        r#"{{ "keyframes": [ {{ "time": 0.0, "position": [{}, {}, {}], "rotation": [0.0, 0.0, 0.0, 1.0] }} ] }}"#,
        x, y, z
    );
    CameraTrack::from_json(&json).expect("valid track")
}

#[test]
fn root_address_starts_at_the_title() {
    let mut ex = at("/");
    assert_eq!(ex.phase(), IntroPhase::Title);
    assert_eq!(ex.selected(), None);
    assert!(ex.is_muted());
    let out = ex.frame(0.0, DT);
    assert!(out.effects.is_empty());
    assert!(!out.ring_visible);
    assert_eq!(out.camera_mode, CameraMode::Hold);
    assert!((out.camera.position - MENU_EYE).length() < 1e-4);
}

#[test]
fn unknown_address_falls_back_to_the_title() {
    let ex = at("/unknown-key");
    assert_eq!(ex.phase(), IntroPhase::Title);
    assert_eq!(ex.selected(), None);
    assert!(ex.navigator().pushes.is_empty());
}

#[test]
fn deep_link_opens_the_artifact() {
    let mut ex = at("/rifle");
    assert_eq!(ex.phase(), IntroPhase::Explore);
    assert_eq!(ex.selected(), Some(ArtifactKey::Rifle));
    assert!(!ex.is_muted());
    assert!(ex.navigator().pushes.is_empty());
    assert!((ex.ring_target() - (-TAU / 5.0)).abs() < 1e-5);

    let out = ex.frame(0.0, DT);
    assert_eq!(
        out.effects.as_slice(),
        &[
            Effect::PhaseChanged(IntroPhase::Explore),
            Effect::SetMuted(false),
            Effect::StartNarration(ArtifactKey::Rifle),
        ]
    );
    assert_eq!(out.camera_mode, CameraMode::Scripted);
    // Effects are delivered once
    assert!(ex.frame(0.0, DT).effects.is_empty());
}

#[test]
fn deep_link_ignores_query_and_trailing_segments() {
    assert_eq!(at("/mask?ref=home").selected(), Some(ArtifactKey::Mask));
    assert_eq!(at("//letter/extra").selected(), Some(ArtifactKey::Letter));
    assert_eq!(at("/Boot").selected(), None);
}

#[test]
fn enter_unmutes_and_starts_scrolling() {
    let mut ex = at("/");
    let fx = ex.apply(Command::Enter, 0.0);
    assert_eq!(
        fx.as_slice(),
        &[Effect::PhaseChanged(IntroPhase::Scroll), Effect::SetMuted(false)]
    );
    assert_eq!(ex.phase(), IntroPhase::Scroll);
    assert!(ex.apply(Command::Enter, 0.0).is_empty());

    let out = ex.frame(0.0, DT);
    assert!(out.ring_visible);
    assert_eq!(out.camera_mode, CameraMode::IntroDolly);
    assert!((out.camera.position - HALL_EYE).length() < 1e-4);
}

#[test]
fn wheel_scenario_reaches_explore_after_settling() {
    let mut ex = at("/");
    ex.apply(Command::Enter, 0.0);
    ex.wheel(2100.0, 100.0);
    assert_eq!(ex.progress(), 100.0);

    let out = ex.frame(599.0, DT);
    assert!(out.effects.is_empty());
    assert_eq!(ex.phase(), IntroPhase::Scroll);
    assert!((out.camera.position - MENU_EYE).length() < 1e-4);

    let out = ex.frame(600.0, DT);
    assert_eq!(out.effects.as_slice(), &[Effect::PhaseChanged(IntroPhase::Explore)]);
    assert_eq!(ex.phase(), IntroPhase::Explore);
    assert_eq!(out.camera_mode, CameraMode::Idle);
}

#[test]
fn selection_is_ignored_during_the_title() {
    let mut ex = at("/");
    assert!(ex.apply(Command::Select(ArtifactKey::Boot), 0.0).is_empty());
    assert_eq!(ex.selected(), None);
    assert!(ex.navigator().pushes.is_empty());
}

#[test]
fn select_cycle_and_close_mirror_the_address() {
    let mut ex = exploring();

    let fx = ex.apply(Command::Select(ArtifactKey::Armor), 0.0);
    assert_eq!(fx.as_slice(), &[Effect::StartNarration(ArtifactKey::Armor)]);
    assert!(ex.narration_playing());

    let fx = ex.apply(Command::Next, 0.0);
    assert_eq!(
        fx.as_slice(),
        &[Effect::StopNarration, Effect::StartNarration(ArtifactKey::Rifle)]
    );
    ex.apply(Command::Prev, 0.0);
    ex.apply(Command::Prev, 0.0);
    assert_eq!(ex.selected(), Some(ArtifactKey::Letter));

    let fx = ex.apply(Command::Close, 0.0);
    assert_eq!(fx.as_slice(), &[Effect::StopNarration]);
    assert_eq!(ex.selected(), None);
    assert!(!ex.narration_playing());

    assert_eq!(
        ex.navigator().pushes,
        vec!["/armor", "/rifle", "/armor", "/letter", "/"]
    );
}

#[test]
fn reselect_and_idle_navigation_are_no_ops() {
    let mut ex = exploring();
    assert!(ex.apply(Command::Next, 0.0).is_empty());
    assert!(ex.apply(Command::Prev, 0.0).is_empty());
    assert!(ex.apply(Command::Close, 0.0).is_empty());
    ex.apply(Command::Select(ArtifactKey::Mask), 0.0);
    assert!(ex.apply(Command::Select(ArtifactKey::Mask), 0.0).is_empty());
    assert_eq!(ex.navigator().pushes, vec!["/mask"]);
}

#[test]
fn narration_toggle_and_end() {
    let mut ex = exploring();
    assert!(ex.apply(Command::ToggleNarration, 0.0).is_empty());
    ex.apply(Command::Select(ArtifactKey::Boot), 0.0);
    assert_eq!(
        ex.apply(Command::ToggleNarration, 0.0).as_slice(),
        &[Effect::PauseNarration]
    );
    assert!(!ex.view().narration_playing);
    assert_eq!(
        ex.apply(Command::ToggleNarration, 0.0).as_slice(),
        &[Effect::ResumeNarration]
    );
    ex.narration_ended();
    assert!(!ex.view().narration_playing);
}

#[test]
fn mute_toggles() {
    let mut ex = at("/");
    assert_eq!(ex.apply(Command::ToggleMute, 0.0).as_slice(), &[Effect::SetMuted(false)]);
    assert_eq!(ex.apply(Command::ToggleMute, 0.0).as_slice(), &[Effect::SetMuted(true)]);
    assert!(ex.view().muted);
}

#[test]
fn history_navigation_follows_without_pushing() {
    let mut ex = at("/");
    let fx = ex.navigated("/mask");
    assert_eq!(
        fx.as_slice(),
        &[
            Effect::PhaseChanged(IntroPhase::Explore),
            Effect::SetMuted(false),
            Effect::StartNarration(ArtifactKey::Mask),
        ]
    );
    let fx = ex.navigated("/");
    assert_eq!(fx.as_slice(), &[Effect::StopNarration]);
    assert_eq!(ex.selected(), None);
    assert!(ex.navigator().pushes.is_empty());
}

#[test]
fn ring_turns_the_selection_to_the_front() {
    let mut ex = exploring();
    ex.apply(Command::Select(ArtifactKey::Boot), 0.0);
    let target = -2.0 / 5.0 * TAU;
    assert!((ex.ring_target() - target).abs() < 1e-5);
    let out = run_frames(&mut ex, 600);
    assert!((out.ring_rotation - target).abs() < 1e-3);

    ex.apply(Command::Close, 0.0);
    let out = run_frames(&mut ex, 600);
    assert!(out.ring_rotation.abs() < 1e-3);
}

#[test]
fn hall_fades_while_an_artifact_is_open() {
    let mut ex = exploring();
    assert_eq!(ex.frame(0.0, DT).hall_opacity, 1.0);
    ex.apply(Command::Select(ArtifactKey::Armor), 0.0);
    let out = run_frames(&mut ex, 300);
    assert_eq!(out.hall_opacity, 0.0);
    ex.apply(Command::Close, 0.0);
    let out = run_frames(&mut ex, 300);
    assert_eq!(out.hall_opacity, 1.0);
}

#[test]
fn camera_holds_until_the_track_arrives() {
    let mut ex = exploring();
    let before = ex.frame(0.0, DT).camera;
    ex.apply(Command::Select(ArtifactKey::Rifle), 0.0);
    let held = run_frames(&mut ex, 30);
    assert_eq!(held.camera_mode, CameraMode::Scripted);
    assert_eq!(held.camera, before);

    ex.track_resolved(ArtifactKey::Rifle, Ok(still_track(1.0, 2.0, 3.0)));
    assert!(ex.track_ready(ArtifactKey::Rifle));
    let out = run_frames(&mut ex, 600);
    assert!((out.camera.position - glam::Vec3::new(1.0, 2.0, 3.0)).length() < 1e-3);
}

/// Ten second track sliding along x from the origin to `to_x`.
fn sliding_track(to_x: f32) -> CameraTrack {
    let json = format!(
        r#"{{ "keyframes": [
            {{ "time": 0.0, "position": [0.0, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 1.0] }},
            {{ "time": 10.0, "position": [{}, 0.0, 0.0], "rotation": [0.0, 0.0, 0.0, 1.0] }}
        ] }}"#,
        to_x
    );
    CameraTrack::from_json(&json).expect("valid track")
}

#[test]
fn switching_mid_track_restarts_on_the_new_artifact() {
    let mut ex = at("/rifle");
    ex.track_resolved(ArtifactKey::Rifle, Ok(sliding_track(100.0)));
    ex.track_resolved(ArtifactKey::Mask, Ok(sliding_track(-100.0)));

    // Halfway along the rifle track, trailing it slightly
    let mid = run_frames(&mut ex, 300).camera.position.x;
    assert!(mid > 45.0 && mid < 50.0, "rifle camera at {}", mid);

    ex.apply(Command::Select(ArtifactKey::Mask), 0.0);
    let first = ex.frame(0.0, DT);
    assert_eq!(first.camera_mode, CameraMode::Scripted);
    assert!(first.camera.position.x < mid);

    // Only the mask track drives the camera from here on
    let mut last = first.camera.position.x;
    for _ in 0..600 {
        let x = ex.frame(0.0, DT).camera.position.x;
        assert!(x <= last + 1e-4);
        last = x;
    }
    assert!(last < -95.0, "mask camera at {}", last);
}

#[test]
fn failed_track_keeps_the_camera_still() {
    let mut ex = exploring();
    ex.track_resolved(
        ArtifactKey::Mask,
        Err(TrackError::Unavailable("404".to_string())),
    );
    assert!(ex.track_failed(ArtifactKey::Mask));
    let before = ex.frame(0.0, DT).camera;
    ex.apply(Command::Select(ArtifactKey::Mask), 0.0);
    assert_eq!(run_frames(&mut ex, 60).camera, before);
}

#[test]
fn idle_camera_drifts_home_in_explore() {
    let mut ex = exploring();
    let out = run_frames(&mut ex, 900);
    assert_eq!(out.camera_mode, CameraMode::Idle);
    assert!((out.camera.position - HOME_EYE).length() < 1e-3);
}

#[test]
fn hover_title_only_on_the_idle_ring() {
    let mut ex = at("/");
    ex.set_hover(Some(ArtifactKey::Boot));
    assert_eq!(ex.view().hover_title, None);

    let mut ex = exploring();
    assert!(ex.set_hover(Some(ArtifactKey::Boot)));
    assert!(!ex.set_hover(Some(ArtifactKey::Boot)));
    assert_eq!(ex.view().hover_title, Some("The Boot"));
    ex.apply(Command::Select(ArtifactKey::Rifle), 0.0);
    assert_eq!(ex.view().hover_title, None);
}

#[test]
fn loader_finishes_once_tracks_settle() {
    let mut ex = at("/");
    ex.loader_mut().register(2);
    ex.loader_mut().settle();
    let mut t = 0.0;
    while t < 3000.0 {
        ex.frame(t, DT);
        t += 20.0;
    }
    assert!(ex.view().loader_percent <= 50.0);
    assert!(!ex.loader().is_finished());

    ex.loader_mut().settle();
    while t < 8000.0 {
        ex.frame(t, DT);
        t += 20.0;
    }
    assert!(ex.loader().is_finished());
    assert_eq!(ex.view().loader_percent, 100.0);
}
