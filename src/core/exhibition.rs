use super::artifacts::{ArtifactKey, ARTIFACT_ORDER};
use super::camera::{camera_mode, CameraController, CameraInput, CameraMode};
use super::constants::{HALL_FADE_PER_SEC, HALL_FADE_SNAP, ORBIT_RADIUS, SETTLE_DELAY_MS};
use super::controls::Command;
use super::intro::{IntroPhase, IntroState, ScrollSensitivity};
use super::loader::{LoadProgress, LoaderStage};
use super::orbit::{damp_factor, ring_target_rotation, RingState};
use super::route::{parse_path, path_for, Navigator};
use super::selection::{Direction, Selection};
use super::track::{CameraPose, CameraTrack, TrackError, TrackPlayback};
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Runtime tuning, defaulting to the compile-time constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExhibitConfig {
    pub orbit_radius: f32,
    pub sensitivity: ScrollSensitivity,
    pub settle_delay_ms: f64,
}

impl Default for ExhibitConfig {
    fn default() -> Self {
        Self {
            orbit_radius: ORBIT_RADIUS,
            sensitivity: ScrollSensitivity::default(),
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

/// Requests for the collaborators outside the core (audio, overlay).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    PhaseChanged(IntroPhase),
    SetMuted(bool),
    StartNarration(ArtifactKey),
    StopNarration,
    PauseNarration,
    ResumeNarration,
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Debug)]
enum TrackSlot {
    Pending,
    Ready(CameraTrack),
    Failed,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub camera: CameraPose,
    pub camera_mode: CameraMode,
    pub ring_rotation: f32,
    pub hall_opacity: f32,
    pub ring_visible: bool,
    pub elapsed_sec: f32,
    pub effects: Effects,
}

/// Snapshot consumed by the DOM overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub phase: IntroPhase,
    pub progress: f32,
    pub selected: Option<ArtifactKey>,
    pub hover_title: Option<&'static str>,
    pub narration_playing: bool,
    pub muted: bool,
    pub loader_stage: LoaderStage,
    pub loader_percent: f32,
}

/// The single orchestration object: intro phase, scroll progress, selection,
/// ring and camera. Input handlers mutate it between frames; the frame
/// callback reads it once per frame.
pub struct Exhibition<N: Navigator> {
    config: ExhibitConfig,
    intro: IntroState,
    selection: Selection,
    ring: RingState,
    camera: CameraController,
    hall_opacity: f32,
    tracks: FnvHashMap<ArtifactKey, TrackSlot>,
    playback: TrackPlayback,
    muted: bool,
    narration_playing: bool,
    loader: LoadProgress,
    elapsed_sec: f32,
    pending: Effects,
    navigator: N,
}

impl<N: Navigator> Exhibition<N> {
    /// Build the exhibition for the address the page was opened at. A known
    /// artifact segment skips the intro; anything else starts at the title.
    pub fn new(config: ExhibitConfig, initial_path: &str, navigator: N) -> Self {
        let tracks = ARTIFACT_ORDER
            .iter()
            .map(|k| (*k, TrackSlot::Pending))
            .collect();
        let mut ex = Self {
            config,
            intro: IntroState::new(config.sensitivity, config.settle_delay_ms),
            selection: Selection::default(),
            ring: RingState::default(),
            camera: CameraController::default(),
            hall_opacity: 1.0,
            tracks,
            playback: TrackPlayback::default(),
            muted: true,
            narration_playing: false,
            loader: LoadProgress::new(0),
            elapsed_sec: 0.0,
            pending: Effects::new(),
            navigator,
        };
        if let Some(key) = parse_path(initial_path) {
            log::info!("[route] deep link to {}", key);
            let mut effects = Effects::new();
            ex.open_directly(key, &mut effects);
            ex.pending = effects;
        } else if initial_path.trim_matches('/').is_empty() {
            log::info!("[route] root address");
        } else {
            log::info!("[route] ignoring unknown address {:?}", initial_path);
        }
        ex
    }

    pub fn config(&self) -> &ExhibitConfig {
        &self.config
    }

    pub fn phase(&self) -> IntroPhase {
        self.intro.phase()
    }

    pub fn progress(&self) -> f32 {
        self.intro.progress()
    }

    pub fn selected(&self) -> Option<ArtifactKey> {
        self.selection.current()
    }

    pub fn hovered(&self) -> Option<ArtifactKey> {
        self.selection.hover()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn narration_playing(&self) -> bool {
        self.narration_playing
    }

    pub fn ring_rotation(&self) -> f32 {
        self.ring.rotation
    }

    pub fn ring_target(&self) -> f32 {
        ring_target_rotation(self.selection.current())
    }

    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    pub fn loader(&self) -> &LoadProgress {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut LoadProgress {
        &mut self.loader
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn apply(&mut self, command: Command, now_ms: f64) -> Effects {
        let mut effects = Effects::new();
        match command {
            Command::Enter => {
                if self.intro.enter() {
                    effects.push(Effect::PhaseChanged(IntroPhase::Scroll));
                    self.set_muted(false, &mut effects);
                }
            }
            Command::Skip => self.intro.skip(now_ms),
            Command::Select(key) => {
                if self.intro.phase() == IntroPhase::Title {
                    log::debug!("[select] ignoring {} during title", key);
                } else {
                    self.change_selection(Some(key), true, &mut effects);
                }
            }
            Command::Close => self.change_selection(None, true, &mut effects),
            Command::Next => self.cycle(Direction::Next, &mut effects),
            Command::Prev => self.cycle(Direction::Prev, &mut effects),
            Command::ToggleNarration => {
                if self.selection.current().is_some() {
                    self.narration_playing = !self.narration_playing;
                    effects.push(if self.narration_playing {
                        Effect::ResumeNarration
                    } else {
                        Effect::PauseNarration
                    });
                }
            }
            Command::ToggleMute => {
                let muted = !self.muted;
                self.set_muted(muted, &mut effects);
            }
        }
        effects
    }

    pub fn wheel(&mut self, delta_y: f32, now_ms: f64) {
        self.intro.wheel(delta_y, now_ms);
    }

    pub fn touch_start(&mut self, client_y: f32) {
        self.intro.touch_start(client_y);
    }

    pub fn touch_move(&mut self, client_y: f32, now_ms: f64) {
        self.intro.touch_move(client_y, now_ms);
    }

    /// Pointer-over report from picking. Presentation only.
    pub fn set_hover(&mut self, key: Option<ArtifactKey>) -> bool {
        self.selection.set_hover(key)
    }

    /// The address changed underneath us (history back/forward).
    pub fn navigated(&mut self, path: &str) -> Effects {
        let mut effects = Effects::new();
        match parse_path(path) {
            Some(key) => self.open_directly(key, &mut effects),
            None => self.change_selection(None, false, &mut effects),
        }
        effects
    }

    /// Narration reached its end on its own.
    pub fn narration_ended(&mut self) {
        self.narration_playing = false;
    }

    pub fn track_resolved(&mut self, key: ArtifactKey, result: Result<CameraTrack, TrackError>) {
        let slot = match result {
            Ok(track) => {
                log::info!("[track] {} ready ({:.2}s)", key, track.duration());
                TrackSlot::Ready(track)
            }
            Err(e) => {
                log::warn!("[track] {} unavailable, camera will hold: {}", key, e);
                TrackSlot::Failed
            }
        };
        self.tracks.insert(key, slot);
    }

    pub fn track_ready(&self, key: ArtifactKey) -> bool {
        matches!(self.tracks.get(&key), Some(TrackSlot::Ready(_)))
    }

    pub fn track_failed(&self, key: ArtifactKey) -> bool {
        matches!(self.tracks.get(&key), Some(TrackSlot::Failed))
    }

    pub fn frame(&mut self, now_ms: f64, dt_sec: f32) -> FrameOutput {
        let dt_sec = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let mut effects = std::mem::take(&mut self.pending);
        self.elapsed_sec += dt_sec;
        self.loader.tick(now_ms);

        if self.intro.tick(now_ms) {
            effects.push(Effect::PhaseChanged(IntroPhase::Explore));
        }

        let selected = self.selection.current();
        let ring_rotation = self.ring.step(ring_target_rotation(selected), dt_sec);
        self.step_hall(selected.is_some(), dt_sec);

        let input = match camera_mode(self.intro.phase(), selected.is_some()) {
            CameraMode::Scripted => CameraInput::Scripted(self.sample_track(selected, dt_sec)),
            CameraMode::IntroDolly => CameraInput::IntroDolly {
                progress01: self.intro.progress01(),
            },
            CameraMode::Idle => CameraInput::Idle,
            CameraMode::Hold => CameraInput::Hold,
        };
        let camera = self.camera.update(input, self.elapsed_sec, dt_sec);

        FrameOutput {
            camera,
            camera_mode: input.mode(),
            ring_rotation,
            hall_opacity: self.hall_opacity,
            ring_visible: self.intro.phase() != IntroPhase::Title,
            elapsed_sec: self.elapsed_sec,
            effects,
        }
    }

    pub fn view(&self) -> ViewState {
        let hover_title = match (self.intro.phase(), self.selection.current(), self.selection.hover()) {
            (IntroPhase::Explore, None, Some(key)) => Some(key.artifact().title),
            _ => None,
        };
        ViewState {
            phase: self.intro.phase(),
            progress: self.intro.progress(),
            selected: self.selection.current(),
            hover_title,
            narration_playing: self.narration_playing,
            muted: self.muted,
            loader_stage: self.loader.stage(),
            loader_percent: self.loader.display_percent(),
        }
    }

    fn sample_track(&mut self, selected: Option<ArtifactKey>, dt_sec: f32) -> Option<CameraPose> {
        let key = selected?;
        match self.tracks.get(&key) {
            Some(TrackSlot::Ready(track)) => {
                self.playback.advance(dt_sec, track.duration());
                Some(track.sample(self.playback.time()))
            }
            _ => None,
        }
    }

    fn step_hall(&mut self, has_selection: bool, dt_sec: f32) {
        let target = if has_selection { 0.0 } else { 1.0 };
        if (self.hall_opacity - target).abs() < HALL_FADE_SNAP {
            self.hall_opacity = target;
        } else {
            self.hall_opacity += (target - self.hall_opacity) * damp_factor(HALL_FADE_PER_SEC, dt_sec);
        }
    }

    fn open_directly(&mut self, key: ArtifactKey, effects: &mut Effects) {
        if self.intro.force_explore() {
            effects.push(Effect::PhaseChanged(IntroPhase::Explore));
        }
        self.set_muted(false, effects);
        self.change_selection(Some(key), false, effects);
    }

    fn cycle(&mut self, direction: Direction, effects: &mut Effects) {
        if let Some(key) = self.selection.neighbour(direction) {
            self.change_selection(Some(key), true, effects);
        }
    }

    fn change_selection(&mut self, key: Option<ArtifactKey>, push: bool, effects: &mut Effects) {
        let Some(previous) = self.selection.set(key) else {
            return;
        };
        log::info!(
            "[select] {} -> {}",
            previous.map_or("ring", |k| k.as_str()),
            key.map_or("ring", |k| k.as_str())
        );
        self.playback = TrackPlayback::once();
        if push {
            self.navigator.push(&path_for(key));
        }
        if previous.is_some() {
            effects.push(Effect::StopNarration);
        }
        match key {
            Some(k) => {
                self.narration_playing = true;
                effects.push(Effect::StartNarration(k));
            }
            None => self.narration_playing = false,
        }
    }

    fn set_muted(&mut self, muted: bool, effects: &mut Effects) {
        if self.muted != muted {
            self.muted = muted;
            effects.push(Effect::SetMuted(muted));
        }
    }
}
