pub mod artifacts;
pub mod camera;
pub mod constants;
pub mod controls;
pub mod exhibition;
pub mod intro;
pub mod loader;
pub mod orbit;
pub mod route;
pub mod selection;
pub mod track;

pub use artifacts::{ArtifactKey, ARTIFACT_COUNT, ARTIFACT_ORDER};
pub use controls::{command_for_key, Command};
pub use exhibition::{Effect, ExhibitConfig, Exhibition, FrameOutput, ViewState};
pub use intro::IntroPhase;
pub use loader::LoaderStage;
pub use route::Navigator;
pub use track::{CameraPose, CameraTrack, TrackError};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
