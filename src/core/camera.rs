use super::constants::{
    HALL_EYE, HALL_TARGET, HOME_EYE, IDLE_EASE_PER_SEC, IDLE_ROLL_AMPLITUDE, IDLE_ROLL_FREQ,
    MENU_EYE, MENU_TARGET, REFERENCE_FPS, TRACK_PULL_PER_FRAME,
};
use super::intro::IntroPhase;
use super::orbit::damp_factor;
use super::track::CameraPose;
use glam::{Mat4, Quat, Vec3};

/// Which behavior owns the camera this frame, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    /// An artifact is selected; follow its scripted track.
    Scripted,
    /// Scroll phase; dolly from the hall vantage to the menu vantage.
    IntroDolly,
    /// Explore phase with nothing selected.
    Idle,
    /// Title phase; nothing writes the camera.
    Hold,
}

pub fn camera_mode(phase: IntroPhase, has_selection: bool) -> CameraMode {
    if has_selection {
        return CameraMode::Scripted;
    }
    match phase {
        IntroPhase::Scroll => CameraMode::IntroDolly,
        IntroPhase::Explore => CameraMode::Idle,
        IntroPhase::Title => CameraMode::Hold,
    }
}

/// Per-frame input for [`camera_transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraInput {
    /// Sample of the scripted track, or `None` while the track is unresolved.
    Scripted(Option<CameraPose>),
    IntroDolly { progress01: f32 },
    Idle,
    Hold,
}

impl CameraInput {
    pub fn mode(&self) -> CameraMode {
        match self {
            CameraInput::Scripted(_) => CameraMode::Scripted,
            CameraInput::IntroDolly { .. } => CameraMode::IntroDolly,
            CameraInput::Idle => CameraMode::Idle,
            CameraInput::Hold => CameraMode::Hold,
        }
    }
}

/// Symmetric quadratic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Eye and look-at target along the intro dolly for normalized progress.
#[inline]
pub fn intro_dolly(progress01: f32) -> (Vec3, Vec3) {
    let e = ease_in_out(progress01);
    (HALL_EYE.lerp(MENU_EYE, e), HALL_TARGET.lerp(MENU_TARGET, e))
}

/// World orientation of a camera at `eye` looking at `target` with +Y up.
///
/// Degenerate inputs (coincident points, looking straight up/down) fall back
/// to `fallback`.
pub fn look_rotation(eye: Vec3, target: Vec3, fallback: Quat) -> Quat {
    let forward = target - eye;
    if forward.length_squared() < 1e-10 || forward.normalize().cross(Vec3::Y).length_squared() < 1e-10 {
        return fallback;
    }
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    Quat::from_mat4(&view.inverse()).normalize()
}

/// Frame-rate independent version of "pull 10% per frame".
#[inline]
pub fn track_pull_factor(dt_sec: f32) -> f32 {
    let frames = (dt_sec.max(0.0) * REFERENCE_FPS).min(REFERENCE_FPS);
    1.0 - (1.0 - TRACK_PULL_PER_FRAME).powf(frames)
}

/// Idle roll about the view axis at `elapsed_sec`.
#[inline]
pub fn idle_roll(elapsed_sec: f32) -> f32 {
    (elapsed_sec * IDLE_ROLL_FREQ).sin() * IDLE_ROLL_AMPLITUDE
}

/// Next camera pose from the previous one. Exactly one behavior applies.
pub fn camera_transform(prev: CameraPose, input: CameraInput, elapsed_sec: f32, dt_sec: f32) -> CameraPose {
    match input {
        CameraInput::Scripted(Some(target)) => {
            let a = track_pull_factor(dt_sec);
            CameraPose {
                position: prev.position.lerp(target.position, a),
                orientation: prev.orientation.slerp(target.orientation, a).normalize(),
            }
        }
        // Unresolved track: no movement this frame.
        CameraInput::Scripted(None) | CameraInput::Hold => prev,
        CameraInput::IntroDolly { progress01 } => {
            let (eye, target) = intro_dolly(progress01);
            CameraPose {
                position: eye,
                orientation: look_rotation(eye, target, prev.orientation),
            }
        }
        CameraInput::Idle => {
            let a = damp_factor(IDLE_EASE_PER_SEC, dt_sec);
            let position = prev.position.lerp(HOME_EYE, a);
            let look = look_rotation(position, Vec3::ZERO, prev.orientation);
            CameraPose {
                position,
                orientation: look * Quat::from_rotation_z(idle_roll(elapsed_sec)),
            }
        }
    }
}

/// Owner of the single live camera pose.
#[derive(Clone, Copy, Debug)]
pub struct CameraController {
    pose: CameraPose,
    mode: CameraMode,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            pose: menu_pose(),
            mode: CameraMode::Hold,
        }
    }
}

impl CameraController {
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn update(&mut self, input: CameraInput, elapsed_sec: f32, dt_sec: f32) -> CameraPose {
        let mode = input.mode();
        if mode != self.mode {
            log::debug!("[camera] {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
        self.pose = camera_transform(self.pose, input, elapsed_sec, dt_sec);
        self.pose
    }
}

/// Starting pose: the menu vantage looking at the ring center.
pub fn menu_pose() -> CameraPose {
    CameraPose {
        position: MENU_EYE,
        orientation: look_rotation(MENU_EYE, MENU_TARGET, Quat::IDENTITY),
    }
}

/// View matrix (world → camera) for a pose.
#[inline]
pub fn view_matrix(pose: &CameraPose) -> Mat4 {
    Mat4::from_rotation_translation(pose.orientation, pose.position).inverse()
}
