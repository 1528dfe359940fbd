use glam::{Quat, Vec3};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("camera track json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("camera track has no keyframes")]
    Empty,
    #[error("camera track has non-finite data at keyframe {0}")]
    NonFinite(usize),
    #[error("camera track unavailable: {0}")]
    Unavailable(String),
}

/// Position and orientation of a camera in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CameraKeyframe {
    pub time: f32,
    pub position: [f32; 3],
    /// Quaternion as `[x, y, z, w]`.
    pub rotation: [f32; 4],
}

#[derive(Debug, Deserialize)]
struct TrackDocument {
    #[serde(default)]
    duration: Option<f32>,
    keyframes: Vec<CameraKeyframe>,
}

/// A pre-authored camera path sampled by time. Holds its last keyframe after
/// the end.
#[derive(Clone, Debug)]
pub struct CameraTrack {
    keyframes: Vec<CameraKeyframe>,
    duration: f32,
}

impl CameraTrack {
    pub fn from_json(text: &str) -> Result<Self, TrackError> {
        let doc: TrackDocument = serde_json::from_str(text)?;
        Self::new(doc.keyframes, doc.duration)
    }

    pub fn new(mut keyframes: Vec<CameraKeyframe>, duration: Option<f32>) -> Result<Self, TrackError> {
        if keyframes.is_empty() {
            return Err(TrackError::Empty);
        }
        for (i, k) in keyframes.iter_mut().enumerate() {
            let finite = k.time.is_finite()
                && k.position.iter().all(|v| v.is_finite())
                && k.rotation.iter().all(|v| v.is_finite());
            if !finite {
                return Err(TrackError::NonFinite(i));
            }
            let q = Quat::from_array(k.rotation);
            let q = if q.length_squared() > 1e-12 {
                q.normalize()
            } else {
                Quat::IDENTITY
            };
            k.rotation = q.to_array();
        }
        keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
        let last = keyframes[keyframes.len() - 1].time;
        let duration = match duration {
            // Never end before the last keyframe, so holding shows the final pose
            Some(d) if d.is_finite() && d >= 0.0 => d.max(last),
            Some(_) => return Err(TrackError::NonFinite(keyframes.len() - 1)),
            None => last.max(0.0),
        };
        Ok(Self {
            keyframes,
            duration,
        })
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn sample(&self, time: f32) -> CameraPose {
        let first = &self.keyframes[0];
        let last = &self.keyframes[self.keyframes.len() - 1];
        if time <= first.time {
            return pose_of(first);
        }
        if time >= last.time {
            return pose_of(last);
        }
        // First keyframe strictly after `time`; both neighbours exist here.
        let hi = self.keyframes.partition_point(|k| k.time <= time);
        let a = &self.keyframes[hi - 1];
        let b = &self.keyframes[hi];
        let span = (b.time - a.time).max(1e-6);
        let t = ((time - a.time) / span).clamp(0.0, 1.0);
        CameraPose {
            position: Vec3::from_array(a.position).lerp(Vec3::from_array(b.position), t),
            orientation: Quat::from_array(a.rotation).slerp(Quat::from_array(b.rotation), t),
        }
    }
}

#[inline]
fn pose_of(k: &CameraKeyframe) -> CameraPose {
    CameraPose {
        position: Vec3::from_array(k.position),
        orientation: Quat::from_array(k.rotation),
    }
}

/// Playback cursor over a track: reset/play/loop-once/hold-on-finish.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPlayback {
    time: f32,
    playing: bool,
    loop_once: bool,
    hold_on_finish: bool,
    finished: bool,
}

impl Default for TrackPlayback {
    fn default() -> Self {
        Self {
            time: 0.0,
            playing: false,
            loop_once: false,
            hold_on_finish: false,
            finished: false,
        }
    }
}

impl TrackPlayback {
    /// A cursor configured the way every artifact sequence is played: once
    /// from the start, holding the final transform.
    pub fn once() -> Self {
        let mut p = Self::default();
        p.reset().set_loop_once(true).hold_on_finish(true).play();
        p
    }

    pub fn reset(&mut self) -> &mut Self {
        self.time = 0.0;
        self.finished = false;
        self
    }

    pub fn play(&mut self) -> &mut Self {
        self.playing = true;
        self
    }

    pub fn set_loop_once(&mut self, once: bool) -> &mut Self {
        self.loop_once = once;
        self
    }

    pub fn hold_on_finish(&mut self, hold: bool) -> &mut Self {
        self.hold_on_finish = hold;
        self
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Move the cursor forward by `dt` seconds over a track of `duration`.
    pub fn advance(&mut self, dt: f32, duration: f32) {
        if !self.playing || self.finished {
            return;
        }
        self.time += dt.max(0.0);
        if self.time < duration {
            return;
        }
        if self.loop_once {
            self.finished = true;
            self.playing = false;
            self.time = if self.hold_on_finish { duration } else { 0.0 };
        } else if duration > 0.0 {
            self.time %= duration;
        } else {
            self.time = 0.0;
        }
    }
}
