use super::constants::{SCROLL_MAX, SETTLE_DELAY_MS, TOUCH_SENSITIVITY, WHEEL_SENSITIVITY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntroPhase {
    Title,
    Scroll,
    Explore,
}

impl IntroPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            IntroPhase::Title => "title",
            IntroPhase::Scroll => "scroll",
            IntroPhase::Explore => "explore",
        }
    }
}

/// Progress points gained per unit of input. Wheel and touch deltas come in
/// different units, hence two independent values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSensitivity {
    pub wheel: f32,
    pub touch: f32,
}

impl Default for ScrollSensitivity {
    fn default() -> Self {
        Self {
            wheel: WHEEL_SENSITIVITY,
            touch: TOUCH_SENSITIVITY,
        }
    }
}

/// The title → scroll → explore machine plus the scroll progress it owns.
///
/// Phases only move forward. Progress is clamped to `[0, SCROLL_MAX]` on every
/// update, and reaching the top schedules the move to explore after a settle
/// delay. Time is passed in explicitly (milliseconds) so the machine stays pure.
#[derive(Clone, Debug)]
pub struct IntroState {
    phase: IntroPhase,
    progress: f32,
    sensitivity: ScrollSensitivity,
    settle_delay_ms: f64,
    explore_at_ms: Option<f64>,
    touch_y: Option<f32>,
}

impl IntroState {
    pub fn new(sensitivity: ScrollSensitivity, settle_delay_ms: f64) -> Self {
        Self {
            phase: IntroPhase::Title,
            progress: 0.0,
            sensitivity,
            settle_delay_ms: settle_delay_ms.max(0.0),
            explore_at_ms: None,
            touch_y: None,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Scroll progress in `[0, 100]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Scroll progress normalized to `[0, 1]`.
    pub fn progress01(&self) -> f32 {
        self.progress / SCROLL_MAX
    }

    pub fn explore_pending(&self) -> bool {
        self.explore_at_ms.is_some()
    }

    /// Title → scroll. Returns true when the transition happened.
    pub fn enter(&mut self) -> bool {
        if self.phase != IntroPhase::Title {
            return false;
        }
        self.phase = IntroPhase::Scroll;
        log::info!("[intro] title -> scroll");
        true
    }

    pub fn wheel(&mut self, delta_y: f32, now_ms: f64) {
        let k = self.sensitivity.wheel;
        self.accumulate(delta_y * k, now_ms);
    }

    pub fn touch_start(&mut self, client_y: f32) {
        self.touch_y = Some(client_y);
    }

    /// Dragging upward (decreasing `client_y`) advances progress. The anchor is
    /// reset after each move so a continuous drag accumulates.
    pub fn touch_move(&mut self, client_y: f32, now_ms: f64) {
        let Some(start) = self.touch_y.replace(client_y) else {
            return;
        };
        let k = self.sensitivity.touch;
        self.accumulate((start - client_y) * k, now_ms);
    }

    /// Force progress to the top and schedule explore.
    pub fn skip(&mut self, now_ms: f64) {
        if self.phase != IntroPhase::Scroll {
            return;
        }
        self.progress = SCROLL_MAX;
        self.schedule_explore(now_ms);
    }

    /// Jump straight to explore (deep link or history navigation).
    /// Returns true if the phase changed.
    pub fn force_explore(&mut self) -> bool {
        self.explore_at_ms = None;
        self.touch_y = None;
        if self.phase == IntroPhase::Explore {
            return false;
        }
        log::info!("[intro] {} -> explore (direct)", self.phase.as_str());
        self.phase = IntroPhase::Explore;
        self.progress = SCROLL_MAX;
        true
    }

    /// Fire the scheduled explore transition once its deadline has passed.
    /// Returns true on the frame the phase changes.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.explore_at_ms {
            Some(at) if now_ms >= at => {
                self.explore_at_ms = None;
                if self.phase == IntroPhase::Scroll {
                    self.phase = IntroPhase::Explore;
                    log::info!("[intro] scroll -> explore");
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    fn accumulate(&mut self, delta: f32, now_ms: f64) {
        if self.phase != IntroPhase::Scroll || !delta.is_finite() {
            return;
        }
        self.progress = (self.progress + delta).clamp(0.0, SCROLL_MAX);
        if self.progress >= SCROLL_MAX {
            self.schedule_explore(now_ms);
        }
    }

    fn schedule_explore(&mut self, now_ms: f64) {
        if self.explore_at_ms.is_none() {
            self.explore_at_ms = Some(now_ms + self.settle_delay_ms);
        }
    }
}

impl Default for IntroState {
    fn default() -> Self {
        Self::new(ScrollSensitivity::default(), SETTLE_DELAY_MS)
    }
}
