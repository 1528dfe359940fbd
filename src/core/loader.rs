use super::constants::{LOADER_FADE_MS, LOADER_HOLD_MS, LOADER_STEP_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStage {
    /// Bar is filling.
    Loading,
    /// Everything settled; the screen is fading out.
    Fading,
    /// Loader is gone.
    Finished,
}

/// Asset readiness and the paced percentage shown on the loading screen.
///
/// The displayed value climbs at most one point per step toward the real
/// percentage so fast loads still read as progress.
#[derive(Clone, Debug)]
pub struct LoadProgress {
    total: u32,
    settled: u32,
    display: f32,
    last_step_ms: Option<f64>,
    full_since_ms: Option<f64>,
    stage: LoaderStage,
}

impl LoadProgress {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            settled: 0,
            display: 0.0,
            last_step_ms: None,
            full_since_ms: None,
            stage: LoaderStage::Loading,
        }
    }

    /// Add `count` assets to wait for.
    pub fn register(&mut self, count: u32) {
        self.total += count;
    }

    /// Mark one asset as done, successfully or not.
    pub fn settle(&mut self) {
        self.settled = (self.settled + 1).min(self.total);
    }

    /// Real percentage; an empty asset list counts as complete.
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            100.0
        } else {
            self.settled as f32 * 100.0 / self.total as f32
        }
    }

    pub fn display_percent(&self) -> f32 {
        self.display
    }

    pub fn stage(&self) -> LoaderStage {
        self.stage
    }

    pub fn is_finished(&self) -> bool {
        self.stage == LoaderStage::Finished
    }

    pub fn tick(&mut self, now_ms: f64) -> LoaderStage {
        let target = self.percent();
        match self.stage {
            LoaderStage::Loading => {
                if self.display < target {
                    let due = self
                        .last_step_ms
                        .map_or(true, |t| now_ms - t >= LOADER_STEP_MS);
                    if due {
                        self.display = (self.display + 1.0).min(target);
                        self.last_step_ms = Some(now_ms);
                    }
                } else if target >= 100.0 && self.display >= 99.0 {
                    let since = *self.full_since_ms.get_or_insert(now_ms);
                    if now_ms - since >= LOADER_HOLD_MS {
                        self.stage = LoaderStage::Fading;
                        self.full_since_ms = Some(now_ms);
                        log::info!("[loader] assets ready");
                    }
                }
            }
            LoaderStage::Fading => {
                let since = self.full_since_ms.unwrap_or(now_ms);
                if now_ms - since >= LOADER_FADE_MS {
                    self.stage = LoaderStage::Finished;
                }
            }
            LoaderStage::Finished => {}
        }
        self.stage
    }
}
