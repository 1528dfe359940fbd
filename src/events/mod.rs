use crate::audio::AudioBank;
use crate::core::Command;
use crate::SharedExhibition;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

mod keyboard;
mod pointer;
mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};
pub use scroll::wire_scroll_handlers;

/// Shared handles every DOM listener needs.
#[derive(Clone)]
pub struct Handles {
    pub exhibition: SharedExhibition,
    pub audio: Option<Rc<RefCell<AudioBank>>>,
    pub started: Instant,
}

impl Handles {
    /// Milliseconds on the same clock the frame loop uses.
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Apply a command and hand its effects to audio inside the same user
    /// gesture, so browsers allow playback to start.
    pub fn dispatch(&self, command: Command) {
        let now_ms = self.now_ms();
        let effects = self.exhibition.borrow_mut().apply(command, now_ms);
        log::debug!("[input] {:?} -> {} effects", command, effects.len());
        if let Some(audio) = &self.audio {
            audio.borrow_mut().apply(&effects);
        }
    }

    pub fn click_sound(&self) {
        if let Some(audio) = &self.audio {
            audio.borrow().ui_click();
        }
    }

    pub fn hover_sound(&self) {
        if let Some(audio) = &self.audio {
            audio.borrow().ui_hover();
        }
    }
}
