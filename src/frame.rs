use crate::audio::AudioBank;
use crate::core::{CameraPose, Effect, ViewState};
use crate::render::{self, SceneDraw};
use crate::{overlay, SharedExhibition};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What the last rendered frame looked like; read by pointer picking.
#[derive(Clone, Copy, Debug)]
pub struct LastFrame {
    pub camera: CameraPose,
    pub ring_rotation: f32,
    pub elapsed_sec: f32,
    pub ring_visible: bool,
}

impl Default for LastFrame {
    fn default() -> Self {
        Self {
            camera: crate::core::camera::menu_pose(),
            ring_rotation: 0.0,
            elapsed_sec: 0.0,
            ring_visible: false,
        }
    }
}

pub struct FrameContext<'a> {
    pub exhibition: SharedExhibition,
    pub audio: Option<Rc<RefCell<AudioBank>>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_frame: Rc<RefCell<LastFrame>>,
    pub last_view: Option<ViewState>,
    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_ms = (now - self.started).as_secs_f64() * 1000.0;

        let (out, view, draw) = {
            let mut ex = self.exhibition.borrow_mut();
            let out = ex.frame(now_ms, dt_sec);
            let draw = SceneDraw {
                hovered: ex.hovered(),
                orbit_radius: ex.config().orbit_radius,
            };
            (out, ex.view(), draw)
        };

        for effect in &out.effects {
            if let Effect::PhaseChanged(phase) = effect {
                log::info!("[intro] phase -> {}", phase.as_str());
            }
        }
        if let Some(audio) = &self.audio {
            audio.borrow_mut().apply(&out.effects);
        }

        *self.last_frame.borrow_mut() = LastFrame {
            camera: out.camera,
            ring_rotation: out.ring_rotation,
            elapsed_sec: out.elapsed_sec,
            ring_visible: out.ring_visible,
        };
        overlay::sync(&self.document, &view, &mut self.last_view);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&out, &draw) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
