#![cfg(target_arch = "wasm32")]
use crate::core::{Command, ExhibitConfig, Exhibition, Navigator, ARTIFACT_ORDER};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::*;

pub(crate) type SharedExhibition = Rc<RefCell<Exhibition<HistoryNavigator>>>;

/// Mirrors selections into the address bar without reloading.
pub(crate) struct HistoryNavigator {
    history: Option<web::History>,
}

impl Navigator for HistoryNavigator {
    fn push(&mut self, path: &str) {
        if let Some(h) = &self.history {
            if let Err(e) = h.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::warn!("[route] pushState {} failed: {:?}", path, e);
            }
        }
    }
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Scroll sensitivities may be overridden from canvas data attributes.
fn read_config(canvas: &web::HtmlCanvasElement) -> ExhibitConfig {
    let mut config = ExhibitConfig::default();
    if let Some(v) = dom::read_positive_f32_attr(canvas, WHEEL_SENSITIVITY_ATTR) {
        config.sensitivity.wheel = v;
    }
    if let Some(v) = dom::read_positive_f32_attr(canvas, TOUCH_SENSITIVITY_ATTR) {
        config.sensitivity.touch = v;
    }
    log::info!(
        "[config] wheel={} touch={} settle={}ms",
        config.sensitivity.wheel,
        config.sensitivity.touch,
        config.settle_delay_ms
    );
    config
}

fn wire_button(document: &web::Document, id: &str, handles: &events::Handles, command: Command) {
    let h = handles.clone();
    dom::add_click_listener(document, id, move || {
        h.click_sound();
        h.dispatch(command);
    });
    if let Some(el) = document.get_element_by_id(id) {
        let h = handles.clone();
        dom::add_hover_listener(&el, move || h.hover_sound());
    }
}

fn wire_overlay_buttons(document: &web::Document, handles: &events::Handles) {
    wire_button(document, ENTER_BUTTON_ID, handles, Command::Enter);
    wire_button(document, SKIP_BUTTON_ID, handles, Command::Skip);
    wire_button(document, CLOSE_BUTTON_ID, handles, Command::Close);
    wire_button(document, PREV_BUTTON_ID, handles, Command::Prev);
    wire_button(document, NEXT_BUTTON_ID, handles, Command::Next);
    wire_button(document, PLAY_BUTTON_ID, handles, Command::ToggleNarration);
    wire_button(document, VOLUME_BUTTON_ID, handles, Command::ToggleMute);
}

/// Icon row: one button per artifact, tagged with `data-artifact`.
fn wire_artifact_nav(document: &web::Document, handles: &events::Handles) {
    for key in ARTIFACT_ORDER {
        let selector = format!("#{} [data-artifact=\"{}\"]", ARTIFACT_NAV_ID, key.as_str());
        let Ok(Some(el)) = document.query_selector(&selector) else {
            log::warn!("[dom] missing nav icon for {}", key);
            continue;
        };
        let h = handles.clone();
        let closure = Closure::wrap(Box::new(move || {
            h.click_sound();
            h.dispatch(Command::Select(key));
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        let h = handles.clone();
        dom::add_hover_listener(&el, move || h.hover_sound());
    }
}

/// Browser back/forward: re-read the address and let the exhibition follow.
fn wire_popstate(handles: &events::Handles) {
    let Some(window) = web::window() else {
        return;
    };
    let h = handles.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PopStateEvent| {
        let Some(path) = web::window().and_then(|w| w.location().pathname().ok()) else {
            return;
        };
        log::info!("[route] popstate {}", path);
        let effects = h.exhibition.borrow_mut().navigated(&path);
        if let Some(audio) = &h.audio {
            audio.borrow_mut().apply(&effects);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn build_audio(exhibition: &SharedExhibition) -> Option<Rc<RefCell<audio::AudioBank>>> {
    match audio::AudioBank::new() {
        Ok(mut bank) => {
            let ex = exhibition.clone();
            bank.set_narration_end_handler(move || {
                log::info!("[audio] narration ended");
                ex.borrow_mut().narration_ended();
            });
            Some(Rc::new(RefCell::new(bank)))
        }
        Err(e) => {
            log::error!("[audio] init error: {:?}", e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("exhibit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = read_config(&canvas);
    let initial_path = window.location().pathname().unwrap_or_else(|_| "/".into());
    let navigator = HistoryNavigator {
        history: window.history().ok(),
    };
    let exhibition: SharedExhibition = Rc::new(RefCell::new(Exhibition::new(
        config,
        &initial_path,
        navigator,
    )));

    let audio = build_audio(&exhibition);
    let started = Instant::now();
    let handles = events::Handles {
        exhibition: exhibition.clone(),
        audio: audio.clone(),
        started,
    };

    assets::spawn_track_loads(&exhibition);

    wire_overlay_buttons(&document, &handles);
    wire_artifact_nav(&document, &handles);
    wire_popstate(&handles);
    events::wire_global_keydown(handles.clone());
    events::wire_scroll_handlers(&handles);

    let last_frame = Rc::new(RefCell::new(frame::LastFrame::default()));
    events::wire_input_handlers(events::InputWiring {
        handles: handles.clone(),
        canvas: canvas.clone(),
        last_frame: last_frame.clone(),
    });

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        exhibition,
        audio,
        document,
        canvas,
        gpu,
        last_frame,
        last_view: None,
        started,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
