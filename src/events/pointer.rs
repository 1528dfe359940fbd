use super::Handles;
use crate::camera::screen_to_world_ray;
use crate::constants::{FLOAT_AMPLITUDE, PICK_SPHERE_RADIUS};
use crate::core::orbit::artifact_center;
use crate::core::{ArtifactKey, Command, ARTIFACT_ORDER};
use crate::frame::LastFrame;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub handles: Handles,
    pub canvas: web::HtmlCanvasElement,
    pub last_frame: Rc<RefCell<LastFrame>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_click(&w);
}

/// Artifact under canvas pixel `(sx, sy)` as of the last rendered frame.
fn pick(w: &InputWiring, sx: f32, sy: f32) -> Option<ArtifactKey> {
    let frame = *w.last_frame.borrow();
    if !frame.ring_visible {
        return None;
    }
    let radius = w.handles.exhibition.borrow().config().orbit_radius;
    let (ro, rd) = screen_to_world_ray(
        &frame.camera,
        w.canvas.width() as f32,
        w.canvas.height() as f32,
        sx,
        sy,
    );
    let spheres = ARTIFACT_ORDER.iter().map(|key| {
        let center = artifact_center(
            *key,
            radius,
            frame.ring_rotation,
            frame.elapsed_sec,
            FLOAT_AMPLITUDE,
        );
        (center, PICK_SPHERE_RADIUS * key.artifact().scale)
    });
    input::nearest_hit(ro, rd, spheres).map(|(i, _)| ARTIFACT_ORDER[i])
}

fn report_hover(w: &InputWiring, key: Option<ArtifactKey>) {
    let changed = w.handles.exhibition.borrow_mut().set_hover(key);
    if changed && key.is_some() {
        w.handles.hover_sound();
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let hit = pick(&w, pos.x, pos.y);
        report_hover(&w, hit);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        report_hover(&w, None);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        if let Some(key) = pick(&w, pos.x, pos.y) {
            log::info!("[click] {}", key);
            w.handles.click_sound();
            w.handles.dispatch(Command::Select(key));
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
