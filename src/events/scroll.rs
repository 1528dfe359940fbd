use super::Handles;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel and touch drags feed intro scroll progress. Outside the scroll
/// phase the exhibition ignores them.
pub fn wire_scroll_handlers(handles: &Handles) {
    let Some(window) = web::window() else {
        return;
    };

    let h = handles.clone();
    let wheel = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let now_ms = h.now_ms();
        h.exhibition.borrow_mut().wheel(ev.delta_y() as f32, now_ms);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
    wheel.forget();

    let h = handles.clone();
    let touch_start = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            h.exhibition.borrow_mut().touch_start(t.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref());
    touch_start.forget();

    let h = handles.clone();
    let touch_move = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            let now_ms = h.now_ms();
            h.exhibition.borrow_mut().touch_move(t.client_y() as f32, now_ms);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchmove", touch_move.as_ref().unchecked_ref());
    touch_move.forget();
}
