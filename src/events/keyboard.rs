use super::Handles;
use crate::core::command_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, handles: &Handles) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let Some(command) = command_for_key(&key) else {
        return;
    };
    // Space and arrows would otherwise scroll the page
    if matches!(key.as_str(), " " | "ArrowLeft" | "ArrowRight") {
        ev.prevent_default();
    }
    log::info!("[keys] {:?}", command);
    handles.dispatch(command);
}

pub fn wire_global_keydown(handles: Handles) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &handles);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
