use super::controls::dispatch;
use crate::core::controls::{input_captures_keys, key_action, KeyAction};
use crate::dom;
use crate::frame::Redraw;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, redraw: &Redraw) {
    // Arrow keys and +/- belong to a focused number field
    if ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some_and(|input| input_captures_keys(&input.type_()))
    {
        return;
    }
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let mode = redraw.app().borrow().camera.mode();
    match key_action(&ev.key(), mode) {
        Some(KeyAction::Control(event)) => {
            log::info!("[keys] {:?}", event);
            dispatch(redraw, event, None);
            ev.prevent_default();
        }
        Some(KeyAction::ToggleAxes) => {
            redraw.update(|app| app.options.show_axes = !app.options.show_axes);
            log::info!("[keys] axes={}", redraw.app().borrow().options.show_axes);
        }
        None => {}
    }
}

pub fn wire_global_keydown(redraw: Redraw) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &redraw);
        });
    }
}
