use crate::core::{key_action, KeyAction};
use crate::overlay;
use crate::AppHandles;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, h: &AppHandles) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleGesture => {
            let mode = h.toggle_mode();
            log::info!("[keys] input mode -> {:?}", mode);
        }
        KeyAction::ToggleOverlay => overlay::toggle(&h.document),
        KeyAction::CancelDraw => {
            h.state.borrow_mut().cancel_draw();
            log::info!("[keys] draw cancelled");
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(h: &AppHandles) {
    if let Some(window) = web::window() {
        let h = h.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &h);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
