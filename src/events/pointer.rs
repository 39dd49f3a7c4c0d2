use crate::input;
use crate::AppHandles;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(h: &AppHandles) {
    wire_pointerdown(h);
    wire_pointermove(h);
    wire_pointerup(h, "pointerup");
    wire_pointerup(h, "pointercancel");
}

fn wire_pointerdown(h: &AppHandles) {
    let h = h.clone();
    let canvas_for_listener = h.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &h.canvas);
        let mut st = h.state.borrow_mut();
        st.pointer_down(pos);
        if st.machine.is_drawing() {
            log::info!("[pointer] draw from ({:.0},{:.0})", pos.x, pos.y);
            _ = h.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(h: &AppHandles) {
    let h = h.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !h.state.borrow().machine.is_drawing() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &h.canvas);
        h.state.borrow_mut().pointer_move(pos);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(h: &AppHandles, event: &str) {
    let h = h.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(release) = h.state.borrow_mut().pointer_up(instant::now()) {
            log::info!("[pointer] release pull={:.1}", release.pull_distance);
        }
        _ = h.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
