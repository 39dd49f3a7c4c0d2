use crate::core::InputMode;
use crate::input;
use crate::render::CanvasRenderer;
use crate::AppHandles;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub handles: AppHandles,
    pub renderer: CanvasRenderer,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();
        let viewport = input::canvas_viewport(&self.handles.canvas);

        // Gesture sampling only runs once the tracker is ready; until then the
        // machine simply sees no samples and stays idle.
        if self.handles.state.borrow().mode() == InputMode::Gesture {
            let detection = self
                .handles
                .tracker
                .borrow_mut()
                .ready_mut()
                .map(|t| t.detect(now));
            if let Some(detection) = detection {
                let mut st = self.handles.state.borrow_mut();
                if let Some(release) = st.gesture_frame(detection.as_ref(), viewport, now) {
                    log::info!("[gesture] release pull={:.1}", release.pull_distance);
                }
            }
        }

        let mut st = self.handles.state.borrow_mut();
        st.tick(now);
        self.renderer.render(viewport, &st, now);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
