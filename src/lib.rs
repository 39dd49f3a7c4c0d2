#![cfg(target_arch = "wasm32")]
use crate::camera::SharedTracker;
use crate::core::{mode_from_search, BurstParams, BurstSimulator, InputMode, SlingshotState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod detector;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

/// Shared handles captured by event listeners and the frame loop. Everything
/// lives on the UI thread.
#[derive(Clone)]
pub(crate) struct AppHandles {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub video: web::HtmlVideoElement,
    pub state: Rc<RefCell<SlingshotState>>,
    pub tracker: SharedTracker,
}

impl AppHandles {
    pub fn set_mode(&self, mode: InputMode) {
        self.state.borrow_mut().set_mode(mode);
        match mode {
            InputMode::Gesture => {
                camera::ensure_tracker(&self.tracker, &self.video, &self.document)
            }
            InputMode::Pointer => camera::release_tracker(&self.tracker, &self.document),
        }
        overlay::set_mode_label(&self.document, mode);
    }

    pub fn toggle_mode(&self) -> InputMode {
        let next = self.state.borrow().mode().toggled();
        self.set_mode(next);
        next
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

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slingshot-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("slingshot-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #slingshot-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let video: web::HtmlVideoElement = document
        .get_element_by_id("webcam")
        .ok_or_else(|| anyhow::anyhow!("missing #webcam"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Keep the backing store at CSS size * devicePixelRatio so pointer and
    // gesture coordinates share one pixel space.
    wire_canvas_resize(&canvas);
    let renderer = render::CanvasRenderer::new(&canvas)?;

    let bursts = BurstSimulator::with_rng(BurstParams::default(), StdRng::from_entropy());
    let handles = AppHandles {
        document: document.clone(),
        canvas,
        video,
        state: Rc::new(RefCell::new(SlingshotState::with_bursts(bursts))),
        tracker: Rc::new(RefCell::new(Default::default())),
    };

    events::wire_input_handlers(&handles);
    events::wire_global_keydown(&handles);
    {
        let h = handles.clone();
        dom::add_click_listener(&document, "gesture-toggle", move || {
            h.toggle_mode();
        });
    }

    let initial = mode_from_search(&dom::location_search()).unwrap_or_default();
    handles.set_mode(initial);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { handles, renderer }));
    frame::start_loop(frame_ctx);
    Ok(())
}
