use crate::core::{HandDetection, TrackerStatus, VideoFrameGate};
use crate::detector::{self, HandLandmarker};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

/// Webcam stream plus the landmark model, ready to sample.
pub struct HandTracker {
    video: web::HtmlVideoElement,
    stream: web::MediaStream,
    landmarker: HandLandmarker,
    frames: VideoFrameGate,
}

pub type SharedTracker = Rc<RefCell<TrackerStatus<HandTracker>>>;

impl HandTracker {
    /// Acquire the camera, then the model. The page caches the model, so
    /// reopening after `stop` only costs the camera prompt.
    pub async fn open(video: web::HtmlVideoElement) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| anyhow::anyhow!("mediaDevices unavailable: {:?}", e))?;

        let constraints = web::MediaStreamConstraints::new();
        constraints.set_video(&wasm_bindgen::JsValue::TRUE);
        constraints.set_audio(&wasm_bindgen::JsValue::FALSE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| anyhow::anyhow!("getUserMedia: {:?}", e))?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow::anyhow!("camera denied: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("not a MediaStream: {:?}", e))?;

        video.set_muted(true);
        video.set_src_object(Some(&stream));
        let play = video
            .play()
            .map_err(|e| anyhow::anyhow!("video.play: {:?}", e))?;
        JsFuture::from(play)
            .await
            .map_err(|e| anyhow::anyhow!("video.play rejected: {:?}", e))?;
        log::info!(
            "[camera] stream {}x{}",
            video.video_width(),
            video.video_height()
        );

        let landmarker = match detector::load().await {
            Ok(l) => l,
            Err(e) => {
                stop_tracks(&stream);
                video.set_src_object(None);
                return Err(e);
            }
        };
        log::info!("[camera] hand landmarker ready");
        Ok(Self {
            video,
            stream,
            landmarker,
            frames: VideoFrameGate::default(),
        })
    }

    /// Detection for the current video frame, or `None` when the video has
    /// not advanced since the last call. A stalled stream therefore looks
    /// like lost tracking and the grace window runs out.
    pub fn detect(&mut self, now_ms: f64) -> Option<HandDetection> {
        if self.video.ready_state() < HAVE_CURRENT_DATA {
            return None;
        }
        if !self.frames.is_new_frame(self.video.current_time()) {
            return None;
        }
        match detector::detect(&self.landmarker, &self.video, now_ms) {
            Ok(d) if d.primary().is_some() => Some(d),
            Ok(_) => None,
            Err(e) => {
                log::warn!("[gesture] dropped frame: {}", e);
                None
            }
        }
    }

    /// Stop the camera tracks and detach them from the video element.
    pub fn stop(self) {
        stop_tracks(&self.stream);
        self.video.set_src_object(None);
        log::info!("[camera] stream stopped");
    }
}

fn stop_tracks(stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Start camera/model acquisition unless it is already running or done.
/// Failures are reported on the status overlay; pointer input keeps working.
pub fn ensure_tracker(
    tracker: &SharedTracker,
    video: &web::HtmlVideoElement,
    document: &web::Document,
) {
    {
        let mut status = tracker.borrow_mut();
        if let TrackerStatus::Failed(reason) = &*status {
            log::info!("[camera] retrying after: {}", reason);
        }
        if !status.request() {
            return;
        }
    }
    overlay::set_status(document, "Starting camera…");

    let tracker = tracker.clone();
    let video = video.clone();
    let document = document.clone();
    spawn_local(async move {
        let result = HandTracker::open(video).await.map_err(|e| {
            log::error!("[camera] {:?}", e);
            format!("{e}")
        });
        let failed = result.is_err();
        let wanted = tracker.borrow().is_loading();
        let unwanted = tracker.borrow_mut().resolve(result);
        if let Some(t) = unwanted {
            t.stop();
        }
        if !wanted {
            return;
        }
        if failed {
            overlay::set_status(
                &document,
                "Camera or hand model unavailable. Mouse and touch still work.",
            );
        } else {
            overlay::set_status(&document, "");
        }
    });
}

/// Turn the camera off when gesture mode is left. An acquisition still in
/// flight is stopped as soon as it completes.
pub fn release_tracker(tracker: &SharedTracker, document: &web::Document) {
    let released = tracker.borrow_mut().release();
    if let Some(t) = released {
        t.stop();
    }
    overlay::set_status(document, "");
}
