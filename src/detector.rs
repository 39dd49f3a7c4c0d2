use crate::core::constants::LANDMARK_COUNT;
use crate::core::{HandDetection, LandmarkSet};
use glam::Vec3;
use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// The hand landmark model lives on the JS side (see index.html), which
// exposes a factory returning a `HandLandmarker` instance.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    pub type HandLandmarker;

    #[wasm_bindgen(method, catch, js_name = detectForVideo)]
    fn detect_for_video(
        this: &HandLandmarker,
        video: &web::HtmlVideoElement,
        timestamp_ms: f64,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = createHandLandmarker)]
    async fn create_hand_landmarker() -> Result<JsValue, JsValue>;
}

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("detector result has no `{0}` field")]
    MissingField(&'static str),
    #[error("`{0}` is not an array")]
    NotAnArray(&'static str),
    #[error("landmark coordinate `{0}` is not a number")]
    NotANumber(&'static str),
    #[error("detectForVideo threw: {0}")]
    Js(String),
}

pub async fn load() -> anyhow::Result<HandLandmarker> {
    let value = create_hand_landmarker()
        .await
        .map_err(|e| anyhow::anyhow!("createHandLandmarker failed: {:?}", e))?;
    if value.is_undefined() || value.is_null() {
        anyhow::bail!("createHandLandmarker resolved to nothing");
    }
    Ok(value.unchecked_into::<HandLandmarker>())
}

/// Run the model on the current video frame.
pub fn detect(
    landmarker: &HandLandmarker,
    video: &web::HtmlVideoElement,
    timestamp_ms: f64,
) -> Result<HandDetection, DetectorError> {
    let result = landmarker
        .detect_for_video(video, timestamp_ms)
        .map_err(|e| DetectorError::Js(format!("{:?}", e)))?;
    parse_detection(&result)
}

/// Convert `{ landmarks: [[{x, y, z}, ...], ...] }` into a `HandDetection`.
/// A missing result means no hands.
pub fn parse_detection(result: &JsValue) -> Result<HandDetection, DetectorError> {
    if result.is_undefined() || result.is_null() {
        return Ok(HandDetection::default());
    }
    let landmarks = field(result, "landmarks")?;
    let hands = landmarks
        .dyn_into::<Array>()
        .map_err(|_| DetectorError::NotAnArray("landmarks"))?;

    let mut out = HandDetection::default();
    for hand in hands.iter() {
        let points = hand
            .dyn_into::<Array>()
            .map_err(|_| DetectorError::NotAnArray("landmarks[i]"))?;
        let mut set = Vec::with_capacity(LANDMARK_COUNT);
        for p in points.iter() {
            set.push(Vec3::new(
                number(&p, "x")?,
                number(&p, "y")?,
                // depth is optional on some model builds
                number(&p, "z").unwrap_or(0.0),
            ));
        }
        out.hands.push(LandmarkSet::new(set));
    }
    Ok(out)
}

fn field(obj: &JsValue, name: &'static str) -> Result<JsValue, DetectorError> {
    let v = Reflect::get(obj, &JsValue::from_str(name))
        .map_err(|_| DetectorError::MissingField(name))?;
    if v.is_undefined() {
        return Err(DetectorError::MissingField(name));
    }
    Ok(v)
}

fn number(obj: &JsValue, name: &'static str) -> Result<f32, DetectorError> {
    field(obj, name)?
        .as_f64()
        .map(|n| n as f32)
        .ok_or(DetectorError::NotANumber(name))
}
