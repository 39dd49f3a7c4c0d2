use super::constants::{
    DETECTION_GRACE_MS, INDEX_TIP, PINCH_RELEASE_THRESHOLD, PINCH_START_THRESHOLD, THUMB_TIP,
};
use glam::{Vec2, Vec3};

/// One hand's landmarks as reported by the pose model, in normalized image
/// coordinates (x, y in [0, 1], z relative depth).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkSet {
    pub points: Vec<Vec3>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn thumb_tip(&self) -> Option<Vec3> {
        self.points.get(THUMB_TIP).copied()
    }

    #[inline]
    pub fn index_tip(&self) -> Option<Vec3> {
        self.points.get(INDEX_TIP).copied()
    }
}

/// Result of running the landmark model on one video frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandDetection {
    pub hands: Vec<LandmarkSet>,
}

impl HandDetection {
    /// First hand that actually carries landmarks.
    pub fn primary(&self) -> Option<&LandmarkSet> {
        self.hands.iter().find(|h| !h.points.is_empty())
    }
}

/// Per-frame interaction signal derived from the hand tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    /// Screen-space cursor. Meaningless unless `is_detected`.
    pub cursor: Vec2,
    pub is_pinching: bool,
    pub is_detected: bool,
}

impl GestureSample {
    /// True when the sample should start or continue a draw.
    #[inline]
    pub fn is_grabbing(&self) -> bool {
        self.is_detected && self.is_pinching
    }
}

/// Thumb-tip to index-tip distance in the image plane.
#[inline]
pub fn pinch_distance(thumb: Vec3, index: Vec3) -> f32 {
    thumb.truncate().distance(index.truncate())
}

/// Classify a pinch with a hysteresis band: a pinch starts below
/// `PINCH_START_THRESHOLD` and only ends at or above
/// `PINCH_RELEASE_THRESHOLD`.
pub fn classify_pinch(landmarks: &[Vec3], was_pinching: bool) -> bool {
    let (Some(thumb), Some(index)) = (landmarks.get(THUMB_TIP), landmarks.get(INDEX_TIP)) else {
        return false;
    };
    let d = pinch_distance(*thumb, *index);
    if was_pinching {
        d < PINCH_RELEASE_THRESHOLD
    } else {
        d < PINCH_START_THRESHOLD
    }
}

/// Map the index fingertip to viewport pixels, mirroring x because the
/// camera feed is shown flipped.
pub fn cursor_from_landmarks(landmarks: &[Vec3], viewport: Vec2) -> Vec2 {
    match landmarks.get(INDEX_TIP) {
        Some(tip) => Vec2::new((1.0 - tip.x) * viewport.x, tip.y * viewport.y),
        None => Vec2::ZERO,
    }
}

/// Pinch state carried across frames while gesture mode is active.
#[derive(Clone, Copy, Debug)]
pub struct PinchState {
    pub was_pinching: bool,
    pub last_cursor: Vec2,
    pub last_detected_at_ms: f64,
}

impl Default for PinchState {
    fn default() -> Self {
        // Never detected: the first empty frame reports no hand.
        Self {
            was_pinching: false,
            last_cursor: Vec2::ZERO,
            last_detected_at_ms: f64::NEG_INFINITY,
        }
    }
}

impl PinchState {
    /// Fold one frame's detection into the state and produce the sample for
    /// this frame. Short tracking dropouts (under `DETECTION_GRACE_MS`)
    /// replay the last known cursor and pinch so a drag is not interrupted.
    pub fn sample_frame(
        &mut self,
        detection: Option<&HandDetection>,
        viewport: Vec2,
        now_ms: f64,
    ) -> GestureSample {
        if let Some(hand) = detection.and_then(HandDetection::primary) {
            let is_pinching = classify_pinch(&hand.points, self.was_pinching);
            let cursor = cursor_from_landmarks(&hand.points, viewport);
            if is_pinching != self.was_pinching {
                log::debug!(
                    "[gesture] pinch {} at ({:.0},{:.0})",
                    if is_pinching { "start" } else { "end" },
                    cursor.x,
                    cursor.y
                );
            }
            self.was_pinching = is_pinching;
            self.last_cursor = cursor;
            self.last_detected_at_ms = now_ms;
            return GestureSample {
                cursor,
                is_pinching,
                is_detected: true,
            };
        }

        let elapsed = now_ms - self.last_detected_at_ms;
        if elapsed < DETECTION_GRACE_MS {
            return GestureSample {
                cursor: self.last_cursor,
                is_pinching: self.was_pinching,
                is_detected: true,
            };
        }

        self.was_pinching = false;
        GestureSample {
            cursor: self.last_cursor,
            is_pinching: false,
            is_detected: false,
        }
    }
}

/// Remembers the last video timestamp handed to the model, so each camera
/// frame is detected once. A repeated frame carries no new information and
/// must not refresh `PinchState::last_detected_at_ms`.
#[derive(Clone, Copy, Debug, Default)]
pub struct VideoFrameGate {
    last_video_time: Option<f64>,
}

impl VideoFrameGate {
    /// True when `video_time` differs from the previous call's.
    pub fn is_new_frame(&mut self, video_time: f64) -> bool {
        if self.last_video_time == Some(video_time) {
            return false;
        }
        self.last_video_time = Some(video_time);
        true
    }
}
