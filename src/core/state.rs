use super::burst::{BurstParams, BurstSimulator};
use super::gesture::{GestureSample, HandDetection, PinchState};
use super::input::InputMode;
use super::interaction::{InteractionMachine, Release};
use glam::Vec2;

/// Everything the slingshot mutates from the input path. Pointer events and
/// gesture frames both funnel through here; only the source matching `mode`
/// has any effect.
pub struct SlingshotState {
    mode: InputMode,
    pub machine: InteractionMachine,
    /// Present only while gesture mode is on.
    pinch: Option<PinchState>,
    pub bursts: BurstSimulator,
    pub last_sample: Option<GestureSample>,
}

impl SlingshotState {
    pub fn new(params: BurstParams, seed: u64) -> Self {
        Self::with_bursts(BurstSimulator::new(params, seed))
    }

    pub fn with_bursts(bursts: BurstSimulator) -> Self {
        Self {
            mode: InputMode::Pointer,
            machine: InteractionMachine::new(),
            pinch: None,
            bursts,
            last_sample: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn pinch(&self) -> Option<&PinchState> {
        self.pinch.as_ref()
    }

    /// Switch input source. Any open draw is dropped without a burst and
    /// pending gesture releases are cancelled; bursts in flight continue.
    pub fn set_mode(&mut self, mode: InputMode) {
        if mode == self.mode {
            return;
        }
        self.machine.cancel();
        self.last_sample = None;
        self.pinch = match mode {
            InputMode::Gesture => Some(PinchState::default()),
            InputMode::Pointer => None,
        };
        self.mode = mode;
        log::info!("[mode] {}", mode.label());
    }

    pub fn toggle_mode(&mut self) -> InputMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn pointer_down(&mut self, point: Vec2) {
        if self.mode == InputMode::Pointer {
            self.machine.start_draw(point);
        }
    }

    pub fn pointer_move(&mut self, point: Vec2) {
        if self.mode == InputMode::Pointer {
            self.machine.update_draw(point);
        }
    }

    pub fn pointer_up(&mut self, now_ms: f64) -> Option<Release> {
        if self.mode != InputMode::Pointer {
            return None;
        }
        let release = self.machine.end_draw()?;
        self.fire(release, now_ms);
        Some(release)
    }

    /// Process one video frame's detection. Ignored outside gesture mode.
    pub fn gesture_frame(
        &mut self,
        detection: Option<&HandDetection>,
        viewport: Vec2,
        now_ms: f64,
    ) -> Option<Release> {
        let pinch = self.pinch.as_mut()?;
        let sample = pinch.sample_frame(detection, viewport, now_ms);
        self.last_sample = Some(sample);
        let release = self.machine.on_gesture_sample(&sample, now_ms)?;
        self.fire(release, now_ms);
        Some(release)
    }

    pub fn cancel_draw(&mut self) {
        self.machine.cancel();
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.bursts.tick(now_ms);
    }

    fn fire(&mut self, release: Release, now_ms: f64) {
        self.bursts.spawn(release.origin, release.pull_distance, now_ms);
    }
}
