/// Easing curves for property tweens (quadratic family).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map normalized progress `t` in [0, 1] through the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Animate a scalar from `from` to `to`, starting `delay` seconds after the
/// owner's spawn time and lasting `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            delay: 0.0,
            duration,
            easing,
        }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Normalized progress at `elapsed` seconds since spawn.
    #[inline]
    pub fn progress(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        (local / self.duration).min(1.0)
    }

    pub fn value_at(&self, elapsed: f32) -> f32 {
        let k = self.easing.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * k
    }

    #[inline]
    pub fn end_time(&self) -> f32 {
        self.delay + self.duration
    }

    #[inline]
    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.end_time()
    }
}
