use super::constants::*;
use super::tween::{Easing, Tween};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Knobs for the release burst. `Default` matches the shipped look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstParams {
    pub distance_range: (f32, f32),
    pub speed_scale_range: (f32, f32),
    pub velocity_range: (f32, f32),
    /// Constant added to each particle's vertical target displacement. A
    /// visual bias, not a physical acceleration.
    pub gravity_bias: f32,
    pub base_duration_sec: f32,
    pub size_min: f32,
    pub size_ceiling_range: (f32, f32),
    pub spin_deg: f32,
    pub fade_delay_sec: f32,
    pub fade_duration_sec: f32,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            distance_range: BURST_DISTANCE_RANGE,
            speed_scale_range: BURST_SPEED_SCALE_RANGE,
            velocity_range: BURST_VELOCITY_RANGE,
            gravity_bias: BURST_GRAVITY_BIAS,
            base_duration_sec: BURST_BASE_DURATION_SEC,
            size_min: BURST_SIZE_MIN,
            size_ceiling_range: BURST_SIZE_CEILING_RANGE,
            spin_deg: BURST_SPIN_DEG,
            fade_delay_sec: BURST_FADE_DELAY_SEC,
            fade_duration_sec: BURST_FADE_DURATION_SEC,
        }
    }
}

/// Linear remap of `value` from `input` to `output`, clamped to `output`.
#[inline]
pub fn map_range(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}

/// Uniform sample from `lo..hi`. Degenerate or inverted ranges yield `lo`
/// so hand-tuned params never panic the sampler.
#[inline]
fn sample_between<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Number of particles for a pull of `distance` pixels, saturating at both
/// ends.
#[inline]
pub fn particle_count(distance: f32) -> usize {
    (distance / BURST_DISTANCE_PER_PARTICLE)
        .clamp(BURST_MIN_PARTICLES, BURST_MAX_PARTICLES)
        .round() as usize
}

/// One sprite of a burst. Horizontal and vertical motion are independent
/// tweens with their own durations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub origin: Vec2,
    pub angle: f32,
    pub velocity: f32,
    pub size: f32,
    /// Seconds until the vertical tween completes and the particle is removed.
    pub lifetime: f32,
    pub offset_x: Tween,
    pub offset_y: Tween,
    pub rotation: Tween,
    pub opacity: Tween,
}

/// What the render sink needs to draw a particle this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub size: f32,
}

impl Particle {
    pub fn spawn<R: Rng>(
        origin: Vec2,
        pull_distance: f32,
        params: &BurstParams,
        rng: &mut R,
    ) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed_scale = map_range(
            pull_distance,
            params.distance_range,
            params.speed_scale_range,
        );
        let velocity =
            sample_between(rng, params.velocity_range.0, params.velocity_range.1) * speed_scale;

        let duration_x = params.base_duration_sec + rng.gen::<f32>();
        let duration_y = params.base_duration_sec + rng.gen::<f32>();
        let dx = angle.cos() * velocity;
        let dy = angle.sin() * velocity + params.gravity_bias;

        let size_ceiling = map_range(
            pull_distance,
            params.distance_range,
            params.size_ceiling_range,
        )
        .max(params.size_min);
        let size = rng.gen_range(params.size_min..=size_ceiling);
        let spin = params.spin_deg.abs();
        let spin = rng.gen_range(-spin..=spin);

        Self {
            origin,
            angle,
            velocity,
            size,
            lifetime: duration_y,
            offset_x: Tween::new(0.0, dx, duration_x, Easing::EaseOut),
            offset_y: Tween::new(0.0, dy, duration_y, Easing::EaseIn),
            rotation: Tween::new(0.0, spin, params.fade_duration_sec, Easing::Linear)
                .delayed(params.fade_delay_sec),
            opacity: Tween::new(1.0, 0.0, params.fade_duration_sec, Easing::Linear)
                .delayed(params.fade_delay_sec),
        }
    }

    #[inline]
    pub fn is_finished(&self, elapsed_sec: f32) -> bool {
        self.offset_y.is_finished(elapsed_sec)
    }

    pub fn frame_at(&self, elapsed_sec: f32) -> ParticleFrame {
        ParticleFrame {
            position: self.origin
                + Vec2::new(
                    self.offset_x.value_at(elapsed_sec),
                    self.offset_y.value_at(elapsed_sec),
                ),
            rotation_deg: self.rotation.value_at(elapsed_sec),
            opacity: self.opacity.value_at(elapsed_sec).clamp(0.0, 1.0),
            size: self.size,
        }
    }
}

pub type ParticleBatch = SmallVec<[Particle; 16]>;

/// A batch of particles spawned by one release.
#[derive(Clone, Debug)]
pub struct Burst {
    pub spawned_at_ms: f64,
    pub particles: ParticleBatch,
}

impl Burst {
    pub fn spawn<R: Rng>(
        origin: Vec2,
        pull_distance: f32,
        now_ms: f64,
        params: &BurstParams,
        rng: &mut R,
    ) -> Self {
        let n = particle_count(pull_distance);
        let particles = (0..n)
            .map(|_| Particle::spawn(origin, pull_distance, params, rng))
            .collect();
        Self {
            spawned_at_ms: now_ms,
            particles,
        }
    }

    #[inline]
    pub fn elapsed_sec(&self, now_ms: f64) -> f32 {
        ((now_ms - self.spawned_at_ms) / 1000.0).max(0.0) as f32
    }

    /// Drop particles whose vertical motion has completed.
    pub fn prune(&mut self, now_ms: f64) {
        let t = self.elapsed_sec(now_ms);
        self.particles.retain(|p| !p.is_finished(t));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Owns every burst in flight. Bursts run to completion regardless of what
/// the interaction state does afterwards.
pub struct BurstSimulator {
    pub params: BurstParams,
    bursts: Vec<Burst>,
    rng: StdRng,
}

impl BurstSimulator {
    pub fn new(params: BurstParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(params: BurstParams, rng: StdRng) -> Self {
        Self {
            params,
            bursts: Vec::new(),
            rng,
        }
    }

    pub fn spawn(&mut self, origin: Vec2, pull_distance: f32, now_ms: f64) -> usize {
        let burst = Burst::spawn(origin, pull_distance, now_ms, &self.params, &mut self.rng);
        let n = burst.particles.len();
        log::info!(
            "[burst] {} particles at ({:.0},{:.0}) pull={:.1}",
            n,
            origin.x,
            origin.y,
            pull_distance
        );
        self.bursts.push(burst);
        n
    }

    pub fn tick(&mut self, now_ms: f64) {
        for b in &mut self.bursts {
            b.prune(now_ms);
        }
        self.bursts.retain(|b| !b.is_empty());
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn particle_count(&self) -> usize {
        self.bursts.iter().map(|b| b.particles.len()).sum()
    }

    pub fn is_idle(&self) -> bool {
        self.bursts.is_empty()
    }

    pub fn frames(&self, now_ms: f64) -> impl Iterator<Item = ParticleFrame> + '_ {
        self.bursts.iter().flat_map(move |b| {
            let t = b.elapsed_sec(now_ms);
            b.particles.iter().map(move |p| p.frame_at(t))
        })
    }

    pub fn clear(&mut self) {
        self.bursts.clear();
    }
}
