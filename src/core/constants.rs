// Gesture, interaction and burst tuning constants shared by the web frontend
// and the host-side tests.

// Hand landmark indices (21-point hand model)
pub const LANDMARK_COUNT: usize = 21;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;

// Pinch hysteresis band (normalized landmark units)
pub const PINCH_START_THRESHOLD: f32 = 0.14; // not pinching -> pinching below this
pub const PINCH_RELEASE_THRESHOLD: f32 = 0.18; // pinching -> released at or above this

// Tracking dropout tolerance
pub const DETECTION_GRACE_MS: f64 = 140.0;

// Gesture release debounce
pub const RELEASE_DEBOUNCE_MS: f64 = 80.0;

// Pull visuals (screen pixels)
pub const PULL_DEAD_ZONE_PX: f32 = 30.0; // line collapses to the origin inside this radius
pub const PROJECTILE_SCALE_DIVISOR: f32 = 100.0;
pub const PROJECTILE_SCALE_MIN: f32 = 1.0;
pub const PROJECTILE_SCALE_MAX: f32 = 100.0;

// Burst sizing
pub const BURST_MIN_PARTICLES: f32 = 3.0;
pub const BURST_MAX_PARTICLES: f32 = 40.0;
pub const BURST_DISTANCE_PER_PARTICLE: f32 = 10.0;
pub const BURST_DISTANCE_RANGE: (f32, f32) = (0.0, 500.0); // pull distance input range

// Burst motion
pub const BURST_SPEED_SCALE_RANGE: (f32, f32) = (0.3, 2.5);
pub const BURST_VELOCITY_RANGE: (f32, f32) = (300.0, 800.0);
pub const BURST_GRAVITY_BIAS: f32 = 800.0; // added to the vertical target displacement
pub const BURST_BASE_DURATION_SEC: f32 = 1.0; // plus uniform(0, 1)

// Burst sprites
pub const BURST_SIZE_MIN: f32 = 20.0;
pub const BURST_SIZE_CEILING_RANGE: (f32, f32) = (20.0, 60.0);
pub const BURST_SPIN_DEG: f32 = 180.0; // rotation target in [-SPIN, SPIN]
pub const BURST_FADE_DELAY_SEC: f32 = 0.5;
pub const BURST_FADE_DURATION_SEC: f32 = 0.5;
