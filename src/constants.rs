/// Canvas render tuning constants.
///
/// Sizes are in canvas backing-store pixels; colors are CSS strings handed
/// straight to the 2D context.
// Background
pub const BACKGROUND_COLOR: &str = "#0b1020";

// Slingshot band and anchor
pub const BAND_COLOR: &str = "#f5c26b";
pub const BAND_WIDTH_PX: f64 = 6.0;
pub const ANCHOR_COLOR: &str = "#cfe7ff";
pub const ANCHOR_RADIUS_PX: f64 = 14.0;

// Projectile (scaled by the eased pull scale)
pub const PROJECTILE_COLOR: &str = "#ff6b6b";
pub const PROJECTILE_RADIUS_PX: f64 = 16.0;
pub const PROJECTILE_AIM_TICK_PX: f64 = 10.0; // length of the aim marker beyond the rim

// Alpha applied to the draw while a gesture release is pending
pub const PENDING_RELEASE_ALPHA: f64 = 0.55;

// Gesture cursor
pub const CURSOR_COLOR: &str = "#7cf5c8";
pub const CURSOR_RADIUS_PX: f64 = 10.0;
pub const CURSOR_LINE_WIDTH_PX: f64 = 3.0;

// Particle palette, cycled per particle
pub const PARTICLE_COLORS: [&str; 5] = ["#ff6b6b", "#f5c26b", "#7cf5c8", "#6bb6ff", "#c89bff"];
