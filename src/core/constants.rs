use glam::Vec3;

// Shared simulation/camera tuning used by both the core model and the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_SPREAD: f32 = 15.0; // full edge length of the spawn cube
pub const PARTICLE_BOUND: f32 = PARTICLE_SPREAD * 0.5; // wraparound half-width
pub const PARTICLE_VELOCITY_SCALE: f32 = 0.0005; // units per frame, (r - 0.5) * scale
pub const PARTICLE_POINT_SIZE: f32 = 0.01; // world units, attenuated by depth
pub const PARTICLE_COLOR_HEX: u32 = 0x00aaff;
pub const PARTICLE_OPACITY: f32 = 0.4;

// Non-linear drift on Y: sin(elapsed + x * FREQ) * AMP
pub const DRIFT_X_FREQUENCY: f32 = 10.0;
pub const DRIFT_Y_AMPLITUDE: f32 = 0.001;
// Wall-clock milliseconds are scaled by this to get the drift phase.
pub const DRIFT_TIME_SCALE: f64 = 0.0001;

// Whole-set rotation per frame (radians)
pub const FIELD_SPIN_X_PER_FRAME: f32 = 0.00005;
pub const FIELD_SPIN_Y_PER_FRAME: f32 = 0.0001;

// Camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_SMOOTHING: f32 = 0.05; // fraction of remaining distance per frame
pub const POINTER_INFLUENCE: f32 = 0.5; // normalized pointer -> target X/Y

// Scroll-scrubbed parallax over the hero region
pub const PARALLAX_END_Z: f32 = 4.0;
pub const PARALLAX_START: &str = "top top";
pub const PARALLAX_END: &str = "bottom top";

// Reveal triggers
pub const REVEAL_START: &str = "top 90%";
pub const REVEAL_END: &str = "bottom 10%";

// Hero entrance (seconds / px)
pub const HERO_DELAY_SEC: f32 = 0.5;
pub const HERO_DURATION_SEC: f32 = 1.2;
pub const HERO_FROM_OPACITY: f32 = 0.0;
pub const HERO_FROM_Y_PX: f32 = 30.0;

// Smooth scroll
pub const SCROLL_LERP: f64 = 0.1; // per-frame fraction at 60 fps
pub const SCROLL_REFERENCE_FPS: f64 = 60.0;
pub const SCROLL_SETTLE_PX: f64 = 0.5;
pub const NATIVE_ECHO_TOLERANCE_PX: f64 = 1.0;
pub const WHEEL_MULTIPLIER: f64 = 1.0;
pub const WHEEL_LINE_HEIGHT_PX: f64 = 100.0 / 6.0;
