use glam::Vec3;

// Layout and orchestration constants shared by the core and the web shell.

// Ring layout
pub const ORBIT_RADIUS: f32 = 5.0; // world units from the ring axis
pub const RING_Y_OFFSET: f32 = -1.0; // the ring group sits slightly below the eye line

// Intro scroll
pub const SCROLL_MAX: f32 = 100.0;
pub const WHEEL_SENSITIVITY: f32 = 0.05; // progress points per wheel deltaY unit
pub const TOUCH_SENSITIVITY: f32 = 0.1; // progress points per touch-drag pixel
pub const SETTLE_DELAY_MS: f64 = 500.0; // grace period before leaving the scroll phase

// Camera vantages
pub const HALL_EYE: Vec3 = Vec3::new(0.0, 5.0, 40.0); // far end of the hall
pub const HALL_TARGET: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const MENU_EYE: Vec3 = Vec3::new(0.0, 0.0, 10.0); // where the ring is framed
pub const MENU_TARGET: Vec3 = Vec3::ZERO;
pub const HOME_EYE: Vec3 = Vec3::new(0.0, 0.0, 8.0); // idle drift destination
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;

// Damping and drift tuning.
//
// Rates are per second so the easing is independent of frame rate.
pub const RING_EASE_PER_SEC: f32 = 2.0;
pub const IDLE_EASE_PER_SEC: f32 = 2.0;
pub const HALL_FADE_PER_SEC: f32 = 2.0;
pub const HALL_FADE_SNAP: f32 = 0.01;
pub const IDLE_ROLL_FREQ: f32 = 0.1; // rad/s fed into sin()
pub const IDLE_ROLL_AMPLITUDE: f32 = 0.02; // radians

// Scripted track pull: 10% per frame at the reference frame rate
pub const TRACK_PULL_PER_FRAME: f32 = 0.1;
pub const REFERENCE_FPS: f32 = 60.0;

// Loader screen pacing
pub const LOADER_STEP_MS: f64 = 20.0;
pub const LOADER_HOLD_MS: f64 = 800.0;
pub const LOADER_FADE_MS: f64 = 1000.0;
