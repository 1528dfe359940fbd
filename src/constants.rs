// Browser-side tuning. Orchestration constants (layout, timing, camera
// vantages) live in `core::constants`; these only matter to the web shell.

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADER_ID: &str = "loader";
pub const LOADER_BAR_ID: &str = "loader-bar";
pub const LOADER_PERCENT_ID: &str = "loader-percent";
pub const TITLE_OVERLAY_ID: &str = "title-overlay";
pub const ENTER_BUTTON_ID: &str = "enter-button";
pub const SCROLL_INTRO_ID: &str = "scroll-intro";
pub const SCROLL_PERCENT_ID: &str = "scroll-percent";
pub const SCROLL_BAR_ID: &str = "scroll-bar";
pub const SKIP_BUTTON_ID: &str = "skip-button";
pub const CINEMATIC_OVERLAY_ID: &str = "cinematic-overlay";
pub const NARRATOR_ID: &str = "artifact-narrator";
pub const ARTIFACT_TITLE_ID: &str = "artifact-title";
pub const DESCRIPTION_ID: &str = "artifact-description";
pub const PLAY_BUTTON_ID: &str = "play-button";
pub const PLAY_LABEL_ID: &str = "play-label";
pub const CLOSE_BUTTON_ID: &str = "close-button";
pub const PREV_BUTTON_ID: &str = "prev-button";
pub const NEXT_BUTTON_ID: &str = "next-button";
pub const VOLUME_BUTTON_ID: &str = "volume-button";
pub const HOVER_TITLE_ID: &str = "hover-title";
// Icon row buttons carry `data-artifact="<key>"` inside this container
pub const ARTIFACT_NAV_ID: &str = "artifact-nav";

// Canvas data attributes for runtime overrides
pub const WHEEL_SENSITIVITY_ATTR: &str = "data-wheel-sensitivity";
pub const TOUCH_SENSITIVITY_ATTR: &str = "data-touch-sensitivity";

// Audio assets and levels
pub const AMBIENT_URL: &str = "/assets/background.mp3";
pub const UI_HOVER_URL: &str = "/assets/ui-clack.mp3";
pub const UI_CLICK_URL: &str = "/assets/ui-click.mp3";
pub const AMBIENT_VOLUME: f32 = 0.3;
pub const UI_HOVER_VOLUME: f32 = 0.1;
pub const UI_CLICK_VOLUME: f32 = 0.2;
pub const NARRATION_VOLUME: f32 = 0.8;

// Scroll intro fades out over its last 10 points
pub const SCROLL_FADE_START: f32 = 90.0;

// Picking
pub const PICK_SPHERE_RADIUS: f32 = 1.2; // world units, scaled by artifact scale

// Proxy geometry
pub const ARTIFACT_BASE_SIZE: f32 = 1.1;
pub const FLOAT_AMPLITUDE: f32 = 0.2;
pub const HOVER_BRIGHTEN: f32 = 1.35;
pub const HALL_PILLAR_ROWS: usize = 8;
pub const HALL_PILLAR_SPACING: f32 = 7.0;
pub const HALL_HALF_WIDTH: f32 = 9.0;
pub const HALL_FLOOR_Y: f32 = -2.0;
pub const HALL_STONE_RGB: [f32; 3] = [0.918, 0.898, 0.835]; // warm grey sand
pub const HALL_TONE_JITTER: f32 = 0.05;
pub const HALL_SEED: u64 = 0x5EED_D057;

// Render
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 200.0;
pub const CLEAR_RGB: [f64; 3] = [0.0, 0.0, 0.0];
pub const FOG_RGB: [f32; 3] = [0.02, 0.025, 0.045];
pub const FOG_DENSITY: f32 = 0.035;
