// Achievement grid
pub const GRID_SIZE: usize = 5;
pub const PROGRESS_KEY: &str = "achievements";

// Storage
pub const DATA_DIR_NAME: &str = ".retrodesk";
pub const LOG_FILE_NAME: &str = "retrodesk.log";

// Host loop
pub const TICK_INTERVAL_MS: u64 = 16;

// Fragment lifecycle
pub const FADE_THRESHOLD: f32 = 0.01;
pub const DEFAULT_FADE_RATE: f32 = 0.998;
pub const DEFAULT_SHATTER_TIMEOUT_MS: u64 = 3500;
pub const DEFAULT_FRAGMENT_COUNT: usize = 14;
pub const DEFAULT_VELOCITY_SCALE: f32 = 0.05;
pub const DEFAULT_ANGULAR_VELOCITY_SCALE: f32 = 0.05;

// Strip fragments gather segments near a seed segment
pub const STRIP_DISTANCE_FACTOR: f32 = 0.35;
pub const MIN_STRIP_DISTANCE: f32 = 0.05;

// Decorative geometry
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_SEGMENTS: u32 = 32;
pub const WINDOW_WIDTH: f32 = 1.6;
pub const WINDOW_HEIGHT: f32 = 1.0;
pub const WINDOW_SEGMENTS_X: u32 = 12;
pub const WINDOW_SEGMENTS_Y: u32 = 8;
pub const WINDOW_GRAVITY: f32 = 0.002;
