// World geometry (world units, y grows upward, origin at bottom-left)
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Timing
pub const SPAWN_INTERVAL_SECS: f64 = 3.0;
pub const FIXED_STEP_SECS: f64 = 1.0 / 60.0;
pub const MAX_FRAME_SECS: f64 = 0.1;
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS redraw

// Avatar
pub const AVATAR_RADIUS: f64 = 12.0;
pub const GRAVITY: f64 = 1470.0;
pub const FLAP_VELOCITY: f64 = 420.0;
pub const AVATAR_FRAME_SECS: f64 = 0.1;
pub const AVATAR_FRAME_COUNT: usize = 2;

// Obstacles
pub const PIPE_WIDTH: f64 = 52.0;
pub const PIPE_HEIGHT: f64 = SCREEN_HEIGHT;
/// Gap height is four avatar heights.
pub const GAP_HEIGHT: f64 = AVATAR_RADIUS * 2.0 * 4.0;
/// Minimum distance kept between the gap and the ground or ceiling.
pub const GAP_MARGIN: f64 = AVATAR_RADIUS * 2.0;
/// Obstacles cross two screen widths per `SCREEN_WIDTH / 100` seconds.
pub const SCROLL_SPEED: f64 = 200.0;

// Backdrop
pub const BACKDROP_TILES: usize = 3;
pub const BACKDROP_TILE_WIDTH: f64 = SCREEN_WIDTH;
pub const BACKDROP_CYCLE_SECS: f64 = 9.0;

// Ground and ceiling strips
pub const BOUNDARY_THICKNESS: f64 = 1.0;

// Labels
pub const GAME_OVER_TEXT: &str = "Game over, tap to retry";
pub const READY_TEXT: &str = "Tap to flap";

// Files under ~/.skyflap/
pub const DATA_DIR_NAME: &str = ".skyflap";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "skyflap.log";
