//! Session data structures: the avatar, obstacles, backdrop and score.

use crate::core::config::GameConfig;
use crate::core::constants::{AVATAR_FRAME_COUNT, BACKDROP_TILES};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Paused, waiting for the first tap. Initial state and post-reset state.
    Ready,
    Playing,
    /// Motion halted after a crash. The next tap resets.
    GameOver,
}

/// Identity of a body taking part in a contact.
///
/// Obstacle parts carry the id of the obstacle they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyKind {
    Avatar,
    Ground,
    Ceiling,
    UpperPipe(u64),
    LowerPipe(u64),
    ScoreGap(u64),
}

impl BodyKind {
    pub fn is_score_gap(&self) -> bool {
        matches!(self, BodyKind::ScoreGap(_))
    }
}

/// The bird. Its horizontal position never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub x: f64,
    /// Centre height (y grows upward).
    pub y: f64,
    /// Vertical velocity in units/s (positive = upward).
    pub velocity: f64,
    /// Current animation frame.
    pub frame: usize,
    /// Seconds spent on the current frame.
    pub frame_timer: f64,
}

impl Avatar {
    /// A motionless avatar at the centre of the screen.
    pub fn at_start(config: &GameConfig) -> Self {
        Self {
            x: config.mid_x(),
            y: config.mid_y(),
            velocity: 0.0,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    pub fn advance_frame(&mut self, dt: f64, frame_secs: f64) {
        self.frame_timer += dt;
        while self.frame_timer >= frame_secs {
            self.frame_timer -= frame_secs;
            self.frame = (self.frame + 1) % AVATAR_FRAME_COUNT;
        }
    }
}

/// An upper pipe, a lower pipe and a score-gap sensor sharing one position.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u64,
    /// Horizontal centre of all three parts.
    pub x: f64,
    /// Vertical centre of the gap.
    pub gap_center_y: f64,
}

impl Obstacle {
    pub fn gap_top(&self, config: &GameConfig) -> f64 {
        self.gap_center_y + config.gap_height / 2.0
    }

    pub fn gap_bottom(&self, config: &GameConfig) -> f64 {
        self.gap_center_y - config.gap_height / 2.0
    }

    pub fn right_edge(&self, config: &GameConfig) -> f64 {
        self.x + config.pipe_width / 2.0
    }

    /// True once the obstacle has fully left the visible area.
    pub fn is_past_left_edge(&self, config: &GameConfig) -> bool {
        self.right_edge(config) < 0.0
    }
}

/// Repeating background tiles scrolling behind everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    /// Scroll distance into the current tile cycle, in `[0, tile_width)`.
    pub offset: f64,
}

impl Backdrop {
    pub fn new() -> Self {
        Self { offset: 0.0 }
    }

    pub fn scroll(&mut self, distance: f64, tile_width: f64) {
        self.offset = (self.offset + distance).rem_euclid(tile_width);
    }

    /// Left edge of each tile. Three tiles cover the screen while cycling.
    pub fn tile_positions(&self, tile_width: f64) -> [f64; BACKDROP_TILES] {
        let mut positions = [0.0; BACKDROP_TILES];
        for (i, pos) in positions.iter_mut().enumerate() {
            *pos = tile_width * i as f64 - self.offset;
        }
        positions
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

/// All state owned by the game loop controller.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub state: GameState,
    pub score: u32,
    pub avatar: Avatar,
    pub obstacles: Vec<Obstacle>,
    pub backdrop: Backdrop,
    /// Id handed to the next spawned obstacle.
    pub next_obstacle_id: u64,
    /// Text of the score display.
    pub score_label: String,
    /// End-of-game message, shown only in `GameOver`.
    pub game_over_label: Option<String>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let avatar = Avatar::at_start(&config);
        Self {
            config,
            state: GameState::Ready,
            score: 0,
            avatar,
            obstacles: Vec::new(),
            backdrop: Backdrop::new(),
            next_obstacle_id: 0,
            score_label: "0".to_string(),
            game_over_label: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Playing
    }
}
