//! Grid Snake - a classic snake game for the browser canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, input arbiter, ticks, game clock)
//! - `renderer`: Draw-list generation and the Canvas 2D backend
//! - `input`: Keyboard mapping and control-surface state
//! - `highscores`: Persisted best score
//! - `settings`: Board and speed tuning

pub mod highscores;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board size in cells
    pub const GRID_COLS: u32 = 20;
    pub const GRID_ROWS: u32 = 20;
    /// Pixel size of one cell (400x400 canvas)
    pub const CELL_SIZE: f32 = 20.0;

    /// Segments in a fresh snake
    pub const INITIAL_SNAKE_LENGTH: usize = 3;

    /// Tick delay at start, in ms
    pub const INITIAL_SPEED: u32 = 150;
    /// Delay removed per food eaten
    pub const SPEED_DECREMENT: u32 = 3;
    /// Fastest delay reachable by eating
    pub const FLOOR_SPEED: u32 = 70;
    /// Speed control range
    pub const SPEED_CONTROL_MIN: u32 = 70;
    pub const SPEED_CONTROL_MAX: u32 = 200;

    /// Points per food
    pub const FOOD_SCORE: u32 = 10;
}
