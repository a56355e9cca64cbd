//! Input mapping
//!
//! Keyboard keys and on-screen buttons both become [`Command`]s. Which
//! controls are usable depends on the game phase; see [`Controls`].

use crate::sim::{Direction, Game, GameState};

/// A player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Start,
    TogglePause,
    Reset,
}

impl Command {
    /// Map a `KeyboardEvent.key` value. Space only pauses a round in
    /// progress and Enter only starts a stopped one.
    pub fn from_key(key: &str, in_progress: bool) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Command::Turn(Direction::Up)),
            "ArrowDown" | "s" | "S" => Some(Command::Turn(Direction::Down)),
            "ArrowLeft" | "a" | "A" => Some(Command::Turn(Direction::Left)),
            "ArrowRight" | "d" | "D" => Some(Command::Turn(Direction::Right)),
            " " if in_progress => Some(Command::TogglePause),
            "Enter" if !in_progress => Some(Command::Start),
            _ => None,
        }
    }

    /// Apply to the game at frame time `now` (ms). Returns whether anything changed.
    pub fn apply(self, game: &mut Game, now: f64) -> bool {
        match self {
            Command::Turn(direction) => game.request_direction(direction),
            Command::Start if game.state().is_paused() => game.toggle_pause(now),
            Command::Start => game.start(now),
            Command::TogglePause => game.toggle_pause(now),
            Command::Reset => {
                game.reset();
                true
            }
        }
    }
}

/// Enabled state of the on-screen controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
    /// Speed slider; locked during a round so it never races the speed-up curve
    pub speed: bool,
}

impl Controls {
    pub fn for_state(state: &GameState) -> Self {
        let in_progress = state.in_progress();
        Self {
            start: !in_progress || state.is_paused(),
            pause: in_progress,
            reset: in_progress || state.score > 0,
            speed: !in_progress,
        }
    }
}
