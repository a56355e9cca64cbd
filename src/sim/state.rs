//! Game state and core simulation types
//!
//! Everything the engine owns lives in [`GameState`]. Renderers and the HUD
//! only ever see it through a shared reference.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::direction::{Direction, DirectionArbiter};
use super::food::FoodPlacer;
use super::grid::Cell;
use crate::consts::INITIAL_SNAKE_LENGTH;
use crate::settings::Settings;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started, reset, or ended by a collision
    #[default]
    Stopped,
    /// Ticking
    Running,
    /// Frozen mid-round; frames still render
    Paused,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// Snake covers every cell; nowhere left to put food
    BoardFilled,
}

/// Terminal event handed to the host when a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub cause: Collision,
    /// Final score of the round
    pub score: u32,
    /// High score after this round was counted
    pub high_score: u32,
    /// This round set a new high score
    pub new_record: bool,
}

/// The snake body, head first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A straight snake of `length` cells with its head at `head`, trailing
    /// away from `facing`
    pub fn new(head: Cell, facing: Direction, length: usize) -> Self {
        let back = facing.opposite();
        let body = std::iter::successors(Some(head), |cell| Some(cell.step(back)))
            .take(length.max(1))
            .collect();
        Self { body }
    }

    /// Snake from explicit cells, head first
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        debug_assert!(!body.is_empty(), "snake needs at least one segment");
        Self { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true during play
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether any segment occupies `cell`
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Segments head first
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Add a new head
    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Drop the last segment
    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }
}

/// Complete engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub snake: Snake,
    /// Committed direction plus the pending request mailbox
    pub direction: DirectionArbiter,
    /// Current food cell; `None` only once the board is full
    pub food: Option<Cell>,
    pub score: u32,
    /// Milliseconds per tick
    pub speed: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh round: three-segment snake at the board center facing right,
    /// food placed off the body, score 0, initial speed, stopped
    pub fn new(settings: &Settings, placer: &mut FoodPlacer) -> Self {
        let grid = settings.grid();
        let head = Cell::new((grid.cols / 2) as i32, (grid.rows / 2) as i32);
        let snake = Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH);
        let food = placer.place(grid, &snake);
        Self {
            snake,
            direction: DirectionArbiter::new(Direction::Right),
            food,
            score: 0,
            speed: settings.initial_speed,
            phase: GamePhase::Stopped,
        }
    }

    /// A round has been started and not yet ended or reset
    pub fn in_progress(&self) -> bool {
        self.phase != GamePhase::Stopped
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }
}
