//! One logic tick
//!
//! Moves the snake one cell, resolves collisions and food. Pure with respect to
//! timing: the clock decides *when* to call [`advance`].

use super::food::FoodPlacer;
use super::state::{Collision, GameState};
use crate::settings::Settings;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Advance {
    /// The head landed on the food this tick
    pub ate_food: bool,
    /// The round ended; the body was not moved
    pub terminal: Option<Collision>,
}

/// Advance the snake one cell in the committed direction.
///
/// Collisions are checked against the body as it stood before this tick,
/// tail included, so moving into the cell the tail is about to leave ends the
/// round. A terminal tick leaves the body untouched.
pub fn advance(state: &mut GameState, settings: &Settings, placer: &mut FoodPlacer) -> Advance {
    let grid = settings.grid();
    let direction = state.direction.commit();
    let head = state.snake.head().step(direction);

    if !grid.contains(head) {
        return Advance {
            ate_food: false,
            terminal: Some(Collision::Wall),
        };
    }
    if state.snake.contains(head) {
        return Advance {
            ate_food: false,
            terminal: Some(Collision::SelfCollision),
        };
    }

    state.snake.push_head(head);

    if state.food != Some(head) {
        state.snake.drop_tail();
        return Advance::default();
    }

    // Ate: keep the tail for net growth of one
    state.score += settings.food_score;
    state.speed = settings.speed_curve().on_food_eaten(state.speed);
    state.food = placer.place(grid, &state.snake);

    Advance {
        ate_food: true,
        terminal: state.food.is_none().then_some(Collision::BoardFilled),
    }
}
