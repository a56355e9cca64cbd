//! Shape generation for the board
//!
//! Turns a read-only view of the game into a flat list of [`DrawCommand`]s.
//! Nothing here touches the DOM, so the whole frame can be checked in tests.

use glam::Vec2;

use super::draw::{DrawCommand, colors, with_alpha};
use crate::sim::{Cell, Direction, GameState, GridGeometry};

/// Body segments fade by up to this much toward the tail
const BODY_FADE: f32 = 0.3;

/// Build the full frame
pub fn frame(state: &GameState, geo: &GridGeometry) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(64 + state.snake.len() * 2);
    out.push(DrawCommand::Clear {
        size: geo.canvas_size(),
    });
    grid_lines(geo, &mut out);
    snake(state, geo, &mut out);
    if let Some(food) = state.food {
        apple(food, geo, &mut out);
    }
    if state.is_paused() {
        paused_overlay(geo, &mut out);
    }
    out
}

/// Thin lines between cells
pub fn grid_lines(geo: &GridGeometry, out: &mut Vec<DrawCommand>) {
    let size = geo.canvas_size();
    for col in 0..=geo.grid.cols {
        let x = col as f32 * geo.cell_size;
        out.push(DrawCommand::Line {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, size.y),
            width: 0.5,
            color: colors::GRID_LINE,
        });
    }
    for row in 0..=geo.grid.rows {
        let y = row as f32 * geo.cell_size;
        out.push(DrawCommand::Line {
            from: Vec2::new(0.0, y),
            to: Vec2::new(size.x, y),
            width: 0.5,
            color: colors::GRID_LINE,
        });
    }
}

/// Head with eyes facing the direction of travel, then the body with a fade
pub fn snake(state: &GameState, geo: &GridGeometry, out: &mut Vec<DrawCommand>) {
    let cell_rect = Vec2::splat(geo.cell_size - 1.0);
    let head = state.snake.head();
    out.push(DrawCommand::Rect {
        origin: geo.cell_origin(head),
        size: cell_rect,
        color: colors::SNAKE,
    });

    let eye = Vec2::splat(geo.cell_size * 0.2);
    for origin in eye_positions(head, state.direction.committed(), geo) {
        out.push(DrawCommand::Rect {
            origin,
            size: eye,
            color: colors::SNAKE_EYE,
        });
    }

    let len = state.snake.len() as f32;
    for (i, segment) in state.snake.segments().enumerate().skip(1) {
        let alpha = 1.0 - (i as f32 / len) * BODY_FADE;
        out.push(DrawCommand::Rect {
            origin: geo.cell_origin(segment),
            size: cell_rect,
            color: with_alpha(colors::SNAKE, alpha),
        });
    }
}

/// Top-left corners of the two eyes, on the leading edge of the head
fn eye_positions(head: Cell, facing: Direction, geo: &GridGeometry) -> [Vec2; 2] {
    let cell = geo.cell_size;
    let size = cell * 0.2;
    let inset = cell * 0.3;
    let near = inset;
    let far = cell - inset - size;
    let o = geo.cell_origin(head);
    let at = |dx: f32, dy: f32| o + Vec2::new(dx, dy);
    match facing {
        Direction::Right => [at(cell - inset, near), at(cell - inset, far)],
        Direction::Left => [at(near, near), at(near, far)],
        Direction::Up => [at(near, near), at(far, near)],
        Direction::Down => [at(near, far), at(far, far)],
    }
}

/// Food drawn as an apple: body, leaf and stem
pub fn apple(cell: Cell, geo: &GridGeometry, out: &mut Vec<DrawCommand>) {
    let center = geo.cell_center(cell);
    let r = geo.cell_size * 0.4;
    let stem_base = center - Vec2::new(0.0, r * 0.7);

    out.push(DrawCommand::Circle {
        center,
        radius: r,
        color: colors::FOOD,
    });
    out.push(DrawCommand::Circle {
        center: stem_base,
        radius: r * 0.3,
        color: colors::FOOD_LEAF,
    });
    out.push(DrawCommand::Line {
        from: stem_base,
        to: center + Vec2::new(r * 0.3, -r * 0.9),
        width: r * 0.1,
        color: colors::FOOD_STEM,
    });
}

/// Dimmed board with a pause message
pub fn paused_overlay(geo: &GridGeometry, out: &mut Vec<DrawCommand>) {
    let size = geo.canvas_size();
    let mid = size / 2.0;
    out.push(DrawCommand::Rect {
        origin: Vec2::ZERO,
        size,
        color: colors::PAUSE_OVERLAY,
    });
    out.push(DrawCommand::Text {
        text: "Paused",
        pos: mid,
        font: "30px Arial",
        color: colors::PAUSE_TEXT,
    });
    out.push(DrawCommand::Text {
        text: "Press Space to continue",
        pos: mid + Vec2::new(0.0, 30.0),
        font: "16px Arial",
        color: colors::PAUSE_TEXT,
    });
}
