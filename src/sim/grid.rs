//! Grid geometry
//!
//! The playfield is a fixed `cols × rows` lattice of cells. Cells are the only
//! positions the simulation knows about; pixels only exist at the edges
//! (rendering and pointer input), which go through [`GridGeometry`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A single grid cell. Coordinates are signed so that a head stepping off the
/// board can still be represented and rejected by [`Grid::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Board dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub cols: u32,
    pub rows: u32,
}

impl Grid {
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Whether `cell` lies inside `[0, cols) × [0, rows)`
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.cols && (cell.y as u32) < self.rows
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

/// Pixel ↔ cell conversion for a canvas of `grid` cells, each `cell_size` pixels wide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub grid: Grid,
    pub cell_size: f32,
}

impl GridGeometry {
    pub fn new(grid: Grid, cell_size: f32) -> Self {
        Self { grid, cell_size }
    }

    /// Canvas size in pixels
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(
            self.grid.cols as f32 * self.cell_size,
            self.grid.rows as f32 * self.cell_size,
        )
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, cell: Cell) -> Vec2 {
        Vec2::new(cell.x as f32, cell.y as f32) * self.cell_size
    }

    /// Center pixel of a cell
    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        self.cell_origin(cell) + Vec2::splat(self.cell_size / 2.0)
    }

    /// Cell under a canvas point, `None` when the point is off the board
    pub fn cell_at(&self, point: Vec2) -> Option<Cell> {
        if self.cell_size <= 0.0 || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let scaled = (point / self.cell_size).floor();
        let cell = Cell::new(scaled.x as i32, scaled.y as i32);
        self.grid.contains(cell).then_some(cell)
    }
}
