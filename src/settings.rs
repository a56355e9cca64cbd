//! Game settings
//!
//! Tuning knobs for the board and the speed curve. Settings are not persisted;
//! the host may pass a JSON override at startup.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Grid, GridGeometry, SpeedBand, SpeedCurve};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Board width in cells
    pub grid_cols: u32,
    /// Board height in cells
    pub grid_rows: u32,
    /// Pixel size of one cell
    pub cell_size: f32,

    // === Speed (ms per tick, lower is faster) ===
    /// Delay at start and after reset
    pub initial_speed: u32,
    /// Delay removed per food eaten
    pub speed_decrement: u32,
    /// Fastest delay the speed-up curve reaches
    pub floor_speed: u32,
    /// Lower bound of the speed control
    pub speed_min: u32,
    /// Upper bound of the speed control
    pub speed_max: u32,

    // === Scoring ===
    /// Points per food
    pub food_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_cols: GRID_COLS,
            grid_rows: GRID_ROWS,
            cell_size: CELL_SIZE,

            initial_speed: INITIAL_SPEED,
            speed_decrement: SPEED_DECREMENT,
            floor_speed: FLOOR_SPEED,
            speed_min: SPEED_CONTROL_MIN,
            speed_max: SPEED_CONTROL_MAX,

            food_score: FOOD_SCORE,
        }
    }
}

impl Settings {
    /// Parse a JSON override, falling back to defaults on any error.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => {
                log::info!("Loaded settings override");
                settings.validated()
            }
            Err(e) => {
                log::warn!("Invalid settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Settings from an optional JSON blob
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        json.map(Self::from_json).unwrap_or_default()
    }

    /// Repair values the engine cannot run with
    pub fn validated(mut self) -> Self {
        // The starting snake needs three cells to the left of center
        let min_cols = INITIAL_SNAKE_LENGTH as u32 + 1;
        if self.grid_cols < min_cols {
            log::warn!("grid_cols {} too small, using {}", self.grid_cols, min_cols);
            self.grid_cols = min_cols;
        }
        if self.grid_rows == 0 {
            log::warn!("grid_rows is 0, using 1");
            self.grid_rows = 1;
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            log::warn!("cell_size {} invalid, using {}", self.cell_size, CELL_SIZE);
            self.cell_size = CELL_SIZE;
        }
        if self.speed_min > self.speed_max {
            std::mem::swap(&mut self.speed_min, &mut self.speed_max);
        }
        if self.floor_speed > self.initial_speed {
            log::warn!(
                "floor_speed {} above initial_speed {}, clamping",
                self.floor_speed,
                self.initial_speed
            );
            self.floor_speed = self.initial_speed;
        }
        self
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_cols, self.grid_rows)
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.grid(), self.cell_size)
    }

    pub fn speed_curve(&self) -> SpeedCurve {
        SpeedCurve::new(self.speed_decrement, self.floor_speed)
    }

    pub fn speed_band(&self) -> SpeedBand {
        SpeedBand::new(self.speed_min, self.speed_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_game() {
        let settings = Settings::default();
        assert_eq!(settings.grid(), Grid::new(20, 20));
        assert_eq!(settings.initial_speed, 150);
        assert_eq!(settings.speed_decrement, 3);
        assert_eq!(settings.floor_speed, 70);
        assert_eq!(settings.food_score, 10);
        assert_eq!(settings.geometry().canvas_size().x, 400.0);
    }

    #[test]
    fn test_partial_json_override() {
        let settings = Settings::from_json(r#"{ "grid_cols": 30, "initial_speed": 120 }"#);
        assert_eq!(settings.grid_cols, 30);
        assert_eq!(settings.grid_rows, 20);
        assert_eq!(settings.initial_speed, 120);
        assert_eq!(settings.floor_speed, 70);
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
        assert_eq!(Settings::from_json_or_default(None), Settings::default());
    }

    #[test]
    fn test_validation_repairs() {
        let settings = Settings {
            grid_cols: 1,
            grid_rows: 0,
            cell_size: -3.0,
            initial_speed: 60,
            floor_speed: 90,
            speed_min: 200,
            speed_max: 50,
            ..Settings::default()
        }
        .validated();
        assert_eq!(settings.grid_cols, 4);
        assert_eq!(settings.grid_rows, 1);
        assert_eq!(settings.cell_size, CELL_SIZE);
        assert_eq!(settings.floor_speed, 60);
        assert_eq!((settings.speed_min, settings.speed_max), (50, 200));
    }
}
