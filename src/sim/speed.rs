//! Speed progression
//!
//! Speed is the delay between ticks in milliseconds, so a lower value means a
//! faster snake. Every food eaten shaves a fixed step off the delay until the
//! floor is reached.

use serde::{Deserialize, Serialize};

/// Speed-up curve applied on each food eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedCurve {
    /// Delay removed per food eaten
    pub decrement: u32,
    /// Minimum delay (fastest speed)
    pub floor: u32,
}

impl SpeedCurve {
    pub fn new(decrement: u32, floor: u32) -> Self {
        Self { decrement, floor }
    }

    /// Delay after eating one food at `current`.
    ///
    /// Steps down only while above the floor, and never lands below it.
    pub fn on_food_eaten(&self, current: u32) -> u32 {
        if current > self.floor {
            current.saturating_sub(self.decrement).max(self.floor)
        } else {
            current
        }
    }
}

/// Accepted range for speed values coming from the speed control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedBand {
    pub min: u32,
    pub max: u32,
}

impl SpeedBand {
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Out-of-range input is clamped, never rejected
    pub fn clamp(&self, value: i64) -> u32 {
        value.clamp(self.min as i64, self.max as i64) as u32
    }
}

/// Human-readable speed tier shown next to the speed control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedLabel {
    VerySlow,
    Slow,
    MediumSlow,
    Medium,
    MediumFast,
    Fast,
    VeryFast,
}

impl SpeedLabel {
    pub fn for_delay(delay: u32) -> Self {
        match delay {
            180.. => SpeedLabel::VerySlow,
            150..=179 => SpeedLabel::Slow,
            120..=149 => SpeedLabel::MediumSlow,
            90..=119 => SpeedLabel::Medium,
            70..=89 => SpeedLabel::MediumFast,
            50..=69 => SpeedLabel::Fast,
            _ => SpeedLabel::VeryFast,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedLabel::VerySlow => "Very slow",
            SpeedLabel::Slow => "Slow",
            SpeedLabel::MediumSlow => "Medium-slow",
            SpeedLabel::Medium => "Medium",
            SpeedLabel::MediumFast => "Medium-fast",
            SpeedLabel::Fast => "Fast",
            SpeedLabel::VeryFast => "Very fast",
        }
    }
}
