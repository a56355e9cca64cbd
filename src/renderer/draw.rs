//! Draw primitives for 2D rendering

use glam::Vec2;

/// Linear RGBA, 0.0 - 1.0
pub type Color = [f32; 4];

/// One canvas operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole canvas
    Clear { size: Vec2 },
    /// Stroked line segment
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Filled axis-aligned rectangle
    Rect { origin: Vec2, size: Vec2, color: Color },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Centered text
    Text {
        text: &'static str,
        pos: Vec2,
        font: &'static str,
        color: Color,
    },
}

/// Color as a CSS `rgba()` string
pub fn css(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Same color with a different alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha]
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const GRID_LINE: Color = [0.878, 0.878, 0.878, 1.0];
    pub const SNAKE: Color = [0.153, 0.682, 0.376, 1.0];
    pub const SNAKE_EYE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const FOOD: Color = [0.906, 0.298, 0.235, 1.0];
    pub const FOOD_LEAF: Color = [0.180, 0.800, 0.443, 1.0];
    pub const FOOD_STEM: Color = [0.545, 0.271, 0.075, 1.0];
    pub const PAUSE_OVERLAY: Color = [0.0, 0.0, 0.0, 0.5];
    pub const PAUSE_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(css(colors::SNAKE), "rgba(39, 174, 96, 1)");
        assert_eq!(css(colors::PAUSE_OVERLAY), "rgba(0, 0, 0, 0.5)");
        assert_eq!(css(with_alpha(colors::SNAKE, 0.85)), "rgba(39, 174, 96, 0.85)");
    }
}
