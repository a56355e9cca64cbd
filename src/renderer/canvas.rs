//! Canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::draw::{DrawCommand, css};
use crate::sim::{GameState, GridGeometry};

/// Replays draw lists onto a `<canvas>` element
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    geometry: GridGeometry,
}

impl CanvasRenderer {
    /// Size the canvas to the board and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, geometry: GridGeometry) -> Option<Self> {
        let size = geometry.canvas_size();
        canvas.set_width(size.x as u32);
        canvas.set_height(size.y as u32);

        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
            Ok(None) => {
                log::error!("Canvas has no 2d context");
                return None;
            }
            Err(e) => {
                log::error!("Failed to get 2d context: {:?}", e);
                return None;
            }
        };
        Some(Self { ctx, geometry })
    }

    /// Draw the whole board for `state`
    pub fn render(&self, state: &GameState) {
        let commands = super::shapes::frame(state, &self.geometry);
        self.draw(&commands);
    }

    pub fn draw(&self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        for command in commands {
            match command {
                DrawCommand::Clear { size } => {
                    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
                }
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    ctx.set_stroke_style_str(&css(*color));
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
                DrawCommand::Rect {
                    origin,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(&css(*color));
                    ctx.fill_rect(
                        origin.x as f64,
                        origin.y as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&css(*color));
                    ctx.begin_path();
                    if let Err(e) = ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    ) {
                        log::warn!("Canvas arc failed: {:?}", e);
                        continue;
                    }
                    ctx.fill();
                }
                DrawCommand::Text {
                    text,
                    pos,
                    font,
                    color,
                } => {
                    ctx.set_fill_style_str(&css(*color));
                    ctx.set_font(font);
                    ctx.set_text_align("center");
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }
}
