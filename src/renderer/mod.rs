//! Rendering module
//!
//! Frames are built as plain draw lists (`shapes`) and replayed onto a
//! Canvas 2D context (`canvas`, wasm only).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use draw::{Color, DrawCommand, colors};
