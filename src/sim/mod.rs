//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Time is passed in (milliseconds), never read
//! - Seeded RNG only
//! - No rendering or DOM dependencies

pub mod clock;
pub mod direction;
pub mod food;
pub mod grid;
pub mod speed;
pub mod state;
pub mod tick;

pub use clock::{Frame, Game};
pub use direction::{Direction, DirectionArbiter, Mailbox};
pub use food::FoodPlacer;
pub use grid::{Cell, Grid, GridGeometry};
pub use speed::{SpeedBand, SpeedCurve, SpeedLabel};
pub use state::{Collision, GameOver, GamePhase, GameState, Snake};
pub use tick::{Advance, advance};
