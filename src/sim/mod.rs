//! Game simulation module
//!
//! All gameplay rules live here. Physics, rendering and input dispatch are
//! the host framework's job and reach this module only through the
//! `Scene` trait and the controller's event callbacks.

pub mod background;
pub mod bricks;
pub mod controller;
pub mod state;

pub use background::Starfield;
pub use bricks::{BrickField, brick_count, brick_layout};
pub use controller::GameController;
pub use state::{EntityKind, GameEvent, GamePhase, Outcome, PointerPhase, RoundState};
