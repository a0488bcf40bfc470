//! Breakout - a minimal brick breaker driven by an external 2D scene
//!
//! Core modules:
//! - `sim`: Game state machine (controller, bricks, background scroll)
//! - `scene`: Contract with the host scene/physics framework
//! - `headless`: In-memory scene used by tests and the session runner
//! - `settings`: Data-driven game tuning
//! - `script`: JSON session replay

pub mod error;
pub mod headless;
pub mod scene;
pub mod script;
pub mod settings;
pub mod sim;

pub use error::ControllerError;
pub use headless::HeadlessScene;
pub use scene::{EntityHandle, LabelHandle, Rect, Scene};
pub use settings::Settings;
pub use sim::{GameController, GameEvent, GamePhase, Outcome, PointerPhase};

/// Game configuration constants
pub mod consts {
    /// Horizontal stride of one brick plus its gap
    pub const BRICK_STRIDE: i32 = 55;
    /// Brick extents
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Distance from the top edge to the brick row
    pub const BRICK_TOP_OFFSET: i32 = 65;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle height above the bottom edge
    pub const PADDLE_OFFSET: f32 = 125.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch impulse (force units)
    pub const LAUNCH_IMPULSE: [f32; 2] = [3.0, 5.0];

    /// Lose zone strip height along the bottom edge
    pub const LOSE_ZONE_HEIGHT: f32 = 50.0;

    pub const STARTING_LIVES: u32 = 3;

    /// Seconds for one star tile to scroll its own height
    pub const STAR_SCROLL_SECS: f32 = 20.0;
    /// Draw order of the star tiles
    pub const STAR_Z: f32 = -1.0;
}
