//! Game settings and tuning
//!
//! Loaded from a JSON file; every field falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ControllerError;

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rules ===
    /// Lives at the start of each game
    pub starting_lives: u32,
    /// Impulse applied to the ball at launch
    pub launch_impulse: Vec2,

    // === Entities ===
    pub ball_radius: f32,
    pub paddle_size: Vec2,
    /// Paddle height above the bottom edge
    pub paddle_offset: f32,
    /// Recreate the paddle every round (false keeps one paddle and re-centers it)
    pub recreate_paddle_each_round: bool,
    pub brick_size: Vec2,
    /// Horizontal distance between brick origins
    pub brick_stride: i32,
    /// Brick row distance below the top edge
    pub brick_top_offset: i32,
    pub lose_zone_height: f32,

    // === Labels ===
    pub start_text: String,
    pub win_text: String,
    pub lose_text: String,
    pub title_font_size: f32,
    pub hud_font_size: f32,

    // === Background ===
    /// Scrolling starfield behind the playfield
    pub starfield: bool,
    pub star_texture: String,
    /// Seconds for a tile to scroll its own height
    pub star_scroll_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            launch_impulse: Vec2::from_array(LAUNCH_IMPULSE),

            ball_radius: BALL_RADIUS,
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_offset: PADDLE_OFFSET,
            recreate_paddle_each_round: true,
            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_stride: BRICK_STRIDE,
            brick_top_offset: BRICK_TOP_OFFSET,
            lose_zone_height: LOSE_ZONE_HEIGHT,

            start_text: "Tap to start".to_string(),
            win_text: "You win! Tap to play again".to_string(),
            lose_text: "You lose! Tap to play again".to_string(),
            title_font_size: 40.0,
            hud_font_size: 18.0,

            starfield: true,
            star_texture: "Stars".to_string(),
            star_scroll_secs: STAR_SCROLL_SECS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Malformed settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Reject values the controller cannot run with
    pub fn validate(&self) -> Result<(), ControllerError> {
        let invalid = |field, reason| Err(ControllerError::InvalidSettings { field, reason });

        if self.starting_lives == 0 {
            return invalid("starting_lives", "must be at least 1");
        }
        if !self.launch_impulse.is_finite() {
            return invalid("launch_impulse", "must be finite");
        }
        if !(self.ball_radius > 0.0) {
            return invalid("ball_radius", "must be positive");
        }
        if !(self.paddle_size.x > 0.0 && self.paddle_size.y > 0.0) {
            return invalid("paddle_size", "must be positive");
        }
        if !(self.brick_size.x > 0.0 && self.brick_size.y > 0.0) {
            return invalid("brick_size", "must be positive");
        }
        if self.brick_stride <= 0 {
            return invalid("brick_stride", "must be positive");
        }
        if (self.brick_stride as f32) < self.brick_size.x {
            return invalid("brick_stride", "must not be narrower than a brick");
        }
        if !(self.paddle_offset.is_finite() && self.paddle_offset > 0.0) {
            return invalid("paddle_offset", "must be positive");
        }
        if self.brick_top_offset < 0 {
            return invalid("brick_top_offset", "must not be negative");
        }
        if !(self.lose_zone_height > 0.0) {
            return invalid("lose_zone_height", "must be positive");
        }
        if self.starfield && !(self.star_scroll_secs > 0.0) {
            return invalid("star_scroll_secs", "must be positive");
        }
        Ok(())
    }
}
