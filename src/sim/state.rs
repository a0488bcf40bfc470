//! Game state and core types

use serde::{Deserialize, Serialize};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick cleared
    Win,
    /// Lives exhausted
    Lose,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first game; ball motionless, paddle inert
    Idle,
    /// Ball launched, paddle tracks the pointer
    Playing,
    /// Game ended. Awaits a new start gesture exactly like `Idle`.
    GameOver(Outcome),
}

impl GamePhase {
    #[inline]
    pub fn is_playing(self) -> bool {
        self == GamePhase::Playing
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GamePhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Pointer event kind delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Moved,
}

/// Semantic role of a scene entity, resolved from its handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ball,
    Paddle,
    /// Brick in the given slot of the current field
    Brick(usize),
    LoseZone,
    Walls,
    Background,
}

/// Notable transitions, queued for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted { lives: u32 },
    BrickCleared { slot: usize, score: u32, remaining: usize },
    /// Ball entered the lose zone with lives to spare; the round restarts
    RoundLost { lives: u32 },
    GameOver { outcome: Outcome, score: u32 },
}

/// Per-game counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
}

impl RoundState {
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            phase: GamePhase::Idle,
        }
    }

    /// Lose one life. Returns the lives left; never goes below zero.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_life_saturates() {
        let mut state = RoundState::new(1);
        assert_eq!(state.lose_life(), 0);
        assert_eq!(state.lose_life(), 0);
    }

    #[test]
    fn test_phase_queries() {
        assert!(GamePhase::Playing.is_playing());
        assert!(!GamePhase::Idle.is_playing());
        assert_eq!(GamePhase::GameOver(Outcome::Win).outcome(), Some(Outcome::Win));
        assert_eq!(GamePhase::Idle.outcome(), None);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&GameEvent::GameOver {
            outcome: Outcome::Lose,
            score: 4,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"event":"game_over","outcome":"Lose","score":4}"#);
    }
}
