//! Scripted sessions against the headless scene
//!
//! A script is a JSON array of host events. Contacts are named by role
//! (brick slot, lose zone, paddle) and resolved to the live handles at the
//! moment each step runs.

use core::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::headless::HeadlessScene;
use crate::sim::{GameController, GameEvent, GamePhase, PointerPhase};

/// One host event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Press on the start label
    TapStart,
    Pointer { phase: PointerPhase, x: f32, y: f32 },
    /// Ball touches the brick in `slot`
    HitBrick { slot: usize },
    /// Ball enters the lose zone
    LoseBall,
    /// Ball bounces off the paddle
    HitPaddle,
    Tick { dt: f32 },
}

#[derive(Debug)]
pub enum ScriptError {
    Parse(serde_json::Error),
    /// Step names a brick slot that holds no live brick
    NoSuchBrick { step: usize, slot: usize },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "malformed script: {e}"),
            Self::NoSuchBrick { step, slot } => {
                write!(f, "step {step}: no live brick in slot {slot}")
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::NoSuchBrick { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Final state of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub steps: usize,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub bricks_remaining: usize,
    pub events: Vec<GameEvent>,
}

pub fn parse(json: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    Ok(serde_json::from_str(json)?)
}

/// Feed `script` to `controller` in order
pub fn run(
    controller: &mut GameController<HeadlessScene>,
    script: &[ScriptEvent],
) -> Result<SessionReport, ScriptError> {
    let mut events = Vec::new();

    for (step, event) in script.iter().enumerate() {
        match *event {
            ScriptEvent::TapStart => {
                let pos = controller
                    .scene()
                    .label(controller.start_label())
                    .map(|l| l.position)
                    .unwrap_or_default();
                controller.on_pointer(PointerPhase::Down, pos);
            }
            ScriptEvent::Pointer { phase, x, y } => {
                controller.on_pointer(phase, Vec2::new(x, y));
            }
            ScriptEvent::HitBrick { slot } => {
                let brick = controller
                    .brick_handle(slot)
                    .ok_or(ScriptError::NoSuchBrick { step, slot })?;
                controller.on_contact(controller.ball(), brick);
            }
            ScriptEvent::LoseBall => {
                controller.on_contact(controller.ball(), controller.lose_zone());
            }
            ScriptEvent::HitPaddle => {
                controller.on_contact(controller.ball(), controller.paddle());
            }
            ScriptEvent::Tick { dt } => controller.advance(dt),
        }
        events.extend(controller.drain_events());
    }

    Ok(SessionReport {
        steps: script.len(),
        phase: controller.phase(),
        score: controller.score(),
        lives: controller.lives(),
        bricks_remaining: controller.bricks_remaining(),
        events,
    })
}

/// A short session: a few rallies, one lost ball, then a full clear
pub fn demo(total_bricks: usize) -> Vec<ScriptEvent> {
    let mut script = vec![ScriptEvent::TapStart];
    let mut x = 0.0;

    for slot in 0..total_bricks.min(3) {
        x += 40.0;
        script.push(ScriptEvent::Pointer {
            phase: PointerPhase::Moved,
            x,
            y: 0.0,
        });
        script.push(ScriptEvent::HitPaddle);
        script.push(ScriptEvent::HitBrick { slot });
        script.push(ScriptEvent::Tick { dt: 0.5 });
    }
    script.push(ScriptEvent::LoseBall);

    for slot in 0..total_bricks {
        script.push(ScriptEvent::HitPaddle);
        script.push(ScriptEvent::HitBrick { slot });
        script.push(ScriptEvent::Tick { dt: 0.5 });
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Outcome;

    fn controller() -> GameController<HeadlessScene> {
        GameController::new(HeadlessScene::new(550.0, 800.0), Settings::default())
            .expect("valid playfield")
    }

    #[test]
    fn test_parse_script() {
        let script = parse(
            r#"[
                { "type": "tap_start" },
                { "type": "pointer", "phase": "moved", "x": 12.5, "y": 0 },
                { "type": "hit_brick", "slot": 2 },
                { "type": "lose_ball" },
                { "type": "tick", "dt": 0.016 }
            ]"#,
        )
        .expect("valid script");
        assert_eq!(script.len(), 5);
        assert_eq!(
            script[1],
            ScriptEvent::Pointer {
                phase: PointerPhase::Moved,
                x: 12.5,
                y: 0.0
            }
        );
        assert_eq!(script[2], ScriptEvent::HitBrick { slot: 2 });
    }

    #[test]
    fn test_parse_rejects_unknown_event() {
        let err = parse(r#"[{ "type": "explode" }]"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn test_demo_ends_in_win() {
        let mut c = controller();
        let script = demo(c.total_bricks());
        let report = run(&mut c, &script).expect("demo runs");

        assert_eq!(report.phase, GamePhase::GameOver(Outcome::Win));
        assert_eq!(report.score, 10);
        assert_eq!(report.lives, 2);
        assert_eq!(report.bricks_remaining, 10);
        assert_eq!(report.steps, script.len());
        assert!(report.events.contains(&GameEvent::RoundLost { lives: 2 }));
    }

    #[test]
    fn test_missing_brick_is_reported() {
        let mut c = controller();
        let script = [
            ScriptEvent::TapStart,
            ScriptEvent::HitBrick { slot: 1 },
            ScriptEvent::HitBrick { slot: 1 },
        ];
        let err = run(&mut c, &script).unwrap_err();
        assert!(matches!(err, ScriptError::NoSuchBrick { step: 2, slot: 1 }));
        assert_eq!(err.to_string(), "step 2: no live brick in slot 1");
    }
}
