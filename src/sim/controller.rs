//! Game controller
//!
//! Owns every entity handle and counter of one scene and reacts to the two
//! host event sources: pointer input and physics contacts. All work happens
//! synchronously inside the host callback.

use std::collections::HashMap;

use glam::Vec2;

use super::background::Starfield;
use super::bricks::{BrickField, brick_count, brick_layout};
use super::state::{EntityKind, GameEvent, GamePhase, Outcome, PointerPhase, RoundState};
use crate::error::ControllerError;
use crate::scene::{BodySpec, EntityHandle, EntitySpec, LabelHandle, LabelSpec, Rect, Scene, Shape};
use crate::settings::Settings;

/// HUD label inset from the bottom corners
const HUD_INSET: Vec2 = Vec2::new(20.0, 18.0);
/// Start label drop below the playfield center
const START_LABEL_DROP: f32 = 50.0;

#[derive(Debug, Clone, Copy)]
struct Labels {
    start: LabelHandle,
    score: LabelHandle,
    lives: LabelHandle,
}

/// Create an entity and record its role
fn spawn(
    scene: &mut impl Scene,
    kinds: &mut HashMap<EntityHandle, EntityKind>,
    spec: &EntitySpec,
    kind: EntityKind,
) -> EntityHandle {
    let handle = scene.create_entity(spec);
    kinds.insert(handle, kind);
    handle
}

/// Forget an entity's role, then remove it from the scene
fn despawn(
    scene: &mut impl Scene,
    kinds: &mut HashMap<EntityHandle, EntityKind>,
    handle: EntityHandle,
) {
    kinds.remove(&handle);
    scene.remove_entity(handle);
}

/// Breakout game state machine bound to one scene
pub struct GameController<S: Scene> {
    scene: S,
    settings: Settings,
    state: RoundState,
    /// Role of every entity this controller created and has not removed
    kinds: HashMap<EntityHandle, EntityKind>,
    ball: EntityHandle,
    paddle: EntityHandle,
    paddle_pos: Vec2,
    bricks: BrickField,
    lose_zone: EntityHandle,
    walls: EntityHandle,
    labels: Labels,
    starfield: Option<Starfield>,
    events: Vec<GameEvent>,
}

impl<S: Scene> GameController<S> {
    /// Attach to `scene`: build the static playfield and the first round.
    ///
    /// Fails when the settings are out of range or the playfield cannot
    /// hold a single brick.
    pub fn new(mut scene: S, settings: Settings) -> Result<Self, ControllerError> {
        settings.validate()?;

        let frame = scene.frame();
        if !(frame.width() > 0.0 && frame.height() > 0.0) {
            return Err(ControllerError::InvalidPlayfield {
                width: frame.width(),
                height: frame.height(),
            });
        }
        if brick_count(&frame, settings.brick_stride) == 0 {
            return Err(ControllerError::NoBricks {
                width: frame.width(),
            });
        }
        fit_offsets(&frame, &settings)?;

        scene.set_gravity(Vec2::ZERO);

        let mut kinds = HashMap::new();

        let starfield = if settings.starfield {
            let field = Starfield::spawn(&mut scene, &settings.star_texture, settings.star_scroll_secs);
            for &tile in field.tiles() {
                kinds.insert(tile, EntityKind::Background);
            }
            Some(field)
        } else {
            None
        };

        let walls = spawn(
            &mut scene,
            &mut kinds,
            &EntitySpec {
                shape: Shape::EdgeLoop { size: frame.size },
                position: frame.center,
                z: 0.0,
                body: Some(BodySpec::fixed()),
            },
            EntityKind::Walls,
        );

        let lose_zone = spawn(
            &mut scene,
            &mut kinds,
            &EntitySpec {
                shape: Shape::Rect {
                    size: Vec2::new(frame.width(), settings.lose_zone_height),
                },
                position: Vec2::new(
                    frame.center.x,
                    frame.min_y() + settings.lose_zone_height / 2.0,
                ),
                z: 0.0,
                body: Some(BodySpec::fixed()),
            },
            EntityKind::LoseZone,
        );

        let labels = Labels {
            start: scene.create_label(&LabelSpec {
                text: settings.start_text.clone(),
                position: frame.center - Vec2::new(0.0, START_LABEL_DROP),
                font_size: settings.title_font_size,
                alpha: 1.0,
            }),
            lives: scene.create_label(&LabelSpec {
                text: String::new(),
                position: Vec2::new(frame.min_x(), frame.min_y()) + HUD_INSET,
                font_size: settings.hud_font_size,
                alpha: 1.0,
            }),
            score: scene.create_label(&LabelSpec {
                text: String::new(),
                position: Vec2::new(frame.max_x() - HUD_INSET.x, frame.min_y() + HUD_INSET.y),
                font_size: settings.hud_font_size,
                alpha: 1.0,
            }),
        };

        let spec = ball_spec(&scene, &settings);
        let ball = spawn(&mut scene, &mut kinds, &spec, EntityKind::Ball);
        let paddle_pos = paddle_home(&scene, &settings);
        let paddle = spawn(
            &mut scene,
            &mut kinds,
            &paddle_spec(paddle_pos, &settings),
            EntityKind::Paddle,
        );

        let mut controller = Self {
            scene,
            state: RoundState::new(settings.starting_lives),
            settings,
            kinds,
            ball,
            paddle,
            paddle_pos,
            bricks: BrickField::new(),
            lose_zone,
            walls,
            labels,
            starfield,
            events: Vec::new(),
        };
        controller.rebuild_bricks();
        controller.update_labels();

        log::info!(
            "Scene attached: {}x{} playfield, {} bricks",
            frame.width(),
            frame.height(),
            controller.bricks.total()
        );
        Ok(controller)
    }

    // === Host events ===

    /// Pointer pressed or moved at `pos` (scene coordinates)
    pub fn on_pointer(&mut self, phase: PointerPhase, pos: Vec2) {
        if self.state.phase.is_playing() {
            self.move_paddle(pos.x);
        } else if phase == PointerPhase::Down && self.scene.label_contains(self.labels.start, pos) {
            self.start_game();
        }
    }

    /// Several simultaneous touches; each is applied in order
    pub fn on_pointer_batch(&mut self, phase: PointerPhase, positions: &[Vec2]) {
        for &pos in positions {
            self.on_pointer(phase, pos);
        }
    }

    /// Two bodies began touching.
    ///
    /// Contacts naming a handle this controller no longer owns belong to an
    /// entity replaced by a reset and are dropped whole.
    pub fn on_contact(&mut self, a: EntityHandle, b: EntityHandle) {
        if !self.state.phase.is_playing() {
            return;
        }
        let (Some(kind_a), Some(kind_b)) = (self.kind_of(a), self.kind_of(b)) else {
            log::debug!("Ignoring contact with stale entity: {:?} / {:?}", a, b);
            return;
        };

        // Re-resolve per handle: clearing the last brick rebuilds the field
        for (handle, partner) in [(a, kind_b), (b, kind_a)] {
            if !self.state.phase.is_playing() {
                break;
            }
            // only the ball breaks bricks; the lose zone pairing is the rare overlap case
            if !matches!(partner, EntityKind::Ball | EntityKind::LoseZone) {
                continue;
            }
            if let Some(EntityKind::Brick(slot)) = self.kind_of(handle) {
                self.clear_brick(slot);
            }
        }

        let hit_lose_zone = kind_a == EntityKind::LoseZone || kind_b == EntityKind::LoseZone;
        if hit_lose_zone && self.state.phase.is_playing() {
            self.lose_ball();
        }
    }

    /// Advance time-based presentation (background scroll)
    pub fn advance(&mut self, dt: f32) {
        if let Some(starfield) = &mut self.starfield {
            starfield.advance(&mut self.scene, dt);
        }
    }

    // === Transitions ===

    /// Begin a new game from `Idle` or `GameOver`
    pub fn start_game(&mut self) {
        self.state = RoundState {
            score: 0,
            lives: self.settings.starting_lives,
            phase: GamePhase::Playing,
        };
        self.scene.set_alpha(self.labels.start, 0.0);
        self.update_labels();
        self.launch_ball();

        log::info!("Game started with {} lives", self.state.lives);
        self.events.push(GameEvent::GameStarted {
            lives: self.state.lives,
        });
    }

    fn clear_brick(&mut self, slot: usize) {
        let Some(handle) = self.bricks.remove(slot) else {
            return;
        };
        despawn(&mut self.scene, &mut self.kinds, handle);
        self.state.score += 1;
        self.update_labels();

        log::debug!(
            "Brick {} cleared: score {}, {} remaining",
            slot,
            self.state.score,
            self.bricks.remaining()
        );
        self.events.push(GameEvent::BrickCleared {
            slot,
            score: self.state.score,
            remaining: self.bricks.remaining(),
        });

        if self.bricks.is_cleared() {
            self.game_over(Outcome::Win);
        }
    }

    fn lose_ball(&mut self) {
        let lives = self.state.lose_life();
        if lives == 0 {
            self.game_over(Outcome::Lose);
            return;
        }

        log::debug!("Ball lost, {} lives left", lives);
        self.events.push(GameEvent::RoundLost { lives });
        self.state.score = 0;
        self.reset_round();
        self.launch_ball();
    }

    fn game_over(&mut self, outcome: Outcome) {
        self.state.phase = GamePhase::GameOver(outcome);

        let text = match outcome {
            Outcome::Win => &self.settings.win_text,
            Outcome::Lose => &self.settings.lose_text,
        };
        self.scene.set_text(self.labels.start, text);
        self.scene.set_alpha(self.labels.start, 1.0);
        self.reset_round();

        log::info!("Game over ({:?}) with score {}", outcome, self.state.score);
        self.events.push(GameEvent::GameOver {
            outcome,
            score: self.state.score,
        });
    }

    /// Fresh ball, paddle and bricks. The ball stays motionless.
    fn reset_round(&mut self) {
        despawn(&mut self.scene, &mut self.kinds, self.ball);
        let spec = ball_spec(&self.scene, &self.settings);
        self.ball = spawn(&mut self.scene, &mut self.kinds, &spec, EntityKind::Ball);

        self.paddle_pos = paddle_home(&self.scene, &self.settings);
        if self.settings.recreate_paddle_each_round {
            despawn(&mut self.scene, &mut self.kinds, self.paddle);
            let spec = paddle_spec(self.paddle_pos, &self.settings);
            self.paddle = spawn(&mut self.scene, &mut self.kinds, &spec, EntityKind::Paddle);
        } else {
            self.scene.set_position(self.paddle, self.paddle_pos);
        }

        self.rebuild_bricks();
        self.update_labels();
    }

    fn rebuild_bricks(&mut self) {
        for handle in self.bricks.clear() {
            despawn(&mut self.scene, &mut self.kinds, handle);
        }

        let frame = self.scene.frame();
        let size = self.settings.brick_size;
        let layout = brick_layout(
            &frame,
            self.settings.brick_stride,
            size.x,
            self.settings.brick_top_offset,
        );

        let mut bricks = Vec::with_capacity(layout.len());
        for (slot, pos) in layout.into_iter().enumerate() {
            let spec = EntitySpec {
                shape: Shape::Rect { size },
                position: pos,
                z: 0.0,
                body: Some(BodySpec::fixed()),
            };
            bricks.push(spawn(&mut self.scene, &mut self.kinds, &spec, EntityKind::Brick(slot)));
        }
        self.bricks.rebuild(bricks);
    }

    fn launch_ball(&mut self) {
        self.scene.set_body_dynamic(self.ball, true);
        self.scene.apply_impulse(self.ball, self.settings.launch_impulse);
    }

    fn move_paddle(&mut self, x: f32) {
        log::trace!("Paddle x -> {}", x);
        self.paddle_pos.x = x;
        self.scene.set_position(self.paddle, self.paddle_pos);
    }

    fn update_labels(&mut self) {
        self.scene
            .set_text(self.labels.score, &format!("Score: {}", self.state.score));
        self.scene
            .set_text(self.labels.lives, &format!("Lives: {}", self.state.lives));
    }

    // === Queries ===

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_playing(&self) -> bool {
        self.state.phase.is_playing()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn round_state(&self) -> RoundState {
        self.state
    }

    pub fn total_bricks(&self) -> usize {
        self.bricks.total()
    }

    pub fn removed_bricks(&self) -> usize {
        self.bricks.removed()
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.remaining()
    }

    pub fn ball(&self) -> EntityHandle {
        self.ball
    }

    pub fn paddle(&self) -> EntityHandle {
        self.paddle
    }

    pub fn paddle_position(&self) -> Vec2 {
        self.paddle_pos
    }

    pub fn lose_zone(&self) -> EntityHandle {
        self.lose_zone
    }

    pub fn walls(&self) -> EntityHandle {
        self.walls
    }

    /// Handle of the live brick in `slot`
    pub fn brick_handle(&self, slot: usize) -> Option<EntityHandle> {
        self.bricks.get(slot)
    }

    pub fn start_label(&self) -> LabelHandle {
        self.labels.start
    }

    pub fn score_label(&self) -> LabelHandle {
        self.labels.score
    }

    pub fn lives_label(&self) -> LabelHandle {
        self.labels.lives
    }

    pub fn starfield(&self) -> Option<&Starfield> {
        self.starfield.as_ref()
    }

    /// Role of an entity this controller currently owns
    pub fn kind_of(&self, handle: EntityHandle) -> Option<EntityKind> {
        self.kinds.get(&handle).copied()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Take queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn into_scene(self) -> S {
        self.scene
    }
}

/// Offsets measured from the frame edges must land inside the frame
fn fit_offsets(frame: &Rect, settings: &Settings) -> Result<(), ControllerError> {
    let outside = |field| {
        Err(ControllerError::InvalidSettings {
            field,
            reason: "must lie inside the playfield",
        })
    };

    if settings.brick_top_offset as f32 >= frame.height() {
        return outside("brick_top_offset");
    }
    if settings.paddle_offset >= frame.height() {
        return outside("paddle_offset");
    }
    if settings.lose_zone_height > frame.height() {
        return outside("lose_zone_height");
    }
    Ok(())
}

fn ball_spec(scene: &impl Scene, settings: &Settings) -> EntitySpec {
    EntitySpec {
        shape: Shape::Circle {
            radius: settings.ball_radius,
        },
        position: scene.frame().center,
        z: 0.0,
        body: Some(BodySpec::ball()),
    }
}

fn paddle_home(scene: &impl Scene, settings: &Settings) -> Vec2 {
    let frame = scene.frame();
    Vec2::new(frame.center.x, frame.min_y() + settings.paddle_offset)
}

fn paddle_spec(pos: Vec2, settings: &Settings) -> EntitySpec {
    EntitySpec {
        shape: Shape::Rect {
            size: settings.paddle_size,
        },
        position: pos,
        z: 0.0,
        body: Some(BodySpec::fixed()),
    }
}
