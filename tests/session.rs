use breakout::script::{self, ScriptEvent};
use breakout::sim::EntityKind;
use breakout::{GameController, GameEvent, GamePhase, HeadlessScene, Outcome, PointerPhase, Settings};
use glam::Vec2;

fn controller(width: f32) -> GameController<HeadlessScene> {
    GameController::new(HeadlessScene::new(width, 800.0), Settings::default())
        .expect("valid playfield")
}

fn start(c: &mut GameController<HeadlessScene>) {
    let pos = c.scene().label(c.start_label()).expect("start label").position;
    c.on_pointer(PointerPhase::Down, pos);
}

#[test]
fn ten_bricks_cleared_wins() {
    let mut c = controller(550.0);
    assert_eq!(c.total_bricks(), 10);
    start(&mut c);

    for slot in 0..9 {
        let brick = c.brick_handle(slot).expect("live brick");
        c.on_contact(c.ball(), brick);
    }
    assert_eq!(c.phase(), GamePhase::Playing);
    assert_eq!(c.score(), 9);
    assert_eq!(c.bricks_remaining(), 1);

    let last = c.brick_handle(9).expect("live brick");
    c.on_contact(last, c.ball());
    assert_eq!(c.phase(), GamePhase::GameOver(Outcome::Win));
    assert_eq!(c.score(), 10);
}

#[test]
fn three_lost_balls_lose() {
    let mut c = controller(550.0);
    start(&mut c);
    for _ in 0..3 {
        c.on_contact(c.ball(), c.lose_zone());
    }
    assert_eq!(c.phase(), GamePhase::GameOver(Outcome::Lose));
    assert_eq!(c.score(), 0);
    assert!(!c.is_playing());
}

#[test]
fn wider_playfield_centers_more_bricks() {
    let c = controller(750.0);
    assert_eq!(c.total_bricks(), 13);

    let xs: Vec<f32> = (0..13)
        .filter_map(|slot| c.brick_handle(slot))
        .filter_map(|h| c.scene().position(h))
        .map(|p| p.x)
        .collect();
    assert_eq!(xs.len(), 13);
    assert!(xs.windows(2).all(|w| w[1] - w[0] == 55.0));
    assert!(matches!(c.kind_of(c.brick_handle(12).expect("brick")), Some(EntityKind::Brick(12))));
}

#[test]
fn sample_session_script() {
    let script = script::parse(include_str!("../demos/session.json")).expect("valid script");
    let mut c = controller(550.0);
    let report = script::run(&mut c, &script).expect("session runs");

    assert_eq!(report.phase, GamePhase::GameOver(Outcome::Lose));
    assert_eq!(report.lives, 0);
    assert_eq!(report.score, 0);
    assert_eq!(report.bricks_remaining, 10);
    assert_eq!(report.events.len(), 7);
    assert_eq!(report.events[0], GameEvent::GameStarted { lives: 3 });
    assert_eq!(report.events[3], GameEvent::RoundLost { lives: 2 });
}

#[test]
fn paddle_follows_touches_only_while_playing() {
    let mut c = controller(550.0);
    let home = c.paddle_position();

    let script = [
        ScriptEvent::Pointer {
            phase: PointerPhase::Moved,
            x: 100.0,
            y: -300.0,
        },
        ScriptEvent::TapStart,
        ScriptEvent::Pointer {
            phase: PointerPhase::Moved,
            x: -120.0,
            y: -300.0,
        },
    ];
    script::run(&mut c, &script[..1]).expect("runs");
    assert_eq!(c.paddle_position(), home);

    script::run(&mut c, &script[1..]).expect("runs");
    assert_eq!(c.paddle_position(), Vec2::new(-120.0, home.y));
}
