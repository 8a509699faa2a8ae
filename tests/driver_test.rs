//! Host loop integration: input mapping, driver and rendering together

use crossterm::event::{Event, KeyCode, KeyEvent};
use rand::rngs::mock::StepRng;
use tui_flappy::core::{rng, GameConfig, GameSession, GameSnapshot, TickOutcome};
use tui_flappy::engine::{Control, Driver, FrameOutcome};
use tui_flappy::input::map_event;
use tui_flappy::term::{GameView, Viewport};
use tui_flappy::types::{InputEvent, Playfield};

fn driver() -> Driver<StepRng> {
    let session = GameSession::new(
        GameConfig::default(),
        Playfield::from_cells(80, 30),
        StepRng::new(u64::MAX, 0),
    )
    .unwrap();
    Driver::new(session)
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::from(code))
}

#[test]
fn space_below_midline_keeps_the_bird_in_the_field() {
    let mut d = driver();
    let height = d.session().playfield().height;
    for _ in 0..600 {
        if d.session().bird().y > height / 2.0 {
            let input = map_event(press(KeyCode::Char(' '))).unwrap();
            assert_eq!(d.handle(input), Control::Continue);
        }
        assert_eq!(d.on_frame(), FrameOutcome::Ticked(TickOutcome::Running));
        let bird = d.session().bird();
        assert!(bird.y >= 0.0, "bird left the top: y = {}", bird.y);
        assert!(bird.bounds().bottom() <= height);
    }
    assert_eq!(d.frames_ticked(), 600);
}

#[test]
fn flapping_through_wide_gaps_scores_and_cycles_pipes() {
    // Gap tops fall in [0, 100) and gap bottoms sit at or below 400, so a
    // bird held between 150 and 360 clears every pipe.
    let config = GameConfig {
        gap_size: 400.0,
        gap_margin: 100.0,
        ..GameConfig::default()
    };
    let session = GameSession::new(config, Playfield::new(800.0, 600.0), rng::seeded(11)).unwrap();
    let mut d = Driver::new(session);

    let mut most_pipes = 0;
    for _ in 0..2000 {
        if d.session().bird().y > 300.0 {
            d.handle(InputEvent::Activate);
        }
        assert_eq!(d.on_frame(), FrameOutcome::Ticked(TickOutcome::Running));
        let bird = d.session().bird().bounds();
        assert!(bird.y >= 0.0);
        assert!(bird.bottom() <= 600.0);
        most_pipes = most_pipes.max(d.session().pipes().len());
    }
    assert!(most_pipes > 0);
    assert!(d.session().score() > 0);
    assert_eq!(d.frames_ticked(), 2000);
}

#[test]
fn game_over_screen_then_restart_by_key() {
    let mut d = driver();
    while d.is_active() {
        d.on_frame();
    }
    assert_eq!(d.on_frame(), FrameOutcome::Halted);

    let mut snap = GameSnapshot::default();
    d.session().snapshot_into(&mut snap);
    let fb = GameView::default().render(&snap, Viewport::new(80, 30));
    assert!(fb.row_text(14).contains("Game Over!"));

    d.handle(map_event(press(KeyCode::Enter)).unwrap());
    assert!(d.is_active());
    d.session().snapshot_into(&mut snap);
    assert!(!snap.game_over());
    assert_eq!(snap.score, 0);
}

#[test]
fn terminal_resize_event_resizes_playfield() {
    let mut d = driver();
    let input = map_event(Event::Resize(120, 40)).unwrap();
    assert_eq!(
        input,
        InputEvent::Resize {
            width: 120,
            height: 40
        }
    );
    d.handle(input);
    assert_eq!(d.session().playfield(), Playfield::from_cells(120, 40));
}

#[test]
fn quit_key_stops_the_loop() {
    let mut d = driver();
    let input = map_event(press(KeyCode::Char('q'))).unwrap();
    assert_eq!(d.handle(input), Control::Quit);
}
