use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_dino::input::{action_for_key, should_quit, HeldActionTracker};
use tui_dino::types::{Action, HeldActions};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn arrow_letter_and_space_keys_map_to_actions() {
    for code in [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W'), KeyCode::Char(' ')] {
        assert_eq!(action_for_key(code), Some(Action::Jump), "{code:?}");
    }
    for code in [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')] {
        assert_eq!(action_for_key(code), Some(Action::Duck), "{code:?}");
    }
    assert_eq!(action_for_key(KeyCode::Left), None);
    assert_eq!(action_for_key(KeyCode::Char('q')), None);
}

#[test]
fn ctrl_c_and_q_quit() {
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    assert!(should_quit(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    assert!(!should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
}

#[test]
fn held_duck_without_release_events_survives_autorepeat_gap() {
    let t0 = Instant::now();
    let mut tracker = HeldActionTracker::new();
    tracker.handle_key_press(KeyCode::Down, t0);

    let duck = HeldActions::empty().with(Action::Duck);
    // Initial auto-repeat delay: no events for ~500ms, key still counts as held.
    assert_eq!(tracker.resolve(t0 + ms(80)), duck);
    assert_eq!(tracker.resolve(t0 + ms(500)), duck);
    tracker.handle_key_repeat(KeyCode::Down, t0 + ms(520));
    assert_eq!(tracker.resolve(t0 + ms(1_000)), duck);

    // Repeats stopped: the key times out.
    assert!(tracker.resolve(t0 + ms(1_200)).is_empty());
}

#[test]
fn release_events_end_hold_immediately() {
    let t0 = Instant::now();
    let mut tracker = HeldActionTracker::new();
    tracker.handle_key_press(KeyCode::Char('s'), t0);
    tracker.resolve(t0);
    tracker.handle_key_release(KeyCode::Char('S'));

    assert!(tracker.reports_releases());
    assert!(tracker.resolve(t0 + ms(10)).is_empty());

    // With releases reported, a held key never times out.
    tracker.handle_key_press(KeyCode::Down, t0 + ms(20));
    assert!(tracker.resolve(t0 + ms(5_000)).contains(Action::Duck));
}

#[test]
fn both_actions_can_be_held_at_once() {
    let t0 = Instant::now();
    let mut tracker = HeldActionTracker::new();
    tracker.handle_key_press(KeyCode::Up, t0);
    tracker.handle_key_press(KeyCode::Down, t0);

    let held = tracker.resolve(t0);
    assert!(held.contains(Action::Jump));
    assert!(held.contains(Action::Duck));
}
