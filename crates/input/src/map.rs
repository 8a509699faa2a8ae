//! Mapping from terminal events to input events.

use crate::types::InputEvent;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map any terminal event. Releases, repeats and unbound keys yield `None`.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press => {
                if should_quit(key) {
                    Some(InputEvent::Quit)
                } else {
                    handle_key_event(key)
                }
            }
            KeyEventKind::Repeat | KeyEventKind::Release => None,
        },
        Event::Mouse(mouse) => handle_mouse_event(mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

/// Map keyboard input to the activate event.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Enter
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(InputEvent::Activate),
        _ => None,
    }
}

/// A left click anywhere activates.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Activate),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn click(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_activate_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Char('w'),
            KeyCode::Char('K'),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(InputEvent::Activate),
                "{code:?}"
            );
        }
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_map_event_ignores_release_and_repeat() {
        let press = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(map_event(Event::Key(press)), Some(InputEvent::Activate));

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(Event::Key(release)), None);

        let repeat = KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        );
        assert_eq!(map_event(Event::Key(repeat)), None);
    }

    #[test]
    fn test_map_event_quit_and_resize() {
        assert_eq!(
            map_event(Event::Key(KeyEvent::from(KeyCode::Char('q')))),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_event(Event::Resize(120, 40)),
            Some(InputEvent::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn test_left_click_activates() {
        assert_eq!(
            map_event(click(MouseEventKind::Down(MouseButton::Left))),
            Some(InputEvent::Activate)
        );
        assert_eq!(map_event(click(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(map_event(click(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(map_event(click(MouseEventKind::Moved)), None);
    }
}
