use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Command};
use crate::sort::Algorithm;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map a key press to a command.
///
/// `q` selects quick sort, so quitting is `Esc` or `Ctrl-C`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let command = match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,

        KeyCode::Char('r') => Command::Reset,
        KeyCode::Char(' ') => Command::StartSort,

        // Direction
        KeyCode::Char('a') => Command::SetAscending,
        KeyCode::Char('d') => Command::SetDescending,

        // Algorithm selection
        KeyCode::Char('b') => Command::SelectAlgorithm(Algorithm::Bubble),
        KeyCode::Char('i') => Command::SelectAlgorithm(Algorithm::Insertion),
        KeyCode::Char('s') => Command::SelectAlgorithm(Algorithm::Selection),
        KeyCode::Char('m') => Command::SelectAlgorithm(Algorithm::Merge),
        KeyCode::Char('q') => Command::SelectAlgorithm(Algorithm::Quick),

        KeyCode::Char('?') => Command::ToggleHelp,

        _ => return None,
    };
    Some(command)
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help && key.kind == KeyEventKind::Press {
        app.show_help = false;
        return;
    }

    if let Some(command) = command_for_key(key) {
        app.apply(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::Canvas;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let settings = Settings {
            seed: Some(5),
            ..Settings::default()
        };
        App::new(&settings, Canvas::new(100, 20))
    }

    #[test]
    fn test_key_map() {
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(command_for_key(press(KeyCode::Char(' '))), Some(Command::StartSort));
        assert_eq!(command_for_key(press(KeyCode::Char('a'))), Some(Command::SetAscending));
        assert_eq!(command_for_key(press(KeyCode::Char('d'))), Some(Command::SetDescending));
        assert_eq!(
            command_for_key(press(KeyCode::Char('q'))),
            Some(Command::SelectAlgorithm(Algorithm::Quick))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('m'))),
            Some(Command::SelectAlgorithm(Algorithm::Merge))
        );
        assert_eq!(command_for_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(key), Some(Command::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for_key(key), None);
    }

    #[test]
    fn test_handle_key_event_drives_app() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('i')));
        handle_key_event(&mut app, press(KeyCode::Char('d')));
        assert_eq!(app.title(), "Insertion Sort - Descending");

        handle_key_event(&mut app, press(KeyCode::Char(' ')));
        assert!(app.is_sorting());

        // Ignored while sorting.
        handle_key_event(&mut app, press(KeyCode::Char('b')));
        assert_eq!(app.algorithm(), Algorithm::Insertion);

        handle_key_event(&mut app, press(KeyCode::Char('r')));
        assert!(!app.is_sorting());
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);

        handle_key_event(&mut app, press(KeyCode::Char('m')));
        assert!(!app.show_help);
        // The closing key is swallowed.
        assert_eq!(app.algorithm(), Algorithm::Bubble);
    }
}
