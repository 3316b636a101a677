//! Key mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapInput {
    /// Space, Enter or Up.
    Tap,
    /// Esc, q or Ctrl+C.
    Quit,
    /// Any other key.
    Other,
}

pub fn map_key(key: KeyEvent) -> TapInput {
    // Key releases and repeats would double-flap on terminals that report them.
    if key.kind != KeyEventKind::Press {
        return TapInput::Other;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => TapInput::Tap,
        KeyCode::Esc | KeyCode::Char('q') => TapInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => TapInput::Quit,
        _ => TapInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flap_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), TapInput::Tap);
        assert_eq!(map_key(press(KeyCode::Enter)), TapInput::Tap);
        assert_eq!(map_key(press(KeyCode::Up)), TapInput::Tap);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), TapInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), TapInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            TapInput::Quit
        );
        assert_eq!(map_key(press(KeyCode::Char('c'))), TapInput::Other);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), TapInput::Other);
    }
}
