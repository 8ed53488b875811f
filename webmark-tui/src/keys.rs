use crossterm::event::{KeyCode, KeyEvent};
use smol_str::{SmolStr, ToSmolStr};

/// Centrally defined key actions for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Logs,
    Reload,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GotoTop,
    GotoBottom,
    Select,
    Back,
}

// ── Key code constants ───────────────────────────────────────────

pub const KEY_QUIT: KeyCode = KeyCode::Char('q');
pub const KEY_LOGS: KeyCode = KeyCode::Char('L');
pub const KEY_RELOAD: KeyCode = KeyCode::Char('o');
pub const KEY_SELECT: KeyCode = KeyCode::Enter;
pub const KEY_BACK: KeyCode = KeyCode::Esc;
pub const KEY_BACK_ALT: KeyCode = KeyCode::Backspace;
pub const KEY_UP: KeyCode = KeyCode::Up;
pub const KEY_UP_ALT: KeyCode = KeyCode::Char('k');
pub const KEY_DOWN: KeyCode = KeyCode::Down;
pub const KEY_DOWN_ALT: KeyCode = KeyCode::Char('j');
pub const KEY_PAGE_UP: KeyCode = KeyCode::PageUp;
pub const KEY_PAGE_DOWN: KeyCode = KeyCode::PageDown;
pub const KEY_GOTO_TOP: KeyCode = KeyCode::Home;
pub const KEY_GOTO_BOTTOM: KeyCode = KeyCode::End;
pub const KEY_CONFIRM_YES: KeyCode = KeyCode::Char('y');
pub const KEY_CONFIRM_NO: KeyCode = KeyCode::Char('n');

impl Action {
    /// Label shown in the help bar. Returns `None` for actions that
    /// shouldn't appear (plain list navigation).
    pub fn help_label(&self) -> Option<(SmolStr, SmolStr)> {
        let (key, desc) = match self {
            Action::Quit => (KEY_QUIT, "quit"),
            Action::Logs => (KEY_LOGS, "logs"),
            Action::Reload => (KEY_RELOAD, "open"),
            Action::Select => (KEY_SELECT, "select"),
            Action::Back => (KEY_BACK, "back"),
            _ => return None,
        };
        Some((key_label(key), desc.into()))
    }
}

fn key_label(key: KeyCode) -> SmolStr {
    match key {
        KeyCode::Char(c) => c.to_smolstr(),
        other => other.to_smolstr().to_lowercase().into(),
    }
}

fn list_navigation(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_UP | KEY_UP_ALT => Some(Action::MoveUp),
        KEY_DOWN | KEY_DOWN_ALT => Some(Action::MoveDown),
        KEY_PAGE_UP => Some(Action::PageUp),
        KEY_PAGE_DOWN => Some(Action::PageDown),
        KEY_GOTO_TOP => Some(Action::GotoTop),
        KEY_GOTO_BOTTOM => Some(Action::GotoBottom),
        _ => None,
    }
}

/// Resolve a key event into an action on the artist or song list.
pub fn browse_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_QUIT => Some(Action::Quit),
        KEY_LOGS => Some(Action::Logs),
        KEY_SELECT => Some(Action::Select),
        KEY_BACK | KEY_BACK_ALT => Some(Action::Back),
        _ => list_navigation(key),
    }
}

/// Resolve a key event into an action on the web view.
pub fn web_view_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_QUIT => Some(Action::Quit),
        KEY_LOGS => Some(Action::Logs),
        KEY_RELOAD | KEY_SELECT => Some(Action::Reload),
        KEY_BACK | KEY_BACK_ALT => Some(Action::Back),
        _ => None,
    }
}

/// Resolve a key event into an action in logs context.
pub fn logs_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK | KEY_BACK_ALT | KEY_LOGS | KEY_QUIT => Some(Action::Back),
        _ => list_navigation(key),
    }
}

/// Resolve a key event into an action in quit-confirmation context.
/// `y` / Enter confirms; any other key cancels.
pub fn quit_confirm_action(key: &KeyEvent) -> Action {
    match key.code {
        KEY_CONFIRM_YES | KEY_SELECT => Action::Select,
        _ => Action::Back,
    }
}

/// Ordered list of actions to show in the artist list help bar.
pub const ARTISTS_HELP: &[Action] = &[Action::Quit, Action::Select, Action::Logs];

/// Ordered list of actions to show in the song list help bar.
pub const SONGS_HELP: &[Action] = &[Action::Quit, Action::Back, Action::Select, Action::Logs];

/// Ordered list of actions to show in the web view help bar.
pub const WEB_VIEW_HELP: &[Action] = &[Action::Quit, Action::Back, Action::Reload, Action::Logs];

/// Ordered list of actions to show in the logs help bar.
pub const LOGS_HELP: &[Action] = &[Action::Back];

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_browse_keys() {
        assert_eq!(browse_action(&key(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(browse_action(&key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(browse_action(&key(KeyCode::Backspace)), Some(Action::Back));
        assert_eq!(browse_action(&key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(browse_action(&key(KeyCode::End)), Some(Action::GotoBottom));
        assert_eq!(browse_action(&key(KeyCode::Char('o'))), None);
    }

    #[test]
    fn test_web_view_keys() {
        assert_eq!(web_view_action(&key(KeyCode::Char('o'))), Some(Action::Reload));
        assert_eq!(web_view_action(&key(KeyCode::Enter)), Some(Action::Reload));
        assert_eq!(web_view_action(&key(KeyCode::Down)), None);
    }

    #[test]
    fn test_logs_keys() {
        assert_eq!(logs_action(&key(KeyCode::Char('L'))), Some(Action::Back));
        assert_eq!(logs_action(&key(KeyCode::Char('q'))), Some(Action::Back));
        assert_eq!(logs_action(&key(KeyCode::PageUp)), Some(Action::PageUp));
    }

    #[test]
    fn test_quit_confirm() {
        assert_eq!(quit_confirm_action(&key(KeyCode::Char('y'))), Action::Select);
        assert_eq!(quit_confirm_action(&key(KeyCode::Enter)), Action::Select);
        assert_eq!(quit_confirm_action(&key(KeyCode::Char('n'))), Action::Back);
    }

    #[test]
    fn test_help_labels() {
        assert_eq!(
            Action::Logs.help_label(),
            Some(("L".into(), "logs".into()))
        );
        let (key, desc) = Action::Select.help_label().unwrap();
        assert_eq!(key, key.to_lowercase());
        assert_eq!(desc, "select");
        assert_eq!(Action::MoveUp.help_label(), None);
    }
}
