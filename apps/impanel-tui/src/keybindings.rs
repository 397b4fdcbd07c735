//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Enter insert mode on the focused filter field
    EnterInsertMode,
    /// Enter tag selection mode on the selected card
    EnterSelectMode,
    /// Toggle help
    ToggleHelp,
    /// Move up in the results list
    MoveUp,
    /// Move down in the results list
    MoveDown,
    /// Focus the next filter field
    FocusNext,
    /// Focus the previous filter field
    FocusPrev,
    /// Apply the selected card's type badge as the type filter
    ApplyTypeBadge,
    /// Show or hide the extra filters panel
    ToggleExtra,
    /// Clear the extra filters
    ClearExtra,
    /// Clear all filters
    ClearAll,
    /// Re-run the current search
    Refresh,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('i') => Some(Action::EnterInsertMode),
        KeyCode::Char('t') => Some(Action::EnterSelectMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Char('p') => Some(Action::ApplyTypeBadge),
        KeyCode::Char('e') => Some(Action::ToggleExtra),
        KeyCode::Char('x') => Some(Action::ClearExtra),
        KeyCode::Char('C') => Some(Action::ClearAll),
        KeyCode::Char('r') => Some(Action::Refresh),
        _ => None,
    }
}
