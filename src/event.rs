//! Keyboard event handling.
//!
//! This module maps keyboard input to dashboard actions:
//! - `Tab` / `l` / `Right`: next tab
//! - `Shift+Tab` / `h` / `Left`: previous tab
//! - `1`..`6`: jump to a tab
//! - `j` / `k` / `Down` / `Up`: scroll one line
//! - `PageDown` / `PageUp`, `Ctrl+D` / `Ctrl+U`: scroll one page
//! - `+` / `-`: GC window size
//! - `[` / `]`: minimum restriction-site length
//! - `{` / `}`: maximum restriction-site length
//! - `p`: toggle literal / reverse-complement palindromes
//! - `:`: enter command mode
//!   - `:q` or `:quit`: quit the application
//!   - `:h` or `:help`: show help
//!   - `:w <n>`: set GC window size
//!   - `:<n>`: go to tab n

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::model::{AppMode, AppState, Tab};

/// Lines scrolled by a page movement when the panel has no visible rows.
pub const DEFAULT_PAGE_LINES: usize = 10;

/// Lines moved by a page scroll for a panel of `visible_rows` rows.
pub fn page_size(visible_rows: usize) -> usize {
    if visible_rows == 0 {
        DEFAULT_PAGE_LINES
    } else {
        visible_rows
    }
}

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Select next tab
    NextTab,
    /// Select previous tab
    PreviousTab,
    /// Jump to a tab by index
    SelectTab(usize),
    /// Scroll one line down
    ScrollDown,
    /// Scroll one line up
    ScrollUp,
    /// Scroll one page down
    PageDown,
    /// Scroll one page up
    PageUp,
    /// Increase GC window size
    IncreaseWindow,
    /// Decrease GC window size
    DecreaseWindow,
    /// Decrease minimum restriction-site length
    MinSiteDown,
    /// Increase minimum restriction-site length
    MinSiteUp,
    /// Decrease maximum restriction-site length
    MaxSiteDown,
    /// Increase maximum restriction-site length
    MaxSiteUp,
    /// Toggle palindrome definition
    TogglePalindromeMode,
    /// Enter command mode
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    /// Execute current command
    ExecuteCommand,
    /// Cancel command mode
    CancelCommand,
    /// Backspace in command mode
    CommandBackspace,
    /// Dismiss the help overlay
    DismissHelp,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, mode, show_help),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode, show_help: bool) -> Action {
    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    match mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Command(_) => handle_command_mode(key),
    }
}

/// Handles key events in normal mode.
fn handle_normal_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('d') => Action::PageDown,
            KeyCode::Char('u') => Action::PageUp,
            _ => Action::None,
        };
    }

    match key.code {
        // Tabs
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Action::NextTab,
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Action::PreviousTab,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < Tab::ALL.len() {
                Action::SelectTab(index)
            } else {
                Action::None
            }
        }

        // Scrolling
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,

        // Parameters
        KeyCode::Char('+') | KeyCode::Char('=') => Action::IncreaseWindow,
        KeyCode::Char('-') => Action::DecreaseWindow,
        KeyCode::Char('[') => Action::MinSiteDown,
        KeyCode::Char(']') => Action::MinSiteUp,
        KeyCode::Char('{') => Action::MaxSiteDown,
        KeyCode::Char('}') => Action::MaxSiteUp,
        KeyCode::Char('p') => Action::TogglePalindromeMode,

        // Command mode
        KeyCode::Char(':') => Action::EnterCommandMode,

        _ => Action::None,
    }
}

/// Handles key events in command mode.
fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// `page_lines` is the height of the visible panel, used for page scrolling.
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action, page_lines: usize) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::NextTab => {
            state.next_tab();
        }
        Action::PreviousTab => {
            state.previous_tab();
        }
        Action::SelectTab(index) => {
            if let Some(tab) = Tab::from_index(index) {
                state.select_tab(tab);
            }
        }
        Action::ScrollDown => {
            state.scroll_down(1);
        }
        Action::ScrollUp => {
            state.scroll_up(1);
        }
        Action::PageDown => {
            state.scroll_down(page_lines.max(1));
        }
        Action::PageUp => {
            state.scroll_up(page_lines.max(1));
        }
        Action::IncreaseWindow => {
            state.increase_window();
        }
        Action::DecreaseWindow => {
            state.decrease_window();
        }
        Action::MinSiteDown => {
            state.adjust_min_site(false);
        }
        Action::MinSiteUp => {
            state.adjust_min_site(true);
        }
        Action::MaxSiteDown => {
            state.adjust_max_site(false);
        }
        Action::MaxSiteUp => {
            state.adjust_max_site(true);
        }
        Action::TogglePalindromeMode => {
            state.toggle_palindrome_mode();
        }
        Action::EnterCommandMode => {
            state.enter_command_mode();
        }
        Action::CommandChar(c) => {
            state.command_input(c);
        }
        Action::ExecuteCommand => {
            state.execute_command();
        }
        Action::CancelCommand => {
            state.cancel_command();
        }
        Action::CommandBackspace => {
            state.command_backspace();
        }
        Action::DismissHelp => {
            state.dismiss_help();
        }
        Action::Resize(_, _) => {
            // Resize is handled in the main loop with actual terminal dimensions
        }
    }

    !state.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisSettings;
    use crate::model::{LoadedSequence, SnpStatus};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_navigation() {
        let mode = AppMode::Normal;
        assert_eq!(handle_key_event(key(KeyCode::Tab), &mode, false), Action::NextTab);
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &mode, false), Action::NextTab);
        assert_eq!(handle_key_event(key(KeyCode::BackTab), &mode, false), Action::PreviousTab);
        assert_eq!(handle_key_event(key(KeyCode::Left), &mode, false), Action::PreviousTab);
    }

    #[test]
    fn test_tab_digits() {
        let mode = AppMode::Normal;
        assert_eq!(handle_key_event(key(KeyCode::Char('1')), &mode, false), Action::SelectTab(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('6')), &mode, false), Action::SelectTab(5));
        assert_eq!(handle_key_event(key(KeyCode::Char('7')), &mode, false), Action::None);
    }

    #[test]
    fn test_parameter_keys() {
        let mode = AppMode::Normal;
        assert_eq!(handle_key_event(key(KeyCode::Char('+')), &mode, false), Action::IncreaseWindow);
        assert_eq!(handle_key_event(key(KeyCode::Char('-')), &mode, false), Action::DecreaseWindow);
        assert_eq!(handle_key_event(key(KeyCode::Char('[')), &mode, false), Action::MinSiteDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('}')), &mode, false), Action::MaxSiteUp);
        assert_eq!(handle_key_event(key(KeyCode::Char('p')), &mode, false), Action::TogglePalindromeMode);
    }

    #[test]
    fn test_ctrl_keys() {
        let mode = AppMode::Normal;
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl('c'), &mode, false), Action::Quit);
        assert_eq!(handle_key_event(ctrl('d'), &mode, false), Action::PageDown);
        assert_eq!(handle_key_event(ctrl('u'), &mode, false), Action::PageUp);
    }

    #[test]
    fn test_command_mode_input() {
        let mode = AppMode::Command(String::new());
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mode, false), Action::CommandChar('q'));
        // Parameter keys are plain text while typing a command
        assert_eq!(handle_key_event(key(KeyCode::Char('+')), &mode, false), Action::CommandChar('+'));
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::ExecuteCommand);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::CancelCommand);
        assert_eq!(handle_key_event(key(KeyCode::Backspace), &mode, false), Action::CommandBackspace);
    }

    #[test]
    fn test_dismiss_help() {
        let mode = AppMode::Normal;
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &mode, true), Action::DismissHelp);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, true), Action::DismissHelp);
    }

    #[test]
    fn test_resize_event() {
        let mode = AppMode::Normal;
        assert_eq!(handle_event(Event::Resize(80, 24), &mode, false), Action::Resize(80, 24));
    }

    #[test]
    fn test_apply_actions() {
        let mut state = AppState::new(
            LoadedSequence::new("test", "ACGTACGTACGT"),
            AnalysisSettings::default(),
            SnpStatus::NotRequested,
        )
        .unwrap();

        apply_action(&mut state, Action::SelectTab(3), DEFAULT_PAGE_LINES);
        assert_eq!(state.tab, Tab::GcContent);

        apply_action(&mut state, Action::IncreaseWindow, DEFAULT_PAGE_LINES);
        assert_eq!(state.settings.window_size, 6);

        state.set_scroll_limit(25);
        apply_action(&mut state, Action::PageDown, 20);
        assert_eq!(state.scroll, 20);
        apply_action(&mut state, Action::PageDown, 20);
        assert_eq!(state.scroll, 25);

        assert!(!apply_action(&mut state, Action::Quit, DEFAULT_PAGE_LINES));
    }

    #[test]
    fn test_page_size_falls_back_without_rows() {
        assert_eq!(page_size(0), DEFAULT_PAGE_LINES);
        assert_eq!(page_size(1), 1);
        assert_eq!(page_size(43), 43);
    }
}
