// Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::{TabId, ViewState};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    /// Re-resolve every dataset (year toggled or explicit refresh).
    Reload,
    Quit,
}

/// Apply one key press to the view state.
pub fn handle_key(key: KeyEvent, state: &mut ViewState) -> InputOutcome {
    // Ctrl+C quits from anywhere.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputOutcome::Quit;
    }

    match key.code {
        KeyCode::Char('q') => InputOutcome::Quit,

        KeyCode::Char('1') => switch_tab(state, TabId::Home),
        KeyCode::Char('2') => switch_tab(state, TabId::Hitters),
        KeyCode::Char('3') => switch_tab(state, TabId::Pitchers),
        KeyCode::Char('4') => switch_tab(state, TabId::Projections),

        KeyCode::Tab => {
            state.focus = state.focus.next();
            InputOutcome::Continue
        }

        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(selector) = state.focused_selector_mut() {
                selector.move_up();
            }
            InputOutcome::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(selector) = state.focused_selector_mut() {
                selector.move_down();
            }
            InputOutcome::Continue
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(selector) = state.focused_selector_mut() {
                selector.toggle_current();
            }
            InputOutcome::Continue
        }

        KeyCode::Char('y') => {
            state.year = state.year.toggled();
            InputOutcome::Reload
        }
        KeyCode::Char('r') => InputOutcome::Reload,

        KeyCode::Char('c') => {
            if let Some(tab) = state.active_compare_mut() {
                tab.cycle_chart();
            }
            InputOutcome::Continue
        }

        _ => InputOutcome::Continue,
    }
}

fn switch_tab(state: &mut ViewState, tab: TabId) -> InputOutcome {
    state.active_tab = tab;
    InputOutcome::Continue
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
