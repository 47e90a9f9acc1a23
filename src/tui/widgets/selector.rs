// Multi-select list widget: checkbox-style options with a cursor.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::tui::SelectorState;

/// Checkbox marker for an option row.
pub fn marker(selected: bool) -> &'static str {
    if selected {
        "[x] "
    } else {
        "[ ] "
    }
}

/// Title with selection count, e.g. `Positions (2/9)`.
pub fn title_with_count(title: &str, state: &SelectorState) -> String {
    format!("{} ({}/{})", title, state.selected.len(), state.options.len())
}

/// Render the selector list into the given area. The focused panel gets a
/// highlighted border so the user can tell where cursor keys land.
pub fn render(frame: &mut Frame, area: Rect, title: &str, state: &SelectorState, focused: bool) {
    let items: Vec<ListItem> = state
        .options
        .iter()
        .map(|option| {
            let text = format!("{}{}", marker(state.is_selected(option)), option);
            let style = if state.is_selected(option) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title_with_count(title, state)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    if !state.options.is_empty() {
        list_state.select(Some(state.cursor));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
