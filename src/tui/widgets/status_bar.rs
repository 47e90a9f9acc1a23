// Status bar widget: app name, year mode, dataset health.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// One-line summary of the loaded data.
pub fn summary(state: &ViewState) -> String {
    let count = |d: &Option<crate::data::record::Dataset>| match d {
        Some(dataset) => dataset.len().to_string(),
        None => "!".to_string(),
    };
    let mut text = format!(
        " FA Compare | Year: {} | hitters {} | pitchers {} | contracts {}",
        state.year.label(),
        count(&state.data.hitters),
        count(&state.data.pitchers),
        state.data.contracts.len(),
    );
    if !state.data.errors.is_empty() {
        text.push_str(&format!(" | {} dataset(s) failed", state.data.errors.len()));
    }
    text
}

/// Render the status bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let style = if state.data.errors.is_empty() {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    };
    let paragraph =
        Paragraph::new(Line::from(vec![Span::styled(summary(state), style)])).style(style);
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
