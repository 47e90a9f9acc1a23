// Bar chart widget for one selected stat.
//
// The core hands over a name -> value series; this widget only shapes it
// into ratatui bars. Bar heights are u64, so values are scaled by 100 to
// keep resolution on rate stats; the printed value is the real one.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::compare::table::StatSel;

use super::comparison::format_value;

/// Scaled bar height: two decimal places of resolution, negatives clamped
/// to a zero-height bar (the text still shows the real value).
pub fn bar_value(value: f64) -> u64 {
    (value.max(0.0) * 100.0).round() as u64
}

/// Compact bar label: the last word of the player name.
pub fn bar_label(name: &str) -> String {
    name.split_whitespace()
        .last()
        .unwrap_or(name)
        .to_string()
}

/// Render the bar chart for the given stat series.
pub fn render(frame: &mut Frame, area: Rect, stat: Option<&StatSel>, series: &[(String, f64)]) {
    let title = match stat {
        Some(stat) => stat.label(),
        None => "Chart".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if series.is_empty() {
        let placeholder = Paragraph::new("Select players and a stat to chart").block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let bars: Vec<Bar> = series
        .iter()
        .map(|(name, value)| {
            Bar::default()
                .value(bar_value(*value))
                .text_value(format_value(*value))
                .label(Line::from(bar_label(name)))
        })
        .collect();

    // Fit the bars to the available width, keeping at least one cell each.
    let count = series.len() as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(count) / count.max(1)).clamp(1, 12);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::White).bg(Color::Cyan))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
