// Comparison table widget: selected players x selected stats.
//
// Missing cells render as "--", keeping "absent" visibly distinct from zero.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::compare::table::ComparisonTable;
use crate::data::record::Category;

/// Format one table cell; absent values show as "--".
pub fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format_value(v),
        None => "--".to_string(),
    }
}

/// Compact numeric formatting: whole numbers plain, rate stats with enough
/// precision to distinguish batting averages.
pub fn format_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v)
    } else if v.abs() < 1.0 {
        format!("{:.3}", v)
    } else {
        format!("{:.2}", v)
    }
}

/// Column titles: name and position, then the stat columns. Labels carry the
/// category prefix only when the table mixes categories.
pub fn column_titles(table: &ComparisonTable) -> Vec<String> {
    let mixed = table
        .stats
        .windows(2)
        .any(|pair| pair[0].category != pair[1].category);
    let mut titles = vec!["Name".to_string(), "Pos".to_string()];
    for stat in &table.stats {
        titles.push(if mixed {
            stat.label()
        } else {
            stat.metric.clone()
        });
    }
    titles
}

/// Render the comparison table into the given area.
pub fn render(frame: &mut Frame, area: Rect, table: &ComparisonTable) {
    let header = Row::new(
        column_titles(table)
            .into_iter()
            .map(Cell::from)
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|row| {
            let category_style = match row.category {
                Category::Hitter => Style::default().fg(Color::Cyan),
                Category::Pitcher => Style::default().fg(Color::Magenta),
            };
            let mut cells = vec![
                Cell::from(row.name.clone()).style(category_style),
                Cell::from(if row.position.is_empty() {
                    "--".to_string()
                } else {
                    row.position.clone()
                }),
            ];
            cells.extend(row.cells.iter().map(|c| Cell::from(format_cell(*c))));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Min(18), Constraint::Length(9)];
    widths.extend(std::iter::repeat(Constraint::Length(13)).take(table.stats.len()));

    let count = table.rows.len();
    let widget = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Comparison ({count})")),
    );

    frame.render_widget(widget, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::table::{union_comparable, StatSel};
    use crate::data::record::PlayerRecord;
    use std::collections::HashMap;

    fn record(name: &str, position: &str, metrics: &[(&str, f64)]) -> PlayerRecord {
        PlayerRecord {
            name: name.into(),
            position_display: position.into(),
            positions: position.split('/').map(|p| p.to_string()).collect(),
            age: None,
            aav: None,
            metrics: metrics.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn cell_formatting() {
        assert_eq!(format_cell(None), "--");
        assert_eq!(format_cell(Some(41.0)), "41");
        assert_eq!(format_cell(Some(0.322)), "0.322");
        assert_eq!(format_cell(Some(3.41)), "3.41");
    }

    #[test]
    fn titles_prefix_only_mixed_tables() {
        let hitters = vec![record("Soto", "OF", &[("WAR", 5.2)])];
        let pitchers = vec![record("Cole", "SP", &[("ERA", 3.41)])];

        let mixed = union_comparable(
            &hitters,
            &pitchers,
            &[
                StatSel::new(Category::Hitter, "WAR"),
                StatSel::new(Category::Pitcher, "ERA"),
            ],
        );
        assert_eq!(
            column_titles(&mixed),
            vec!["Name", "Pos", "Hitters: WAR", "Pitchers: ERA"]
        );

        let single = union_comparable(&hitters, &[], &[StatSel::new(Category::Hitter, "WAR")]);
        assert_eq!(column_titles(&single), vec!["Name", "Pos", "WAR"]);
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let hitters = vec![record("Soto", "OF/RF", &[("WAR", 5.2)])];
        let pitchers = vec![record("Cole", "SP", &[("ERA", 3.41)])];
        let table = union_comparable(
            &hitters,
            &pitchers,
            &[
                StatSel::new(Category::Hitter, "WAR"),
                StatSel::new(Category::Pitcher, "ERA"),
            ],
        );
        terminal
            .draw(|frame| render(frame, frame.area(), &table))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_empty() {
        let backend = ratatui::backend::TestBackend::new(60, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let table = union_comparable(&[], &[], &[]);
        terminal
            .draw(|frame| render(frame, frame.area(), &table))
            .unwrap();
    }
}
