// Projections tab widgets: heuristic contract estimates for the selected
// players, plus the comparable historical contracts for the highlighted one.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::data::record::{Category, Dataset, PlayerRecord};
use crate::projection::comparables::comparables_for_player;
use crate::projection::contract::ContractProjection;
use crate::tui::{LoadedData, ViewState};

use super::comparison::format_cell;

// ---------------------------------------------------------------------------
// Projection lines
// ---------------------------------------------------------------------------

/// One display line on the projections tab: the player's projected value and
/// age where known, and the heuristic contract when a value exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionLine {
    pub name: String,
    pub category: Option<Category>,
    pub value: Option<f64>,
    pub age: Option<f64>,
    pub projection: Option<ContractProjection>,
}

fn find_in<'a>(dataset: &'a Option<Dataset>, name: &str) -> Option<&'a PlayerRecord> {
    dataset
        .as_ref()
        .and_then(|d| d.records.iter().find(|r| r.name == name))
}

/// Build projection lines for the given names, in order. Players absent from
/// both projected datasets still get a line, with every field missing.
pub fn projection_lines(data: &LoadedData, names: &[String]) -> Vec<ProjectionLine> {
    names
        .iter()
        .map(|name| {
            let (record, category) = match find_in(&data.projected_hitters, name) {
                Some(record) => (Some(record), Some(Category::Hitter)),
                None => match find_in(&data.projected_pitchers, name) {
                    Some(record) => (Some(record), Some(Category::Pitcher)),
                    None => (None, None),
                },
            };
            let value = record.and_then(|r| r.metric("WAR"));
            let age = record.and_then(|r| r.age);
            let projection = value.map(|v| ContractProjection::for_player(name.clone(), v));
            ProjectionLine {
                name: name.clone(),
                category,
                value,
                age,
                projection,
            }
        })
        .collect()
}

/// The names the projections tab currently shows: the selection if any,
/// otherwise every contract-listed player.
pub fn shown_names(state: &ViewState) -> Vec<String> {
    let selector = &state.projections_players;
    let chosen: Vec<String> = selector
        .options
        .iter()
        .filter(|name| selector.is_selected(name))
        .cloned()
        .collect();
    if chosen.is_empty() {
        selector.options.clone()
    } else {
        chosen
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the projections table: projected value, age, and heuristic
/// contract terms per player.
pub fn render_projections(frame: &mut Frame, area: Rect, state: &ViewState) {
    let names = shown_names(state);
    let lines = projection_lines(&state.data, &names);

    let header = Row::new(vec!["Name", "Cat", "WAR", "Age", "Yrs", "AAV", "Total"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            let category = match line.category {
                Some(Category::Hitter) => "H",
                Some(Category::Pitcher) => "P",
                None => "--",
            };
            let (years, aav, total) = match &line.projection {
                Some(p) => (
                    p.years.to_string(),
                    format!("${:.2}M", p.aav),
                    format!("${:.2}M", p.total),
                ),
                None => ("--".into(), "--".into(), "--".into()),
            };
            Row::new(vec![
                Cell::from(line.name.clone()),
                Cell::from(category),
                Cell::from(format_cell(line.value)),
                Cell::from(format_cell(line.age)),
                Cell::from(years),
                Cell::from(aav),
                Cell::from(total),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(9),
        Constraint::Length(10),
    ];

    let count = lines.len();
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Contract Projections ({count})")),
    );
    frame.render_widget(table, area);
}

/// Render the comparable contracts for the player under the cursor. Lookup
/// and missing-field failures are shown in place, not swallowed.
pub fn render_comparables(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = |title: String| Block::default().borders(Borders::ALL).title(title);

    let Some(name) = state.projections_players.current() else {
        let placeholder =
            Paragraph::new("No contract data loaded").block(block("Comparable Contracts".into()));
        frame.render_widget(placeholder, area);
        return;
    };

    let projected = state.data.projected_records();
    match comparables_for_player(&projected, &state.data.contracts, name) {
        Ok(comparables) => {
            let header = Row::new(vec![
                "Name", "Pos", "Proj WAR", "Age", "Med Yrs", "Med Total", "Med AAV", "Team",
            ])
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );

            let rows: Vec<Row> = comparables
                .iter()
                .map(|row| {
                    Row::new(vec![
                        Cell::from(row.name.clone()),
                        Cell::from(row.position.clone()),
                        Cell::from(format_cell(row.proj_war)),
                        Cell::from(format_cell(row.age)),
                        Cell::from(format_cell(row.med_years)),
                        Cell::from(format_cell(row.med_total)),
                        Cell::from(format_cell(row.med_aav)),
                        Cell::from(row.signing_team.clone()),
                    ])
                })
                .collect();

            let widths = [
                Constraint::Min(18),
                Constraint::Length(5),
                Constraint::Length(9),
                Constraint::Length(5),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Length(8),
                Constraint::Length(6),
            ];

            let count = comparables.len();
            let table = Table::new(rows, widths)
                .header(header)
                .block(block(format!("Comparable Contracts - {name} ({count})")));
            frame.render_widget(table, area);
        }
        Err(e) => {
            let message = Paragraph::new(e.to_string())
                .style(Style::default().fg(Color::Red))
                .block(block(format!("Comparable Contracts - {name}")));
            frame.render_widget(message, area);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
