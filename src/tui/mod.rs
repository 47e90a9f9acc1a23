// TUI dashboard: view state, rendering, and the main event loop.
//
// The TUI owns a `ViewState` holding the loaded datasets and all transient
// selection state. The core pipeline is pure, so the comparison table and
// chart series are recomputed from the current selections on every draw;
// the core only ever sees explicit selection sets, never widget state.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashSet;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::Frame;
use tracing::error;

use crate::compare::filter::{filter_by_names, filter_by_positions};
use crate::compare::table::{chart_series, union_comparable, ComparisonTable, StatSel};
use crate::data::catalog::{Catalog, DatasetHandle, YearMode};
use crate::data::contracts::ContractRow;
use crate::data::position::{distinct_positions, PITCHER_ROLES};
use crate::data::record::{Category, Dataset, PlayerRecord};

use layout::build_layout;

// ---------------------------------------------------------------------------
// Tabs and focus
// ---------------------------------------------------------------------------

/// Which tab is active in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Home,
    Hitters,
    Pitchers,
    Projections,
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::Home,
        TabId::Hitters,
        TabId::Pitchers,
        TabId::Projections,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TabId::Home => "All Players",
            TabId::Hitters => "Hitters",
            TabId::Pitchers => "Pitchers",
            TabId::Projections => "Projections",
        }
    }

    pub fn index(&self) -> usize {
        TabId::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Which selector panel has keyboard focus on the comparison tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Positions,
    Players,
    Stats,
}

impl PanelFocus {
    pub fn next(&self) -> PanelFocus {
        match self {
            PanelFocus::Positions => PanelFocus::Players,
            PanelFocus::Players => PanelFocus::Stats,
            PanelFocus::Stats => PanelFocus::Positions,
        }
    }
}

// ---------------------------------------------------------------------------
// SelectorState
// ---------------------------------------------------------------------------

/// A multi-select list: fixed options, a toggled selection set, and a cursor.
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    pub options: Vec<String>,
    pub selected: HashSet<String>,
    pub cursor: usize,
}

impl SelectorState {
    pub fn new(options: Vec<String>) -> SelectorState {
        SelectorState {
            options,
            selected: HashSet::new(),
            cursor: 0,
        }
    }

    /// Swap in a fresh option list, keeping whatever selections survive and
    /// clamping the cursor.
    pub fn replace_options(&mut self, options: Vec<String>) {
        self.selected.retain(|s| options.iter().any(|o| o == s));
        if !options.is_empty() {
            self.cursor = self.cursor.min(options.len() - 1);
        } else {
            self.cursor = 0;
        }
        self.options = options;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if !self.options.is_empty() {
            self.cursor = (self.cursor + 1).min(self.options.len() - 1);
        }
    }

    /// Toggle the option under the cursor in or out of the selection.
    pub fn toggle_current(&mut self) {
        let Some(option) = self.options.get(self.cursor) else {
            return;
        };
        if !self.selected.remove(option) {
            self.selected.insert(option.clone());
        }
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.contains(option)
    }

    /// The current selection as an owned set for the core filters.
    pub fn selected_set(&self) -> HashSet<String> {
        self.selected.clone()
    }

    /// The option currently under the cursor.
    pub fn current(&self) -> Option<&str> {
        self.options.get(self.cursor).map(|s| s.as_str())
    }
}

// ---------------------------------------------------------------------------
// Loaded data
// ---------------------------------------------------------------------------

/// All datasets resolved for the current year mode. A dataset that failed to
/// resolve is None/empty here with its error recorded; only that view
/// degrades, the rest of the dashboard keeps working.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub hitters: Option<Dataset>,
    pub pitchers: Option<Dataset>,
    pub projected_hitters: Option<Dataset>,
    pub projected_pitchers: Option<Dataset>,
    pub contracts: Vec<ContractRow>,
    pub errors: Vec<String>,
}

impl LoadedData {
    pub fn load(catalog: &Catalog, year: YearMode) -> LoadedData {
        let mut data = LoadedData::default();

        let resolve = |handle: DatasetHandle, errors: &mut Vec<String>| match catalog
            .resolve(handle)
        {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                error!("failed to load {}: {}", handle.name(), e);
                errors.push(format!("{}: {e}", handle.name()));
                None
            }
        };

        data.hitters = resolve(DatasetHandle::hitters(year), &mut data.errors);
        data.pitchers = resolve(DatasetHandle::pitchers(year), &mut data.errors);
        data.projected_hitters = resolve(DatasetHandle::ProjectedHitters, &mut data.errors);
        data.projected_pitchers = resolve(DatasetHandle::ProjectedPitchers, &mut data.errors);

        match catalog.contracts() {
            Ok(rows) => data.contracts = rows,
            Err(e) => {
                error!("failed to load contracts: {}", e);
                data.errors.push(format!("contracts: {e}"));
            }
        }

        data
    }

    /// Projected hitter and pitcher records as one pool, for name lookups.
    pub fn projected_records(&self) -> Vec<PlayerRecord> {
        let mut records = Vec::new();
        if let Some(dataset) = &self.projected_hitters {
            records.extend(dataset.records.iter().cloned());
        }
        if let Some(dataset) = &self.projected_pitchers {
            records.extend(dataset.records.iter().cloned());
        }
        records
    }
}

// ---------------------------------------------------------------------------
// Comparison tab state
// ---------------------------------------------------------------------------

/// Which record sets a comparison tab draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    Combined,
    HittersOnly,
    PitchersOnly,
}

/// Selection state for one comparison tab: positions, players, stats, and
/// which chosen stat the chart currently shows.
#[derive(Debug, Clone)]
pub struct CompareTab {
    pub kind: TabKind,
    pub positions: SelectorState,
    pub players: SelectorState,
    pub stats: SelectorState,
    stat_sels: Vec<StatSel>,
    pub chart_index: usize,
}

impl CompareTab {
    pub fn new(kind: TabKind) -> CompareTab {
        CompareTab {
            kind,
            positions: SelectorState::default(),
            players: SelectorState::default(),
            stats: SelectorState::default(),
            stat_sels: Vec::new(),
            chart_index: 0,
        }
    }

    fn sources<'a>(&self, data: &'a LoadedData) -> (Option<&'a Dataset>, Option<&'a Dataset>) {
        match self.kind {
            TabKind::Combined => (data.hitters.as_ref(), data.pitchers.as_ref()),
            TabKind::HittersOnly => (data.hitters.as_ref(), None),
            TabKind::PitchersOnly => (None, data.pitchers.as_ref()),
        }
    }

    /// Refresh option lists from freshly loaded data, keeping surviving
    /// selections. Hitter tabs offer the positions discovered in the data;
    /// pitcher roles are the fixed SP/RP vocabulary.
    pub fn rebuild(&mut self, data: &LoadedData) {
        let (hitters, pitchers) = self.sources(data);

        let mut position_options = hitters
            .map(|d| distinct_positions(&d.records))
            .unwrap_or_default();
        if pitchers.is_some() {
            position_options.extend(PITCHER_ROLES.iter().map(|r| r.to_string()));
        }

        let mut player_options: Vec<String> = hitters.map(|d| d.names()).unwrap_or_default();
        if let Some(dataset) = pitchers {
            player_options.extend(dataset.names());
        }

        let mut stat_sels = Vec::new();
        if let Some(dataset) = hitters {
            for metric in &dataset.schema.metrics {
                stat_sels.push(StatSel::new(Category::Hitter, metric.clone()));
            }
        }
        if let Some(dataset) = pitchers {
            for metric in &dataset.schema.metrics {
                stat_sels.push(StatSel::new(Category::Pitcher, metric.clone()));
            }
        }
        let stat_options: Vec<String> = stat_sels
            .iter()
            .map(|sel| {
                if self.kind == TabKind::Combined {
                    sel.label()
                } else {
                    sel.metric.clone()
                }
            })
            .collect();

        self.positions.replace_options(position_options);
        self.players.replace_options(player_options);
        self.stats.replace_options(stat_options);
        self.stat_sels = stat_sels;
    }

    /// The selected stats in option order, as core selections.
    pub fn chosen_stats(&self) -> Vec<StatSel> {
        self.stats
            .options
            .iter()
            .zip(&self.stat_sels)
            .filter(|(option, _)| self.stats.is_selected(option))
            .map(|(_, sel)| sel.clone())
            .collect()
    }

    /// The chosen stat the bar chart currently shows, if any are chosen.
    pub fn chart_stat(&self) -> Option<StatSel> {
        let chosen = self.chosen_stats();
        if chosen.is_empty() {
            return None;
        }
        Some(chosen[self.chart_index % chosen.len()].clone())
    }

    pub fn cycle_chart(&mut self) {
        self.chart_index = self.chart_index.wrapping_add(1);
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// All TUI state: loaded data plus per-tab selections.
pub struct ViewState {
    pub active_tab: TabId,
    pub focus: PanelFocus,
    pub year: YearMode,
    pub data: LoadedData,
    pub home: CompareTab,
    pub hitters_tab: CompareTab,
    pub pitchers_tab: CompareTab,
    /// Player selector on the projections tab (contract names).
    pub projections_players: SelectorState,
}

impl ViewState {
    pub fn new(data: LoadedData) -> ViewState {
        let mut state = ViewState {
            active_tab: TabId::Home,
            focus: PanelFocus::Positions,
            year: YearMode::Current,
            data,
            home: CompareTab::new(TabKind::Combined),
            hitters_tab: CompareTab::new(TabKind::HittersOnly),
            pitchers_tab: CompareTab::new(TabKind::PitchersOnly),
            projections_players: SelectorState::default(),
        };
        state.rebuild_selectors();
        state
    }

    /// Re-resolve every dataset for the current year mode and refresh all
    /// selector options, keeping surviving selections.
    pub fn reload(&mut self, catalog: &Catalog) {
        self.data = LoadedData::load(catalog, self.year);
        self.rebuild_selectors();
    }

    fn rebuild_selectors(&mut self) {
        self.home.rebuild(&self.data);
        self.hitters_tab.rebuild(&self.data);
        self.pitchers_tab.rebuild(&self.data);

        let mut names: Vec<String> = Vec::new();
        for row in &self.data.contracts {
            if !names.iter().any(|n| n == &row.name) {
                names.push(row.name.clone());
            }
        }
        self.projections_players.replace_options(names);
    }

    /// The active comparison tab, None on the projections tab.
    pub fn active_compare(&self) -> Option<&CompareTab> {
        match self.active_tab {
            TabId::Home => Some(&self.home),
            TabId::Hitters => Some(&self.hitters_tab),
            TabId::Pitchers => Some(&self.pitchers_tab),
            TabId::Projections => None,
        }
    }

    pub fn active_compare_mut(&mut self) -> Option<&mut CompareTab> {
        match self.active_tab {
            TabId::Home => Some(&mut self.home),
            TabId::Hitters => Some(&mut self.hitters_tab),
            TabId::Pitchers => Some(&mut self.pitchers_tab),
            TabId::Projections => None,
        }
    }

    /// The selector list the cursor keys currently act on.
    pub fn focused_selector_mut(&mut self) -> Option<&mut SelectorState> {
        if self.active_tab == TabId::Projections {
            return Some(&mut self.projections_players);
        }
        let focus = self.focus;
        let tab = self.active_compare_mut()?;
        Some(match focus {
            PanelFocus::Positions => &mut tab.positions,
            PanelFocus::Players => &mut tab.players,
            PanelFocus::Stats => &mut tab.stats,
        })
    }

    /// Run the core pipeline for the active comparison tab: position filter,
    /// then name filter, then the category-partitioned union.
    pub fn comparison(&self) -> Option<ComparisonTable> {
        let tab = self.active_compare()?;
        let stats = tab.chosen_stats();
        let positions = tab.positions.selected_set();
        let names = tab.players.selected_set();

        let empty: &[PlayerRecord] = &[];
        let (hitter_source, pitcher_source) = tab.sources(&self.data);
        let hitter_records = hitter_source.map_or(empty, |d| d.records.as_slice());
        let pitcher_records = pitcher_source.map_or(empty, |d| d.records.as_slice());

        let hitters = filter_by_names(&filter_by_positions(hitter_records, &positions), &names);
        let pitchers = filter_by_names(&filter_by_positions(pitcher_records, &positions), &names);

        Some(union_comparable(&hitters, &pitchers, &stats))
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    render_tab_strip(frame, layout.tabs, state);

    if state.active_tab == TabId::Projections {
        widgets::selector::render(
            frame,
            layout.left_column,
            "Players",
            &state.projections_players,
            true,
        );
        widgets::projections::render_projections(frame, layout.main_top, state);
        widgets::projections::render_comparables(frame, layout.main_bottom, state);
    } else if let Some(tab) = state.active_compare() {
        widgets::selector::render(
            frame,
            layout.selector_top,
            "Positions",
            &tab.positions,
            state.focus == PanelFocus::Positions,
        );
        widgets::selector::render(
            frame,
            layout.selector_mid,
            "Players",
            &tab.players,
            state.focus == PanelFocus::Players,
        );
        widgets::selector::render(
            frame,
            layout.selector_bottom,
            "Stats",
            &tab.stats,
            state.focus == PanelFocus::Stats,
        );

        if let Some(table) = state.comparison() {
            widgets::comparison::render(frame, layout.main_top, &table);
            let stat = tab.chart_stat();
            let series = stat
                .as_ref()
                .map(|s| chart_series(&table, s))
                .unwrap_or_default();
            widgets::stat_chart::render(frame, layout.main_bottom, stat.as_ref(), &series);
        }
    }

    render_help_bar(frame, layout.help_bar);
}

fn render_tab_strip(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let titles: Vec<Line> = TabId::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {}:{} ", i + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.active_tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_help_bar(frame: &mut Frame, area: ratatui::layout::Rect) {
    let text = " q:Quit | 1-4:Tabs | Tab:Focus | j/k:Move | Space:Toggle | y:Year | c:Chart | r:Reload";
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Draws, then polls for keyboard input; selections re-run the pure
///    pipeline on the next draw, `r`/`y` re-resolve the datasets.
/// 4. Restores the terminal on clean exit.
pub fn run(catalog: &Catalog) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut state = ViewState::new(LoadedData::load(catalog, YearMode::Current));

    loop {
        terminal.draw(|frame| render_frame(frame, &state))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match input::handle_key(key, &mut state) {
                    input::InputOutcome::Quit => break,
                    input::InputOutcome::Reload => state.reload(catalog),
                    input::InputOutcome::Continue => {}
                }
            }
            _ => {}
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
