// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the comparison dashboard:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// | Tab Strip (1 row)                                 |
// +----------------+---------------------------------+
// | Selectors      | Comparison Table (60%)           |
// |  positions     |                                  |
// |  players       +---------------------------------+
// |  stats         | Stat Chart (40%)                 |
// +----------------+---------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// The projections tab reuses the same zones: `left_column` holds a single
// tall player selector, the right side holds projections and comparables.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: app name, year mode, dataset health.
    pub status_bar: Rect,
    /// Second row: tab strip.
    pub tabs: Rect,
    /// Entire left column (used whole by the projections tab).
    pub left_column: Rect,
    /// Left column thirds: position selector.
    pub selector_top: Rect,
    /// Left column thirds: player selector.
    pub selector_mid: Rect,
    /// Left column thirds: stat selector.
    pub selector_bottom: Rect,
    /// Right side top: comparison / projections table.
    pub main_top: Rect,
    /// Right side bottom: bar chart / comparables.
    pub main_bottom: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | tabs(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(1), // tab strip
            Constraint::Min(10),   // middle section
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let tabs = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    // Horizontal: selectors (32%) | main area (68%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(middle);

    let left_column = horizontal[0];
    let main = horizontal[1];

    // Left column: three stacked selectors.
    let selectors = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(left_column);

    // Main area: table over chart.
    let main_sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main);

    AppLayout {
        status_bar,
        tabs,
        left_column,
        selector_top: selectors[0],
        selector_mid: selectors[1],
        selector_bottom: selectors[2],
        main_top: main_sections[0],
        main_bottom: main_sections[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("status_bar", layout.status_bar),
            ("tabs", layout.tabs),
            ("selector_top", layout.selector_top),
            ("selector_mid", layout.selector_mid),
            ("selector_bottom", layout.selector_bottom),
            ("main_top", layout.main_top),
            ("main_bottom", layout.main_bottom),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_bars_are_single_rows() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.tabs.height, 1);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn layout_main_wider_than_selectors() {
        let layout = build_layout(test_area());
        assert!(layout.main_top.width > layout.selector_top.width);
    }

    #[test]
    fn layout_selectors_stack_vertically() {
        let layout = build_layout(test_area());
        assert!(layout.selector_top.y < layout.selector_mid.y);
        assert!(layout.selector_mid.y < layout.selector_bottom.y);
    }

    #[test]
    fn layout_left_column_spans_selectors() {
        let layout = build_layout(test_area());
        assert_eq!(layout.left_column.y, layout.selector_top.y);
        assert_eq!(
            layout.left_column.height,
            layout.selector_top.height
                + layout.selector_mid.height
                + layout.selector_bottom.height
        );
    }

    #[test]
    fn layout_table_above_chart() {
        let layout = build_layout(test_area());
        assert!(layout.main_top.y < layout.main_bottom.y);
        assert_eq!(layout.main_top.x, layout.main_bottom.x);
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area);
        let all_rects = [
            layout.status_bar,
            layout.tabs,
            layout.selector_top,
            layout.selector_mid,
            layout.selector_bottom,
            layout.main_top,
            layout.main_bottom,
            layout.help_bar,
        ];
        for rect in &all_rects {
            assert!(rect.x + rect.width <= area.width);
            assert!(rect.y + rect.height <= area.height);
        }
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        let area = Rect::new(0, 0, 40, 16);
        let layout = build_layout(area);
        let rects = [
            layout.status_bar,
            layout.selector_top,
            layout.selector_mid,
            layout.selector_bottom,
            layout.main_top,
            layout.main_bottom,
        ];
        for rect in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "Small terminal: rect {:?} has zero area",
                rect
            );
        }
    }
}
