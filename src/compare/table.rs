// Combined comparison table and chart-series shaping.
//
// Hitter and pitcher record sets union into one table; stat selection is
// partitioned by category, so a hitter row never shows a pitcher-only
// metric. The table is plain data for the presentation layer; the only
// chart shaping the core does is a name -> value series per stat.

use serde::{Deserialize, Serialize};

use crate::data::record::{Category, PlayerRecord};

// ---------------------------------------------------------------------------
// Stat selection
// ---------------------------------------------------------------------------

/// One selected stat, tagged with the category it belongs to. The tag is a
/// proper field rather than a "Hitters: " label prefix, so a metric name
/// containing the separator text cannot be mis-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatSel {
    pub category: Category,
    pub metric: String,
}

impl StatSel {
    pub fn new(category: Category, metric: impl Into<String>) -> StatSel {
        StatSel {
            category,
            metric: metric.into(),
        }
    }

    /// Display label in the combined view ("Hitters: WAR").
    pub fn label(&self) -> String {
        format!("{}: {}", self.category.label(), self.metric)
    }
}

// ---------------------------------------------------------------------------
// Comparison table
// ---------------------------------------------------------------------------

/// One row of the combined comparison table. `cells` aligns 1:1 with the
/// table's stat columns; a cell is None when the stat belongs to the other
/// category or the metric is absent on the record -- missing, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub position: String,
    pub category: Category,
    pub cells: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub stats: Vec<StatSel>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the combined comparison table from already-filtered hitter and
/// pitcher record sets. Hitters first, then pitchers, each in input order.
pub fn union_comparable(
    hitters: &[PlayerRecord],
    pitchers: &[PlayerRecord],
    stats: &[StatSel],
) -> ComparisonTable {
    let rows = hitters
        .iter()
        .map(|r| row_for(r, Category::Hitter, stats))
        .chain(pitchers.iter().map(|r| row_for(r, Category::Pitcher, stats)))
        .collect();
    ComparisonTable {
        stats: stats.to_vec(),
        rows,
    }
}

fn row_for(record: &PlayerRecord, category: Category, stats: &[StatSel]) -> ComparisonRow {
    let cells = stats
        .iter()
        .map(|stat| {
            if stat.category == category {
                record.metric(&stat.metric)
            } else {
                None
            }
        })
        .collect();
    ComparisonRow {
        name: record.name.clone(),
        position: record.position_display.clone(),
        category,
        cells,
    }
}

/// Name -> value pairs for one stat column: rows with a present value only,
/// in table order. Suitable for direct bar charting.
pub fn chart_series(table: &ComparisonTable, stat: &StatSel) -> Vec<(String, f64)> {
    let Some(idx) = table.stats.iter().position(|s| s == stat) else {
        return Vec::new();
    };
    table
        .rows
        .iter()
        .filter_map(|row| row.cells[idx].map(|v| (row.name.clone(), v)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
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

    fn war_and_era() -> Vec<StatSel> {
        vec![
            StatSel::new(Category::Hitter, "WAR"),
            StatSel::new(Category::Pitcher, "ERA"),
        ]
    }

    // -- Stat labels --

    #[test]
    fn stat_labels_carry_category_prefix() {
        assert_eq!(StatSel::new(Category::Hitter, "WAR").label(), "Hitters: WAR");
        assert_eq!(
            StatSel::new(Category::Pitcher, "K/9").label(),
            "Pitchers: K/9"
        );
    }

    // -- Union semantics --

    #[test]
    fn union_interleaves_hitters_then_pitchers() {
        let hitters = vec![record("Soto", "OF/RF", &[("WAR", 5.2)])];
        let pitchers = vec![record("Cole", "SP", &[("ERA", 3.41)])];
        let table = union_comparable(&hitters, &pitchers, &war_and_era());

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].name, "Soto");
        assert_eq!(table.rows[0].category, Category::Hitter);
        assert_eq!(table.rows[1].name, "Cole");
        assert_eq!(table.rows[1].category, Category::Pitcher);
    }

    #[test]
    fn rows_never_show_other_category_metrics() {
        // Both records carry a "WAR" metric; only the hitter's shows in the
        // hitter-tagged column.
        let hitters = vec![record("Soto", "OF", &[("WAR", 5.2)])];
        let pitchers = vec![record("Cole", "SP", &[("WAR", 4.0), ("ERA", 3.41)])];
        let table = union_comparable(&hitters, &pitchers, &war_and_era());

        assert_eq!(table.rows[0].cells, vec![Some(5.2), None]);
        assert_eq!(table.rows[1].cells, vec![None, Some(3.41)]);
    }

    #[test]
    fn absent_metric_is_missing_not_zero() {
        let hitters = vec![record("Soto", "OF", &[])];
        let table = union_comparable(&hitters, &[], &war_and_era());
        assert_eq!(table.rows[0].cells[0], None);
    }

    #[test]
    fn empty_inputs_make_empty_table() {
        let table = union_comparable(&[], &[], &war_and_era());
        assert!(table.is_empty());
        assert_eq!(table.stats.len(), 2);
    }

    // -- Chart series --

    #[test]
    fn chart_series_skips_missing_values() {
        let hitters = vec![
            record("Soto", "OF", &[("WAR", 5.2)]),
            record("NoStats", "1B", &[]),
        ];
        let pitchers = vec![record("Cole", "SP", &[("ERA", 3.41)])];
        let table = union_comparable(&hitters, &pitchers, &war_and_era());

        let series = chart_series(&table, &StatSel::new(Category::Hitter, "WAR"));
        assert_eq!(series, vec![("Soto".to_string(), 5.2)]);
    }

    #[test]
    fn chart_series_unknown_stat_is_empty() {
        let table = union_comparable(&[], &[], &war_and_era());
        let series = chart_series(&table, &StatSel::new(Category::Hitter, "HR"));
        assert!(series.is_empty());
    }

    #[test]
    fn chart_series_preserves_table_order() {
        let hitters = vec![
            record("B", "OF", &[("WAR", 2.0)]),
            record("A", "OF", &[("WAR", 3.0)]),
        ];
        let table = union_comparable(
            &hitters,
            &[],
            &[StatSel::new(Category::Hitter, "WAR")],
        );
        let series = chart_series(&table, &StatSel::new(Category::Hitter, "WAR"));
        let names: Vec<&str> = series.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
