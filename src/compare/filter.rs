// Selection filters over normalized record sets.
//
// All filters are stateless, order-preserving, and produce new record sets;
// inputs are never mutated. An empty selection means "no filtering" --
// explicit selection narrows, an empty set never excludes everything.

use std::collections::HashSet;

use crate::data::record::PlayerRecord;

/// Keep records eligible at any of the wanted position codes.
///
/// Hitters match when their position set intersects `wanted`; pitchers carry
/// a single role code, so the same intersection test reduces to role
/// membership. Empty `wanted` is the identity.
pub fn filter_by_positions(
    records: &[PlayerRecord],
    wanted: &HashSet<String>,
) -> Vec<PlayerRecord> {
    if wanted.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.plays_any(wanted))
        .cloned()
        .collect()
}

/// Keep records whose name is in the selection, by exact string equality.
/// Empty `wanted` is the identity; relative order is preserved.
pub fn filter_by_names(records: &[PlayerRecord], wanted: &HashSet<String>) -> Vec<PlayerRecord> {
    if wanted.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| wanted.contains(&r.name))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(name: &str, positions: &[&str]) -> PlayerRecord {
        PlayerRecord {
            name: name.into(),
            position_display: positions.join("/"),
            positions: positions.iter().map(|p| p.to_string()).collect(),
            age: None,
            aav: None,
            metrics: HashMap::new(),
        }
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // -- Position filter --

    #[test]
    fn empty_position_selection_is_identity() {
        let records = vec![record("A", &["1B"]), record("B", &["OF"])];
        let result = filter_by_positions(&records, &HashSet::new());
        assert_eq!(result, records);
    }

    #[test]
    fn position_filter_intersects_hitter_positions() {
        let records = vec![
            record("A", &["1B", "OF"]),
            record("B", &["SS"]),
            record("C", &["OF"]),
        ];
        let result = filter_by_positions(&records, &set(&["OF"]));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "A");
        assert_eq!(result[1].name, "C");
    }

    #[test]
    fn position_filter_matches_pitcher_roles() {
        let records = vec![
            record("Cole", &["SP"]),
            record("Diaz", &["RP"]),
            record("Hader", &["RP"]),
        ];
        let result = filter_by_positions(&records, &set(&["SP"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Cole");
    }

    #[test]
    fn role_filter_preserves_source_order() {
        let records = vec![
            record("Diaz", &["RP"]),
            record("Cole", &["SP"]),
            record("Hader", &["RP"]),
        ];
        let result = filter_by_positions(&records, &set(&["RP"]));
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Diaz", "Hader"]);
    }

    #[test]
    fn records_without_positions_excluded_from_filtered_view() {
        let records = vec![record("A", &[]), record("B", &["1B"])];
        let result = filter_by_positions(&records, &set(&["1B"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "B");
        // ...but retained when no filter is applied.
        assert_eq!(filter_by_positions(&records, &HashSet::new()).len(), 2);
    }

    #[test]
    fn position_filter_does_not_mutate_input() {
        let records = vec![record("A", &["1B"]), record("B", &["OF"])];
        let before = records.clone();
        let _ = filter_by_positions(&records, &set(&["1B"]));
        assert_eq!(records, before);
    }

    // -- Name filter --

    #[test]
    fn empty_name_selection_is_identity() {
        let records = vec![record("A", &["1B"]), record("B", &["OF"])];
        assert_eq!(filter_by_names(&records, &HashSet::new()), records);
    }

    #[test]
    fn name_filter_is_exact_match() {
        let records = vec![
            record("Juan Soto", &["OF"]),
            record("Juan Soto Jr", &["OF"]),
        ];
        let result = filter_by_names(&records, &set(&["Juan Soto"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Juan Soto");
    }

    #[test]
    fn name_filter_preserves_source_order() {
        let records = vec![
            record("C", &["1B"]),
            record("A", &["OF"]),
            record("B", &["SS"]),
        ];
        let result = filter_by_names(&records, &set(&["A", "B", "C"]));
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn name_filter_can_return_empty() {
        let records = vec![record("A", &["1B"])];
        assert!(filter_by_names(&records, &set(&["Nobody"])).is_empty());
    }
}
