// Comparable-contract selection and explicit player lookup.
//
// The original tool indexed the first row of a filtered frame and trusted
// the value to exist; here every lookup and field access is explicit and
// absence is a named error, never a silent default.

use std::collections::HashSet;

use thiserror::Error;

use crate::data::contracts::ContractRow;
use crate::data::record::PlayerRecord;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("no player named `{0}` in the projection set")]
    UnknownPlayer(String),

    #[error("multiple players named `{0}` in the projection set")]
    AmbiguousName(String),

    #[error("player `{name}` is missing required field `{field}`")]
    MissingField { name: String, field: &'static str },
}

// ---------------------------------------------------------------------------
// Comparables query
// ---------------------------------------------------------------------------

/// Inclusive projected-value window for comparables.
pub const VALUE_WINDOW: f64 = 0.5;

/// Inclusive age window for comparables.
pub const AGE_WINDOW: f64 = 2.0;

/// Historical contracts similar to a projected player.
///
/// A contract qualifies iff its position is in `position_filter`, its
/// projected value lies within ±`VALUE_WINDOW` of `projected_value`, and its
/// age lies within ±`AGE_WINDOW` of `age` -- all inclusive, all conjunctive.
/// Rows missing either numeric field never qualify. Source order is
/// preserved; the result may be empty.
pub fn find_comparables<'a>(
    contracts: &'a [ContractRow],
    projected_value: f64,
    age: f64,
    position_filter: &HashSet<String>,
) -> Vec<&'a ContractRow> {
    contracts
        .iter()
        .filter(|row| {
            position_filter.contains(&row.position)
                && row
                    .proj_war
                    .is_some_and(|w| (w - projected_value).abs() <= VALUE_WINDOW)
                && row.age.is_some_and(|a| (a - age).abs() <= AGE_WINDOW)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Explicit lookup
// ---------------------------------------------------------------------------

/// Exact-name lookup that refuses to guess: zero matches and duplicate
/// matches are distinct errors instead of positional indexing.
pub fn lookup_player<'a>(
    records: &'a [PlayerRecord],
    name: &str,
) -> Result<&'a PlayerRecord, ProjectionError> {
    let mut matches = records.iter().filter(|r| r.name == name);
    match (matches.next(), matches.next()) {
        (None, _) => Err(ProjectionError::UnknownPlayer(name.to_string())),
        (Some(record), None) => Ok(record),
        (Some(_), Some(_)) => Err(ProjectionError::AmbiguousName(name.to_string())),
    }
}

/// The projected value and age driving a comparables query for one record.
/// Absence of either field is surfaced, never defaulted.
pub fn projection_inputs(record: &PlayerRecord) -> Result<(f64, f64), ProjectionError> {
    let value = record
        .metric("WAR")
        .ok_or_else(|| ProjectionError::MissingField {
            name: record.name.clone(),
            field: "WAR",
        })?;
    let age = record.age.ok_or_else(|| ProjectionError::MissingField {
        name: record.name.clone(),
        field: "Age",
    })?;
    Ok((value, age))
}

/// Comparables for a named player in a projected record set: explicit
/// lookup, explicit field extraction, then the window query filtered to the
/// positions the player's own contract rows carry.
pub fn comparables_for_player<'a>(
    projected: &[PlayerRecord],
    contracts: &'a [ContractRow],
    name: &str,
) -> Result<Vec<&'a ContractRow>, ProjectionError> {
    let record = lookup_player(projected, name)?;
    let (value, age) = projection_inputs(record)?;
    let positions: HashSet<String> = contracts
        .iter()
        .filter(|c| c.name == record.name)
        .map(|c| c.position.clone())
        .collect();
    Ok(find_comparables(contracts, value, age, &positions))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn contract(name: &str, position: &str, war: f64, age: f64) -> ContractRow {
        ContractRow {
            name: name.into(),
            position: position.into(),
            proj_war: Some(war),
            age: Some(age),
            med_years: Some(3.0),
            med_total: Some(54.0),
            med_aav: Some(18.0),
            signing_team: "TST".into(),
        }
    }

    fn projected(name: &str, war: Option<f64>, age: Option<f64>) -> PlayerRecord {
        let mut metrics = HashMap::new();
        if let Some(war) = war {
            metrics.insert("WAR".to_string(), war);
        }
        PlayerRecord {
            name: name.into(),
            position_display: String::new(),
            positions: Vec::new(),
            age,
            aav: None,
            metrics,
        }
    }

    fn sp_only() -> HashSet<String> {
        ["SP".to_string()].into_iter().collect()
    }

    // -- Window membership --

    #[test]
    fn row_inside_both_windows_qualifies() {
        let contracts = vec![contract("Snell", "SP", 4.3, 29.0)];
        let found = find_comparables(&contracts, 4.0, 28.0, &sp_only());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Snell");
    }

    #[test]
    fn age_outside_window_disqualifies() {
        let contracts = vec![contract("Snell", "SP", 4.3, 29.0)];
        assert!(find_comparables(&contracts, 4.0, 26.0, &sp_only()).is_empty());
    }

    #[test]
    fn value_outside_window_disqualifies() {
        let contracts = vec![contract("Snell", "SP", 4.3, 29.0)];
        assert!(find_comparables(&contracts, 3.7, 29.0, &sp_only()).is_empty());
    }

    #[test]
    fn windows_are_inclusive_at_the_boundary() {
        let contracts = vec![contract("Edge", "SP", 4.5, 30.0)];
        // |4.5 - 4.0| = 0.5 and |30 - 28| = 2: both exactly at the limit.
        let found = find_comparables(&contracts, 4.0, 28.0, &sp_only());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn position_must_be_in_filter() {
        let contracts = vec![
            contract("Snell", "SP", 4.0, 28.0),
            contract("Chapman", "3B", 4.0, 28.0),
        ];
        let found = find_comparables(&contracts, 4.0, 28.0, &sp_only());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, "SP");
    }

    #[test]
    fn missing_fields_never_qualify() {
        let mut no_war = contract("NoWar", "SP", 0.0, 28.0);
        no_war.proj_war = None;
        let mut no_age = contract("NoAge", "SP", 4.0, 0.0);
        no_age.age = None;
        let contracts = vec![no_war, no_age];
        assert!(find_comparables(&contracts, 4.0, 28.0, &sp_only()).is_empty());
    }

    #[test]
    fn result_preserves_source_order() {
        let contracts = vec![
            contract("B", "SP", 4.1, 28.0),
            contract("A", "SP", 3.9, 29.0),
        ];
        let found = find_comparables(&contracts, 4.0, 28.0, &sp_only());
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    // -- Lookup --

    #[test]
    fn lookup_finds_unique_match() {
        let records = vec![projected("Soto", Some(5.2), Some(26.0))];
        let found = lookup_player(&records, "Soto").unwrap();
        assert_eq!(found.name, "Soto");
    }

    #[test]
    fn lookup_zero_matches_is_unknown() {
        let records = vec![projected("Soto", Some(5.2), Some(26.0))];
        let err = lookup_player(&records, "Trout").unwrap_err();
        assert!(matches!(err, ProjectionError::UnknownPlayer(_)));
    }

    #[test]
    fn lookup_duplicates_are_ambiguous() {
        let records = vec![
            projected("Will Smith", Some(4.0), Some(29.0)),
            projected("Will Smith", Some(1.0), Some(32.0)),
        ];
        let err = lookup_player(&records, "Will Smith").unwrap_err();
        assert!(matches!(err, ProjectionError::AmbiguousName(_)));
    }

    // -- Field extraction --

    #[test]
    fn inputs_extracted_when_present() {
        let record = projected("Soto", Some(5.2), Some(26.0));
        let (value, age) = projection_inputs(&record).unwrap();
        assert!((value - 5.2).abs() < f64::EPSILON);
        assert!((age - 26.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_war_is_a_named_error() {
        let record = projected("Soto", None, Some(26.0));
        let err = projection_inputs(&record).unwrap_err();
        match err {
            ProjectionError::MissingField { field, .. } => assert_eq!(field, "WAR"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_age_is_a_named_error() {
        let record = projected("Soto", Some(5.2), None);
        let err = projection_inputs(&record).unwrap_err();
        match err {
            ProjectionError::MissingField { field, .. } => assert_eq!(field, "Age"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // -- Composed query --

    #[test]
    fn comparables_for_player_uses_contract_position() {
        let projected_set = vec![projected("Snell", Some(4.0), Some(31.0))];
        let contracts = vec![
            contract("Snell", "SP", 4.3, 31.0),
            contract("Other SP", "SP", 4.2, 30.0),
            contract("Chapman", "3B", 4.0, 31.0),
        ];
        let found = comparables_for_player(&projected_set, &contracts, "Snell").unwrap();
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Snell", "Other SP"]);
    }

    #[test]
    fn comparables_for_player_surfaces_missing_age() {
        let projected_set = vec![projected("Snell", Some(4.0), None)];
        let contracts = vec![contract("Snell", "SP", 4.3, 31.0)];
        let err = comparables_for_player(&projected_set, &contracts, "Snell").unwrap_err();
        assert!(matches!(err, ProjectionError::MissingField { .. }));
    }
}
