// Position tagging: multi-position splitting and pitcher role codes.

use std::collections::BTreeSet;

use crate::data::record::PlayerRecord;

/// Pitcher role vocabulary. Role codes outside this set are preserved on the
/// record as-is but never offered by role selectors, so they match no
/// role-based filter.
pub const PITCHER_ROLES: [&str; 2] = ["SP", "RP"];

/// How a dataset's position field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStyle {
    /// Hitter datasets: "1B/OF" style multi-position designations.
    Split,
    /// Pitcher and contract datasets: a single code taken verbatim.
    Verbatim,
}

/// Split a raw multi-position designation into atomic codes.
///
/// Splits on "/", trims whitespace, drops empty tokens, and removes
/// duplicates keeping first occurrence. An empty or all-separator field
/// yields an empty set.
pub fn split_positions(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in raw.split('/') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !out.iter().any(|p| p == token) {
            out.push(token.to_string());
        }
    }
    out
}

/// Tag a raw position field according to the dataset's style.
pub fn tag_positions(raw: &str, style: PositionStyle) -> Vec<String> {
    match style {
        PositionStyle::Split => split_positions(raw),
        PositionStyle::Verbatim => {
            let code = raw.trim();
            if code.is_empty() {
                Vec::new()
            } else {
                vec![code.to_string()]
            }
        }
    }
}

/// Distinct position codes across a record set, sorted, for selector UIs.
pub fn distinct_positions(records: &[PlayerRecord]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for record in records {
        for code in &record.positions {
            set.insert(code.clone());
        }
    }
    set.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn hitter(name: &str, positions: &[&str]) -> PlayerRecord {
        PlayerRecord {
            name: name.into(),
            position_display: positions.join("/"),
            positions: positions.iter().map(|p| p.to_string()).collect(),
            age: None,
            aav: None,
            metrics: HashMap::new(),
        }
    }

    // -- Multi-position splitting --

    #[test]
    fn split_multi_position() {
        assert_eq!(split_positions("1B/OF"), vec!["1B", "OF"]);
    }

    #[test]
    fn split_single_position() {
        assert_eq!(split_positions("SS"), vec!["SS"]);
    }

    #[test]
    fn split_empty_yields_empty_set() {
        assert!(split_positions("").is_empty());
    }

    #[test]
    fn split_trims_whitespace_and_drops_empty_tokens() {
        assert_eq!(split_positions(" 1B / OF /"), vec!["1B", "OF"]);
        assert!(split_positions(" / /").is_empty());
    }

    #[test]
    fn split_dedups_keeping_first() {
        assert_eq!(split_positions("OF/RF/OF"), vec!["OF", "RF"]);
    }

    // -- Verbatim role tagging --

    #[test]
    fn verbatim_role_preserved() {
        assert_eq!(tag_positions("SP", PositionStyle::Verbatim), vec!["SP"]);
        // Unknown codes pass through untouched; they simply match no filter.
        assert_eq!(tag_positions("CL", PositionStyle::Verbatim), vec!["CL"]);
    }

    #[test]
    fn verbatim_empty_yields_empty_set() {
        assert!(tag_positions("  ", PositionStyle::Verbatim).is_empty());
    }

    #[test]
    fn verbatim_does_not_split() {
        assert_eq!(
            tag_positions("SP/RP", PositionStyle::Verbatim),
            vec!["SP/RP"]
        );
    }

    // -- Distinct positions --

    #[test]
    fn distinct_positions_sorted_unique() {
        let records = vec![
            hitter("A", &["OF", "1B"]),
            hitter("B", &["1B"]),
            hitter("C", &["C"]),
        ];
        assert_eq!(distinct_positions(&records), vec!["1B", "C", "OF"]);
    }

    #[test]
    fn distinct_positions_empty_input() {
        assert!(distinct_positions(&[]).is_empty());
    }
}
