// Contract term projection.
//
// A deliberately crude, monotonic step function inherited from the original
// tool: an unvalidated heuristic, not a fitted model. The exact thresholds
// and constants are load-bearing for compatibility and pinned by tests.

use serde::{Deserialize, Serialize};

/// AAV floor, in millions. Applies regardless of how low or negative the
/// projected value is.
pub const MIN_AAV: f64 = 0.74;

/// Millions of AAV per unit of projected value.
pub const AAV_PER_VALUE: f64 = 2.5;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Projected contract shape: length, average annual value, total value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub years: u32,
    /// In millions.
    pub aav: f64,
    /// In millions; always `aav * years`.
    pub total: f64,
}

/// A projection attached to a player identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractProjection {
    pub player_name: String,
    /// The performance value that drove the heuristic (projected WAR).
    pub projected_value: f64,
    pub years: u32,
    pub aav: f64,
    pub total: f64,
}

impl ContractProjection {
    pub fn for_player(name: impl Into<String>, projected_value: f64) -> ContractProjection {
        let terms = project_contract(projected_value);
        ContractProjection {
            player_name: name.into(),
            projected_value,
            years: terms.years,
            aav: terms.aav,
            total: terms.total,
        }
    }
}

// ---------------------------------------------------------------------------
// Heuristic
// ---------------------------------------------------------------------------

/// Project contract terms from a projected performance value.
///
/// years = 6 at value >= 5, 4 at 3 <= value < 5, 2 below 3.
/// aav = max(value * 2.5, 0.74) in millions; total = aav * years.
pub fn project_contract(projected_value: f64) -> ContractTerms {
    let years: u32 = if projected_value >= 5.0 {
        6
    } else if projected_value >= 3.0 {
        4
    } else {
        2
    };
    let aav = (projected_value * AAV_PER_VALUE).max(MIN_AAV);
    ContractTerms {
        years,
        aav,
        total: aav * years as f64,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
