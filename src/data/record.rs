// Canonical player records and per-dataset discovered schemas.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::data::catalog::DatasetHandle;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Which side of the player pool a record (or a selected stat) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hitter,
    Pitcher,
}

impl Category {
    /// Plural display label, used to prefix stat names in the combined view.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Hitter => "Hitters",
            Category::Pitcher => "Pitchers",
        }
    }
}

/// One row of a normalized dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    /// Raw position field as it appeared in the source ("1B/OF", "SP").
    pub position_display: String,
    /// Atomic position codes: "/"-split for hitters, the verbatim role code
    /// for pitchers. Deduped, source order. Empty when the source field is
    /// empty or unparseable; such records match no position filter but stay
    /// in unfiltered views.
    pub positions: Vec<String>,
    pub age: Option<f64>,
    /// Average annual value in millions. Absent when the source has no
    /// AAV-like column or the cell failed to parse; absent is distinct
    /// from zero.
    pub aav: Option<f64>,
    /// Numeric stat values keyed by column name. Never contains the
    /// identifier columns (Name, the raw position string, playerid).
    pub metrics: HashMap<String, f64>,
}

impl PlayerRecord {
    /// Value of a metric column for this record, if present.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    /// Whether this record is eligible at any of the wanted position codes.
    pub fn plays_any(&self, wanted: &HashSet<String>) -> bool {
        self.positions.iter().any(|p| wanted.contains(p))
    }
}

/// Discovered per-dataset schema: the columns exposed as metrics, in source
/// column order. Two datasets may expose entirely different vocabularies.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSchema {
    pub handle: DatasetHandle,
    pub metrics: Vec<String>,
}

impl DatasetSchema {
    /// Whether this dataset exposes the named metric.
    pub fn has_metric(&self, name: &str) -> bool {
        self.metrics.iter().any(|m| m == name)
    }
}

/// One resolved logical dataset: its discovered schema plus the normalized
/// records in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub schema: DatasetSchema,
    pub records: Vec<PlayerRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Player names in source order.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
