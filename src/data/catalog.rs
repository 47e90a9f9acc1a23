// Dataset catalog: logical dataset names resolved to normalized record sets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::DataPaths;
use crate::data::contracts::{self, ContractRow};
use crate::data::normalize::normalize;
use crate::data::position::PositionStyle;
use crate::data::record::{Category, Dataset};
use crate::data::DatasetError;

// ---------------------------------------------------------------------------
// Logical dataset handles
// ---------------------------------------------------------------------------

/// The closed enumeration of logical datasets the tool serves. Anything
/// outside this set is a programming error surfaced as
/// `DatasetError::Unknown` at the string boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetHandle {
    HittersCurrent,
    HittersCareer,
    PitchersCurrent,
    PitchersCareer,
    ProjectedHitters,
    ProjectedPitchers,
    Contracts,
}

/// Which season slice the free-agent stat datasets cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearMode {
    Current,
    Career,
}

impl YearMode {
    pub fn label(&self) -> &'static str {
        match self {
            YearMode::Current => "Current",
            YearMode::Career => "Career",
        }
    }

    pub fn toggled(&self) -> YearMode {
        match self {
            YearMode::Current => YearMode::Career,
            YearMode::Career => YearMode::Current,
        }
    }
}

impl DatasetHandle {
    pub const ALL: [DatasetHandle; 7] = [
        DatasetHandle::HittersCurrent,
        DatasetHandle::HittersCareer,
        DatasetHandle::PitchersCurrent,
        DatasetHandle::PitchersCareer,
        DatasetHandle::ProjectedHitters,
        DatasetHandle::ProjectedPitchers,
        DatasetHandle::Contracts,
    ];

    /// Stable logical name, also used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            DatasetHandle::HittersCurrent => "hitters-current",
            DatasetHandle::HittersCareer => "hitters-career",
            DatasetHandle::PitchersCurrent => "pitchers-current",
            DatasetHandle::PitchersCareer => "pitchers-career",
            DatasetHandle::ProjectedHitters => "projected-hitters",
            DatasetHandle::ProjectedPitchers => "projected-pitchers",
            DatasetHandle::Contracts => "contracts",
        }
    }

    /// Parse a logical name back into a handle.
    pub fn from_name(name: &str) -> Result<DatasetHandle, DatasetError> {
        DatasetHandle::ALL
            .into_iter()
            .find(|h| h.name() == name)
            .ok_or_else(|| DatasetError::Unknown(name.to_string()))
    }

    /// Pool side this dataset feeds. Contracts span both and have none.
    pub fn category(&self) -> Option<Category> {
        match self {
            DatasetHandle::HittersCurrent
            | DatasetHandle::HittersCareer
            | DatasetHandle::ProjectedHitters => Some(Category::Hitter),
            DatasetHandle::PitchersCurrent
            | DatasetHandle::PitchersCareer
            | DatasetHandle::ProjectedPitchers => Some(Category::Pitcher),
            DatasetHandle::Contracts => None,
        }
    }

    /// How this dataset's position field is tagged.
    pub fn position_style(&self) -> PositionStyle {
        match self.category() {
            Some(Category::Hitter) => PositionStyle::Split,
            Some(Category::Pitcher) | None => PositionStyle::Verbatim,
        }
    }

    /// Hitter stat dataset for the given year mode.
    pub fn hitters(year: YearMode) -> DatasetHandle {
        match year {
            YearMode::Current => DatasetHandle::HittersCurrent,
            YearMode::Career => DatasetHandle::HittersCareer,
        }
    }

    /// Pitcher stat dataset for the given year mode.
    pub fn pitchers(year: YearMode) -> DatasetHandle {
        match year {
            YearMode::Current => DatasetHandle::PitchersCurrent,
            YearMode::Career => DatasetHandle::PitchersCareer,
        }
    }
}

impl std::fmt::Display for DatasetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Maps logical dataset handles to configured file paths and resolves them
/// through the normalizer. Stateless: every `resolve` re-reads the source,
/// so repeated resolution is idempotent modulo file mutation and there is
/// no staleness to manage.
#[derive(Debug, Clone)]
pub struct Catalog {
    paths: DataPaths,
}

impl Catalog {
    pub fn new(paths: DataPaths) -> Catalog {
        Catalog { paths }
    }

    /// Configured file path for a logical dataset.
    pub fn path_for(&self, handle: DatasetHandle) -> &str {
        match handle {
            DatasetHandle::HittersCurrent => &self.paths.hitters_current,
            DatasetHandle::HittersCareer => &self.paths.hitters_career,
            DatasetHandle::PitchersCurrent => &self.paths.pitchers_current,
            DatasetHandle::PitchersCareer => &self.paths.pitchers_career,
            DatasetHandle::ProjectedHitters => &self.paths.projected_hitters,
            DatasetHandle::ProjectedPitchers => &self.paths.projected_pitchers,
            DatasetHandle::Contracts => &self.paths.contracts,
        }
    }

    /// Resolve a logical dataset to its normalized records.
    pub fn resolve(&self, handle: DatasetHandle) -> Result<Dataset, DatasetError> {
        let path = self.path_for(handle);
        let bytes = std::fs::read(Path::new(path)).map_err(|e| DatasetError::Io {
            path: path.to_string(),
            source: e,
        })?;
        normalize(handle, &bytes)
    }

    /// Resolve a dataset by its logical name. Names outside the known
    /// enumeration are rejected with `DatasetError::Unknown`.
    pub fn resolve_named(&self, name: &str) -> Result<Dataset, DatasetError> {
        self.resolve(DatasetHandle::from_name(name)?)
    }

    /// Typed contract rows, preserving the display columns the generic view
    /// drops (see `data::contracts`).
    pub fn contracts(&self) -> Result<Vec<ContractRow>, DatasetError> {
        let path = self.path_for(DatasetHandle::Contracts);
        let bytes = std::fs::read(Path::new(path)).map_err(|e| DatasetError::Io {
            path: path.to_string(),
            source: e,
        })?;
        contracts::load_contracts(&bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
