// Typed contract rows for the projections view and comparables query.
//
// The generic normalized view keeps only numeric columns; the contracts CSV
// also carries display columns (Signing Team) and median contract figures
// the projections tab needs, so contracts additionally load through a typed
// row. Numeric fields are coerced per cell: a bad cell nulls that one field
// and the row survives.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::data::normalize::{decode_latin1, parse_currency, parse_number};
use crate::data::DatasetError;

// ---------------------------------------------------------------------------
// Public type
// ---------------------------------------------------------------------------

/// One historical free-agent contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractRow {
    pub name: String,
    /// Single position code as recorded on the contract ("SP", "1B").
    pub position: String,
    pub proj_war: Option<f64>,
    pub age: Option<f64>,
    pub med_years: Option<f64>,
    /// Median total value, in millions.
    pub med_total: Option<f64>,
    /// Median average annual value, in millions.
    pub med_aav: Option<f64>,
    pub signing_team: String,
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// Raw contracts CSV row. Numeric fields deserialize as strings so that a
/// malformed cell degrades one field instead of dropping the row. Extra
/// columns are absorbed via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawContract {
    Name: String,
    #[serde(default)]
    Position: String,
    #[serde(rename = "Proj WAR", default)]
    ProjWar: String,
    #[serde(default)]
    Age: String,
    #[serde(rename = "Med Years", default)]
    MedYears: String,
    #[serde(rename = "Med Total", default)]
    MedTotal: String,
    #[serde(rename = "Med AAV", alias = "AAV", default)]
    MedAav: String,
    #[serde(rename = "Signing Team", default)]
    SigningTeam: String,
    /// Absorb any extra columns the export includes.
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Load typed contract rows from raw CSV bytes (ISO-8859-1 tolerated).
pub fn load_contracts(bytes: &[u8]) -> Result<Vec<ContractRow>, DatasetError> {
    let text = decode_latin1(bytes);
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for result in reader.deserialize::<RawContract>() {
        match result {
            Ok(raw) => {
                let name = raw.Name.trim().to_string();
                if name.is_empty() {
                    warn!("contracts: skipping row with empty name");
                    continue;
                }
                rows.push(ContractRow {
                    name,
                    position: raw.Position.trim().to_string(),
                    proj_war: parse_number(&raw.ProjWar),
                    age: parse_number(&raw.Age),
                    med_years: parse_number(&raw.MedYears),
                    med_total: parse_currency(&raw.MedTotal),
                    med_aav: parse_currency(&raw.MedAav),
                    signing_team: raw.SigningTeam.trim().to_string(),
                });
            }
            Err(e) => {
                warn!("contracts: skipping malformed row: {}", e);
            }
        }
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
