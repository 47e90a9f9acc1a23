// Record normalization: raw CSV bytes -> canonical player records.
//
// Column handling is dynamic: apart from the identifier columns, whatever
// uniformly-numeric columns a source carries become that dataset's metric
// vocabulary. Currency and performance-value columns are coerced per cell,
// so one bad cell degrades one field, never the row or the column.

use std::collections::HashMap;

use tracing::warn;

use crate::data::catalog::DatasetHandle;
use crate::data::position::tag_positions;
use crate::data::record::{Dataset, DatasetSchema, PlayerRecord};
use crate::data::DatasetError;

// ---------------------------------------------------------------------------
// Column recognition
// ---------------------------------------------------------------------------

/// Columns treated as currency ("AAV", "Med AAV"): separators stripped,
/// values normalized to millions, parse failures become absent.
fn is_currency_column(name: &str) -> bool {
    name.to_uppercase().contains("AAV")
}

/// Columns coerced per cell rather than required to be uniformly numeric:
/// performance values ("WAR", "Proj WAR") and ages.
fn is_coerced_column(name: &str) -> bool {
    let upper = name.to_uppercase();
    upper == "WAR" || upper == "PROJ WAR" || is_age_column(name)
}

fn is_age_column(name: &str) -> bool {
    name.eq_ignore_ascii_case("age")
}

fn is_name_column(name: &str) -> bool {
    name.eq_ignore_ascii_case("name")
}

fn is_position_column(name: &str) -> bool {
    name.eq_ignore_ascii_case("position") || name.eq_ignore_ascii_case("pos")
}

/// Internal row identifier carried by some exports; never useful downstream.
fn is_internal_id_column(name: &str) -> bool {
    name.eq_ignore_ascii_case("playerid")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    /// AAV-like: cleaned, scaled to millions, absent on parse failure.
    Currency,
    /// WAR/Age-like: plain numeric parse, absent on parse failure.
    Coerced,
    /// Any other column whose cells are uniformly numeric.
    Plain,
}

// ---------------------------------------------------------------------------
// Cell parsing
// ---------------------------------------------------------------------------

/// Decode dataset bytes: UTF-8 when valid, otherwise ISO-8859-1 (each byte
/// is its own code point). Free-agent exports carry accented names in a
/// single-byte Western encoding.
pub fn decode_latin1(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Parse a plain numeric cell. Empty, unparseable, and non-finite cells all
/// come back as None.
pub(crate) fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a currency cell: strip "$" and thousands separators, then parse.
/// Values at or above 1000 are raw dollars and are scaled to millions, so
/// "$40,000,000" and a contracts-table 21.5 land in the same unit.
/// Unparseable and negative cells come back as None, never zero.
pub(crate) fn parse_currency(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    let value = parse_number(&cleaned)?;
    if value < 0.0 {
        return None;
    }
    if value >= 1000.0 {
        Some(value / 1_000_000.0)
    } else {
        Some(value)
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize one dataset's raw bytes into records plus a discovered schema.
///
/// Pure function of its input. Per-row and per-cell problems are logged and
/// recovered; only a dataset with no Name column or no data rows at all is
/// rejected as malformed.
pub fn normalize(handle: DatasetHandle, bytes: &[u8]) -> Result<Dataset, DatasetError> {
    let text = decode_latin1(bytes);
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DatasetError::Csv {
            name: handle.name().to_string(),
            source: e,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let name_idx = headers
        .iter()
        .position(|h| is_name_column(h))
        .ok_or_else(|| DatasetError::Malformed {
            name: handle.name().to_string(),
            reason: "no Name column".into(),
        })?;
    let pos_idx = headers.iter().position(|h| is_position_column(h));

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for result in reader.records() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!("{}: skipping unreadable row: {}", handle.name(), e),
        }
    }
    if rows.is_empty() {
        return Err(DatasetError::Malformed {
            name: handle.name().to_string(),
            reason: "no data rows".into(),
        });
    }

    // Classify every non-identifier column. Coerced kinds are taken on
    // faith; plain columns qualify only when every non-empty cell parses.
    let mut columns: Vec<(usize, String, ColumnKind)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx == name_idx || Some(idx) == pos_idx || is_internal_id_column(header) {
            continue;
        }
        if is_currency_column(header) {
            columns.push((idx, header.clone(), ColumnKind::Currency));
        } else if is_coerced_column(header) {
            columns.push((idx, header.clone(), ColumnKind::Coerced));
        } else {
            let uniformly_numeric = rows.iter().all(|row| {
                row.get(idx)
                    .map_or(true, |cell| cell.trim().is_empty() || parse_number(cell).is_some())
            });
            if uniformly_numeric {
                columns.push((idx, header.clone(), ColumnKind::Plain));
            }
        }
    }

    let style = handle.position_style();
    let mut records = Vec::new();
    for row in &rows {
        let name = row.get(name_idx).unwrap_or("").trim().to_string();
        if name.is_empty() {
            warn!("{}: skipping row with empty name", handle.name());
            continue;
        }

        let position_display = pos_idx
            .and_then(|idx| row.get(idx))
            .unwrap_or("")
            .trim()
            .to_string();
        let positions = tag_positions(&position_display, style);

        let mut metrics = HashMap::new();
        let mut age = None;
        let mut aav = None;
        for (idx, column, kind) in &columns {
            let cell = row.get(*idx).unwrap_or("");
            let parsed = match kind {
                ColumnKind::Currency => parse_currency(cell),
                ColumnKind::Coerced | ColumnKind::Plain => parse_number(cell),
            };
            match parsed {
                Some(value) => {
                    metrics.insert(column.clone(), value);
                    if *kind == ColumnKind::Currency && aav.is_none() {
                        aav = Some(value);
                    }
                    if is_age_column(column) {
                        age = Some(value);
                    }
                }
                None => {
                    if !cell.trim().is_empty() && *kind != ColumnKind::Plain {
                        warn!(
                            "{}: unparseable {} value {:?} for '{}', treating as absent",
                            handle.name(),
                            column,
                            cell,
                            name
                        );
                    }
                }
            }
        }

        records.push(PlayerRecord {
            name,
            position_display,
            positions,
            age,
            aav,
            metrics,
        });
    }

    let schema = DatasetSchema {
        handle,
        metrics: columns.into_iter().map(|(_, name, _)| name).collect(),
    };

    Ok(Dataset { schema, records })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
