use super::layout;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parking spot identifier: row letter + two-digit number ("A01".."F10").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(String);

impl SpotId {
    /// Parse and validate a user-supplied spot id against the layout.
    /// Accepts lowercase input ("a01" -> "A01").
    pub fn parse(raw: &str) -> AppResult<Self> {
        let s = raw.trim().to_uppercase();
        let bytes = s.as_bytes();
        if bytes.len() != 3 {
            return Err(AppError::InvalidSpot(format!(
                "'{raw}' (expected row letter + two digits, e.g. A01)"
            )));
        }
        let row = bytes[0] as char;
        if !layout::contains_row(row) {
            return Err(AppError::InvalidSpot(format!(
                "'{raw}' (row must be one of A..{})",
                layout::ROWS[layout::ROWS.len() - 1]
            )));
        }
        let num: u32 = s[1..]
            .parse()
            .map_err(|_| AppError::InvalidSpot(format!("'{raw}' (number must be 01..{})", layout::SPOTS_PER_ROW)))?;
        if num < 1 || num > layout::SPOTS_PER_ROW {
            return Err(AppError::InvalidSpot(format!(
                "'{raw}' (number must be 01..{})",
                layout::SPOTS_PER_ROW
            )));
        }
        Ok(Self(s))
    }

    /// Build an id from layout coordinates. Callers pass values already
    /// bounded by the layout; no validation is repeated here.
    pub fn from_parts(row: char, number: u32) -> Self {
        Self(format!("{row}{number:02}"))
    }

    pub fn row(&self) -> char {
        // invariant: id is always 3 ASCII bytes
        self.0.as_bytes()[0] as char
    }

    pub fn number(&self) -> u32 {
        self.0[1..].parse().unwrap_or(0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spot record as served by `GET /spots/available`.
/// Reservation window bounds arrive as ISO strings; only the date part is
/// meaningful for availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    pub electrical: bool,
    pub is_free: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_to: Option<String>,
}

impl Spot {
    /// Current reservation window, if the record carries a complete one.
    /// A malformed or half-open window is treated as absent.
    pub fn window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let from = date::parse_iso_date(self.reserved_from.as_deref()?)?;
        let to = date::parse_iso_date(self.reserved_to.as_deref()?)?;
        Some((from, to))
    }
}
