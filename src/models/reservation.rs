use super::spot::SpotId;
use chrono::NaiveDate;
use serde::Serialize;

/// Check-in closes at this hour on the first day of a reservation;
/// spots not checked in by then are released by the operator.
pub const CHECK_IN_DEADLINE_HOUR: u32 = 11;

/// Inclusive date range of a reservation or an availability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Number of days covered, both bounds included.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// True interval overlap: the ranges share at least one day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// A reservation as seen by the client. Server-derived entries (another
/// user's window on a spot record) have no owner id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub spot: SpotId,
    pub user_id: Option<i64>,
    pub range: DateRange,
    pub checked_in: bool,
}

impl Reservation {
    /// Whether this reservation blocks the spot for the queried range.
    pub fn blocks(&self, range: &DateRange) -> bool {
        self.range.overlaps(range)
    }

    pub fn starts_today(&self, today: NaiveDate) -> bool {
        self.range.start == today
    }

    /// Check-in is only possible on the first day, and only once.
    pub fn can_check_in(&self, today: NaiveDate) -> bool {
        self.starts_today(today) && !self.checked_in
    }
}
