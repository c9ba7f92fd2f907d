//! Date-range validation for reservation requests.

use crate::config::Config;
use crate::models::user::Role;
use crate::utils::date;
use chrono::NaiveDate;

/// Per-field validation outcome. The keys are independent and several may
/// be set at once; a field never carries more than one message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.duration.is_none()
    }

    /// (field, message) pairs for inline display.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(m) = &self.start_date {
            out.push(("start date", m.as_str()));
        }
        if let Some(m) = &self.end_date {
            out.push(("end date", m.as_str()));
        }
        if let Some(m) = &self.duration {
            out.push(("duration", m.as_str()));
        }
        out
    }

    pub fn failed_fields(&self) -> String {
        self.entries()
            .iter()
            .map(|(f, _)| *f)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Role-dependent maximum reservation length, resolved from configuration
/// once per validation call.
#[derive(Debug, Clone, Copy)]
pub struct DurationPolicy {
    pub max_days: i64,
    pub max_days_manager: i64,
}

impl DurationPolicy {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            max_days: cfg.max_days,
            max_days_manager: cfg.max_days_manager,
        }
    }

    pub fn max_days_for(&self, roles: &[Role]) -> i64 {
        if roles.contains(&Role::Manager) {
            self.max_days_manager
        } else {
            self.max_days
        }
    }
}

/// Validate a requested range. Rules, in order:
/// (a) both raw dates parse as YYYY-MM-DD;
/// (b) the start date is not before `today` (requires (a) for the start);
/// (c) the end date is not before the start date (requires (a) for both);
/// (d) the inclusive span fits within `max_days` (requires (a) and (c),
///     so a reversed range never also reports a duration error).
pub fn validate_range(
    start_raw: &str,
    end_raw: &str,
    today: NaiveDate,
    max_days: i64,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let start = date::parse_date(start_raw);
    let end = date::parse_date(end_raw);

    if start.is_none() {
        errors.start_date = Some(format!("invalid date '{start_raw}' (expected YYYY-MM-DD)"));
    }
    if end.is_none() {
        errors.end_date = Some(format!("invalid date '{end_raw}' (expected YYYY-MM-DD)"));
    }

    if let Some(s) = start
        && errors.start_date.is_none()
        && s < today
    {
        errors.start_date = Some("start date cannot be in the past".to_string());
    }

    if let (Some(s), Some(e)) = (start, end)
        && errors.end_date.is_none()
    {
        if e < s {
            errors.end_date = Some("end date must not be before the start date".to_string());
        } else {
            let span = (e - s).num_days() + 1;
            if span > max_days {
                errors.duration =
                    Some(format!("maximum reservation length is {max_days} days (requested {span})"));
            }
        }
    }

    errors
}
