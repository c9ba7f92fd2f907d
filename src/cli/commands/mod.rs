pub mod cancel;
pub mod config;
pub mod init;
pub mod map;
pub mod reserve;
pub mod status;

use crate::api::http::HttpApi;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::reservation::DateRange;
use crate::utils::date;

/// Resolve `--from`/`--to` into a range. Defaults: today..today, or a
/// single-day range on the given start. Parse failures abort before any
/// network traffic.
pub fn resolve_range(from: Option<&str>, to: Option<&str>) -> AppResult<DateRange> {
    let start = match from {
        Some(raw) => date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?,
        None => date::today(),
    };
    let end = match to {
        Some(raw) => date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?,
        None => start,
    };
    Ok(DateRange::new(start, end))
}

/// Build the HTTP session and authenticate with the configured identity.
pub fn open_session(cfg: &Config) -> AppResult<Session<HttpApi>> {
    let api = HttpApi::new(cfg)?;
    let mut session = Session::new(api);
    session.authenticate(&cfg.email, &cfg.nom, &cfg.prenom)?;
    Ok(session)
}
