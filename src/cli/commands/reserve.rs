use crate::cli::commands::{open_session, resolve_range};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate::{self, DurationPolicy};
use crate::errors::{AppError, AppResult};
use crate::models::spot::SpotId;
use crate::ui::messages;
use crate::utils::date;

/// Reserve a spot for a date range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reserve {
        spot,
        from,
        to,
        electric,
    } = cmd
    {
        //
        // 1. Parse the spot id (local, before any network traffic)
        //
        let spot_id = SpotId::parse(spot)?;

        //
        // 2. Authenticate (the duration limit depends on the user's roles)
        //
        let mut session = open_session(cfg)?;

        //
        // 3. Validate the requested range
        //
        let today = date::today();
        let start_raw = from.clone().unwrap_or_else(|| date::format_date(&today));
        let end_raw = to.clone().unwrap_or_else(|| start_raw.clone());

        let policy = DurationPolicy::from_config(cfg);
        let roles = session.user().map(|u| u.role_list()).unwrap_or_default();
        let max_days = policy.max_days_for(&roles);

        let errors = validate::validate_range(&start_raw, &end_raw, today, max_days);
        if !errors.is_empty() {
            for (field, message) in errors.entries() {
                messages::warning(format!("{field}: {message}"));
            }
            return Err(AppError::Validation(errors.failed_fields()));
        }

        //
        // 4. Load the current view and reserve
        //
        let range = resolve_range(Some(&start_raw), Some(&end_raw))?;
        session.load_data(&range, *electric)?;
        session.reserve(&spot_id, &range, *electric)?;

        messages::success(format!(
            "Reservation confirmed for spot {} ({} → {})",
            spot_id, start_raw, end_raw
        ));
    }
    Ok(())
}
