use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::reservation::DateRange;
use crate::ui::messages;
use crate::utils::date;

/// Cancel the current reservation, after explicit confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cancel { yes } = cmd {
        if !*yes && !messages::confirm("Are you sure you want to cancel your reservation?") {
            messages::info("Cancellation aborted");
            return Ok(());
        }

        let range = DateRange::single(date::today());

        let mut session = open_session(cfg)?;
        session.load_data(&range, false)?;
        session.cancel(&range, false)?;

        messages::success("Reservation cancelled");
    }
    Ok(())
}
