use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::reservation::{CHECK_IN_DEADLINE_HOUR, DateRange};
use crate::ui::messages;
use crate::utils::colors;
use crate::utils::date;

/// Show the user's reservation and its check-in state.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let today = date::today();
    let range = DateRange::single(today);

    let mut session = open_session(cfg)?;
    session.load_data(&range, false)?;

    let Some(user) = session.user() else {
        return Ok(());
    };
    println!(
        "👤 {} ({})",
        user.email,
        if user.roles.is_empty() {
            "no roles".to_string()
        } else {
            user.roles.join(", ")
        }
    );
    println!();

    match &session.view().my_reservation {
        None => {
            messages::info("You have no reservation at the moment");
        }
        Some(reservation) => {
            println!("🚗 Spot       : {}", reservation.spot);
            println!("📅 From       : {}", date::format_date(&reservation.range.start));
            println!("📅 To         : {}", date::format_date(&reservation.range.end));
            println!(
                "🎫 Check-in   : {}",
                colors::colorize_check_in(
                    reservation.checked_in,
                    if reservation.checked_in { "done" } else { "required" },
                )
            );

            if reservation.starts_today(today) {
                messages::warning(format!(
                    "Your reservation starts today: check in before {CHECK_IN_DEADLINE_HOUR}:00 or the spot is released"
                ));
            }
        }
    }

    Ok(())
}
