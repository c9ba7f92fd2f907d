use crate::cli::commands::{open_session, resolve_range};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::grid::Grid;

/// Show the parking map with per-spot availability for a date range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Map { from, to, electric } = cmd {
        //
        // 1. Resolve the queried range (before any network traffic)
        //
        let range = resolve_range(from.as_deref(), to.as_deref())?;

        //
        // 2. Authenticate and load the current view
        //
        let mut session = open_session(cfg)?;
        session.load_data(&range, *electric)?;

        //
        // 3. Render
        //
        let view = session.view();
        let mine = view.my_reservation.as_ref().map(|r| &r.spot);

        println!(
            "Parking map {} → {}{}\n",
            date::format_date(&range.start),
            date::format_date(&range.end),
            if *electric { " (electric only)" } else { "" },
        );

        let grid = Grid::new(&view.statuses).highlight(mine);
        print!("{}", grid.render());
        println!();
        print!("{}", grid.legend());
        print!("{}", grid.footer());
    }
    Ok(())
}
