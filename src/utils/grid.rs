//! Parking grid rendering for CLI outputs.

use crate::core::availability::SpotStatus;
use crate::models::layout;
use crate::models::spot::SpotId;
use crate::utils::colors;
use std::collections::BTreeMap;

pub struct Grid<'a> {
    statuses: &'a BTreeMap<SpotId, SpotStatus>,
    highlight: Option<&'a SpotId>,
}

impl<'a> Grid<'a> {
    pub fn new(statuses: &'a BTreeMap<SpotId, SpotStatus>) -> Self {
        Self {
            statuses,
            highlight: None,
        }
    }

    /// Mark one spot (the user's reservation) with a cyan cell.
    pub fn highlight(mut self, spot: Option<&'a SpotId>) -> Self {
        self.highlight = spot;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for row in layout::ROWS {
            let marker = if layout::is_electric_row(row) { "⚡" } else { "  " };
            out.push_str(&format!("{row} {marker} "));

            for n in 1..=layout::SPOTS_PER_ROW {
                let id = SpotId::from_parts(row, n);
                let label = format!("[{id}]");
                let cell = match self.statuses.get(&id) {
                    Some(_) if self.highlight == Some(&id) => {
                        format!("{}{label}{}", colors::CYAN, colors::RESET)
                    }
                    Some(status) => colors::colorize_spot(&label, status),
                    None => label,
                };
                out.push_str(&cell);
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }

    pub fn legend(&self) -> String {
        format!(
            "{}available{}  {}reserved{}  {}filtered out{}  {}yours{}  ⚡ electric row\n",
            colors::GREEN,
            colors::RESET,
            colors::RED,
            colors::RESET,
            colors::GREY,
            colors::RESET,
            colors::CYAN,
            colors::RESET,
        )
    }

    /// Footer line with layout totals, as shown under the map.
    pub fn footer(&self) -> String {
        let free = self.statuses.values().filter(|s| s.available).count();
        format!(
            "{} spots total | {} with electric charger (rows {} and {}) | {} available for this range\n",
            layout::total_spots(),
            layout::electric_spots(),
            layout::ROWS[0],
            layout::ROWS[layout::ROWS.len() - 1],
            free,
        )
    }
}
