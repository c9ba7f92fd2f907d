//! Fixed parking layout: 6 rows (A..F) of 10 spots each.
//! Chargers sit on the outer rows, next to the power feed.

use super::spot::SpotId;

pub const ROWS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];
pub const SPOTS_PER_ROW: u32 = 10;

/// Electric chargers are installed on the first and last rows only.
pub fn is_electric_row(row: char) -> bool {
    row == ROWS[0] || row == ROWS[ROWS.len() - 1]
}

pub fn contains_row(row: char) -> bool {
    ROWS.contains(&row)
}

pub fn total_spots() -> usize {
    ROWS.len() * SPOTS_PER_ROW as usize
}

pub fn electric_spots() -> usize {
    ROWS.iter().filter(|r| is_electric_row(**r)).count() * SPOTS_PER_ROW as usize
}

/// All spot ids of the layout, in row order (A01..F10).
pub fn all_spots() -> Vec<SpotId> {
    let mut out = Vec::with_capacity(total_spots());
    for row in ROWS {
        for n in 1..=SPOTS_PER_ROW {
            out.push(SpotId::from_parts(row, n));
        }
    }
    out
}
