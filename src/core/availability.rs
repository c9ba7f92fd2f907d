//! Spot availability resolution.
//!
//! Pure function of the known reservations and the requested filters;
//! invoked fresh on every query, owns no state.

use crate::models::layout;
use crate::models::reservation::{DateRange, Reservation};
use crate::models::spot::SpotId;
use std::collections::BTreeMap;

/// Resolved state of one spot for a queried date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotStatus {
    pub reserved: bool,
    pub available: bool,
    pub electric: bool,
}

/// Compute the status of every spot in the layout.
///
/// Per spot:
/// - `electric`: its row is the first or last row of the layout;
/// - `reserved`: some reservation on this spot overlaps the queried range
///   (inclusive on both sides);
/// - `available`: false when `needs_electric` and the spot has no charger
///   (hard filter), otherwise the negation of `reserved`.
///
/// An empty reservation set leaves the layout fully open, modulo the
/// electric filter. An overlapping reservation blocks the spot for the
/// whole queried range; there are no partial-day semantics.
pub fn resolve(
    reservations: &[Reservation],
    range: &DateRange,
    needs_electric: bool,
) -> BTreeMap<SpotId, SpotStatus> {
    let mut out = BTreeMap::new();

    for spot in layout::all_spots() {
        let electric = layout::is_electric_row(spot.row());
        let reserved = reservations
            .iter()
            .any(|r| r.spot == spot && r.blocks(range));
        let available = if needs_electric && !electric {
            false
        } else {
            !reserved
        };
        out.insert(spot, SpotStatus { reserved, available, electric });
    }

    out
}
