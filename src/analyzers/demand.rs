use tracing::debug;

use crate::analyzers::types::{DemandBucket, DemandLevel};
use crate::loader::DailyRecord;

/// Places a day's total rentals into a right-closed bin.
///
/// | Range          | Level  |
/// |----------------|--------|
/// | (0, 1000]      | Low    |
/// | (1000, 3000]   | Medium |
/// | (3000, 6000]   | High   |
///
/// Anything else (zero, or above 6000) has no level.
pub fn classify(cnt: u32) -> Option<DemandLevel> {
    match cnt {
        1..=1000 => Some(DemandLevel::Low),
        1001..=3000 => Some(DemandLevel::Medium),
        3001..=6000 => Some(DemandLevel::High),
        _ => None,
    }
}

/// Number of days per demand level, in `Low`, `Medium`, `High` order.
///
/// Every level is listed, including empty ones. Days outside all bins are
/// not counted anywhere.
pub fn demand(rows: &[DailyRecord]) -> Vec<DemandBucket> {
    let mut days = [0usize; 3];
    let mut dropped = 0usize;

    for row in rows {
        match classify(row.cnt) {
            Some(level) => days[level as usize] += 1,
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "Days outside every demand bin");
    }

    DemandLevel::ALL
        .iter()
        .map(|&level| DemandBucket {
            level,
            days: days[level as usize],
        })
        .collect()
}
