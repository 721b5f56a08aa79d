use crate::analyzers::types::OverviewMetrics;
use crate::analyzers::utility::mean;
use crate::loader::DailyRecord;

/// Rows shown in the overview preview table.
pub const PREVIEW_ROWS: usize = 5;

/// Total rentals, average rentals per day and total registered rentals.
pub fn overview(rows: &[DailyRecord]) -> OverviewMetrics {
    let counts: Vec<f64> = rows.iter().map(|r| r.cnt as f64).collect();

    OverviewMetrics {
        total_rentals: rows.iter().map(|r| r.cnt as u64).sum(),
        average_daily_rentals: mean(&counts),
        total_registered: rows.iter().map(|r| r.registered as u64).sum(),
        preview: rows.iter().take(PREVIEW_ROWS).cloned().collect(),
    }
}
