use std::collections::BTreeMap;

use crate::analyzers::types::{DayType, DayTypeGroup};
use crate::analyzers::utility::mean;
use crate::loader::DailyRecord;

/// Mean casual and registered rentals for weekdays and weekends.
///
/// Only day types present in `rows` appear; `Weekday` sorts before `Weekend`.
pub fn user_pattern(rows: &[DailyRecord]) -> Vec<DayTypeGroup> {
    let mut groups: BTreeMap<DayType, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for row in rows {
        let (casual, registered) = groups.entry(DayType::from_weekday(row.weekday)).or_default();
        casual.push(row.casual as f64);
        registered.push(row.registered as f64);
    }

    groups
        .into_iter()
        .filter_map(|(day_type, (casual, registered))| {
            Some(DayTypeGroup {
                day_type,
                mean_casual: mean(&casual)?,
                mean_registered: mean(&registered)?,
            })
        })
        .collect()
}
