use std::collections::BTreeMap;
use tracing::warn;

use crate::analyzers::types::WeatherGroup;
use crate::analyzers::utility::mean;
use crate::loader::DailyRecord;

/// Display labels for `weathersit` codes.
static WEATHER_LABELS: &[(u8, &str)] = &[
    (1, "1 - Clear"),
    (2, "2 - Mist/Cloudy"),
    (3, "3 - Light Rain/Snow"),
    (4, "4 - Heavy Rain/Snow"),
];

pub fn weather_label(code: u8) -> Option<&'static str> {
    WEATHER_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Mean `cnt` per weather code, ordered by code.
///
/// Codes without a label are kept with `label: None`.
pub fn weather(rows: &[DailyRecord]) -> Vec<WeatherGroup> {
    let mut groups: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.weathersit).or_default().push(row.cnt as f64);
    }

    groups
        .into_iter()
        .filter_map(|(code, counts)| {
            let label = weather_label(code);
            if label.is_none() {
                warn!(code, days = counts.len(), "Weather code has no label");
            }
            Some(WeatherGroup {
                code,
                label,
                mean_cnt: mean(&counts)?,
            })
        })
        .collect()
}
