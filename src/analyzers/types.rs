//! Summary types produced by the aggregations.

use serde::Serialize;

use crate::loader::DailyRecord;

/// Headline numbers for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewMetrics {
    pub total_rentals: u64,
    /// `None` when the table has no rows.
    pub average_daily_rentals: Option<f64>,
    pub total_registered: u64,
    /// Leading rows of the daily table, shown under the metrics.
    pub preview: Vec<DailyRecord>,
}

/// Mean daily rentals for one `weathersit` code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherGroup {
    pub code: u8,
    /// `None` for codes outside 1–4.
    pub label: Option<&'static str>,
    pub mean_cnt: f64,
}

/// Weekday/weekend classification of a `weekday` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Codes 0 (Sunday) and 6 (Saturday) are the weekend.
    pub fn from_weekday(code: u8) -> Self {
        match code {
            0 | 6 => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

/// Mean casual and registered rentals for one [`DayType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTypeGroup {
    pub day_type: DayType,
    pub mean_casual: f64,
    pub mean_registered: f64,
}

/// Demand level of a day, by total rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    pub const ALL: [DemandLevel; 3] = [DemandLevel::Low, DemandLevel::Medium, DemandLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            DemandLevel::Low => "Low",
            DemandLevel::Medium => "Medium",
            DemandLevel::High => "High",
        }
    }
}

/// Number of days that fell into one demand level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandBucket {
    pub level: DemandLevel,
    pub days: usize,
}

/// Result of one view's aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum Summary {
    Overview(OverviewMetrics),
    Weather(Vec<WeatherGroup>),
    UserPattern(Vec<DayTypeGroup>),
    Demand(Vec<DemandBucket>),
}
