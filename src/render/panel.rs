//! Metric panel and preview table for the overview page.

use std::fmt::Write as _;

use crate::analyzers::types::OverviewMetrics;
use crate::analyzers::utility::{round2, thousands};
use crate::loader::DailyRecord;
use crate::render::escape;

/// A label with its already-formatted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

pub fn overview_metrics(m: &OverviewMetrics) -> [Metric; 3] {
    [
        Metric {
            label: "Total Rentals",
            value: thousands(m.total_rentals),
        },
        Metric {
            label: "Average Daily Rentals",
            value: m
                .average_daily_rentals
                .map(|v| round2(v).to_string())
                .unwrap_or_else(|| "n/a".to_string()),
        },
        Metric {
            label: "Total Registered Users",
            value: thousands(m.total_registered),
        },
    ]
}

pub fn metric_panel(metrics: &[Metric]) -> String {
    let mut html = String::from(r#"<div class="metrics">"#);
    for metric in metrics {
        let _ = write!(
            html,
            r#"<div class="metric"><span class="metric-label">{}</span><span class="metric-value">{}</span></div>"#,
            escape(metric.label),
            escape(&metric.value)
        );
    }
    html.push_str("</div>");
    html
}

const PREVIEW_COLUMNS: [&str; 16] = [
    "instant",
    "dteday",
    "season",
    "yr",
    "mnth",
    "holiday",
    "weekday",
    "workingday",
    "weathersit",
    "temp",
    "atemp",
    "hum",
    "windspeed",
    "casual",
    "registered",
    "cnt",
];

fn preview_cells(r: &DailyRecord) -> [String; 16] {
    [
        r.instant.to_string(),
        r.dteday.format("%Y-%m-%d").to_string(),
        r.season.to_string(),
        r.yr.to_string(),
        r.mnth.to_string(),
        r.holiday.to_string(),
        r.weekday.to_string(),
        r.workingday.to_string(),
        r.weathersit.to_string(),
        r.temp.to_string(),
        r.atemp.to_string(),
        r.hum.to_string(),
        r.windspeed.to_string(),
        r.casual.to_string(),
        r.registered.to_string(),
        r.cnt.to_string(),
    ]
}

pub fn preview_table(rows: &[DailyRecord]) -> String {
    let mut html = String::from(r#"<table class="preview"><thead><tr>"#);
    for column in PREVIEW_COLUMNS {
        let _ = write!(html, "<th>{column}</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for row in rows {
        html.push_str("<tr>");
        for cell in preview_cells(row) {
            let _ = write!(html, "<td>{}</td>", escape(&cell));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}
