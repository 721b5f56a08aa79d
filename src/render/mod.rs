//! HTML/SVG rendering of view summaries.
//!
//! [`section`] turns one [`Summary`] into the content area of a page;
//! [`page::render_page`] wraps it with the sidebar.

pub mod chart;
pub mod page;
pub mod panel;
pub mod theme;

use anyhow::{Context, Result};

use crate::analyzers::Summary;
use crate::analyzers::types::{DayTypeGroup, DemandBucket, OverviewMetrics, WeatherGroup};
use chart::BarChart;
use theme::{PRIMARY, SECONDARY};

/// Escapes text for use in HTML/SVG content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the content area for a summary.
pub fn section(summary: &Summary) -> Result<String> {
    let chart = match summary {
        Summary::Overview(m) => return Ok(overview_section(m)),
        Summary::Weather(groups) => weather_chart(groups),
        Summary::UserPattern(groups) => user_pattern_chart(groups),
        Summary::Demand(buckets) => demand_chart(buckets),
    };
    let svg = chart
        .to_svg()
        .with_context(|| format!("Failed to draw chart '{}'", chart.title))?;
    Ok(page::centered(&svg))
}

fn overview_section(m: &OverviewMetrics) -> String {
    format!(
        r#"{}<hr class="divider">{}"#,
        panel::metric_panel(&panel::overview_metrics(m)),
        panel::preview_table(&m.preview)
    )
}

/// Codes without a label are ticked with the bare code.
pub fn weather_chart(groups: &[WeatherGroup]) -> BarChart {
    BarChart::new("Rentals by Weather", "Avg Rentals")
        .categories(groups.iter().map(|g| {
            g.label
                .map(str::to_string)
                .unwrap_or_else(|| g.code.to_string())
        }))
        .series("cnt", PRIMARY, groups.iter().map(|g| g.mean_cnt).collect())
}

pub fn user_pattern_chart(groups: &[DayTypeGroup]) -> BarChart {
    BarChart::new("Weekday vs Weekend Usage", "Avg Rentals")
        .categories(groups.iter().map(|g| g.day_type.label().to_string()))
        .series("Casual", PRIMARY, groups.iter().map(|g| g.mean_casual).collect())
        .series(
            "Registered",
            SECONDARY,
            groups.iter().map(|g| g.mean_registered).collect(),
        )
        .with_legend()
}

pub fn demand_chart(buckets: &[DemandBucket]) -> BarChart {
    BarChart::new("Demand Distribution", "Days")
        .categories(buckets.iter().map(|b| b.level.label().to_string()))
        .series("days", SECONDARY, buckets.iter().map(|b| b.days as f64).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fixtures::{day, scenario};
    use crate::analyzers::{demand, overview, user_pattern, weather};

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("Clear"), "Clear");
    }

    #[test]
    fn test_weather_chart_uses_labels_and_primary() {
        let chart = weather_chart(&weather(&scenario()));

        assert_eq!(
            chart.categories,
            vec!["1 - Clear", "2 - Mist/Cloudy", "3 - Light Rain/Snow"]
        );
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].color, PRIMARY);
        assert_eq!(chart.series[0].values, vec![75.0, 200.0, 0.0]);
        assert!(!chart.legend);
    }

    #[test]
    fn test_unlabeled_weather_code_ticks_with_code() {
        let chart = weather_chart(&weather(&[day(1, 9, 1, 1)]));
        assert_eq!(chart.categories, vec!["9".to_string()]);
    }

    #[test]
    fn test_user_pattern_chart_series() {
        let chart = user_pattern_chart(&user_pattern(&scenario()));

        assert_eq!(chart.categories, vec!["Weekday", "Weekend"]);
        assert_eq!(chart.series[0].name, "Casual");
        assert_eq!(chart.series[0].values, vec![10.0, 7.5]);
        assert_eq!(chart.series[1].name, "Registered");
        assert_eq!(chart.series[1].color, SECONDARY);
        assert_eq!(chart.series[1].values, vec![90.0, 67.5]);
        assert!(chart.legend);
    }

    #[test]
    fn test_demand_chart_uses_secondary() {
        let chart = demand_chart(&demand(&scenario()));

        assert_eq!(chart.categories, vec!["Low", "Medium", "High"]);
        assert_eq!(chart.series[0].color, SECONDARY);
        assert_eq!(chart.series[0].values, vec![3.0, 0.0, 0.0]);
        assert_eq!(chart.y_label, "Days");
    }

    #[test]
    fn test_sections() {
        let rows = scenario();

        let html = section(&Summary::Overview(overview(&rows))).unwrap();
        assert!(html.contains(r#"<hr class="divider">"#));
        assert!(html.contains("350"));

        let html = section(&Summary::Demand(demand(&rows))).unwrap();
        assert!(html.contains(r#"<div class="columns">"#));
        assert!(html.contains("<svg"));
        assert!(html.contains("Demand Distribution"));
        assert_eq!(html.matches(r##"fill="#7AAACE""##).count(), 1);
    }
}
