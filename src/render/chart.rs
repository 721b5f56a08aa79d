//! Compact bar charts rendered to inline SVG with plotters.

use anyhow::Result;
use plotters::coord::combinators::BindKeyPoints;
use plotters::prelude::*;

use crate::analyzers::utility::round2;
use crate::render::theme::{FIGURE_SIZE, LABEL_FONT_PX, TICK_FONT_PX, TITLE_FONT_PX};

const FONT: &str = "sans-serif";

/// Share of a category slot covered by a lone series.
const SINGLE_BAR_WIDTH: f64 = 0.8;
/// Share of a category slot covered by each bar when series are grouped.
const GROUPED_BAR_WIDTH: f64 = 0.35;

/// Headroom above the tallest bar.
const Y_HEADROOM: f64 = 1.1;

/// One colored set of bars, one value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: RGBColor,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub legend: bool,
}

impl BarChart {
    pub fn new(title: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            categories: Vec::new(),
            series: Vec::new(),
            legend: false,
        }
    }

    pub fn categories(mut self, categories: impl IntoIterator<Item = String>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn series(mut self, name: &str, color: RGBColor, values: Vec<f64>) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            color,
            values,
        });
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    fn y_top(&self) -> f64 {
        let max = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);

        if max > 0.0 { max * Y_HEADROOM } else { 1.0 }
    }

    /// `(left, right)` x extent of bar `j` in category slot `i`.
    fn bar_span(&self, i: usize, j: usize) -> (f64, f64) {
        let center = i as f64 + 0.5;
        let k = self.series.len().max(1) as f64;
        let width = if self.series.len() > 1 {
            GROUPED_BAR_WIDTH
        } else {
            SINGLE_BAR_WIDTH
        };
        let left = center - width * k / 2.0 + width * j as f64;
        (left, left + width)
    }

    /// Renders the chart at the fixed figure size.
    ///
    /// Category labels sit at the centre of each slot. Zero and non-finite
    /// values draw no bar; an empty chart still draws its caption and axes.
    pub fn to_svg(&self) -> Result<String> {
        let n = self.categories.len();
        let centers: Vec<f64> = (0..n).map(|i| i as f64 + 0.5).collect();
        let x_extent = 0f64..n.max(1) as f64;
        let x_range = x_extent.clone().partial_axis(x_extent).with_key_points(centers);

        let tick_label = |x: &f64| {
            self.categories
                .get(x.floor() as usize)
                .cloned()
                .unwrap_or_default()
        };
        let value_label = |y: &f64| round2(*y).to_string();

        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, FIGURE_SIZE).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(self.title.as_str(), (FONT, TITLE_FONT_PX))
                .margin(8)
                .x_label_area_size(22)
                .y_label_area_size(44)
                .build_cartesian_2d(x_range, 0f64..self.y_top())?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .light_line_style(TRANSPARENT)
                .bold_line_style(BLACK.mix(0.1))
                .x_labels(n.max(1))
                .y_labels(6)
                .x_label_formatter(&tick_label)
                .y_label_formatter(&value_label)
                .x_label_style((FONT, TICK_FONT_PX))
                .y_label_style((FONT, TICK_FONT_PX))
                .y_desc(self.y_label.as_str())
                .axis_desc_style((FONT, LABEL_FONT_PX))
                .draw()?;

            for (j, series) in self.series.iter().enumerate() {
                let color = series.color;
                let bars: Vec<_> = series
                    .values
                    .iter()
                    .take(n)
                    .enumerate()
                    .filter(|(_, v)| v.is_finite() && **v > 0.0)
                    .map(|(i, &v)| {
                        let (left, right) = self.bar_span(i, j);
                        Rectangle::new([(left, 0.0), (right, v)], color.filled())
                    })
                    .collect();

                let anno = chart.draw_series(bars)?;
                if self.legend {
                    anno.label(series.name.as_str()).legend(move |(x, y)| {
                        Rectangle::new([(x, y - 4), (x + 10, y + 4)], color.filled())
                    });
                }
            }

            if self.legend {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperRight)
                    .label_font((FONT, TICK_FONT_PX))
                    .background_style(WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()?;
            }

            root.present()?;
        }

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::{PRIMARY, SECONDARY};

    const PRIMARY_FILL: &str = r##"fill="#355872""##;
    const SECONDARY_FILL: &str = r##"fill="#7AAACE""##;

    fn weather_like() -> BarChart {
        BarChart::new("Rentals by Weather", "Avg Rentals")
            .categories(vec!["1 - Clear".to_string(), "2 - Mist/Cloudy".to_string()])
            .series("cnt", PRIMARY, vec![75.0, 200.0])
    }

    #[test]
    fn test_single_series_chart() {
        let svg = weather_like().to_svg().unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"width="400""#));
        assert!(svg.contains(r#"height="250""#));
        assert_eq!(svg.matches(PRIMARY_FILL).count(), 2);
        assert!(svg.contains("Rentals by Weather"));
        assert!(svg.contains("Avg Rentals"));
        assert!(svg.contains("1 - Clear"));
        assert!(svg.contains("2 - Mist/Cloudy"));
    }

    #[test]
    fn test_grouped_series_with_legend() {
        let svg = BarChart::new("Weekday vs Weekend Usage", "Avg Rentals")
            .categories(vec!["Weekday".to_string(), "Weekend".to_string()])
            .series("Casual", PRIMARY, vec![10.0, 7.5])
            .series("Registered", SECONDARY, vec![90.0, 67.5])
            .with_legend()
            .to_svg()
            .unwrap();

        // two bars plus one legend swatch per series
        assert_eq!(svg.matches(PRIMARY_FILL).count(), 3);
        assert_eq!(svg.matches(SECONDARY_FILL).count(), 3);
        assert!(svg.contains("Casual"));
        assert!(svg.contains("Registered"));
        assert!(svg.contains("Weekend"));
    }

    #[test]
    fn test_empty_chart_has_frame_only() {
        let svg = BarChart::new("Demand Distribution", "Days")
            .series("days", SECONDARY, vec![])
            .to_svg()
            .unwrap();

        assert_eq!(svg.matches(SECONDARY_FILL).count(), 0);
        assert!(svg.contains("Demand Distribution"));
        assert!(svg.contains("<line") || svg.contains("<polyline"));
    }

    #[test]
    fn test_zero_and_non_finite_values_draw_no_bar() {
        let svg = BarChart::new("t", "y")
            .categories(vec!["a".to_string(), "b".to_string(), "c".to_string()])
            .series("s", PRIMARY, vec![f64::NAN, 3.0, 0.0])
            .to_svg()
            .unwrap();

        assert_eq!(svg.matches(PRIMARY_FILL).count(), 1);
    }

    #[test]
    fn test_bar_spans() {
        let single = weather_like();
        let (l, r) = single.bar_span(1, 0);
        assert!((l - 1.1).abs() < 1e-9 && (r - 1.9).abs() < 1e-9);

        let grouped = weather_like().series("other", SECONDARY, vec![1.0, 2.0]);
        let (l0, r0) = grouped.bar_span(0, 0);
        let (l1, r1) = grouped.bar_span(0, 1);
        assert!((l0 - 0.15).abs() < 1e-9);
        assert!((r0 - l1).abs() < 1e-9);
        assert!((r1 - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_y_top_headroom() {
        assert!((weather_like().y_top() - 220.0).abs() < 1e-9);
        assert_eq!(BarChart::new("t", "y").y_top(), 1.0);
    }
}
