//! SVG line chart of daily gas spending.
//!
//! Layout:
//! - One point per day that has spending, connected in date order
//! - X positions proportional to calendar distance
//! - Y axis in gwei with thousands separators

use crate::aggregator::DailyGasBuckets;
use crate::units::{group_thousands, wei_to_gwei_decimal};
use crate::utils::error::ChartError;
use chrono::NaiveDate;
use log::info;
use num_traits::ToPrimitive;

const LINE_COLOR: &str = "rgb(65, 105, 225)"; // Royal Blue
const GRID_COLOR: &str = "rgb(200, 200, 200)";
const Y_TICKS: usize = 5;
const MAX_X_LABELS: usize = 10;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Overrides the default "Daily Gas Spending (start to end)" title
    pub title: Option<String>,
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 1200,
            height: 700,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Plot area inside the SVG canvas
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn new(config: &ChartConfig) -> Self {
        let (left, right, top, bottom) = (100.0, 40.0, 60.0, 100.0);
        Self {
            left,
            top,
            width: (config.width as f64 - left - right).max(1.0),
            height: (config.height as f64 - top - bottom).max(1.0),
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Generate an SVG line chart from daily buckets
///
/// **Public** - main entry point for chart generation
///
/// # Errors
/// * `ChartError::EmptyData` - no buckets to plot
pub fn generate_chart(
    buckets: &DailyGasBuckets,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    let (Some(first), Some(last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Err(ChartError::EmptyData);
    };

    let config = config.cloned().unwrap_or_default();
    info!("Generating gas chart with {} daily points", buckets.len());

    let points: Vec<(NaiveDate, f64)> = buckets
        .iter()
        .map(|(date, wei)| (*date, wei_to_gwei_decimal(wei).to_f64().unwrap_or(0.0)))
        .collect();

    let max_value = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let y_max = if max_value > 0.0 { max_value } else { 1.0 };

    let area = PlotArea::new(&config);
    let span_days = (*last - *first).num_days();

    let x_of = |date: NaiveDate| -> f64 {
        if span_days == 0 {
            area.left + area.width / 2.0
        } else {
            area.left + ((date - *first).num_days() as f64 / span_days as f64) * area.width
        }
    };
    let y_of = |value: f64| -> f64 { area.bottom() - (value / y_max) * area.height };

    let title = config.title.clone().unwrap_or_else(|| {
        format!(
            "Daily Gas Spending ({} to {})",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        )
    });

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(
        r#"<style>.axis { font: 12px sans-serif; } .point:hover { stroke: black; stroke-width: 2; cursor: pointer; }</style>"#,
    );
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    ));

    // Title
    svg.push_str(&format!(
        r#"<text x="{}" y="30" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(&title)
    ));

    render_y_axis(&mut svg, &area, y_max);
    render_x_axis(&mut svg, &area, &points, &x_of);

    // Line
    let polyline: Vec<String> = points
        .iter()
        .map(|(date, value)| format!("{:.2},{:.2}", x_of(*date), y_of(*value)))
        .collect();
    svg.push_str(&format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
        polyline.join(" "),
        LINE_COLOR
    ));

    // Markers
    for (date, value) in &points {
        svg.push_str(&format!(
            r#"<circle class="point" cx="{:.2}" cy="{:.2}" r="4" fill="{}"><title>{}: {} Gwei</title></circle>"#,
            x_of(*date),
            y_of(*value),
            LINE_COLOR,
            date.format("%Y-%m-%d"),
            group_thousands(&format!("{:.0}", value))
        ));
    }

    svg.push_str("</svg>");

    info!("Chart generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

fn render_y_axis(out: &mut String, area: &PlotArea, y_max: f64) {
    for i in 0..=Y_TICKS {
        let value = y_max * i as f64 / Y_TICKS as f64;
        let y = area.bottom() - (i as f64 / Y_TICKS as f64) * area.height;
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-dasharray="4 4"/>"#,
            area.left,
            y,
            area.left + area.width,
            y,
            GRID_COLOR
        ));
        out.push_str(&format!(
            r#"<text class="axis" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
            area.left - 8.0,
            y + 4.0,
            group_thousands(&format!("{:.0}", value))
        ));
    }

    out.push_str(&format!(
        r#"<text class="axis" x="20" y="{:.2}" text-anchor="middle" transform="rotate(-90 20 {:.2})">Gas Spent (Gwei)</text>"#,
        area.top + area.height / 2.0,
        area.top + area.height / 2.0
    ));
}

fn render_x_axis(
    out: &mut String,
    area: &PlotArea,
    points: &[(NaiveDate, f64)],
    x_of: &dyn Fn(NaiveDate) -> f64,
) {
    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black"/>"#,
        area.left,
        area.bottom(),
        area.left + area.width,
        area.bottom()
    ));

    let step = points.len().div_ceil(MAX_X_LABELS).max(1);
    for (date, _) in points.iter().step_by(step) {
        let x = x_of(*date);
        let y = area.bottom() + 16.0;
        out.push_str(&format!(
            r#"<text class="axis" x="{:.2}" y="{:.2}" text-anchor="end" transform="rotate(-45 {:.2} {:.2})">{}</text>"#,
            x,
            y,
            x,
            y,
            date.format("%Y-%m-%d")
        ));
    }

    out.push_str(&format!(
        r#"<text class="axis" x="{:.2}" y="{:.2}" text-anchor="middle">Date</text>"#,
        area.left + area.width / 2.0,
        area.bottom() + 85.0
    ));
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn buckets(entries: &[(u32, u64)]) -> DailyGasBuckets {
        entries
            .iter()
            .map(|(day, gwei)| {
                (
                    NaiveDate::from_ymd_opt(2023, 10, *day).unwrap(),
                    BigInt::from(*gwei) * BigInt::from(1_000_000_000u64),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_buckets_fail() {
        let result = generate_chart(&DailyGasBuckets::new(), None);
        assert!(matches!(result, Err(ChartError::EmptyData)));
    }

    #[test]
    fn test_chart_contains_dates_and_title() {
        let data = buckets(&[(1, 50), (2, 75), (5, 120)]);
        let svg = generate_chart(&data, None).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Daily Gas Spending (2023-10-01 to 2023-10-05)"));
        assert!(svg.contains("2023-10-02: 75 Gwei"));
        assert_eq!(svg.matches("<circle").count(), 3);
    }

    #[test]
    fn test_single_point_and_all_zero() {
        let data = buckets(&[(3, 0)]);
        let svg = generate_chart(&data, Some(&ChartConfig::new().with_title("Zero <days>"))).unwrap();
        assert!(svg.contains("Zero &lt;days&gt;"));
        assert_eq!(svg.matches("<circle").count(), 1);
    }
}
