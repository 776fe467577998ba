//! Chart generation for daily gas spending.
//!
//! `ChartRenderer` is the seam the report generator talks to;
//! `SvgChartRenderer` draws a line chart and writes it to disk.

pub mod generator;

use crate::aggregator::DailyGasBuckets;
use crate::output::write_svg;
use crate::utils::error::ChartError;
use std::path::Path;

// Re-export main types
pub use generator::{generate_chart, ChartConfig};

/// Renders daily buckets to an image file
pub trait ChartRenderer {
    /// Render `buckets` to `path`
    ///
    /// # Errors
    /// * `ChartError::EmptyData` - nothing to plot
    fn render(&self, buckets: &DailyGasBuckets, path: &Path) -> Result<(), ChartError>;
}

/// Line chart written as SVG
#[derive(Debug, Clone, Default)]
pub struct SvgChartRenderer {
    config: ChartConfig,
}

impl SvgChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, buckets: &DailyGasBuckets, path: &Path) -> Result<(), ChartError> {
        let svg = generate_chart(buckets, Some(&self.config))?;
        write_svg(&svg, path)?;
        Ok(())
    }
}
