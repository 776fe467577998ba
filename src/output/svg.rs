//! SVG chart output writer.

use super::path::prepare_output_path;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::path::Path;

/// Write rendered chart markup to a file
///
/// **Public** - used by `SvgChartRenderer`
///
/// # Arguments
/// * `svg_content` - SVG string from the chart generator
/// * `output_path` - Path to output SVG file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    if output_path.extension().is_some_and(|ext| ext != "svg") {
        debug!("Chart path without .svg extension: {}", output_path.display());
    }
    prepare_output_path(output_path)?;

    std::fs::write(output_path, svg_content).map_err(OutputError::WriteFailed)?;

    info!("Chart written ({} bytes)", svg_content.len());

    Ok(())
}
