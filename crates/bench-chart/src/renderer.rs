// File: crates/bench-chart/src/renderer.rs
// Summary: Builds the implementation-comparison figure from a dataset and writes it out.

use std::path::{Path, PathBuf};

use chart_core::{Axis, Figure, FigureSize, Legend, LegendLoc, MillionsFormatter, RenderOptions, Series};
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::group::{partition_by_implementation, ImplementationSeries};

pub const CHART_TITLE: &str = "BrightnessAndContrast Implementation Comparison";
pub const X_LABEL: &str = "Image size (Pixels)";
pub const LEGEND_TITLE: &str = "Implementation";
/// Legend box's upper-left corner, in axes fraction: just right of the plot, level with its top.
pub const LEGEND_ANCHOR: (f32, f32) = (1.05, 1.0);
pub const MARKER_SIZE_PT: f32 = 5.0;
pub const TITLE_SIZE_PT: f32 = 16.0;
pub const LABEL_SIZE_PT: f32 = 14.0;

/// Y axis label for a run count, inserted verbatim.
pub fn y_label(run_count: &str) -> String {
    format!("Avg. time over {run_count} runs (s)")
}

/// One invocation's worth of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub input: PathBuf,
    pub run_count: String,
    pub output: PathBuf,
    pub scale_x_in_millions: bool,
}

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    pub size: FigureSize,
    pub options: RenderOptions,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self { size: FigureSize::default(), options: RenderOptions::default() }
    }
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the comparison chart: one marker-and-line series per
    /// implementation, in first-appearance order.
    pub fn build_figure(&self, dataset: &Dataset, run_count: &str, scale_x_in_millions: bool) -> Figure {
        let mut fig = Figure::new(self.size);
        fig.tight_layout = true;

        for (k, group) in partition_by_implementation(&dataset.rows).into_iter().enumerate() {
            let marker = ImplementationSeries::marker(k);
            debug!(implementation = %group.name, points = group.points.len(), ?marker, "series");
            fig.add_series(
                Series::with_data(group.name, group.points)
                    .with_marker(marker)
                    .with_marker_size(MARKER_SIZE_PT),
            );
        }

        fig.set_title(CHART_TITLE);
        fig.title_size_pt = TITLE_SIZE_PT;
        fig.x_axis = Axis::new(X_LABEL);
        fig.x_axis.label_size_pt = LABEL_SIZE_PT;
        fig.y_axis = Axis::new(y_label(run_count));
        fig.y_axis.label_size_pt = LABEL_SIZE_PT;
        if scale_x_in_millions {
            fig.x_axis.set_formatter(MillionsFormatter);
        }

        fig.set_legend(Legend::new().with_title(LEGEND_TITLE).anchored(LEGEND_ANCHOR, LegendLoc::UpperLeft));
        fig.set_grid(true);
        fig
    }

    /// Load `request.input`, build the figure and write it to `request.output`.
    pub fn render(&self, request: &RenderRequest) -> Result<()> {
        let dataset = Dataset::load(&request.input)?;
        let figure = self.build_figure(&dataset, &request.run_count, request.scale_x_in_millions);
        figure
            .render_to_file(&self.options, &request.output)
            .map_err(|source| Error::Render { path: request.output.clone(), source })?;
        info!(
            output = %request.output.display(),
            series = figure.series.len(),
            rows = dataset.len(),
            "chart written"
        );
        Ok(())
    }
}

/// Render `input_path` into `output_path` with default settings.
pub fn render(
    input_path: impl AsRef<Path>,
    run_count: &str,
    output_path: impl AsRef<Path>,
    scale_x_in_millions: bool,
) -> Result<()> {
    ChartRenderer::default().render(&RenderRequest {
        input: input_path.as_ref().to_path_buf(),
        run_count: run_count.to_string(),
        output: output_path.as_ref().to_path_buf(),
        scale_x_in_millions,
    })
}
