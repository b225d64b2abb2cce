// File: crates/bench-chart/src/lib.rs
// Summary: Benchmark CSV to comparison chart: dataset loading, grouping, figure construction.

pub mod cli;
pub mod dataset;
pub mod error;
pub mod group;
pub mod logging;
pub mod renderer;

pub use cli::{parse_millions_flag, Args, USAGE};
pub use dataset::{BenchRow, Dataset, MISSING_TOKENS, REQUIRED_COLUMNS};
pub use error::{DataFormatError, Error, UsageError};
pub use group::{partition_by_implementation, ImplementationSeries};
pub use renderer::{render, y_label, ChartRenderer, RenderRequest};
