// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the figure model and headless rendering API.

pub mod axis;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod marker;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, MillionsFormatter, PlainFormatter, TickFormatter};
pub use error::ChartError;
pub use figure::{output_format, Figure, FigureLayout, RenderOptions};
pub use legend::{Legend, LegendLoc};
pub use marker::{Marker, PALETTE};
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::FigureSize;
pub use view::ViewState;
