// File: crates/chart-core/src/error.rs
// Summary: Error type for rendering and encoding figures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("unsupported output image format for '{}'", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to encode image")]
    Encode(#[from] image::ImageError),

    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
