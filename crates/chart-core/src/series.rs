// File: crates/chart-core/src/series.rs
// Summary: Labeled line-and-marker series model.

use skia_safe as skia;

use crate::marker::Marker;

/// Default marker size, in points.
pub const MARKER_SIZE_PT: f32 = 5.0;
/// Default line width, in points.
pub const LINE_WIDTH_PT: f32 = 1.5;

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend entry text.
    pub label: String,
    /// Points in drawing order; consecutive points are joined.
    pub data_xy: Vec<(f64, f64)>,
    /// Per-point marker; `None` draws the line only.
    pub marker: Option<Marker>,
    pub marker_size_pt: f32,
    pub line_width_pt: f32,
    /// Explicit color; `None` takes the theme's cycle color for the series index.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data_xy: Vec::new(),
            marker: None,
            marker_size_pt: MARKER_SIZE_PT,
            line_width_pt: LINE_WIDTH_PT,
            color: None,
        }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        let mut s = Self::new(label);
        s.data_xy = data;
        s
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_marker_size(mut self, size_pt: f32) -> Self {
        self.marker_size_pt = size_pt;
        self
    }

    pub fn with_line_width(mut self, width_pt: f32) -> Self {
        self.line_width_pt = width_pt;
        self
    }

    /// Points with both coordinates finite; the others are skipped when drawing.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Runs of consecutive finite points. A missing point breaks the line
    /// instead of joining its neighbours.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.data_xy {
            if x.is_finite() && y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_points_split_the_line() {
        let s = Series::with_data(
            "gappy",
            vec![(1.0, 1.0), (2.0, f64::NAN), (3.0, 3.0), (4.0, 4.0), (f64::NAN, 5.0)],
        );
        assert_eq!(s.segments(), vec![vec![(1.0, 1.0)], vec![(3.0, 3.0), (4.0, 4.0)]]);
        assert_eq!(s.finite_points().count(), 3);
    }

    #[test]
    fn complete_series_is_one_segment() {
        let s = Series::with_data("full", vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(s.segments().len(), 1);
        assert!(Series::new("empty").segments().is_empty());
    }
}
