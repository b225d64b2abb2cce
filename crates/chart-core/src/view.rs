// File: crates/chart-core/src/view.rs
// View limits: data bounds of a figure padded by the autoscale margin.

use crate::figure::Figure;

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Resolve the visible ranges: fixed axis limits win, otherwise the data
    /// bounds of every series plus [`AUTOSCALE_MARGIN`].
    pub fn from_figure(figure: &Figure) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &figure.series {
            for (x, y) in s.finite_points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        let (x_min, x_max) = match figure.x_axis.limits {
            Some(l) => l,
            None => padded(x_min, x_max),
        };
        let (y_min, y_max) = match figure.y_axis.limits {
            Some(l) => l,
            None => padded(y_min, y_max),
        };
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span.abs() < 1e-12 {
        // single value: open a window around it
        let half = if min == 0.0 { 1.0 } else { min.abs() * AUTOSCALE_MARGIN };
        return (min - half, max + half);
    }
    let m = span * AUTOSCALE_MARGIN;
    let (lo, hi) = (min - m, max + m);
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        // margin overflowed f64; the bare data bounds still fit
        (min, max)
    }
}
