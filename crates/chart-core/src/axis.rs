// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, view limits and pluggable tick-label formatting.

use std::fmt;
use std::sync::Arc;

/// Default axis label size, in points.
pub const LABEL_SIZE_PT: f32 = 14.0;

/// Maps a tick value to the text drawn next to it.
///
/// `step` is the spacing of the tick grid the value belongs to; formatters
/// may use it to choose a precision.
pub trait TickFormatter {
    fn format(&self, value: f64, step: f64) -> String;
}

impl<F> TickFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64, _step: f64) -> String {
        self(value)
    }
}

/// Raw value with just enough decimals to tell neighbouring ticks apart.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainFormatter;

impl TickFormatter for PlainFormatter {
    fn format(&self, value: f64, step: f64) -> String {
        let decimals = decimals_for_step(step);
        let s = format!("{:.*}", decimals, value);
        // "-0" and "-0.00" read badly next to a zero gridline
        if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
            s.trim_start_matches('-').to_string()
        } else {
            s
        }
    }
}

/// `"{n}M"` where `n` is `value / 1e6` truncated toward zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct MillionsFormatter;

impl TickFormatter for MillionsFormatter {
    fn format(&self, value: f64, _step: f64) -> String {
        format!("{}M", (value / 1e6) as i64)
    }
}

fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    // smallest precision at which the step survives printing unchanged
    (0..=12)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
        })
        .unwrap_or(12)
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub label_size_pt: f32,
    pub formatter: Arc<dyn TickFormatter + Send + Sync>,
    /// Fixed view limits; `None` autoscales to the data.
    pub limits: Option<(f64, f64)>,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            label_size_pt: LABEL_SIZE_PT,
            formatter: Arc::new(PlainFormatter),
            limits: None,
        }
    }

    /// Axis with fixed `[min, max]` view limits.
    pub fn with_limits(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut a = Self::new(label);
        a.limits = Some((min, max));
        a
    }

    /// Install a custom tick-label formatter.
    pub fn set_formatter<F>(&mut self, formatter: F)
    where
        F: TickFormatter + Send + Sync + 'static,
    {
        self.formatter = Arc::new(formatter);
    }

    pub fn format_tick(&self, value: f64, step: f64) -> String {
        self.formatter.format(value, step)
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("label", &self.label)
            .field("label_size_pt", &self.label_size_pt)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
