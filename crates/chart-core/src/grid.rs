// File: crates/chart-core/src/grid.rs
// Summary: Tick/grid layout helpers ("nice number" tick location).

/// Interval multipliers tried per decade, smallest first.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Default upper bound on the number of tick intervals per axis.
pub const MAX_TICK_INTERVALS: usize = 9;

/// Tick positions for one axis together with the spacing that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub step: f64,
    pub values: Vec<f64>,
}

/// Smallest "nice" step (1, 2, 2.5, 5 times a power of ten) that covers
/// `[min, max]` with at most `max_intervals` intervals.
pub fn nice_step(min: f64, max: f64, max_intervals: usize) -> f64 {
    let intervals = max_intervals.max(1) as f64;
    // divided before subtracting so spans near f64::MAX stay finite
    let raw = (max / intervals - min / intervals).abs();
    if !raw.is_finite() || raw * intervals <= f64::EPSILON {
        return 1.0;
    }
    let mut scale = 10f64.powi(raw.log10().floor() as i32);
    while scale.is_finite() {
        for m in NICE_STEPS {
            let step = m * scale;
            // intervals between the first and last tick that land inside the range
            let n = (max / step).floor() - (min / step).ceil();
            if n <= max_intervals.max(1) as f64 {
                return step;
            }
        }
        scale *= 10.0;
    }
    f64::INFINITY
}

/// Locate ticks on `[min, max]`; only values inside the range (with a small
/// tolerance for floating error) are returned, never more than
/// `max_intervals + 1` of them. Non-finite bounds give no ticks.
pub fn nice_ticks(min: f64, max: f64, max_intervals: usize) -> Ticks {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !lo.is_finite() || !hi.is_finite() {
        return Ticks { step: 1.0, values: Vec::new() };
    }
    let step = nice_step(lo, hi, max_intervals);
    if !step.is_finite() {
        return Ticks { step, values: Vec::new() };
    }
    let tol = step * 1e-9;
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let values = (first..=last)
        .take(max_intervals.max(1) + 1)
        .map(|i| i as f64 * step)
        .map(|v| if v.abs() < tol { 0.0 } else { v })
        .filter(|v| *v >= lo - tol && *v <= hi + tol)
        .collect();
    Ticks { step, values }
}
