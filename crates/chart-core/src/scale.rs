// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

/// Maps a data interval onto a pixel interval. The pixel interval may be
/// inverted (`px_start > px_end`), which is how Y grows upward on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { vmin, vmax, px_start, px_end };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Horizontal scale across `[left, right]`.
    pub fn horizontal(vmin: f64, vmax: f64, left: f32, right: f32) -> Self {
        Self::new(vmin, vmax, left, right)
    }

    /// Vertical scale with `vmin` at `bottom` and `vmax` at `top`.
    pub fn vertical(vmin: f64, vmax: f64, top: f32, bottom: f32) -> Self {
        Self::new(vmin, vmax, bottom, top)
    }

    /// Halving both differences keeps ranges wider than `f64::MAX` finite.
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v * 0.5 - self.vmin * 0.5) / (self.vmax * 0.5 - self.vmin * 0.5);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_grows_upward() {
        let s = LinearScale::vertical(0.0, 10.0, 100.0, 600.0);
        assert_eq!(s.to_px(0.0), 600.0);
        assert_eq!(s.to_px(10.0), 100.0);
        assert_eq!(s.to_px(5.0), 350.0);
    }

    #[test]
    fn horizontal_scale_maps_endpoints() {
        let s = LinearScale::horizontal(-1.0, 1.0, 50.0, 250.0);
        assert_eq!(s.to_px(-1.0), 50.0);
        assert_eq!(s.to_px(0.0), 150.0);
        assert_eq!(s.to_px(1.0), 250.0);
    }

    #[test]
    fn near_max_range_maps_inside() {
        let s = LinearScale::horizontal(-1.1e308, 1.1e308, 0.0, 200.0);
        assert_eq!(s.to_px(-1.1e308), 0.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(1.1e308), 200.0);
    }
}
