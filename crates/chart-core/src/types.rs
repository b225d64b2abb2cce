// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, DPI, point/pixel conversion, paddings).

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 12.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 10.0;
/// Default raster resolution.
pub const DEFAULT_DPI: f32 = 100.0;
/// Points per inch; font and stroke sizes are given in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Physical canvas size of a figure.
/// Contract: all fields are positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self { width_in, height_in, dpi }
    }

    /// Canvas width in whole pixels.
    pub fn width_px(&self) -> i32 {
        (self.width_in * self.dpi).round().max(1.0) as i32
    }

    /// Canvas height in whole pixels.
    pub fn height_px(&self) -> i32 {
        (self.height_in * self.dpi).round().max(1.0) as i32
    }

    /// Convert a length in points to pixels at this figure's DPI.
    #[inline]
    pub fn pt_to_px(&self, pt: f32) -> f32 {
        pt * self.dpi / POINTS_PER_INCH
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN, DEFAULT_DPI)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Margins used when the tight layout pass is disabled, as fractions of a
    /// 1200x1000 canvas (left 12.5%, right 10%, top 12%, bottom 11%).
    fn default() -> Self {
        Self::new(150.0, 120.0, 120.0, 110.0)
    }
}
