// File: crates/chart-core/src/legend.rs
// Summary: Legend model, box measurement and placement relative to the axes, and drawing.
// Notes:
// - Spacing is expressed in multiples of the legend font size ("em") so the box
//   scales with the text.
// - The anchor is given in axes-fraction coordinates: (0, 0) is the lower-left
//   corner of the plot area, (1, 1) the upper-right. Values above 1 place the
//   legend outside the axes.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::marker::Marker;
use crate::text::{HAlign, TextExtent, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::FigureSize;

/// Default legend font size, in points.
pub const LEGEND_FONT_PT: f32 = 10.0;

const BORDER_PAD_EM: f32 = 0.4;
const LABEL_SPACING_EM: f32 = 0.5;
const HANDLE_LENGTH_EM: f32 = 2.0;
const HANDLE_TEXT_PAD_EM: f32 = 0.8;
const BORDER_AXES_PAD_EM: f32 = 0.5;
const CORNER_RADIUS_EM: f32 = 0.2;

/// Which corner of the legend box sits on the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLoc {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl LegendLoc {
    /// Box grows rightward from the anchor.
    pub fn extends_right(self) -> bool {
        matches!(self, LegendLoc::UpperLeft | LegendLoc::LowerLeft)
    }

    /// Box grows downward from the anchor.
    pub fn extends_down(self) -> bool {
        matches!(self, LegendLoc::UpperLeft | LegendLoc::UpperRight)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub title: Option<String>,
    /// Anchor in axes-fraction coordinates.
    pub anchor: (f32, f32),
    pub loc: LegendLoc,
    pub font_size_pt: f32,
}

impl Legend {
    /// Legend in the upper-right corner inside the axes.
    pub fn new() -> Self {
        Self { title: None, anchor: (1.0, 1.0), loc: LegendLoc::UpperRight, font_size_pt: LEGEND_FONT_PT }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Put the `loc` corner of the legend box at `anchor` (axes fraction).
    pub fn anchored(mut self, anchor: (f32, f32), loc: LegendLoc) -> Self {
        self.anchor = anchor;
        self.loc = loc;
        self
    }

    /// True when the box lies to the right of the plot area, so layout must
    /// reserve room for it in the right margin.
    pub fn is_outside_right(&self) -> bool {
        self.anchor.0 > 1.0 || (self.anchor.0 >= 1.0 && self.loc.extends_right())
    }

    /// Compute the box size for `entries`. `measure` returns the extent of a
    /// text at a pixel size.
    pub fn measure(
        &self,
        entries: &[LegendEntry],
        size: &FigureSize,
        measure: &dyn Fn(&str, f32) -> TextExtent,
    ) -> LegendMetrics {
        let em = size.pt_to_px(self.font_size_pt);
        let title = self.title.as_deref().map(|t| measure(t, em)).unwrap_or_default();
        let labels: Vec<TextExtent> = entries.iter().map(|e| measure(&e.label, em)).collect();

        let handle_h = entries.iter().map(|e| e.marker_size_px.max(e.line_width_px)).fold(0.0f32, f32::max);
        let row_height = labels.iter().map(|t| t.height).fold(handle_h, f32::max);
        let label_w = labels.iter().map(|t| t.width).fold(0.0f32, f32::max);

        let pad = BORDER_PAD_EM * em;
        let spacing = LABEL_SPACING_EM * em;
        let rows_w = HANDLE_LENGTH_EM * em + HANDLE_TEXT_PAD_EM * em + label_w;
        let width = 2.0 * pad + rows_w.max(title.width);

        let n = entries.len() as f32;
        let rows_h = if entries.is_empty() { 0.0 } else { n * row_height + (n - 1.0) * spacing };
        let title_block = if title.height > 0.0 { title.height + spacing } else { 0.0 };
        let height = 2.0 * pad + title_block + rows_h;

        LegendMetrics { width, height, em, title, row_height }
    }

    /// Gap kept between the anchor point and the legend box.
    pub fn border_axes_pad(&self, size: &FigureSize) -> f32 {
        BORDER_AXES_PAD_EM * size.pt_to_px(self.font_size_pt)
    }

    /// Place a box of `metrics` size relative to `plot`.
    pub fn place(&self, metrics: &LegendMetrics, plot: RectF, size: &FigureSize) -> RectF {
        let gap = self.border_axes_pad(size);
        let ax = plot.left + self.anchor.0 * plot.width();
        let ay = plot.bottom - self.anchor.1 * plot.height();
        let left = if self.loc.extends_right() { ax + gap } else { ax - gap - metrics.width };
        let top = if self.loc.extends_down() { ay + gap } else { ay - gap - metrics.height };
        RectF::from_ltwh(left, top, metrics.width, metrics.height)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn draw(
        &self,
        canvas: &skia::Canvas,
        bounds: RectF,
        metrics: &LegendMetrics,
        entries: &[LegendEntry],
        theme: &Theme,
        shaper: &TextShaper,
        draw_text: bool,
    ) {
        let em = metrics.em;
        let radius = CORNER_RADIUS_EM * em;
        let rrect = skia::RRect::new_rect_xy(bounds.to_skia(), radius, radius);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_background);
        canvas.draw_rrect(rrect, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_rrect(rrect, &border);

        let pad = BORDER_PAD_EM * em;
        let spacing = LABEL_SPACING_EM * em;
        let mut y = bounds.top + pad;

        if let Some(title) = self.title.as_deref() {
            if draw_text {
                shaper.draw(canvas, title, (bounds.center_x(), y), em, theme.axis_label, HAlign::Center, VAlign::Top);
            }
            if metrics.title.height > 0.0 {
                y += metrics.title.height + spacing;
            }
        }

        let handle_left = bounds.left + pad;
        let handle_right = handle_left + HANDLE_LENGTH_EM * em;
        let text_left = handle_right + HANDLE_TEXT_PAD_EM * em;
        for entry in entries {
            let cy = y + metrics.row_height * 0.5;
            entry.draw_handle(canvas, handle_left, handle_right, cy);
            if draw_text {
                shaper.draw(canvas, &entry.label, (text_left, cy), em, theme.axis_label, HAlign::Left, VAlign::Center);
            }
            y += metrics.row_height + spacing;
        }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new()
    }
}

/// Size of a measured legend box, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendMetrics {
    pub width: f32,
    pub height: f32,
    pub em: f32,
    pub title: TextExtent,
    pub row_height: f32,
}

/// One legend row: a line-and-marker sample followed by the series label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
    pub marker: Option<Marker>,
    pub marker_size_px: f32,
    pub line_width_px: f32,
}

impl LegendEntry {
    fn draw_handle(&self, canvas: &skia::Canvas, left: f32, right: f32, cy: f32) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(self.line_width_px);
        stroke.set_color(self.color);
        canvas.draw_line((left, cy), (right, cy), &stroke);

        if let Some(marker) = self.marker {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_color(self.color);
            canvas.draw_path(&marker.path(((left + right) * 0.5, cy), self.marker_size_px), &fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str) -> LegendEntry {
        LegendEntry {
            label: label.to_string(),
            color: skia::Color::BLACK,
            marker: Some(Marker::Circle),
            marker_size_px: 7.0,
            line_width_px: 2.0,
        }
    }

    // 6 px per character, 12 px tall
    fn fake_measure(text: &str, _size: f32) -> TextExtent {
        TextExtent { width: 6.0 * text.chars().count() as f32, height: 12.0 }
    }

    #[test]
    fn upper_left_outside_anchor_counts_as_outside() {
        let l = Legend::new().anchored((1.05, 1.0), LegendLoc::UpperLeft);
        assert!(l.is_outside_right());
        assert!(!Legend::new().is_outside_right());
        assert!(Legend::new().anchored((1.0, 1.0), LegendLoc::UpperLeft).is_outside_right());
    }

    #[test]
    fn width_tracks_longest_label() {
        let size = FigureSize::new(10.0, 10.0, 72.0); // 1 pt == 1 px
        let l = Legend::new().with_title("Implementation");
        let m = l.measure(&[entry("Fast"), entry("Slowest")], &size, &fake_measure);
        // 2 * 4 pad + max(14 * 6, 20 + 8 + 7 * 6)
        assert!((m.width - (8.0 + 84.0)).abs() < 1e-4, "width was {}", m.width);
        // 2 * 4 pad + title 12 + 5 spacing + 2 rows of 12 + 5 spacing
        assert!((m.height - (8.0 + 17.0 + 29.0)).abs() < 1e-4, "height was {}", m.height);
    }

    #[test]
    fn upper_left_box_hangs_from_anchor() {
        let size = FigureSize::new(10.0, 10.0, 72.0);
        let l = Legend::new().anchored((1.05, 1.0), LegendLoc::UpperLeft);
        let m = LegendMetrics { width: 50.0, height: 30.0, em: 10.0, title: TextExtent::default(), row_height: 10.0 };
        let plot = RectF::from_ltrb(100.0, 100.0, 300.0, 400.0);
        let r = l.place(&m, plot, &size);
        assert!((r.left - (300.0 + 10.0 + 5.0)).abs() < 1e-4);
        assert!((r.top - 105.0).abs() < 1e-4);
        assert_eq!(r.width(), 50.0);
    }
}
