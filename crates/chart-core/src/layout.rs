// File: crates/chart-core/src/layout.rs
// Summary: Tight layout pass: sizes the plot area so decorations fit on the canvas.

use crate::geometry::{clamp, RectF};
use crate::text::TextExtent;
use crate::types::Insets;

/// Smallest plot edge the layout will produce, in pixels.
const MIN_PLOT_PX: f32 = 10.0;

/// Extents of everything drawn around the plot area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decorations {
    /// Padding kept between the canvas edge and any decoration.
    pub pad: f32,
    pub title: TextExtent,
    pub title_pad: f32,
    pub x_label: TextExtent,
    /// Unrotated extent; the label is drawn rotated so `height` is horizontal.
    pub y_label: TextExtent,
    pub label_pad: f32,
    pub tick_len: f32,
    pub tick_pad: f32,
    pub x_tick_label_height: f32,
    /// How far the last X tick label sticks out past the plot's right edge.
    pub x_tick_overhang: f32,
    pub y_tick_label_width: f32,
    pub legend: Option<OutsideLegend>,
}

/// A legend that lives right of the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutsideLegend {
    pub width: f32,
    /// Horizontal anchor in axes fraction.
    pub anchor_x: f32,
    /// Gap between the anchor and the box.
    pub gap: f32,
    /// Box extends rightward from the anchor.
    pub extends_right: bool,
}

/// Plot rectangle for fixed margins.
pub fn fixed(width: f32, height: f32, insets: &Insets) -> RectF {
    RectF::from_ltrb(
        insets.left,
        insets.top,
        (width - insets.right).max(insets.left + MIN_PLOT_PX),
        (height - insets.bottom).max(insets.top + MIN_PLOT_PX),
    )
}

/// Plot rectangle that leaves room for every decoration.
pub fn tight(width: f32, height: f32, d: &Decorations) -> RectF {
    let gap = |e: TextExtent, pad: f32| if e.height > 0.0 { e.height + pad } else { 0.0 };
    let ticks = d.tick_len + d.tick_pad;

    let left = d.pad + gap(d.y_label, d.label_pad) + d.y_tick_label_width + ticks;
    let top = d.pad + gap(d.title, d.title_pad);
    let bottom_margin = d.pad + gap(d.x_label, d.label_pad) + d.x_tick_label_height + ticks;
    let right_edge = width - d.pad;

    let mut plot_w = right_edge - d.x_tick_overhang - left;
    if let Some(l) = d.legend {
        let anchor = l.anchor_x.max(f32::EPSILON);
        // legend's far edge must stay on the canvas
        let fit = if l.extends_right {
            (right_edge - l.width - l.gap - left) / anchor
        } else {
            (right_edge + l.gap - left) / anchor
        };
        plot_w = plot_w.min(fit);
    }
    let plot_w = clamp(plot_w, MIN_PLOT_PX, width.max(MIN_PLOT_PX));
    let plot_h = clamp(height - bottom_margin - top, MIN_PLOT_PX, height.max(MIN_PLOT_PX));
    RectF::from_ltwh(left, top, plot_w, plot_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decorations() -> Decorations {
        Decorations {
            pad: 15.0,
            title: TextExtent { width: 400.0, height: 25.0 },
            title_pad: 8.0,
            x_label: TextExtent { width: 200.0, height: 20.0 },
            y_label: TextExtent { width: 250.0, height: 20.0 },
            label_pad: 5.0,
            tick_len: 5.0,
            tick_pad: 5.0,
            x_tick_label_height: 14.0,
            x_tick_overhang: 10.0,
            y_tick_label_width: 30.0,
            legend: None,
        }
    }

    #[test]
    fn margins_add_up() {
        let r = tight(1200.0, 1000.0, &decorations());
        assert_eq!(r.left, 15.0 + 25.0 + 30.0 + 10.0);
        assert_eq!(r.top, 15.0 + 33.0);
        assert_eq!(r.bottom, 1000.0 - (15.0 + 25.0 + 14.0 + 10.0));
        assert_eq!(r.right, 1200.0 - 15.0 - 10.0);
    }

    #[test]
    fn outside_legend_fits_on_canvas() {
        let mut d = decorations();
        d.legend = Some(OutsideLegend { width: 150.0, anchor_x: 1.05, gap: 5.0, extends_right: true });
        let r = tight(1200.0, 1000.0, &d);
        let legend_right = r.left + 1.05 * r.width() + 5.0 + 150.0;
        assert!((legend_right - (1200.0 - 15.0)).abs() < 1e-3, "legend ends at {legend_right}");
        assert!(r.right < 1200.0 - 150.0);
    }

    #[test]
    fn missing_title_reclaims_space() {
        let mut d = decorations();
        d.title = TextExtent::default();
        assert_eq!(tight(1200.0, 1000.0, &d).top, 15.0);
    }

    #[test]
    fn fixed_respects_insets() {
        let r = fixed(1200.0, 1000.0, &Insets::new(100.0, 50.0, 40.0, 60.0));
        assert_eq!(r, RectF::from_ltrb(100.0, 40.0, 1150.0, 940.0));
    }
}
