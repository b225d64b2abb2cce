// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with anchor alignment and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal placement of a text box relative to its anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical placement of a text box relative to its anchor y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Laid-out size of a single-line text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        TextExtent { width: p.longest_line(), height: p.height() }
    }

    /// Draw `text` so that its bounding box sits on `anchor` as described by
    /// the two alignments.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        anchor: (f32, f32),
        size: f32,
        color: skia::Color,
        h: HAlign,
        v: VAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, size, color);
        let (w, ht) = (p.longest_line(), p.height());
        p.paint(canvas, box_origin(anchor, w, ht, h, v));
    }

    /// Draw `text` rotated 90 degrees counter-clockwise, centered on `center`.
    pub fn draw_vertical(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        center: (f32, f32),
        size: f32,
        color: skia::Color,
    ) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, size, color);
        let (w, ht) = (p.longest_line(), p.height());
        canvas.save();
        canvas.translate(center);
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, -ht * 0.5));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-left corner of a `w` x `h` box aligned on `anchor`.
pub fn box_origin(anchor: (f32, f32), w: f32, h: f32, ha: HAlign, va: VAlign) -> (f32, f32) {
    let x = match ha {
        HAlign::Left => anchor.0,
        HAlign::Center => anchor.0 - w * 0.5,
        HAlign::Right => anchor.0 - w,
    };
    let y = match va {
        VAlign::Top => anchor.1,
        VAlign::Center => anchor.1 - h * 0.5,
        VAlign::Bottom => anchor.1 - h,
    };
    (x, y)
}
