// File: crates/chart-core/src/figure.rs
// Summary: Figure struct and headless rendering pipeline using Skia CPU raster surfaces.
// Notes:
// - A Figure is a plain owned value; building, laying out and rendering it
//   never touches shared state, so several figures can coexist.
// - Draw order: background, grid, series (clipped to the plot area), spines,
//   ticks and tick labels, title and axis labels, legend.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::grid::{nice_ticks, Ticks, MAX_TICK_INTERVALS};
use crate::layout::{self, Decorations, OutsideLegend};
use crate::legend::{Legend, LegendEntry, LegendMetrics};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::{HAlign, TextExtent, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::{FigureSize, Insets};
use crate::view::ViewState;

/// Default title size, in points.
pub const TITLE_SIZE_PT: f32 = 16.0;
/// Tick label size, in points.
pub const TICK_LABEL_PT: f32 = 10.0;

const TICK_LEN_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;
const LABEL_PAD_PT: f32 = 4.0;
const TITLE_PAD_PT: f32 = 6.0;
const LAYOUT_PAD_PT: f32 = 1.08 * TICK_LABEL_PT;
const GRID_WIDTH_PT: f32 = 0.8;
const SPINE_WIDTH_PT: f32 = 0.8;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Draw titles, labels and tick text. Disabling it gives renders that
    /// do not depend on installed fonts.
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_text: true }
    }
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub size: FigureSize,
    pub title: Option<String>,
    pub title_size_pt: f32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub legend: Option<Legend>,
    pub grid: bool,
    pub theme: Theme,
    /// Size the plot area around the decorations instead of using fixed insets.
    pub tight_layout: bool,
}

/// Resolved geometry of a figure, ready to draw.
#[derive(Clone, Debug)]
pub struct FigureLayout {
    pub width: i32,
    pub height: i32,
    pub plot: RectF,
    pub view: ViewState,
    pub x_ticks: Ticks,
    pub y_ticks: Ticks,
    pub x_tick_labels: Vec<String>,
    pub y_tick_labels: Vec<String>,
    pub x_tick_label_height: f32,
    pub y_tick_label_width: f32,
    pub legend: Option<(RectF, LegendMetrics)>,
}

impl Figure {
    pub fn new(size: FigureSize) -> Self {
        Self {
            size,
            title: None,
            title_size_pt: TITLE_SIZE_PT,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            series: Vec::new(),
            legend: None,
            grid: false,
            theme: Theme::default(),
            tight_layout: false,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }

    /// Color of the `index`-th series: its own, else the theme cycle.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.series
            .get(index)
            .and_then(|s| s.color)
            .unwrap_or_else(|| self.theme.series_color(index))
    }

    /// Legend rows in drawing order; unlabeled series are left out.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.label.is_empty())
            .map(|(i, s)| LegendEntry {
                label: s.label.clone(),
                color: self.series_color(i),
                marker: s.marker,
                marker_size_px: self.size.pt_to_px(s.marker_size_pt),
                line_width_px: self.size.pt_to_px(s.line_width_pt),
            })
            .collect()
    }

    /// Resolve view limits, ticks, plot rectangle and legend box.
    pub fn compute_layout(&self, shaper: &TextShaper, opts: &RenderOptions) -> FigureLayout {
        let size = &self.size;
        let (width, height) = (size.width_px(), size.height_px());
        let measure = |text: &str, px: f32| -> TextExtent {
            if opts.draw_text { shaper.measure(text, px) } else { TextExtent::default() }
        };

        let view = ViewState::from_figure(self);
        let x_ticks = nice_ticks(view.x_min, view.x_max, MAX_TICK_INTERVALS);
        let y_ticks = nice_ticks(view.y_min, view.y_max, MAX_TICK_INTERVALS);
        let x_tick_labels: Vec<String> =
            x_ticks.values.iter().map(|&v| self.x_axis.format_tick(v, x_ticks.step)).collect();
        let y_tick_labels: Vec<String> =
            y_ticks.values.iter().map(|&v| self.y_axis.format_tick(v, y_ticks.step)).collect();

        let tick_px = size.pt_to_px(TICK_LABEL_PT);
        let x_extents: Vec<TextExtent> = x_tick_labels.iter().map(|l| measure(l, tick_px)).collect();
        let x_tick_label_height = x_extents.iter().map(|e| e.height).fold(0.0f32, f32::max);
        let y_tick_label_width =
            y_tick_labels.iter().map(|l| measure(l, tick_px).width).fold(0.0f32, f32::max);

        let entries = self.legend_entries();
        let legend_metrics = self
            .legend
            .as_ref()
            .filter(|_| !entries.is_empty())
            .map(|l| (l, l.measure(&entries, size, &measure)));

        let plot = if self.tight_layout {
            let decorations = Decorations {
                pad: size.pt_to_px(LAYOUT_PAD_PT),
                title: self.title.as_deref().map(|t| measure(t, size.pt_to_px(self.title_size_pt))).unwrap_or_default(),
                title_pad: size.pt_to_px(TITLE_PAD_PT),
                x_label: measure(&self.x_axis.label, size.pt_to_px(self.x_axis.label_size_pt)),
                y_label: measure(&self.y_axis.label, size.pt_to_px(self.y_axis.label_size_pt)),
                label_pad: size.pt_to_px(LABEL_PAD_PT),
                tick_len: size.pt_to_px(TICK_LEN_PT),
                tick_pad: size.pt_to_px(TICK_PAD_PT),
                x_tick_label_height,
                x_tick_overhang: x_extents.last().map(|e| e.width * 0.5).unwrap_or(0.0),
                y_tick_label_width,
                legend: legend_metrics.filter(|(l, _)| l.is_outside_right()).map(|(l, m)| OutsideLegend {
                    width: m.width,
                    anchor_x: l.anchor.0,
                    gap: l.border_axes_pad(size),
                    extends_right: l.loc.extends_right(),
                }),
            };
            layout::tight(width as f32, height as f32, &decorations)
        } else {
            layout::fixed(width as f32, height as f32, &Insets::default())
        };
        debug!(?plot, ?view, x_ticks = x_ticks.values.len(), y_ticks = y_ticks.values.len(), "figure layout");

        let legend = legend_metrics.map(|(l, m)| (l.place(&m, plot, size), m));

        FigureLayout {
            width,
            height,
            plot,
            view,
            x_ticks,
            y_ticks,
            x_tick_labels,
            y_tick_labels,
            x_tick_label_height,
            y_tick_label_width,
            legend,
        }
    }

    /// Render to a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let shaper = TextShaper::new();
        let layout = self.compute_layout(&shaper, opts);
        let (w, h) = (layout.width, layout.height);

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        self.draw(surface.canvas(), &layout, &shaper, opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    pub fn render_to_image(&self, opts: &RenderOptions) -> Result<RgbaImage> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        RgbaImage::from_raw(w, h, pixels).ok_or(ChartError::ReadPixels)
    }

    /// Render and encode with `format`. The figure is opaque, so the alpha
    /// channel is dropped, which also keeps RGB-only codecs (JPEG) working.
    pub fn render_to_bytes(&self, opts: &RenderOptions, format: ImageFormat) -> Result<Vec<u8>> {
        let rgb = DynamicImage::ImageRgba8(self.render_to_image(opts)?).to_rgb8();
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(rgb).write_to(&mut buf, format)?;
        Ok(buf.into_inner())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_to_bytes(opts, ImageFormat::Png)
    }

    /// Render the figure to `path`; the codec follows the file extension.
    /// The parent directory must already exist.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = output_format(path)?;
        let bytes = self.render_to_bytes(opts, format)?;
        std::fs::write(path, &bytes).map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), ?format, bytes = bytes.len(), "figure written");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, layout: &FigureLayout, shaper: &TextShaper, opts: &RenderOptions) {
        let theme = &self.theme;
        let size = &self.size;
        let plot = layout.plot;
        let view = &layout.view;

        canvas.clear(theme.background);
        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        let xs = LinearScale::horizontal(view.x_min, view.x_max, plot.left, plot.right);
        let ys = LinearScale::vertical(view.y_min, view.y_max, plot.top, plot.bottom);

        if self.grid {
            draw_grid(canvas, plot, layout, &xs, &ys, theme.grid, size.pt_to_px(GRID_WIDTH_PT));
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), None, Some(true));
        for (i, s) in self.series.iter().enumerate() {
            draw_series(canvas, s, self.series_color(i), &xs, &ys, size);
        }
        canvas.restore();

        let mut spine = skia::Paint::default();
        spine.set_anti_alias(true);
        spine.set_style(skia::paint::Style::Stroke);
        spine.set_stroke_width(size.pt_to_px(SPINE_WIDTH_PT));
        spine.set_color(theme.axis_line);
        canvas.draw_rect(plot.to_skia(), &spine);

        self.draw_ticks(canvas, layout, &xs, &ys, shaper, opts);

        if opts.draw_text {
            self.draw_labels(canvas, layout, shaper);
        }

        if let (Some(legend), Some((bounds, metrics))) = (&self.legend, &layout.legend) {
            legend.draw(canvas, *bounds, metrics, &self.legend_entries(), theme, shaper, opts.draw_text);
        }
    }

    fn draw_ticks(
        &self,
        canvas: &skia::Canvas,
        layout: &FigureLayout,
        xs: &LinearScale,
        ys: &LinearScale,
        shaper: &TextShaper,
        opts: &RenderOptions,
    ) {
        let size = &self.size;
        let plot = layout.plot;
        let tick_len = size.pt_to_px(TICK_LEN_PT);
        let tick_gap = tick_len + size.pt_to_px(TICK_PAD_PT);
        let tick_px = size.pt_to_px(TICK_LABEL_PT);

        let mut tick = skia::Paint::default();
        tick.set_anti_alias(true);
        tick.set_stroke_width(size.pt_to_px(SPINE_WIDTH_PT));
        tick.set_color(self.theme.tick);

        for (v, label) in layout.x_ticks.values.iter().zip(&layout.x_tick_labels) {
            let x = xs.to_px(*v);
            canvas.draw_line((x, plot.bottom), (x, plot.bottom + tick_len), &tick);
            if opts.draw_text {
                shaper.draw(canvas, label, (x, plot.bottom + tick_gap), tick_px, self.theme.tick, HAlign::Center, VAlign::Top);
            }
        }
        for (v, label) in layout.y_ticks.values.iter().zip(&layout.y_tick_labels) {
            let y = ys.to_px(*v);
            canvas.draw_line((plot.left - tick_len, y), (plot.left, y), &tick);
            if opts.draw_text {
                shaper.draw(canvas, label, (plot.left - tick_gap, y), tick_px, self.theme.tick, HAlign::Right, VAlign::Center);
            }
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, layout: &FigureLayout, shaper: &TextShaper) {
        let size = &self.size;
        let plot = layout.plot;
        let color = self.theme.axis_label;
        let ticks = size.pt_to_px(TICK_LEN_PT) + size.pt_to_px(TICK_PAD_PT);
        let label_pad = size.pt_to_px(LABEL_PAD_PT);

        if let Some(title) = self.title.as_deref() {
            let anchor = (plot.center_x(), plot.top - size.pt_to_px(TITLE_PAD_PT));
            shaper.draw(canvas, title, anchor, size.pt_to_px(self.title_size_pt), self.theme.title, HAlign::Center, VAlign::Bottom);
        }

        let x_px = size.pt_to_px(self.x_axis.label_size_pt);
        let x_top = plot.bottom + ticks + layout.x_tick_label_height + label_pad;
        shaper.draw(canvas, &self.x_axis.label, (plot.center_x(), x_top), x_px, color, HAlign::Center, VAlign::Top);

        let y_px = size.pt_to_px(self.y_axis.label_size_pt);
        let y_extent = shaper.measure(&self.y_axis.label, y_px);
        let y_center_x = plot.left - ticks - layout.y_tick_label_width - label_pad - y_extent.height * 0.5;
        shaper.draw_vertical(canvas, &self.y_axis.label, (y_center_x, plot.center_y()), y_px, color);
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(FigureSize::default())
    }
}

/// Encoder for `path`, chosen by its extension.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|f| f.writing_enabled())
        .ok_or_else(|| ChartError::UnsupportedFormat { path: path.to_path_buf() })
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectF,
    layout: &FigureLayout,
    xs: &LinearScale,
    ys: &LinearScale,
    color: skia::Color,
    width: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(width);

    // verticals
    for &v in &layout.x_ticks.values {
        let x = xs.to_px(v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    // horizontals
    for &v in &layout.y_ticks.values {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_series(
    canvas: &skia::Canvas,
    series: &Series,
    color: skia::Color,
    xs: &LinearScale,
    ys: &LinearScale,
    size: &FigureSize,
) {
    let points: Vec<(f32, f32)> = series.finite_points().map(|(x, y)| (xs.to_px(x), ys.to_px(y))).collect();

    let mut path = skia::Path::new();
    for run in series.segments().iter().filter(|run| run.len() >= 2) {
        path.move_to((xs.to_px(run[0].0), ys.to_px(run[0].1)));
        for &(x, y) in &run[1..] {
            path.line_to((xs.to_px(x), ys.to_px(y)));
        }
    }
    if !path.is_empty() {

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(size.pt_to_px(series.line_width_pt));
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }

    if let Some(marker) = series.marker {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(color);
        let marker_px = size.pt_to_px(series.marker_size_pt);
        for &p in &points {
            canvas.draw_path(&marker.path(p, marker_px), &fill);
        }
    }
}
