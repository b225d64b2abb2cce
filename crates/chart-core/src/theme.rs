// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for figure colors and the series color cycle.

use skia_safe as skia;

/// Qualitative ten-color cycle ("tab10").
const TAB10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub series_colors: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            plot_background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            title: skia::Color::BLACK,
            // 80% opaque white frame
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
            series_colors: TAB10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 52, 52, 58),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(204, 30, 30, 34),
            legend_border: skia::Color::from_argb(204, 90, 90, 100),
            series_colors: TAB10,
        }
    }

    /// Line/marker color for the `index`-th series; wraps around the cycle.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.series_colors[index % self.series_colors.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_cycle_wraps_after_ten() {
        let t = Theme::light();
        assert_eq!(t.series_color(0), t.series_color(10));
        assert_ne!(t.series_color(0), t.series_color(1));
        assert_eq!(t.series_color(0), skia::Color::from_rgb(0x1f, 0x77, 0xb4));
    }

    #[test]
    fn presets_share_the_cycle() {
        assert_eq!(Theme::dark().series_colors, Theme::light().series_colors);
        assert_ne!(Theme::dark().background, Theme::light().background);
    }
}
