// File: crates/chart-core/src/marker.rs
// Summary: Marker shapes, the cyclic marker palette, and their outlines in pixel space.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    Diamond,
    TriangleDown,
    Pentagon,
    Star,
}

/// Marker shapes handed out to series in discovery order.
pub const PALETTE: [Marker; 7] = [
    Marker::Circle,
    Marker::Square,
    Marker::TriangleUp,
    Marker::Diamond,
    Marker::TriangleDown,
    Marker::Pentagon,
    Marker::Star,
];

/// Inner/outer radius ratio of a regular five-pointed star.
const STAR_INNER_RATIO: f32 = 0.381_966;

impl Marker {
    /// Marker for the `index`-th series; wraps around the palette.
    pub fn cycle(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }

    /// Outline vertices relative to the marker center for a marker whose
    /// bounding size is `size` pixels. Screen coordinates: +y points down.
    /// `Circle` has no polygon outline and returns an empty list.
    pub fn vertices(self, size: f32) -> Vec<(f32, f32)> {
        let r = size * 0.5;
        match self {
            Marker::Circle => Vec::new(),
            Marker::Square => regular_polygon(4, r * 0.85, -FRAC_PI_4),
            Marker::TriangleUp => regular_polygon(3, r, -FRAC_PI_2),
            Marker::TriangleDown => regular_polygon(3, r, FRAC_PI_2),
            Marker::Diamond => regular_polygon(4, r, 0.0)
                .into_iter()
                .map(|(x, y)| (x * 0.6, y))
                .collect(),
            Marker::Pentagon => regular_polygon(5, r, -FRAC_PI_2),
            Marker::Star => (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { r } else { r * STAR_INNER_RATIO };
                    let a = -FRAC_PI_2 + i as f32 * PI / 5.0;
                    (radius * a.cos(), radius * a.sin())
                })
                .collect(),
        }
    }

    /// Outline as a closed Skia path centered on `center`.
    pub fn path(self, center: (f32, f32), size: f32) -> skia::Path {
        let (cx, cy) = center;
        if self == Marker::Circle {
            return skia::Path::circle((cx, cy), size * 0.5, None);
        }
        let mut path = skia::Path::new();
        for (i, (dx, dy)) in self.vertices(size).into_iter().enumerate() {
            if i == 0 {
                path.move_to((cx + dx, cy + dy));
            } else {
                path.line_to((cx + dx, cy + dy));
            }
        }
        path.close();
        path
    }
}

fn regular_polygon(sides: usize, radius: f32, start_angle: f32) -> Vec<(f32, f32)> {
    let step = 2.0 * PI / sides as f32;
    (0..sides)
        .map(|i| {
            let a = start_angle + i as f32 * step;
            (radius * a.cos(), radius * a.sin())
        })
        .collect()
}
