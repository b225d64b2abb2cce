// File: crates/bench-chart/src/group.rs
// Summary: Partitions benchmark rows into one (Pixels, Average) series per implementation.

use std::collections::HashMap;

use chart_core::Marker;

use crate::dataset::BenchRow;

/// Points of one implementation, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplementationSeries {
    pub name: String,
    /// `(pixels, average)` pairs.
    pub points: Vec<(f64, f64)>,
}

impl ImplementationSeries {
    /// Marker for the group at position `k` in first-appearance order.
    pub fn marker(k: usize) -> Marker {
        Marker::cycle(k)
    }
}

/// Group `rows` by implementation. Groups come out in order of first
/// appearance, never sorted; that order fixes draw order, marker and color
/// assignment, and legend order.
pub fn partition_by_implementation(rows: &[BenchRow]) -> Vec<ImplementationSeries> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ImplementationSeries> = Vec::new();
    for row in rows {
        let slot = *index.entry(row.implementation.as_str()).or_insert_with(|| {
            groups.push(ImplementationSeries { name: row.implementation.clone(), points: Vec::new() });
            groups.len() - 1
        });
        groups[slot].points.push((row.pixels, row.average));
    }
    groups
}
