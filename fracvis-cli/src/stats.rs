//! Batch statistics over generated exercises.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use log::info;
use ordered_float::OrderedFloat;
use rand::Rng;

use fracvis_core::{generate, ShapeKind};

/// Generate `count` exercises and render a distribution report.
pub fn run(count: usize, shape: ShapeKind, difficulty: u32, rng: &mut impl Rng) -> Result<String> {
    let mut cell_counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut targets: BTreeMap<String, usize> = BTreeMap::new();
    let mut kinds: BTreeMap<String, usize> = BTreeMap::new();
    let mut max_cell_area = OrderedFloat(0.);
    let mut min_cell_area = OrderedFloat(f64::INFINITY);

    for i in 0..count {
        let spec = generate(shape, difficulty, rng)?;
        *cell_counts.entry(spec.cells.len()).or_default() += 1;
        *targets.entry(spec.target.to_string()).or_default() += 1;
        *kinds.entry(spec.shape_kind.to_string()).or_default() += 1;
        for cell in &spec.cells {
            let area = OrderedFloat(cell.area());
            max_cell_area = max_cell_area.max(area);
            min_cell_area = min_cell_area.min(area);
        }
        if (i + 1) % 1000 == 0 {
            info!("generated {}/{}", i + 1, count);
        }
    }

    let mut out = String::new();
    writeln!(out, "exercises: {} (shape: {}, difficulty: {})", count, shape, difficulty)?;
    writeln!(out, "kinds:")?;
    for (kind, n) in &kinds {
        writeln!(out, "  {}: {}", kind, n)?;
    }
    writeln!(out, "cell counts:")?;
    for (cells, n) in &cell_counts {
        writeln!(out, "  {}: {}", cells, n)?;
    }
    writeln!(out, "targets:")?;
    for (target, n) in &targets {
        writeln!(out, "  {}: {}", target, n)?;
    }
    writeln!(out, "cell area range: [{:.2}, {:.2}]", min_cell_area.0, max_cell_area.0)?;
    Ok(out)
}
