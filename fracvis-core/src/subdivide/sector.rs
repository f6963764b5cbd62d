use rand::Rng;

use super::CONTINUE_P;
use crate::{
    cell::Cell,
    outline::{ARC_SEGMENTS, CIRCLE_CENTER, CIRCLE_RADIUS},
    r2::R2,
};

/// Angular bisection of a circle sector spanning `[a0, a1]` radians.
pub(super) fn subdivide_into(
    out: &mut Vec<Cell>,
    a0: f64,
    a1: f64,
    depth: u32,
    partial: bool,
    rng: &mut impl Rng,
) {
    if depth == 0 {
        out.push(sector_cell(a0, a1, 1));
        return;
    }
    if partial && !rng.gen_bool(CONTINUE_P) {
        out.push(sector_cell(a0, a1, 2u64.pow(depth)));
        return;
    }
    let mid = (a0 + a1) / 2.;
    subdivide_into(out, a0, mid, depth - 1, partial, rng);
    subdivide_into(out, mid, a1, depth - 1, partial, rng);
}

/// Fan polygon for one sector: the circle center plus `ARC_SEGMENTS + 1`
/// points along the arc.
fn sector_cell(a0: f64, a1: f64, units: u64) -> Cell {
    let mut vertices = Vec::with_capacity(ARC_SEGMENTS + 2);
    vertices.push(CIRCLE_CENTER);
    for i in 0..=ARC_SEGMENTS {
        let t = a0 + (a1 - a0) * i as f64 / ARC_SEGMENTS as f64;
        vertices.push(CIRCLE_CENTER + R2 { x: t.cos(), y: t.sin() } * CIRCLE_RADIUS);
    }
    Cell::new(vertices, units)
}
