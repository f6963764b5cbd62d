use rand::Rng;

use super::CONTINUE_P;
use crate::{cell::Cell, r2::R2};

/// Midpoint quadrisection: 3 corner sub-triangles plus the center triangle
/// formed by the edge midpoints.
pub(super) fn subdivide_into(
    out: &mut Vec<Cell>,
    [a, b, c]: [R2; 3],
    depth: u32,
    partial: bool,
    rng: &mut impl Rng,
) {
    if depth == 0 {
        out.push(Cell::new(vec![a, b, c], 1));
        return;
    }
    if partial && !rng.gen_bool(CONTINUE_P) {
        // Stop early: one coarser cell absorbs the 4^depth leaves below it.
        out.push(Cell::new(vec![a, b, c], 4u64.pow(depth)));
        return;
    }
    let ab = a.midpoint(&b);
    let bc = b.midpoint(&c);
    let ca = c.midpoint(&a);
    subdivide_into(out, [a, ab, ca], depth - 1, partial, rng);
    subdivide_into(out, [ab, b, bc], depth - 1, partial, rng);
    subdivide_into(out, [ca, bc, c], depth - 1, partial, rng);
    subdivide_into(out, [ab, bc, ca], depth - 1, partial, rng);
}
