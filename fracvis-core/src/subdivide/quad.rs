use rand::Rng;

use super::CONTINUE_P;
use crate::{cell::Cell, r2::R2};

/// Quadrisection via edge midpoints plus the centroid of those midpoints,
/// yielding 4 corner quads.
pub(super) fn subdivide_into(
    out: &mut Vec<Cell>,
    [a, b, c, d]: [R2; 4],
    depth: u32,
    partial: bool,
    rng: &mut impl Rng,
) {
    if depth == 0 {
        out.push(Cell::new(vec![a, b, c, d], 1));
        return;
    }
    if partial && !rng.gen_bool(CONTINUE_P) {
        out.push(Cell::new(vec![a, b, c, d], 4u64.pow(depth)));
        return;
    }
    let mab = a.midpoint(&b);
    let mbc = b.midpoint(&c);
    let mcd = c.midpoint(&d);
    let mda = d.midpoint(&a);
    let ctr = (mab + mbc + mcd + mda) / 4.;
    subdivide_into(out, [a, mab, ctr, mda], depth - 1, partial, rng);
    subdivide_into(out, [mab, b, mbc, ctr], depth - 1, partial, rng);
    subdivide_into(out, [ctr, mbc, c, mcd], depth - 1, partial, rng);
    subdivide_into(out, [mda, ctr, mcd, d], depth - 1, partial, rng);
}
