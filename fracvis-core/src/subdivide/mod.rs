//! Recursive shape subdivision.
//!
//! Splits a canonical base shape into weighted polygon cells: midpoint
//! quadrisection for triangles and squares, a centroid fan of triangles for
//! the hexagon, angular bisection of arc sectors for the circle. With
//! `partial` subdivision a branch may stop early and emit one coarser cell
//! carrying the units of everything it absorbed, so the unit sum is
//! invariant in where recursion stops.

mod quad;
mod sector;
mod triangle;

#[cfg(test)]
mod tests;

use std::f64::consts::PI;

use log::debug;
use rand::Rng;

use crate::{
    cell::Cell,
    outline::{hexagon_outline, square_outline, triangle_outline, BaseKind, SECTOR_COUNT},
};

/// Probability that a branch keeps recursing under partial subdivision.
const CONTINUE_P: f64 = 0.6;

/// Subdivide `kind`'s canonical outline to `depth` levels.
///
/// The emitted cells' units always sum to [`BaseKind::total_units`]; with
/// `partial == false` every cell has `units == 1`.
pub fn subdivide(kind: BaseKind, depth: u32, partial: bool, rng: &mut impl Rng) -> Vec<Cell> {
    let mut cells = Vec::new();
    match kind {
        BaseKind::Triangle => {
            triangle::subdivide_into(&mut cells, triangle_outline(), depth, partial, rng);
        }
        BaseKind::Square => {
            quad::subdivide_into(&mut cells, square_outline(), depth, partial, rng);
        }
        BaseKind::Hexagon => {
            let vs = hexagon_outline();
            let centroid = vs.iter().fold(crate::r2::R2 { x: 0., y: 0. }, |acc, v| acc + *v) / 6.;
            for i in 0..6 {
                let tri = [centroid, vs[i], vs[(i + 1) % 6]];
                triangle::subdivide_into(&mut cells, tri, depth, partial, rng);
            }
        }
        BaseKind::Circle => {
            let span = 2. * PI / SECTOR_COUNT as f64;
            for s in 0..SECTOR_COUNT {
                let a0 = -PI / 2. + s as f64 * span;
                sector::subdivide_into(&mut cells, a0, a0 + span, depth, partial, rng);
            }
        }
    }
    debug!(
        "subdivided {} at depth {} (partial: {}): {} cells, {} units",
        kind,
        depth,
        partial,
        cells.len(),
        cells.iter().map(|c| c.units).sum::<u64>(),
    );
    cells
}
