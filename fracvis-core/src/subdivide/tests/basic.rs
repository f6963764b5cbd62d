use rand::{rngs::StdRng, SeedableRng};

use super::super::*;
use crate::{
    cell::Cell,
    outline::{self, BaseKind, ARC_SEGMENTS, CIRCLE_RADIUS},
};

fn full(kind: BaseKind, depth: u32) -> Vec<Cell> {
    // rng is untouched when partial is off
    subdivide(kind, depth, false, &mut StdRng::seed_from_u64(0))
}

fn total_area(cells: &[Cell]) -> f64 {
    cells.iter().map(|c| c.area()).sum()
}

#[test]
fn test_square_depth_1() {
    let cells = full(BaseKind::Square, 1);
    assert_eq!(cells.len(), 4);
    assert!(cells.iter().all(|c| c.units == 1));
    assert!(cells.iter().all(|c| c.num_vertices() == 4));
    // 4 congruent quarters of the 80x80 outline
    for c in &cells {
        assert_relative_eq!(c.area(), 1600., epsilon = 1e-9);
    }
}

#[test]
fn test_triangle_depth_2() {
    let cells = full(BaseKind::Triangle, 2);
    assert_eq!(cells.len(), 16);
    assert!(cells.iter().all(|c| c.units == 1));
    // Midpoint quadrisection tiles the outline exactly
    let outline = Cell::new(outline::triangle_outline().to_vec(), 1);
    assert_relative_eq!(total_area(&cells), outline.area(), epsilon = 1e-9);
}

#[test]
fn test_hexagon_depth_1() {
    let cells = full(BaseKind::Hexagon, 1);
    assert_eq!(cells.len(), 24);
    let outline = Cell::new(outline::hexagon_outline().to_vec(), 1);
    assert_relative_eq!(total_area(&cells), outline.area(), epsilon = 1e-9);
}

#[test]
fn test_circle_depth_1() {
    let cells = full(BaseKind::Circle, 1);
    assert_eq!(cells.len(), 12);
    // center + 11 arc points per emitted sector
    assert!(cells.iter().all(|c| c.num_vertices() == ARC_SEGMENTS + 2));
    // fan polygons approximate the disc from inside
    let disc = std::f64::consts::PI * CIRCLE_RADIUS * CIRCLE_RADIUS;
    let area = total_area(&cells);
    assert!(area < disc);
    assert_relative_eq!(area, disc, max_relative = 1e-2);
}

#[test]
fn test_depth_0_emits_top_level_regions() {
    assert_eq!(full(BaseKind::Triangle, 0).len(), 1);
    assert_eq!(full(BaseKind::Square, 0).len(), 1);
    assert_eq!(full(BaseKind::Hexagon, 0).len(), 6);
    assert_eq!(full(BaseKind::Circle, 0).len(), 6);
}
