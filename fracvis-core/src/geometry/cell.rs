use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::r2::R2;

/// One weighted cell of a subdivided shape.
///
/// The boundary is implicitly closed (last vertex connects back to the
/// first). `units` counts how many finest-granularity cells this cell is
/// equivalent to; units across one subdivision run sum to the run's
/// `total_units`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Cell {
    pub vertices: Vec<R2>,
    pub units: u64,
}

impl Cell {
    pub fn new(vertices: Vec<R2>, units: u64) -> Self {
        assert!(vertices.len() >= 3, "Cell must have at least 3 vertices");
        assert!(units >= 1, "Cell must carry at least 1 unit");
        Cell { vertices, units }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Shoelace area, always non-negative.
    pub fn area(&self) -> f64 {
        let twice: f64 = self
            .vertices
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum();
        (twice / 2.).abs()
    }

    /// Vertex centroid (arithmetic mean of the boundary vertices).
    pub fn centroid(&self) -> R2 {
        let n = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold(R2 { x: 0., y: 0. }, |acc, v| acc + *v);
        sum / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Cell {
        Cell::new(
            vec![
                R2 { x: 0., y: 0. },
                R2 { x: 1., y: 0. },
                R2 { x: 1., y: 1. },
                R2 { x: 0., y: 1. },
            ],
            1,
        )
    }

    #[test]
    fn test_square_area() {
        assert_relative_eq!(unit_square().area(), 1., epsilon = 1e-12);
    }

    #[test]
    fn test_area_winding_independent() {
        let mut reversed = unit_square();
        reversed.vertices.reverse();
        assert_relative_eq!(reversed.area(), 1., epsilon = 1e-12);
    }

    #[test]
    fn test_centroid() {
        let c = unit_square().centroid();
        assert_relative_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn test_degenerate_rejected() {
        Cell::new(vec![R2 { x: 0., y: 0. }, R2 { x: 1., y: 0. }], 1);
    }
}
