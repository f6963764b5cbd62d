use std::f64::consts::PI;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::r2::R2;

/// Shared canvas region the canonical outlines are inscribed in.
pub const CANVAS: f64 = 100.;

pub const CIRCLE_CENTER: R2 = R2 { x: 50., y: 50. };
pub const CIRCLE_RADIUS: f64 = 45.;

/// Angular sectors a circle is initially decomposed into.
pub const SECTOR_COUNT: u32 = 6;
/// Straight segments approximating each emitted sector's arc.
pub const ARC_SEGMENTS: usize = 10;

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "lowercase")]
pub enum BaseKind {
    #[display(fmt = "triangle")]
    Triangle,
    #[display(fmt = "square")]
    Square,
    #[display(fmt = "hexagon")]
    Hexagon,
    #[display(fmt = "circle")]
    Circle,
}

impl BaseKind {
    /// Cells each region splits into per recursion level.
    pub fn branching_factor(&self) -> u64 {
        match self {
            BaseKind::Circle => 2,
            _ => 4,
        }
    }

    /// Regions the base shape is decomposed into before recursion starts.
    pub fn top_level_regions(&self) -> u64 {
        match self {
            BaseKind::Triangle | BaseKind::Square => 1,
            BaseKind::Hexagon => 6,
            BaseKind::Circle => SECTOR_COUNT as u64,
        }
    }

    /// Total unit weight any subdivision of this shape at `depth` sums to,
    /// full or partial.
    pub fn total_units(&self, depth: u32) -> u64 {
        self.branching_factor().pow(depth) * self.top_level_regions()
    }
}

/// Isoceles triangle spanning the canvas, apex up.
pub fn triangle_outline() -> [R2; 3] {
    [
        R2 { x: 50., y: 5. },
        R2 { x: 95., y: 90. },
        R2 { x: 5., y: 90. },
    ]
}

pub fn square_outline() -> [R2; 4] {
    [
        R2 { x: 10., y: 10. },
        R2 { x: 90., y: 10. },
        R2 { x: 90., y: 90. },
        R2 { x: 10., y: 90. },
    ]
}

/// Regular hexagon, first vertex at the top.
pub fn hexagon_outline() -> [R2; 6] {
    let mut vs = [R2 { x: 0., y: 0. }; 6];
    for (i, v) in vs.iter_mut().enumerate() {
        let theta = -PI / 2. + i as f64 * PI / 3.;
        *v = CIRCLE_CENTER + R2 { x: theta.cos(), y: theta.sin() } * CIRCLE_RADIUS;
    }
    vs
}
