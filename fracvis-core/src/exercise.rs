//! Exercise generation: the one operation collaborators call.

use std::str::FromStr;

use derive_more::Display;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    cell::Cell,
    error::TargetError,
    fraction::Fraction,
    outline::BaseKind,
    subdivide::subdivide,
    target::pick_target,
};

/// Partial subdivision of a triangle or square can collapse to a single
/// cell, which admits no target; regenerate up to this many times.
const MAX_REGENERATIONS: usize = 16;

/// Shape requested by the caller; `Auto` draws one of the four concrete
/// kinds uniformly.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[display(fmt = "triangle")]
    Triangle,
    #[display(fmt = "square")]
    Square,
    #[display(fmt = "hexagon")]
    Hexagon,
    #[display(fmt = "circle")]
    Circle,
    #[display(fmt = "auto")]
    Auto,
}

impl ShapeKind {
    pub fn resolve(&self, rng: &mut impl Rng) -> BaseKind {
        match self {
            ShapeKind::Triangle => BaseKind::Triangle,
            ShapeKind::Square => BaseKind::Square,
            ShapeKind::Hexagon => BaseKind::Hexagon,
            ShapeKind::Circle => BaseKind::Circle,
            ShapeKind::Auto => match rng.gen_range(0..4) {
                0 => BaseKind::Triangle,
                1 => BaseKind::Square,
                2 => BaseKind::Hexagon,
                _ => BaseKind::Circle,
            },
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "triangle" => Ok(ShapeKind::Triangle),
            "square" => Ok(ShapeKind::Square),
            "hexagon" => Ok(ShapeKind::Hexagon),
            "circle" => Ok(ShapeKind::Circle),
            "auto" => Ok(ShapeKind::Auto),
            _ => Err(format!("unknown shape kind: {}", s)),
        }
    }
}

/// One full exercise: the weighted cells of a subdivided shape plus the
/// target fraction the learner's selection must reach. Immutable once
/// produced; selection state lives with the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct ShapeSpec {
    pub shape_kind: BaseKind,
    pub cells: Vec<Cell>,
    pub total_units: u64,
    /// `target_units / total_units` in lowest terms.
    pub target: Fraction,
    pub target_units: u64,
}

impl ShapeSpec {
    /// The learner's answer is correct iff their selected units sum to the
    /// target exactly.
    pub fn is_correct(&self, selection_sum: u64) -> bool {
        selection_sum == self.target_units
    }

    pub fn check_selection(&self, selected: &[usize]) -> bool {
        self.is_correct(selection_units_sum(&self.cells, selected))
    }
}

/// Sum of the units of the cells at `selected` indices; out-of-range
/// indices are ignored.
pub fn selection_units_sum(cells: &[Cell], selected: &[usize]) -> u64 {
    selected
        .iter()
        .filter_map(|&i| cells.get(i))
        .map(|c| c.units)
        .sum()
}

/// Recursion depth for a difficulty level.
///
/// The legacy difficulty table special-cases the circle at difficulty 3;
/// both arms land on depth 2, and the table is kept verbatim.
pub fn depth_for(kind: BaseKind, difficulty: u32) -> u32 {
    match difficulty {
        0 | 1 => 1,
        2 => 2,
        _ => match kind {
            BaseKind::Circle => 2,
            _ => 2,
        },
    }
}

/// Generate a fresh exercise: subdivide (always partial, for irregular
/// cells), then pick a reachable target.
pub fn generate(
    kind: ShapeKind,
    difficulty: u32,
    rng: &mut impl Rng,
) -> Result<ShapeSpec, TargetError> {
    let shape_kind = kind.resolve(rng);
    let depth = depth_for(shape_kind, difficulty);
    let cells = {
        let mut attempt = 0;
        loop {
            let cells = subdivide(shape_kind, depth, true, rng);
            if cells.len() >= 2 {
                break cells;
            }
            attempt += 1;
            if attempt >= MAX_REGENERATIONS {
                return Err(TargetError::Unreachable {
                    total_units: shape_kind.total_units(depth),
                });
            }
            debug!("single-cell subdivision of {}, regenerating", shape_kind);
        }
    };
    let units: Vec<u64> = cells.iter().map(|c| c.units).collect();
    let total_units: u64 = units.iter().sum();
    let target = pick_target(total_units, &units, rng)?;
    debug!(
        "generated {} exercise: {} cells, target {} = {} of {} units",
        shape_kind,
        cells.len(),
        target.fraction,
        target.units,
        total_units,
    );
    Ok(ShapeSpec {
        shape_kind,
        cells,
        total_units,
        target: target.fraction,
        target_units: target.units,
    })
}
