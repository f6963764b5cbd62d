//! Target-fraction selection.
//!
//! Picks a unit count strictly between 0 and the shape's total, biased
//! toward pedagogically clean fractions (a multiple of a proper divisor of
//! the total, so the reduced denominator divides the total), and verified
//! reachable by a subset of the actual emitted cell weights.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{error::TargetError, fraction::Fraction};

/// Divisor/multiple draws attempted before falling back to a uniform pick
/// over the reachable sums.
const MAX_DRAWS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
pub struct Target {
    /// Unit count the learner's selection must sum to.
    pub units: u64,
    /// `units / total_units` in lowest terms.
    pub fraction: Fraction,
}

/// Divisors `d` of `n` with `1 <= d < n`.
pub fn proper_divisors(n: u64) -> Vec<u64> {
    (1..n).filter(|d| n % d == 0).collect()
}

/// Subset-sum table over the emitted cell weights: `table[s]` is true iff
/// some subset of `units` sums to `s`.
pub fn reachable_sums(units: &[u64], total: u64) -> Vec<bool> {
    let mut table = vec![false; total as usize + 1];
    table[0] = true;
    for &u in units {
        for s in (u..=total).rev() {
            if table[(s - u) as usize] {
                table[s as usize] = true;
            }
        }
    }
    table
}

/// Pick a reachable target out of `total_units`, where `units` are the
/// weights of the emitted cells (summing to `total_units`).
///
/// Draws a proper divisor `d` uniformly, then a multiple `n*d` with
/// `n = max(1, uniform[0, (total-1)/d))`; the draw is accepted once the
/// subset-sum table confirms it. After [`MAX_DRAWS`] rejections the target
/// is drawn uniformly from the reachable sums strictly between 0 and
/// `total_units`.
pub fn pick_target(
    total_units: u64,
    units: &[u64],
    rng: &mut impl Rng,
) -> Result<Target, TargetError> {
    if total_units < 2 {
        return Err(TargetError::TotalTooSmall { total_units });
    }
    let divisors = proper_divisors(total_units);
    let table = reachable_sums(units, total_units);
    for _ in 0..MAX_DRAWS {
        let d = divisors[rng.gen_range(0..divisors.len())];
        let k_max = (total_units - 1) / d;
        let n = rng.gen_range(0..k_max).max(1);
        let target_units = n * d;
        if table[target_units as usize] {
            return target(target_units, total_units);
        }
        debug!("target {} of {} not reachable, redrawing", target_units, total_units);
    }
    let interior: Vec<u64> = (1..total_units).filter(|&s| table[s as usize]).collect();
    if interior.is_empty() {
        return Err(TargetError::Unreachable { total_units });
    }
    let target_units = interior[rng.gen_range(0..interior.len())];
    debug!("falling back to uniform reachable target {} of {}", target_units, total_units);
    target(target_units, total_units)
}

fn target(target_units: u64, total_units: u64) -> Result<Target, TargetError> {
    Ok(Target {
        units: target_units,
        fraction: Fraction::simplify(target_units as i64, total_units as i64)?,
    })
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_proper_divisors() {
        assert_eq!(proper_divisors(12), vec![1, 2, 3, 4, 6]);
        assert_eq!(proper_divisors(16), vec![1, 2, 4, 8]);
        assert_eq!(proper_divisors(2), vec![1]);
        assert!(proper_divisors(1).is_empty());
    }

    #[test]
    fn test_reachable_sums() {
        let table = reachable_sums(&[4, 4, 4, 4], 16);
        for s in 0..=16u64 {
            assert_eq!(table[s as usize], s % 4 == 0, "sum {}", s);
        }
    }

    #[test]
    fn test_bounds_uniform_units() {
        let units = vec![1u64; 12];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let t = pick_target(12, &units, &mut rng).unwrap();
            assert!(t.units > 0 && t.units < 12);
            // reduced denominator always divides the total
            assert_eq!(12 % t.fraction.denominator as u64, 0);
            assert_eq!(
                Fraction::simplify(t.units as i64, 12).unwrap(),
                t.fraction,
            );
        }
    }

    #[test]
    fn test_respects_emitted_weights() {
        // Coarse partial subdivision: only multiples of 4 are selectable.
        let units = vec![4u64, 4, 4, 4];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let t = pick_target(16, &units, &mut rng).unwrap();
            assert!(t.units > 0 && t.units < 16);
            assert_eq!(t.units % 4, 0);
        }
    }

    #[test]
    fn test_divisor_multiple_arithmetic() {
        // total 12, d = 4: k_max = 2, n drawn from [0, 2) then floored to 1,
        // so the only multiple is 4, which reduces to 1/3.
        let t = target(4, 12).unwrap();
        assert_eq!(t.fraction, Fraction { numerator: 1, denominator: 3 });
    }

    #[test]
    fn test_total_too_small() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pick_target(1, &[1], &mut rng),
            Err(TargetError::TotalTooSmall { total_units: 1 })
        );
    }

    #[test]
    fn test_single_cell_unreachable() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pick_target(16, &[16], &mut rng),
            Err(TargetError::Unreachable { total_units: 16 })
        );
    }

    #[test]
    fn test_smallest_total() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let t = pick_target(2, &[1, 1], &mut rng).unwrap();
            assert_eq!(t.units, 1);
            assert_eq!(t.fraction, Fraction { numerator: 1, denominator: 2 });
        }
    }
}
