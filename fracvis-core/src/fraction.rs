use std::fmt::{self, Display, Formatter};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::error::FractionError;

/// Euclid's algorithm.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// A ratio of integers. [`Fraction::simplify`] is the only constructor that
/// guarantees lowest terms and a positive denominator (sign carried by the
/// numerator); [`Fraction::random`] returns the raw draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

/// Options for [`Fraction::random`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
pub struct RandomFractionOpts {
    pub max_denominator: u32,
    pub allow_improper: bool,
}

impl Default for RandomFractionOpts {
    fn default() -> Self {
        RandomFractionOpts {
            max_denominator: 12,
            allow_improper: false,
        }
    }
}

impl Fraction {
    /// Reduce `numerator / denominator` to lowest terms.
    ///
    /// `simplify(0, d)` is `0/1`; a zero denominator is an error.
    pub fn simplify(numerator: i64, denominator: i64) -> Result<Fraction, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator { numerator });
        }
        let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i64;
        let mut numerator = numerator / g;
        let mut denominator = denominator / g;
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Ok(Fraction { numerator, denominator })
    }

    /// Draw a random proper fraction: denominator in `[2, max_denominator]`,
    /// numerator in `[1, denominator)`. With `allow_improper`, one draw in
    /// four instead takes a numerator up to `max_denominator * 3 / 2`.
    ///
    /// The draw is returned unreduced; callers wanting lowest terms pass it
    /// back through [`Fraction::simplify`].
    pub fn random(opts: RandomFractionOpts, rng: &mut impl Rng) -> Fraction {
        let denominator = rng.gen_range(2..=opts.max_denominator.max(2)) as i64;
        let mut numerator = rng.gen_range(0..denominator).max(1);
        if opts.allow_improper && rng.gen_bool(0.25) {
            numerator = rng.gen_range(1..=(opts.max_denominator as i64 * 3 / 2).max(1));
        }
        Fraction { numerator, denominator }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn simplified(n: i64, d: i64) -> Fraction {
        Fraction::simplify(n, d).unwrap()
    }

    #[test]
    fn test_simplify() {
        assert_eq!(simplified(6, 8), Fraction { numerator: 3, denominator: 4 });
        assert_eq!(simplified(-6, 8), Fraction { numerator: -3, denominator: 4 });
        assert_eq!(simplified(0, 5), Fraction { numerator: 0, denominator: 1 });
        assert_eq!(simplified(4, 12), Fraction { numerator: 1, denominator: 3 });
        assert_eq!(simplified(6, -8), Fraction { numerator: -3, denominator: 4 });
    }

    #[test]
    fn test_simplify_idempotent() {
        for (n, d) in [(6, 8), (-6, 8), (0, 5), (7, 13), (12, 4)] {
            let once = simplified(n, d);
            assert_eq!(simplified(once.numerator, once.denominator), once);
            assert_eq!(gcd(once.numerator.unsigned_abs(), once.denominator.unsigned_abs()), 1);
        }
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            Fraction::simplify(3, 0),
            Err(crate::error::FractionError::ZeroDenominator { numerator: 3 })
        );
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(8, 12), 4);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(7, 13), 1);
    }

    #[test]
    fn test_random_proper() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..500 {
            let f = Fraction::random(RandomFractionOpts::default(), &mut rng);
            assert!(f.denominator >= 2 && f.denominator <= 12);
            assert!(f.numerator >= 1 && f.numerator < f.denominator);
        }
    }

    #[test]
    fn test_random_improper_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        let opts = RandomFractionOpts { max_denominator: 8, allow_improper: true };
        let mut saw_improper = false;
        for _ in 0..500 {
            let f = Fraction::random(opts, &mut rng);
            assert!(f.numerator >= 1 && f.numerator <= 12);
            saw_improper |= f.numerator >= f.denominator;
        }
        assert!(saw_improper);
    }
}
