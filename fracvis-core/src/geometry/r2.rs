use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Div, Mul, Sub},
};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use tsify::Tsify;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct R2 {
    pub x: f64,
    pub y: f64,
}

impl R2 {
    pub fn new(x: f64, y: f64) -> Self {
        R2 { x, y }
    }

    pub fn midpoint(&self, o: &R2) -> R2 {
        R2 {
            x: (self.x + o.x) / 2.,
            y: (self.y + o.y) / 2.,
        }
    }
}

impl Display for R2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl Add for R2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        R2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for R2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        R2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for R2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        R2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Div<f64> for R2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        R2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl AbsDiffEq for R2 {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for R2 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
