#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod error;
pub mod exercise;
pub mod fraction;
pub mod geometry;
pub mod subdivide;
pub mod target;

pub use geometry::cell;
pub use geometry::outline;
pub use geometry::r2;

// Re-export key types for external use
pub use cell::Cell;
pub use error::{FractionError, TargetError};
pub use exercise::{generate, selection_units_sum, ShapeKind, ShapeSpec};
pub use fraction::{Fraction, RandomFractionOpts};
pub use outline::BaseKind;
pub use r2::R2;
pub use subdivide::subdivide;
pub use target::{pick_target, Target};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
