#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FractionError {
    #[error("Fraction denominator cannot be 0 (numerator: {numerator})")]
    ZeroDenominator { numerator: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("Cannot pick a target out of {total_units} total units; need at least 2")]
    TotalTooSmall { total_units: u64 },

    #[error("No subset of the emitted cells sums to a value strictly between 0 and {total_units}")]
    Unreachable { total_units: u64 },

    #[error(transparent)]
    Fraction(#[from] FractionError),
}
