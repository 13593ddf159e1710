//! Error types for the surface fire spread core.
//!
//! Every failure here is a deterministic function of the inputs: either a
//! precondition was violated (something was never set, or a size class is
//! missing from the fuel complex) or a numeric argument is outside the
//! domain of the model equations. Degenerate but structurally valid fuel
//! definitions (for example a category whose total loading is zero) are not
//! errors; they propagate through the arithmetic as non-finite values and
//! callers are expected to validate fuel definitions up front.

use crate::core_types::{Category, SizeClass};
use thiserror::Error;

/// Result type for fire model operations.
pub type FireResult<T> = Result<T, FireModelError>;

/// Errors raised by the fuel aggregation engine and the spread models.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireModelError {
    /// Surface-area-to-volume ratio must be strictly positive.
    #[error("surface-area-to-volume ratio must be positive (ft^-1)")]
    InvalidSigma,

    /// Ovendry loading must be non-negative.
    #[error("ovendry loading must be non-negative (lb/ft^2)")]
    InvalidLoading,

    /// Moisture fractions must be non-negative; extinction moisture positive.
    #[error("moisture fraction out of range for {what}")]
    InvalidMoisture { what: &'static str },

    /// Mineral content fractions must be non-negative.
    #[error("mineral content fraction must be non-negative")]
    InvalidMineralContent,

    /// Fuel bed depth must be strictly positive.
    #[error("fuel bed depth must be positive (ft)")]
    InvalidDepth,

    /// Midflame wind speed must be non-negative.
    #[error("midflame wind speed must be non-negative (ft/min)")]
    InvalidWindSpeed,

    /// A particle field was read before it was set.
    #[error("fuel particle is not ready: {what} has not been set")]
    ParticleNotReady { what: &'static str },

    /// A particle built for one weighting method was added to a complex
    /// using the other.
    #[error("weighting method mismatch: complex uses {expected}, particle uses {found}")]
    MethodMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The requested (category, size class) pair is not in the complex.
    #[error("no {category} {size_class} fuel in this complex")]
    MissingSizeClass {
        category: Category,
        size_class: SizeClass,
    },

    /// A particle in the complex has no fuel moisture yet.
    #[error("fuel moisture has not been set for the {category} {size_class} fuel")]
    MoistureNotSet {
        category: Category,
        size_class: SizeClass,
    },

    /// No extinction moisture is available for a category that needs one.
    #[error("no extinction moisture set for {category} fuels")]
    MissingExtinctionMoisture { category: Category },

    /// The fuel model has no live fuels but live moistures were supplied.
    #[error("this fuel model has no live fuels")]
    NoLiveFuel,

    /// The complex holds no fuel particles at all.
    #[error("the fuel complex holds no particles")]
    EmptyComplex,

    /// Aggregates were read before `compute()` was called.
    #[error("aggregates are stale or missing; call compute() first")]
    NotComputed,

    /// Fuel bed depth was never provided.
    #[error("fuel bed depth has not been set")]
    DepthNotSet,

    /// Wind was never provided to the spread model.
    #[error("midflame wind speed has not been set")]
    WindNotSet,

    /// Slope was never provided to the spread model.
    #[error("slope has not been set")]
    SlopeNotSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_condition() {
        let err = FireModelError::MissingSizeClass {
            category: Category::Dead,
            size_class: SizeClass::TenHour,
        };
        assert!(err.to_string().contains("dead"));
        assert!(err.to_string().contains("10-hr"));

        let err = FireModelError::ParticleNotReady {
            what: "fuel moisture",
        };
        assert!(err.to_string().contains("fuel moisture"));
    }
}
