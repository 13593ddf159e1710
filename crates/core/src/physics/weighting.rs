//! Weighting method selection: Rothermel (1972) vs Albini (1976).
//!
//! The two model families share the entire spread-rate pipeline and differ
//! at a small number of well-defined points. At the particle level those are
//! the net fuel loading and the exponent "A" of the potential reaction
//! velocity; this enum carries both. The remaining divergences (live
//! extinction moisture and the reaction intensity summation) live with the
//! fuel complex and the weighted spread model, which dispatch on this same
//! value. The method is chosen once, when a particle or complex is built;
//! there is no global default to reassign.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fuel weighting discipline in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightingMethod {
    /// Rothermel's original 1972 formulation.
    Rothermel,
    /// Albini's 1976 refinement (appendix III of INT-30).
    Albini,
}

impl WeightingMethod {
    /// Net fuel loading from ovendry loading and total mineral content.
    ///
    /// Rothermel eqn 24 divides by (1 + S_T); Albini's appendix III
    /// multiplies by (1 - S_T) instead.
    pub fn net_fuel_loading(self, ovendry_loading: f64, total_mineral_content: f64) -> f64 {
        match self {
            WeightingMethod::Rothermel => ovendry_loading / (1.0 + total_mineral_content),
            WeightingMethod::Albini => ovendry_loading * (1.0 - total_mineral_content),
        }
    }

    /// The exponent "A" of the potential reaction velocity.
    ///
    /// Rothermel eqn 39 is 1/(4.77·σ^0.1 − 7.27); Albini replaced it with
    /// 133·σ^(−0.7913), which stays finite for extreme σ.
    pub fn exponent_a(self, sigma: f64) -> f64 {
        match self {
            WeightingMethod::Rothermel => 1.0 / (4.77 * sigma.powf(0.1) - 7.27),
            WeightingMethod::Albini => 133.0 * sigma.powf(-0.7913),
        }
    }

    /// Method name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            WeightingMethod::Rothermel => "Rothermel",
            WeightingMethod::Albini => "Albini",
        }
    }
}

impl fmt::Display for WeightingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
