//! Scalar component equations of the Rothermel (1972) spread model.
//!
//! These are the closed-form pieces that both the single-particle fuel
//! description and the whole-complex aggregate evaluate identically: the
//! same function computes the optimal packing ratio for one 1-hr particle
//! and for the surface-area-weighted σ of an entire fuel bed. Keeping them
//! as free functions avoids tying the scalar math to either type.
//!
//! Units are English throughout: σ in ft⁻¹, loadings in lb/ft², heat in
//! BTU/lb, speeds in ft/min, slope in radians.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire
//!   spread in wildland fuels." USDA Forest Service General Technical
//!   Report INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30.

/// Optimal packing ratio for a fuel of the given σ (Rothermel eqn 37).
///
/// ```text
/// β_op = 3.348 × σ^(-0.8189)
/// ```
pub fn optimal_packing_ratio(sigma: f64) -> f64 {
    3.348 * sigma.powf(-0.8189)
}

/// Maximum potential reaction velocity, 1/min (Rothermel eqn 36).
///
/// ```text
/// Γ'_max = σ^1.5 / (495 + 0.0594 × σ^1.5)
/// ```
pub fn max_reaction_velocity(sigma: f64) -> f64 {
    let sigma_15 = sigma.powf(1.5);
    sigma_15 / (495.0 + 0.0594 * sigma_15)
}

/// Effective heating number: the fraction of a particle brought to
/// ignition ahead of the flame front (Rothermel eqn 14).
///
/// ```text
/// ε = exp(-138 / σ)
/// ```
pub fn heating_efficiency(sigma: f64) -> f64 {
    (-138.0 / sigma).exp()
}

/// Heat of pre-ignition, BTU/lb (Rothermel eqn 12).
///
/// ```text
/// Q_ig = 250 + 1116 × M_f
/// ```
pub fn heat_of_ignition(fuel_moisture: f64) -> f64 {
    250.0 + 1116.0 * fuel_moisture
}

/// Propagating flux ratio: the fraction of reaction intensity that heats
/// adjacent unburned fuel (Rothermel eqn 42).
///
/// ```text
/// ξ = exp((0.792 + 0.681 × √σ) × (β + 0.1)) / (192 + 0.259 × σ)
/// ```
pub fn propagating_flux_ratio(sigma: f64, packing_ratio: f64) -> f64 {
    let exponent = (0.792 + 0.681 * sigma.sqrt()) * (packing_ratio + 0.1);
    exponent.exp() / (192.0 + 0.259 * sigma)
}

/// Mineral damping coefficient (Rothermel eqn 30).
///
/// ```text
/// η_s = 0.174 × S_e^(-0.19)
/// ```
pub fn mineral_damping(effective_mineral_content: f64) -> f64 {
    0.174 * effective_mineral_content.powf(-0.19)
}

/// Moisture damping coefficient from the moisture-to-extinction ratio
/// (Rothermel eqn 29).
///
/// ```text
/// η_M = 1 - 2.59r + 5.11r² - 3.52r³,   r = M_f / M_x
/// ```
///
/// The polynomial fit is only meaningful for r in [0, 1]. It is left
/// UNCLAMPED on purpose: fuel moisture above the moisture of extinction
/// yields a negative coefficient and hence a negative reaction intensity,
/// which the external interface clamps to "no spread". Clamping here would
/// silently change the published model.
pub fn moisture_damping(ratio: f64) -> f64 {
    1.0 - 2.59 * ratio + 5.11 * ratio * ratio - 3.52 * ratio * ratio * ratio
}

/// Potential reaction velocity, 1/min (Rothermel eqn 38).
///
/// ```text
/// Γ' = Γ'_max × (β/β_op)^A × exp(A × (1 - β/β_op))
/// ```
///
/// The exponent A depends on the weighting method in use; see
/// [`crate::physics::WeightingMethod::exponent_a`].
pub fn potential_reaction_velocity(
    max_velocity: f64,
    exponent_a: f64,
    packing_ratio: f64,
    optimal_packing: f64,
) -> f64 {
    let ratio = packing_ratio / optimal_packing;
    max_velocity * ratio.powf(exponent_a) * (exponent_a * (1.0 - ratio)).exp()
}

/// Wind multiplier Φ_w for a midflame wind speed in ft/min
/// (Rothermel eqns 47-50).
///
/// ```text
/// Φ_w = C × U^B × (β/β_op)^(-E)
/// C = 7.47 × exp(-0.133 × σ^0.55)
/// B = 0.02526 × σ^0.54
/// E = 0.715 × exp(-3.59e-4 × σ)
/// ```
pub fn wind_multiplier(
    sigma: f64,
    packing_ratio: f64,
    optimal_packing: f64,
    midflame_speed: f64,
) -> f64 {
    let c = 7.47 * (-0.133 * sigma.powf(0.55)).exp();
    let b = 0.02526 * sigma.powf(0.54);
    let e = 0.715 * (-3.59e-4 * sigma).exp();
    c * midflame_speed.powf(b) * (packing_ratio / optimal_packing).powf(-e)
}

/// Slope multiplier Φ_s for a slope in radians (Rothermel eqn 51).
///
/// ```text
/// Φ_s = 5.275 × β^(-0.3) × tan²(θ)
/// ```
pub fn slope_multiplier(packing_ratio: f64, slope_radians: f64) -> f64 {
    let tan_slope = slope_radians.tan();
    5.275 * packing_ratio.powf(-0.3) * tan_slope * tan_slope
}
