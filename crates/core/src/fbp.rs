//! Fire behavior prediction façade.
//!
//! [`FireBehavior`] bundles a fuel complex, a weighted spread model and
//! field-unit inputs behind one small surface. Wind arrives in mi/h and
//! slope in degrees; both are converted to the model's native ft/min and
//! radians at evaluation time. Outputs are clamped to zero so extreme
//! moisture inputs degrade to "no spread" instead of a negative rate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::StandardFuelModel;
use crate::complex::FuelComplex;
use crate::core_types::{Category, SizeClass};
use crate::error::{FireModelError, FireResult};
use crate::model::WeightedSpreadModel;
use crate::physics::WeightingMethod;

/// mi/h to ft/min.
const MPH_TO_FEET_PER_MINUTE: f64 = 5280.0 / 60.0;

/// High-level fire behavior prediction over a categorized fuel complex.
///
/// Wind and slope default to zero, so a freshly built prediction is
/// evaluable as soon as fuel moistures are supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireBehavior {
    model: WeightedSpreadModel,
    midflame_wind_mph: f64,
    slope_degrees: f64,
    rate_of_spread: Option<f64>,
    heat_per_area: Option<f64>,
}

impl FireBehavior {
    /// A prediction over one of the standard NFFL fuel models.
    pub fn standard(fuel_model: StandardFuelModel, method: WeightingMethod) -> Self {
        Self::custom(fuel_model.build(method))
    }

    /// A prediction over a caller-assembled fuel complex.
    pub fn custom(fuel: FuelComplex) -> Self {
        Self {
            model: WeightedSpreadModel::new(fuel),
            midflame_wind_mph: 0.0,
            slope_degrees: 0.0,
            rate_of_spread: None,
            heat_per_area: None,
        }
    }

    /// The underlying spread model.
    pub fn model(&self) -> &WeightedSpreadModel {
        &self.model
    }

    /// The weighting method of the underlying fuel complex.
    pub fn method(&self) -> WeightingMethod {
        self.model.method()
    }

    /// Set the midflame wind speed, mi/h.
    pub fn set_midflame_wind(&mut self, speed_mph: f64) -> FireResult<()> {
        if speed_mph < 0.0 {
            return Err(FireModelError::InvalidWindSpeed);
        }
        self.midflame_wind_mph = speed_mph;
        self.invalidate();
        Ok(())
    }

    /// Set the terrain slope, degrees above horizontal.
    pub fn set_slope(&mut self, slope_degrees: f64) {
        self.slope_degrees = slope_degrees;
        self.invalidate();
    }

    /// Set moisture contents for dead size classes, as (class, fraction)
    /// pairs. Every named class must exist in the fuel model.
    pub fn set_dead_fuel_moistures(&mut self, moistures: &[(SizeClass, f64)]) -> FireResult<()> {
        self.set_category_moistures(Category::Dead, moistures)
    }

    /// Set moisture contents for live size classes, as (class, fraction)
    /// pairs. Fails with [`FireModelError::NoLiveFuel`] when the fuel model
    /// carries no live fuel.
    pub fn set_live_fuel_moistures(&mut self, moistures: &[(SizeClass, f64)]) -> FireResult<()> {
        if !self.model.fuel().has_live_fuel() {
            return Err(FireModelError::NoLiveFuel);
        }
        self.set_category_moistures(Category::Live, moistures)
    }

    fn set_category_moistures(
        &mut self,
        category: Category,
        moistures: &[(SizeClass, f64)],
    ) -> FireResult<()> {
        // Reject the whole map before touching the fuel, so a bad entry
        // cannot leave a partially applied moisture profile behind.
        for &(size_class, _) in moistures {
            if !self.model.fuel().contains(category, size_class) {
                return Err(FireModelError::MissingSizeClass {
                    category,
                    size_class,
                });
            }
        }
        // The memo is cleared before the first mutation; an error from a
        // later entry must never leave cached outputs ahead of the fuel.
        self.invalidate();
        for &(size_class, moisture) in moistures {
            self.model.set_particle_moisture(category, size_class, moisture)?;
        }
        Ok(())
    }

    /// Predicted rate of spread, ft/min, never negative.
    pub fn rate_of_spread(&mut self) -> FireResult<f64> {
        let (rate_of_spread, _) = self.evaluate()?;
        Ok(rate_of_spread.max(0.0))
    }

    /// Predicted heat release per unit area per minute, BTU/ft²/min, never
    /// negative.
    pub fn heat_per_area(&mut self) -> FireResult<f64> {
        let (_, heat_per_area) = self.evaluate()?;
        Ok(heat_per_area.max(0.0))
    }

    fn invalidate(&mut self) {
        self.rate_of_spread = None;
        self.heat_per_area = None;
    }

    fn evaluate(&mut self) -> FireResult<(f64, f64)> {
        if let (Some(rate_of_spread), Some(heat_per_area)) =
            (self.rate_of_spread, self.heat_per_area)
        {
            return Ok((rate_of_spread, heat_per_area));
        }

        self.model
            .set_wind(self.midflame_wind_mph * MPH_TO_FEET_PER_MINUTE)?;
        self.model.set_slope(self.slope_degrees.to_radians());
        let outputs = self.model.evaluate()?;

        debug!(
            wind_mph = self.midflame_wind_mph,
            slope_degrees = self.slope_degrees,
            rate_of_spread = outputs.rate_of_spread,
            "fire behavior evaluated"
        );
        self.rate_of_spread = Some(outputs.rate_of_spread);
        self.heat_per_area = Some(outputs.reaction_intensity);
        Ok((outputs.rate_of_spread, outputs.reaction_intensity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn short_grass() -> FireBehavior {
        let mut fbp = FireBehavior::standard(StandardFuelModel::ShortGrass, WeightingMethod::Rothermel);
        fbp.set_dead_fuel_moistures(&[(SizeClass::OneHour, 0.06)])
            .unwrap();
        fbp
    }

    #[test]
    fn calm_flat_short_grass_reference() {
        let mut fbp = short_grass();
        assert_relative_eq!(
            fbp.rate_of_spread().unwrap(),
            4.41286848156915,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            fbp.heat_per_area().unwrap(),
            790.3530222482264,
            max_relative = 1e-9
        );
    }

    #[test]
    fn wind_is_converted_from_miles_per_hour() {
        let mut fbp = short_grass();
        fbp.set_midflame_wind(5.0).unwrap();
        // 5 mi/h is 440 ft/min at the model boundary.
        assert_relative_eq!(
            fbp.rate_of_spread().unwrap(),
            98.96450559182313,
            max_relative = 1e-9
        );
    }

    #[test]
    fn saturated_fuel_clamps_to_zero_spread() {
        // 14.4% moisture against a 12% extinction moisture drives the
        // damping coefficient negative; the prediction floors at zero.
        let mut fbp = short_grass();
        fbp.set_dead_fuel_moistures(&[(SizeClass::OneHour, 0.144)])
            .unwrap();
        assert_eq!(fbp.rate_of_spread().unwrap(), 0.0);
        assert_eq!(fbp.heat_per_area().unwrap(), 0.0);
    }

    #[test]
    fn live_moistures_require_live_fuel() {
        let mut fbp = short_grass();
        assert_eq!(
            fbp.set_live_fuel_moistures(&[(SizeClass::OneHour, 1.0)])
                .unwrap_err(),
            FireModelError::NoLiveFuel
        );
    }

    #[test]
    fn unknown_size_classes_are_rejected() {
        let mut fbp = short_grass();
        let err = fbp
            .set_dead_fuel_moistures(&[(SizeClass::TenHour, 0.07)])
            .unwrap_err();
        assert_eq!(
            err,
            FireModelError::MissingSizeClass {
                category: Category::Dead,
                size_class: SizeClass::TenHour,
            }
        );
    }

    #[test]
    fn rejected_moisture_map_leaves_fuel_and_results_unchanged() {
        let mut fbp = short_grass();
        let before = fbp.heat_per_area().unwrap();

        // The first entry names a valid class; the second does not. Nothing
        // may be applied and the cached result must still be correct.
        let err = fbp
            .set_dead_fuel_moistures(&[(SizeClass::OneHour, 0.14), (SizeClass::TenHour, 0.07)])
            .unwrap_err();
        assert!(matches!(err, FireModelError::MissingSizeClass { .. }));

        let moisture = fbp
            .model()
            .fuel()
            .particle(Category::Dead, SizeClass::OneHour)
            .unwrap()
            .fuel_moisture()
            .unwrap();
        assert_relative_eq!(moisture, 0.06);
        assert_relative_eq!(fbp.heat_per_area().unwrap(), before);
    }

    #[test]
    fn mid_apply_moisture_error_still_clears_the_cache() {
        let mut fbp = short_grass();
        let before = fbp.heat_per_area().unwrap();

        // Both keys exist, so validation passes, but the second value is
        // rejected by the particle after the first was already applied. The
        // next evaluation must reflect the applied entry, not the memo.
        assert_eq!(
            fbp.set_dead_fuel_moistures(&[(SizeClass::OneHour, 0.10), (SizeClass::OneHour, -0.1)])
                .unwrap_err(),
            FireModelError::InvalidMoisture {
                what: "fuel moisture"
            }
        );
        assert!(fbp.heat_per_area().unwrap() < before);
    }

    #[test]
    fn negative_wind_is_rejected() {
        let mut fbp = short_grass();
        assert_eq!(
            fbp.set_midflame_wind(-3.0).unwrap_err(),
            FireModelError::InvalidWindSpeed
        );
    }

    #[test]
    fn results_are_cached_until_an_input_changes() {
        let mut fbp = short_grass();
        let calm = fbp.rate_of_spread().unwrap();
        assert_relative_eq!(fbp.rate_of_spread().unwrap(), calm);

        fbp.set_midflame_wind(5.0).unwrap();
        assert!(fbp.rate_of_spread().unwrap() > calm);
    }

    #[test]
    fn live_fuel_models_evaluate_with_both_methods() {
        for method in [WeightingMethod::Rothermel, WeightingMethod::Albini] {
            let mut fbp = FireBehavior::standard(StandardFuelModel::TimberGrassUnderstory, method);
            fbp.set_dead_fuel_moistures(&[
                (SizeClass::OneHour, 0.06),
                (SizeClass::TenHour, 0.07),
                (SizeClass::HundredHour, 0.08),
            ])
            .unwrap();
            fbp.set_live_fuel_moistures(&[(SizeClass::OneHour, 1.0)])
                .unwrap();
            fbp.set_midflame_wind(4.0).unwrap();
            fbp.set_slope(10.0);
            assert!(fbp.rate_of_spread().unwrap() > 0.0);
            assert!(fbp.heat_per_area().unwrap() > 0.0);
        }
    }
}
