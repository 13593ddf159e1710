//! The fire spread models: basic (homogeneous fuel) and weighted
//! (categorized fuel complex).
//!
//! Both variants run the same pipeline (propagating flux, damping,
//! potential reaction velocity, reaction intensity, heat sink, wind and
//! slope multipliers) over the shared scalar equations in
//! [`crate::physics::equations`]. The basic model reads a single
//! homogeneous fuel bed; the weighted model reads the aggregates of a
//! [`FuelComplex`] and applies damping per category. Under the Rothermel
//! discipline the per-category reaction terms are weighted by the category
//! surface-area fraction; Albini's eqn-58 modification drops that factor.
//!
//! Evaluation is memoized behind an explicit dirty flag: every mutator
//! clears the cached outputs, so a stale result can never be returned after
//! wind, slope, fuel or moisture change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complex::FuelComplex;
use crate::core_types::{Category, FuelParticle, SizeClass};
use crate::error::{FireModelError, FireResult};
use crate::physics::{equations, WeightingMethod};

/// Everything a spread evaluation produces, memoized until an input
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadOutputs {
    /// Propagating flux ratio ξ.
    pub propagating_flux_ratio: f64,
    /// Potential reaction velocity Γ', 1/min.
    pub potential_reaction_velocity: f64,
    /// Reaction intensity I_R, BTU/ft²/min.
    pub reaction_intensity: f64,
    /// Wind multiplier Φ_w.
    pub wind_multiplier: f64,
    /// Slope multiplier Φ_s.
    pub slope_multiplier: f64,
    /// Rate of spread with no wind on flat ground, ft/min.
    pub no_wind_rate_of_spread: f64,
    /// Final rate of spread, ft/min.
    pub rate_of_spread: f64,
}

/// A uniform fuel bed: one particle description plus a bed depth.
///
/// This is the fuel the basic (non-categorical) model consumes. Bulk
/// density and packing ratio follow directly from loading, depth and
/// particle density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomogeneousFuel {
    particle: FuelParticle,
    depth: f64,
}

impl HomogeneousFuel {
    /// Wrap a particle and a fuel bed depth (ft, > 0).
    pub fn new(particle: FuelParticle, depth: f64) -> FireResult<Self> {
        if depth <= 0.0 {
            return Err(FireModelError::InvalidDepth);
        }
        Ok(Self { particle, depth })
    }

    /// The particle describing this bed.
    pub fn particle(&self) -> &FuelParticle {
        &self.particle
    }

    /// Fuel bed depth, ft.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Fuel bed bulk density, lb/ft³.
    pub fn bulk_density(&self) -> f64 {
        self.particle.ovendry_loading() / self.depth
    }

    /// Packing ratio: bulk density over particle density.
    pub fn packing_ratio(&self) -> f64 {
        self.bulk_density() / self.particle.particle_density()
    }
}

/// The basic Rothermel spread model over a homogeneous fuel bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicSpreadModel {
    fuel: HomogeneousFuel,
    midflame_wind: Option<f64>,
    slope: Option<f64>,
    outputs: Option<SpreadOutputs>,
}

impl BasicSpreadModel {
    /// A model over the given fuel bed. Wind and slope must be set before
    /// the first evaluation.
    pub fn new(fuel: HomogeneousFuel) -> Self {
        Self {
            fuel,
            midflame_wind: None,
            slope: None,
            outputs: None,
        }
    }

    /// The fuel bed under evaluation.
    pub fn fuel(&self) -> &HomogeneousFuel {
        &self.fuel
    }

    /// Set the midflame wind speed, ft/min.
    pub fn set_wind(&mut self, midflame_speed: f64) -> FireResult<()> {
        if midflame_speed < 0.0 {
            return Err(FireModelError::InvalidWindSpeed);
        }
        self.midflame_wind = Some(midflame_speed);
        self.outputs = None;
        Ok(())
    }

    /// Set the slope, radians.
    pub fn set_slope(&mut self, slope_radians: f64) {
        self.slope = Some(slope_radians);
        self.outputs = None;
    }

    /// Update the fuel moisture (and optionally extinction moisture) of the
    /// bed.
    pub fn set_moisture(&mut self, fuel_moisture: f64, extinction: Option<f64>) -> FireResult<()> {
        self.fuel.particle.set_moisture(fuel_moisture, extinction)?;
        self.outputs = None;
        Ok(())
    }

    /// Run the spread calculation, or return the memoized outputs if no
    /// input changed since the last run.
    pub fn evaluate(&mut self) -> FireResult<SpreadOutputs> {
        if let Some(outputs) = self.outputs {
            return Ok(outputs);
        }
        let midflame_wind = self.midflame_wind.ok_or(FireModelError::WindNotSet)?;
        let slope = self.slope.ok_or(FireModelError::SlopeNotSet)?;

        let particle = &self.fuel.particle;
        let fuel_moisture = particle.fuel_moisture()?;
        let extinction =
            particle
                .extinction_moisture()
                .ok_or(FireModelError::ParticleNotReady {
                    what: "extinction moisture",
                })?;
        let heat_of_ignition = particle.heat_of_ignition()?;

        let sigma = particle.surface_to_volume();
        let packing_ratio = self.fuel.packing_ratio();
        let bulk_density = self.fuel.bulk_density();

        let propagating_flux_ratio = equations::propagating_flux_ratio(sigma, packing_ratio);
        let mineral_damping = equations::mineral_damping(particle.effective_mineral_content());
        let moisture_damping = equations::moisture_damping(fuel_moisture / extinction);
        let potential_reaction_velocity = equations::potential_reaction_velocity(
            particle.max_reaction_velocity(),
            particle.exponent_a(),
            packing_ratio,
            particle.optimal_packing_ratio(),
        );
        // Rothermel eqn 27.
        let reaction_intensity = particle.net_fuel_loading()
            * particle.heat_content()
            * potential_reaction_velocity
            * mineral_damping
            * moisture_damping;
        // Rothermel eqn 43.
        let no_wind_rate_of_spread = reaction_intensity * propagating_flux_ratio
            / (bulk_density * particle.heating_efficiency() * heat_of_ignition);

        let wind_multiplier = equations::wind_multiplier(
            sigma,
            packing_ratio,
            particle.optimal_packing_ratio(),
            midflame_wind,
        );
        let slope_multiplier = equations::slope_multiplier(packing_ratio, slope);
        let rate_of_spread = no_wind_rate_of_spread * (1.0 + wind_multiplier + slope_multiplier);

        let outputs = SpreadOutputs {
            propagating_flux_ratio,
            potential_reaction_velocity,
            reaction_intensity,
            wind_multiplier,
            slope_multiplier,
            no_wind_rate_of_spread,
            rate_of_spread,
        };
        debug!(reaction_intensity, rate_of_spread, "basic spread evaluated");
        self.outputs = Some(outputs);
        Ok(outputs)
    }
}

/// The weighted spread model over a categorized fuel complex.
///
/// Owns its [`FuelComplex`]; fuel mutation goes through the model so the
/// memoized outputs can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSpreadModel {
    fuel: FuelComplex,
    midflame_wind: Option<f64>,
    slope: Option<f64>,
    outputs: Option<SpreadOutputs>,
}

impl WeightedSpreadModel {
    /// A model over the given fuel complex. Wind and slope must be set
    /// before the first evaluation.
    pub fn new(fuel: FuelComplex) -> Self {
        Self {
            fuel,
            midflame_wind: None,
            slope: None,
            outputs: None,
        }
    }

    /// The weighting method inherited from the fuel complex.
    pub fn method(&self) -> WeightingMethod {
        self.fuel.method()
    }

    /// The fuel complex under evaluation.
    pub fn fuel(&self) -> &FuelComplex {
        &self.fuel
    }

    /// Release the fuel complex.
    pub fn into_fuel(self) -> FuelComplex {
        self.fuel
    }

    /// Set the midflame wind speed, ft/min.
    pub fn set_wind(&mut self, midflame_speed: f64) -> FireResult<()> {
        if midflame_speed < 0.0 {
            return Err(FireModelError::InvalidWindSpeed);
        }
        self.midflame_wind = Some(midflame_speed);
        self.outputs = None;
        Ok(())
    }

    /// Set the slope, radians.
    pub fn set_slope(&mut self, slope_radians: f64) {
        self.slope = Some(slope_radians);
        self.outputs = None;
    }

    /// Insert or replace a particle in the underlying complex.
    pub fn set_particle(
        &mut self,
        category: Category,
        size_class: SizeClass,
        particle: FuelParticle,
    ) -> FireResult<()> {
        self.fuel.set_particle(category, size_class, particle)?;
        self.outputs = None;
        Ok(())
    }

    /// Set the fuel bed depth, ft.
    pub fn set_depth(&mut self, depth: f64) -> FireResult<()> {
        self.fuel.set_depth(depth)?;
        self.outputs = None;
        Ok(())
    }

    /// Set the moisture of extinction for a category.
    pub fn set_extinction_moisture(&mut self, category: Category, moisture: f64) -> FireResult<()> {
        self.fuel.set_extinction_moisture(category, moisture)?;
        self.outputs = None;
        Ok(())
    }

    /// Update the fuel moisture of one particle in the complex.
    pub fn set_particle_moisture(
        &mut self,
        category: Category,
        size_class: SizeClass,
        moisture: f64,
    ) -> FireResult<()> {
        self.fuel.set_particle_moisture(category, size_class, moisture)?;
        self.outputs = None;
        Ok(())
    }

    /// Run the full weighted spread calculation, or return the memoized
    /// outputs if no input changed since the last run.
    ///
    /// The steps run in a fixed order because each consumes the previous:
    /// aggregation, live extinction moisture, propagating flux, damping,
    /// reaction velocity and intensity, heat sink, and finally the wind and
    /// slope multipliers.
    pub fn evaluate(&mut self) -> FireResult<SpreadOutputs> {
        if let Some(outputs) = self.outputs {
            return Ok(outputs);
        }
        let midflame_wind = self.midflame_wind.ok_or(FireModelError::WindNotSet)?;
        let slope = self.slope.ok_or(FireModelError::SlopeNotSet)?;

        self.fuel.compute()?;
        if self.fuel.has_live_fuel() {
            self.fuel.compute_live_extinction_moisture()?;
        }
        let method = self.fuel.method();
        let agg = self.fuel.aggregates()?;

        let propagating_flux_ratio =
            equations::propagating_flux_ratio(agg.sigma, agg.packing_ratio);

        // Per-category damping and reaction terms (eqns 58, 62, 64). The
        // Albini form omits the category weight from the summation.
        let mut weighted_sum = 0.0;
        for (&category, aggregate) in &agg.by_category {
            let extinction = self.fuel.extinction_moisture(category).ok_or(
                FireModelError::MissingExtinctionMoisture { category },
            )?;
            let mineral_damping = equations::mineral_damping(aggregate.effective_mineral_content);
            let moisture_damping =
                equations::moisture_damping(aggregate.fuel_moisture / extinction);
            let term = aggregate.net_fuel_loading
                * aggregate.heat_content
                * moisture_damping
                * mineral_damping;
            weighted_sum += match method {
                WeightingMethod::Rothermel => agg.category_weights[&category] * term,
                WeightingMethod::Albini => term,
            };
        }
        let potential_reaction_velocity = equations::potential_reaction_velocity(
            agg.max_reaction_velocity,
            agg.exponent_a,
            agg.packing_ratio,
            agg.optimal_packing_ratio,
        );
        let reaction_intensity = weighted_sum * potential_reaction_velocity;

        // Heat sink, eqn 75: ρ_b · Σ_i f_i Σ_j f_ij ε_ij Q_ig,ij.
        let mut sink = 0.0;
        for (&category, &category_weight) in &agg.category_weights {
            let mut inner = 0.0;
            for (size_class, particle) in self.fuel.category_particles(category) {
                let weight = agg
                    .class_weight(category, size_class)
                    .ok_or(FireModelError::NotComputed)?;
                let heat_of_ignition =
                    particle
                        .heat_of_ignition()
                        .map_err(|_| FireModelError::MoistureNotSet {
                            category,
                            size_class,
                        })?;
                inner += weight * heat_of_ignition * particle.heating_efficiency();
            }
            sink += category_weight * inner;
        }
        let no_wind_rate_of_spread =
            reaction_intensity * propagating_flux_ratio / (agg.bulk_density * sink);

        let wind_multiplier = equations::wind_multiplier(
            agg.sigma,
            agg.packing_ratio,
            agg.optimal_packing_ratio,
            midflame_wind,
        );
        let slope_multiplier = equations::slope_multiplier(agg.packing_ratio, slope);
        let rate_of_spread = no_wind_rate_of_spread * (1.0 + wind_multiplier + slope_multiplier);

        let outputs = SpreadOutputs {
            propagating_flux_ratio,
            potential_reaction_velocity,
            reaction_intensity,
            wind_multiplier,
            slope_multiplier,
            no_wind_rate_of_spread,
            rate_of_spread,
        };
        debug!(
            method = %method,
            reaction_intensity,
            rate_of_spread,
            "weighted spread evaluated"
        );
        self.outputs = Some(outputs);
        Ok(outputs)
    }
}
