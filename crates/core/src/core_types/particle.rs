//! A single fuel particle: one size class within one category.

use serde::{Deserialize, Serialize};

use crate::error::{FireModelError, FireResult};
use crate::physics::{equations, WeightingMethod};

/// Default particle density for woody fuels, lb/ft³.
pub const DEFAULT_PARTICLE_DENSITY: f64 = 32.0;
/// Default total mineral content, fraction of dry weight.
pub const DEFAULT_TOTAL_MINERAL_CONTENT: f64 = 0.0555;
/// Default effective (silica-free) mineral content, fraction.
pub const DEFAULT_EFFECTIVE_MINERAL_CONTENT: f64 = 0.01;
/// Default low heat content, BTU/lb.
pub const DEFAULT_HEAT_CONTENT: f64 = 8000.0;

/// One size-class/category fuel descriptor with its derived physical
/// constants.
///
/// Surface-area-to-volume ratio and ovendry loading are fixed at
/// construction (both are validated there), and the geometry-derived fields
/// are recomputed whenever σ or the loading change. Fuel moisture is the
/// one input expected to change repeatedly; updating it re-derives only
/// the heat of ignition, never the geometry.
///
/// A particle is "ready" once σ, loading and moisture are all set; the
/// moisture-dependent accessors return a precondition error before then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelParticle {
    method: WeightingMethod,
    sigma: f64,
    ovendry_loading: f64,
    particle_density: f64,
    total_mineral_content: f64,
    effective_mineral_content: f64,
    heat_content: f64,
    fuel_moisture: Option<f64>,
    extinction_moisture: Option<f64>,

    // Derived from sigma.
    optimal_packing_ratio: f64,
    max_reaction_velocity: f64,
    heating_efficiency: f64,
    exponent_a: f64,
    // Derived from loading and mineral content.
    net_fuel_loading: f64,
    // Derived from fuel moisture.
    heat_of_ignition: Option<f64>,
}

impl FuelParticle {
    /// Build a particle from σ (ft⁻¹, > 0) and ovendry loading
    /// (lb/ft², ≥ 0) under the given weighting method.
    ///
    /// Density, mineral contents and heat content start at the standard
    /// defaults; fuel moisture must be set before the particle takes part
    /// in an aggregation.
    pub fn new(method: WeightingMethod, sigma: f64, ovendry_loading: f64) -> FireResult<Self> {
        if sigma <= 0.0 {
            return Err(FireModelError::InvalidSigma);
        }
        if ovendry_loading < 0.0 {
            return Err(FireModelError::InvalidLoading);
        }
        Ok(Self {
            method,
            sigma,
            ovendry_loading,
            particle_density: DEFAULT_PARTICLE_DENSITY,
            total_mineral_content: DEFAULT_TOTAL_MINERAL_CONTENT,
            effective_mineral_content: DEFAULT_EFFECTIVE_MINERAL_CONTENT,
            heat_content: DEFAULT_HEAT_CONTENT,
            fuel_moisture: None,
            extinction_moisture: None,
            optimal_packing_ratio: equations::optimal_packing_ratio(sigma),
            max_reaction_velocity: equations::max_reaction_velocity(sigma),
            heating_efficiency: equations::heating_efficiency(sigma),
            exponent_a: method.exponent_a(sigma),
            net_fuel_loading: method.net_fuel_loading(ovendry_loading, DEFAULT_TOTAL_MINERAL_CONTENT),
            heat_of_ignition: None,
        })
    }

    /// Replace σ and re-derive the geometry-dependent constants
    /// (Rothermel eqns 14, 36, 37 and the exponent A).
    pub fn set_surface_to_volume(&mut self, sigma: f64) -> FireResult<()> {
        if sigma <= 0.0 {
            return Err(FireModelError::InvalidSigma);
        }
        self.sigma = sigma;
        self.optimal_packing_ratio = equations::optimal_packing_ratio(sigma);
        self.max_reaction_velocity = equations::max_reaction_velocity(sigma);
        self.heating_efficiency = equations::heating_efficiency(sigma);
        self.exponent_a = self.method.exponent_a(sigma);
        Ok(())
    }

    /// Replace the ovendry loading and re-derive the net fuel loading.
    pub fn set_loading(&mut self, ovendry_loading: f64) -> FireResult<()> {
        if ovendry_loading < 0.0 {
            return Err(FireModelError::InvalidLoading);
        }
        self.ovendry_loading = ovendry_loading;
        self.recompute_net_loading();
        Ok(())
    }

    /// Set total and effective mineral content fractions and re-derive the
    /// net fuel loading.
    pub fn set_mineral_content(&mut self, total: f64, effective: f64) -> FireResult<()> {
        if total < 0.0 || effective < 0.0 {
            return Err(FireModelError::InvalidMineralContent);
        }
        self.total_mineral_content = total;
        self.effective_mineral_content = effective;
        self.recompute_net_loading();
        Ok(())
    }

    /// Set the low heat content, BTU/lb.
    pub fn set_heat_content(&mut self, heat_content: f64) {
        self.heat_content = heat_content;
    }

    /// Set the fuel moisture (fraction of water weight to dry weight) and
    /// optionally the moisture of extinction, deriving the heat of ignition
    /// (Rothermel eqn 12).
    ///
    /// The extinction moisture only matters for a particle that stands
    /// alone as a homogeneous fuel bed; particles inside a complex take
    /// their extinction moisture from the per-category map instead.
    pub fn set_moisture(&mut self, fuel_moisture: f64, extinction: Option<f64>) -> FireResult<()> {
        if fuel_moisture < 0.0 {
            return Err(FireModelError::InvalidMoisture {
                what: "fuel moisture",
            });
        }
        if let Some(ext) = extinction {
            if ext <= 0.0 {
                return Err(FireModelError::InvalidMoisture {
                    what: "extinction moisture",
                });
            }
            self.extinction_moisture = Some(ext);
        }
        self.fuel_moisture = Some(fuel_moisture);
        self.heat_of_ignition = Some(equations::heat_of_ignition(fuel_moisture));
        Ok(())
    }

    fn recompute_net_loading(&mut self) {
        self.net_fuel_loading = self
            .method
            .net_fuel_loading(self.ovendry_loading, self.total_mineral_content);
    }

    /// Mean total surface area contributed by this particle, ft²/ft²
    /// (Rothermel eqn 53): σ·w₀/ρ_p.
    pub fn surface_area(&self) -> f64 {
        self.sigma * self.ovendry_loading / self.particle_density
    }

    /// The weighting method this particle was built for.
    pub fn method(&self) -> WeightingMethod {
        self.method
    }

    /// Surface-area-to-volume ratio, ft⁻¹.
    pub fn surface_to_volume(&self) -> f64 {
        self.sigma
    }

    /// Ovendry loading, lb/ft².
    pub fn ovendry_loading(&self) -> f64 {
        self.ovendry_loading
    }

    /// Particle density, lb/ft³.
    pub fn particle_density(&self) -> f64 {
        self.particle_density
    }

    /// Total mineral content fraction.
    pub fn total_mineral_content(&self) -> f64 {
        self.total_mineral_content
    }

    /// Effective (silica-free) mineral content fraction.
    pub fn effective_mineral_content(&self) -> f64 {
        self.effective_mineral_content
    }

    /// Low heat content, BTU/lb.
    pub fn heat_content(&self) -> f64 {
        self.heat_content
    }

    /// Net fuel loading under the active weighting method, lb/ft².
    pub fn net_fuel_loading(&self) -> f64 {
        self.net_fuel_loading
    }

    /// Optimal packing ratio for this σ.
    pub fn optimal_packing_ratio(&self) -> f64 {
        self.optimal_packing_ratio
    }

    /// Maximum potential reaction velocity, 1/min.
    pub fn max_reaction_velocity(&self) -> f64 {
        self.max_reaction_velocity
    }

    /// Effective heating number ε.
    pub fn heating_efficiency(&self) -> f64 {
        self.heating_efficiency
    }

    /// Exponent A of the potential reaction velocity.
    pub fn exponent_a(&self) -> f64 {
        self.exponent_a
    }

    /// Fuel moisture fraction; errors until [`Self::set_moisture`] is called.
    pub fn fuel_moisture(&self) -> FireResult<f64> {
        self.fuel_moisture.ok_or(FireModelError::ParticleNotReady {
            what: "fuel moisture",
        })
    }

    /// Heat of ignition, BTU/lb; errors until moisture is set.
    pub fn heat_of_ignition(&self) -> FireResult<f64> {
        self.heat_of_ignition
            .ok_or(FireModelError::ParticleNotReady {
                what: "heat of ignition",
            })
    }

    /// Moisture of extinction, if one was set on this particle.
    pub fn extinction_moisture(&self) -> Option<f64> {
        self.extinction_moisture
    }

    /// Whether σ, loading and moisture have all been provided.
    pub fn is_ready(&self) -> bool {
        self.fuel_moisture.is_some()
    }
}
