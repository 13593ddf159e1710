//! The fuel complex: an inhomogeneous fuel bed and its weighted aggregates.
//!
//! Rothermel's spread equation wants a single value for each fuel property,
//! but the stylized fuel models specify loadings per category (dead, live)
//! and per time-lag size class. This module implements the
//! surface-area-weighted aggregation that bridges the two (Rothermel 1972,
//! eqns 53-74, and Albini 1976 appendix III): every particle contributes in
//! proportion to the surface area it exposes, first within its category and
//! then across categories.
//!
//! Aggregation is explicit: [`FuelComplex::compute`] refreshes all derived
//! state in one pass and any structural change (adding or removing a
//! particle, changing the depth) discards the cached aggregates until the
//! next `compute()`. Moisture-only updates are cheaper: the weights depend
//! on surface area, not water, so only the per-category moisture mean is
//! refreshed in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::{Category, FuelParticle, SizeClass};
use crate::error::{FireModelError, FireResult};
use crate::physics::{equations, WeightingMethod};

/// Area-weighted means of the particle attributes within one category
/// (Rothermel eqns 59, 61, 63, 66).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    /// Net fuel loading, lb/ft².
    pub net_fuel_loading: f64,
    /// Low heat content, BTU/lb.
    pub heat_content: f64,
    /// Effective mineral content fraction.
    pub effective_mineral_content: f64,
    /// Fuel moisture fraction.
    pub fuel_moisture: f64,
}

/// Snapshot of all derived state of a fuel complex, produced by
/// [`FuelComplex::compute`] and valid until the next structural change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    /// f_ij: each class's share of its category's surface area (eqn 56).
    /// Sums to 1 within every category.
    pub class_weights: BTreeMap<Category, BTreeMap<SizeClass, f64>>,
    /// f_i: each category's share of total surface area (eqn 57).
    /// Sums to 1 over the whole complex.
    pub category_weights: BTreeMap<Category, f64>,
    /// Per-category attribute means.
    pub by_category: BTreeMap<Category, CategoryAggregate>,
    /// Whole-complex surface-area-to-volume ratio, ft⁻¹ (eqn 72).
    pub sigma: f64,
    /// Whole-complex packing ratio (eqn 73).
    pub packing_ratio: f64,
    /// Whole-complex bulk density, lb/ft³ (eqn 74).
    pub bulk_density: f64,
    /// Optimal packing ratio for the aggregate σ.
    pub optimal_packing_ratio: f64,
    /// Maximum potential reaction velocity for the aggregate σ, 1/min.
    pub max_reaction_velocity: f64,
    /// Effective heating number for the aggregate σ.
    pub heating_efficiency: f64,
    /// Exponent A for the aggregate σ, per the active weighting method.
    pub exponent_a: f64,
}

impl Aggregates {
    /// Weight of one size class within its category, if present.
    pub fn class_weight(&self, category: Category, size_class: SizeClass) -> Option<f64> {
        self.class_weights.get(&category)?.get(&size_class).copied()
    }

    /// Weight of one category within the complex, if present.
    pub fn category_weight(&self, category: Category) -> Option<f64> {
        self.category_weights.get(&category).copied()
    }

    /// Aggregated attributes of one category, if present.
    pub fn category(&self, category: Category) -> Option<&CategoryAggregate> {
        self.by_category.get(&category)
    }
}

/// A fuel-bed description: particles grouped by category and size class,
/// a per-category moisture of extinction and a single fuel-bed depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelComplex {
    method: WeightingMethod,
    particles: BTreeMap<Category, BTreeMap<SizeClass, FuelParticle>>,
    extinction_moisture: BTreeMap<Category, f64>,
    depth: Option<f64>,
    aggregates: Option<Aggregates>,
}

impl FuelComplex {
    /// An empty complex under the given weighting method.
    pub fn new(method: WeightingMethod) -> Self {
        Self {
            method,
            particles: BTreeMap::new(),
            extinction_moisture: BTreeMap::new(),
            depth: None,
            aggregates: None,
        }
    }

    /// The weighting method this complex aggregates under.
    pub fn method(&self) -> WeightingMethod {
        self.method
    }

    /// Insert or replace the particle for a (category, size class) slot.
    ///
    /// The particle must have been built for the same weighting method as
    /// the complex; mixing disciplines would silently blend two different
    /// net-loading formulas. Discards any cached aggregates.
    pub fn set_particle(
        &mut self,
        category: Category,
        size_class: SizeClass,
        particle: FuelParticle,
    ) -> FireResult<()> {
        if particle.method() != self.method {
            return Err(FireModelError::MethodMismatch {
                expected: self.method.name(),
                found: particle.method().name(),
            });
        }
        self.particles
            .entry(category)
            .or_default()
            .insert(size_class, particle);
        self.aggregates = None;
        Ok(())
    }

    /// Remove a particle, discarding any cached aggregates.
    pub fn remove_particle(
        &mut self,
        category: Category,
        size_class: SizeClass,
    ) -> Option<FuelParticle> {
        let removed = self.particles.get_mut(&category)?.remove(&size_class);
        if removed.is_some() {
            self.aggregates = None;
        }
        removed
    }

    /// Look up a particle.
    pub fn particle(&self, category: Category, size_class: SizeClass) -> Option<&FuelParticle> {
        self.particles.get(&category)?.get(&size_class)
    }

    /// Iterate the particles of one category, finest class first.
    pub fn category_particles(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (SizeClass, &FuelParticle)> {
        self.particles
            .get(&category)
            .into_iter()
            .flatten()
            .map(|(&size_class, particle)| (size_class, particle))
    }

    /// Iterate every particle in the complex.
    pub fn particles(&self) -> impl Iterator<Item = (Category, SizeClass, &FuelParticle)> {
        self.particles.iter().flat_map(|(&category, classes)| {
            classes
                .iter()
                .map(move |(&size_class, particle)| (category, size_class, particle))
        })
    }

    /// Whether the complex contains a particular size class.
    pub fn contains(&self, category: Category, size_class: SizeClass) -> bool {
        self.particle(category, size_class).is_some()
    }

    /// Whether the complex holds any live fuel with non-zero loading.
    pub fn has_live_fuel(&self) -> bool {
        self.particles
            .get(&Category::Live)
            .is_some_and(|classes| classes.values().any(|p| p.ovendry_loading() > 0.0))
    }

    /// Set the moisture of extinction for a category. Does not invalidate
    /// the cached aggregates; extinction moisture enters the model only at
    /// damping time.
    pub fn set_extinction_moisture(&mut self, category: Category, moisture: f64) -> FireResult<()> {
        if moisture <= 0.0 {
            return Err(FireModelError::InvalidMoisture {
                what: "extinction moisture",
            });
        }
        self.extinction_moisture.insert(category, moisture);
        Ok(())
    }

    /// Moisture of extinction for a category, if one is known.
    pub fn extinction_moisture(&self, category: Category) -> Option<f64> {
        self.extinction_moisture.get(&category).copied()
    }

    /// Set the fuel bed depth, ft. Discards any cached aggregates.
    pub fn set_depth(&mut self, depth: f64) -> FireResult<()> {
        if depth <= 0.0 {
            return Err(FireModelError::InvalidDepth);
        }
        self.depth = Some(depth);
        self.aggregates = None;
        Ok(())
    }

    /// Fuel bed depth, ft, if set.
    pub fn depth(&self) -> Option<f64> {
        self.depth
    }

    /// Update the fuel moisture of one particle.
    ///
    /// Fails if the (category, size class) slot is empty. Weights depend on
    /// surface area, not water, so the cached weights survive; the cached
    /// per-category moisture mean is refreshed in place so the aggregates
    /// stay trustworthy without a full recompute.
    pub fn set_particle_moisture(
        &mut self,
        category: Category,
        size_class: SizeClass,
        moisture: f64,
    ) -> FireResult<()> {
        let particle = self
            .particles
            .get_mut(&category)
            .and_then(|classes| classes.get_mut(&size_class))
            .ok_or(FireModelError::MissingSizeClass {
                category,
                size_class,
            })?;
        particle.set_moisture(moisture, None)?;

        if let Some(aggregates) = self.aggregates.as_mut() {
            if let (Some(weights), Some(classes)) = (
                aggregates.class_weights.get(&category),
                self.particles.get(&category),
            ) {
                let mut mean = 0.0;
                for (class, weight) in weights {
                    let particle =
                        classes
                            .get(class)
                            .ok_or(FireModelError::MissingSizeClass {
                                category,
                                size_class: *class,
                            })?;
                    let class_moisture =
                        particle
                            .fuel_moisture()
                            .map_err(|_| FireModelError::MoistureNotSet {
                                category,
                                size_class: *class,
                            })?;
                    mean += weight * class_moisture;
                }
                if let Some(aggregate) = aggregates.by_category.get_mut(&category) {
                    aggregate.fuel_moisture = mean;
                }
            }
        }
        Ok(())
    }

    /// Refresh all derived state: surface-area weights, per-category means
    /// and the whole-complex aggregates, in that strict order (the later
    /// steps consume the weights of the first).
    ///
    /// Must be called at least once before the aggregates are read, and
    /// again after any structural change. A category whose total loading is
    /// zero divides to non-finite weights and propagates; validate fuel
    /// definitions before computing.
    pub fn compute(&mut self) -> FireResult<()> {
        let depth = self.depth.ok_or(FireModelError::DepthNotSet)?;

        // Surface areas, eqns 53-55.
        let mut class_areas: BTreeMap<Category, BTreeMap<SizeClass, f64>> = BTreeMap::new();
        let mut category_areas: BTreeMap<Category, f64> = BTreeMap::new();
        let mut total_area = 0.0;
        for (&category, classes) in &self.particles {
            if classes.is_empty() {
                continue;
            }
            let mut areas = BTreeMap::new();
            let mut category_area = 0.0;
            for (&size_class, particle) in classes {
                let area = particle.surface_area();
                category_area += area;
                areas.insert(size_class, area);
            }
            total_area += category_area;
            category_areas.insert(category, category_area);
            class_areas.insert(category, areas);
        }
        if class_areas.is_empty() {
            return Err(FireModelError::EmptyComplex);
        }

        // Weights, eqns 56-57.
        let mut class_weights: BTreeMap<Category, BTreeMap<SizeClass, f64>> = BTreeMap::new();
        let mut category_weights: BTreeMap<Category, f64> = BTreeMap::new();
        for (&category, areas) in &class_areas {
            let category_area = category_areas[&category];
            category_weights.insert(category, category_area / total_area);
            let weights = areas
                .iter()
                .map(|(&size_class, &area)| (size_class, area / category_area))
                .collect();
            class_weights.insert(category, weights);
        }

        // Per-category means, eqns 59, 61, 63, 66.
        let mut by_category: BTreeMap<Category, CategoryAggregate> = BTreeMap::new();
        for (&category, weights) in &class_weights {
            let classes = &self.particles[&category];
            let mut aggregate = CategoryAggregate::default();
            for (&size_class, &weight) in weights {
                let particle = &classes[&size_class];
                let moisture =
                    particle
                        .fuel_moisture()
                        .map_err(|_| FireModelError::MoistureNotSet {
                            category,
                            size_class,
                        })?;
                aggregate.net_fuel_loading += weight * particle.net_fuel_loading();
                aggregate.heat_content += weight * particle.heat_content();
                aggregate.effective_mineral_content +=
                    weight * particle.effective_mineral_content();
                aggregate.fuel_moisture += weight * moisture;
            }
            by_category.insert(category, aggregate);
        }

        // Whole-complex aggregates, eqns 72-74.
        let mut sigma = 0.0;
        let mut packing_ratio = 0.0;
        let mut bulk_density = 0.0;
        for (&category, weights) in &class_weights {
            let classes = &self.particles[&category];
            let category_weight = category_weights[&category];
            let mut category_sigma = 0.0;
            for (&size_class, &weight) in weights {
                let particle = &classes[&size_class];
                category_sigma += weight * particle.surface_to_volume();
                packing_ratio += weight * particle.ovendry_loading() / particle.particle_density();
                bulk_density += weight * particle.ovendry_loading();
            }
            sigma += category_weight * category_sigma;
        }
        packing_ratio /= depth;
        bulk_density /= depth;

        // Re-derive the σ-dependent geometry exactly as a single particle
        // would, for the complex as a whole.
        self.aggregates = Some(Aggregates {
            class_weights,
            category_weights,
            by_category,
            sigma,
            packing_ratio,
            bulk_density,
            optimal_packing_ratio: equations::optimal_packing_ratio(sigma),
            max_reaction_velocity: equations::max_reaction_velocity(sigma),
            heating_efficiency: equations::heating_efficiency(sigma),
            exponent_a: self.method.exponent_a(sigma),
        });
        debug!(sigma, packing_ratio, bulk_density, "fuel complex aggregated");
        Ok(())
    }

    /// The cached aggregates. Errors until [`Self::compute`] has run after
    /// the most recent structural change.
    pub fn aggregates(&self) -> FireResult<&Aggregates> {
        self.aggregates.as_ref().ok_or(FireModelError::NotComputed)
    }

    /// Derive the moisture of extinction for live fuels from the dead fuel
    /// state, storing it in the per-category extinction map.
    ///
    /// Dispatches on the weighting method: Rothermel's eqn 88 uses only the
    /// 1-hr loadings, Albini's appendix III weights every dead particle by
    /// exp(−138/σ) and every live particle by exp(−500/σ). When the complex
    /// holds no live fuel this is a silent no-op, not an error; there is
    /// simply nothing to derive.
    pub fn compute_live_extinction_moisture(&mut self) -> FireResult<()> {
        if !self.has_live_fuel() {
            return Ok(());
        }
        let extinction = match self.method {
            WeightingMethod::Rothermel => self.live_extinction_rothermel()?,
            WeightingMethod::Albini => self.live_extinction_albini()?,
        };
        self.extinction_moisture.insert(Category::Live, extinction);
        Ok(())
    }

    /// Rothermel eqn 88: mass ratio of fine live to total fine fuel.
    fn live_extinction_rothermel(&self) -> FireResult<f64> {
        let dead = self.require_particle(Category::Dead, SizeClass::OneHour)?;
        let live = self.require_particle(Category::Live, SizeClass::OneHour)?;
        let dead_moisture =
            dead.fuel_moisture()
                .map_err(|_| FireModelError::MoistureNotSet {
                    category: Category::Dead,
                    size_class: SizeClass::OneHour,
                })?;
        // A zero live loading divides to a non-finite ratio and propagates.
        let mass_ratio =
            live.ovendry_loading() / (live.ovendry_loading() + dead.ovendry_loading());
        Ok(2.9 * ((1.0 - mass_ratio) / mass_ratio) * (1.0 - (10.0 / 3.0) * dead_moisture) - 0.226)
    }

    /// Albini appendix III: W′ and M′ sums over all dead and live classes.
    fn live_extinction_albini(&self) -> FireResult<f64> {
        let dead_extinction = self.extinction_moisture(Category::Dead).ok_or(
            FireModelError::MissingExtinctionMoisture {
                category: Category::Dead,
            },
        )?;

        let mut fine_dead = 0.0;
        let mut fine_dead_moisture = 0.0;
        for (size_class, particle) in self.category_particles(Category::Dead) {
            let moisture =
                particle
                    .fuel_moisture()
                    .map_err(|_| FireModelError::MoistureNotSet {
                        category: Category::Dead,
                        size_class,
                    })?;
            let term = particle.ovendry_loading() * (-138.0 / particle.surface_to_volume()).exp();
            fine_dead += term;
            fine_dead_moisture += term * moisture;
        }
        let mut fine_live = 0.0;
        for (_, particle) in self.category_particles(Category::Live) {
            fine_live += particle.ovendry_loading() * (-500.0 / particle.surface_to_volume()).exp();
        }

        let w_prime = fine_dead / fine_live;
        let m_prime = fine_dead_moisture / fine_dead;
        Ok(2.9 * w_prime * (1.0 - m_prime / dead_extinction) - 0.226)
    }

    fn require_particle(
        &self,
        category: Category,
        size_class: SizeClass,
    ) -> FireResult<&FuelParticle> {
        self.particle(category, size_class)
            .ok_or(FireModelError::MissingSizeClass {
                category,
                size_class,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn particle(method: WeightingMethod, sigma: f64, loading: f64, moisture: f64) -> FuelParticle {
        let mut p = FuelParticle::new(method, sigma, loading).unwrap();
        p.set_moisture(moisture, None).unwrap();
        p
    }

    /// NFFL model 2 under the given method, with typical moistures.
    fn timber_and_grass(method: WeightingMethod) -> FuelComplex {
        let mut fuel = FuelComplex::new(method);
        fuel.set_particle(
            Category::Dead,
            SizeClass::OneHour,
            particle(method, 3000.0, 0.092, 0.06),
        )
        .unwrap();
        fuel.set_particle(
            Category::Dead,
            SizeClass::TenHour,
            particle(method, 109.0, 0.046, 0.07),
        )
        .unwrap();
        fuel.set_particle(
            Category::Dead,
            SizeClass::HundredHour,
            particle(method, 30.0, 0.023, 0.08),
        )
        .unwrap();
        fuel.set_particle(
            Category::Live,
            SizeClass::OneHour,
            particle(method, 1500.0, 0.023, 0.90),
        )
        .unwrap();
        fuel.set_extinction_moisture(Category::Dead, 0.15).unwrap();
        fuel.set_depth(1.0).unwrap();
        fuel
    }

    #[test]
    fn lone_particle_carries_full_weight() {
        let mut fuel = FuelComplex::new(WeightingMethod::Rothermel);
        fuel.set_particle(
            Category::Dead,
            SizeClass::OneHour,
            particle(WeightingMethod::Rothermel, 3500.0, 0.034, 0.06),
        )
        .unwrap();
        fuel.set_depth(1.0).unwrap();
        fuel.compute().unwrap();

        let agg = fuel.aggregates().unwrap();
        assert_relative_eq!(
            agg.class_weight(Category::Dead, SizeClass::OneHour).unwrap(),
            1.0
        );
        assert_relative_eq!(agg.category_weight(Category::Dead).unwrap(), 1.0);
        assert_relative_eq!(agg.sigma, 3500.0, max_relative = 1e-12);
        assert_relative_eq!(agg.bulk_density, 0.034, max_relative = 1e-12);
        assert_relative_eq!(agg.packing_ratio, 0.034 / 32.0, max_relative = 1e-12);
    }

    #[test]
    fn weights_normalize_within_and_across_categories() {
        let mut fuel = timber_and_grass(WeightingMethod::Rothermel);
        fuel.compute().unwrap();
        let agg = fuel.aggregates().unwrap();

        let category_sum: f64 = agg.category_weights.values().sum();
        assert_abs_diff_eq!(category_sum, 1.0, epsilon = 1e-9);
        for weights in agg.class_weights.values() {
            let class_sum: f64 = weights.values().sum();
            assert_abs_diff_eq!(class_sum, 1.0, epsilon = 1e-9);
        }

        // Hand-derived from the NFFL 2 loadings.
        assert_relative_eq!(
            agg.category_weight(Category::Dead).unwrap(),
            0.8908932208321211,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            agg.class_weight(Category::Dead, SizeClass::OneHour).unwrap(),
            0.9797517962116263,
            max_relative = 1e-12
        );
    }

    #[test]
    fn whole_complex_aggregates_match_hand_derivation() {
        let mut fuel = timber_and_grass(WeightingMethod::Rothermel);
        fuel.compute().unwrap();
        let agg = fuel.aggregates().unwrap();
        assert_relative_eq!(agg.sigma, 2784.016729706139, max_relative = 1e-12);
        assert_relative_eq!(agg.packing_ratio, 0.0035628827155453954, max_relative = 1e-12);
        assert_relative_eq!(agg.bulk_density, 0.11401224689745265, max_relative = 1e-12);
    }

    #[test]
    fn compute_is_idempotent() {
        let mut fuel = timber_and_grass(WeightingMethod::Rothermel);
        fuel.compute().unwrap();
        let first = fuel.aggregates().unwrap().clone();
        fuel.compute().unwrap();
        assert_eq!(&first, fuel.aggregates().unwrap());
    }

    #[test]
    fn structural_change_discards_aggregates() {
        let mut fuel = timber_and_grass(WeightingMethod::Rothermel);
        fuel.compute().unwrap();
        assert!(fuel.aggregates().is_ok());

        fuel.set_particle(
            Category::Dead,
            SizeClass::ThousandHour,
            particle(WeightingMethod::Rothermel, 8.0, 0.01, 0.1),
        )
        .unwrap();
        assert_eq!(fuel.aggregates().unwrap_err(), FireModelError::NotComputed);
    }

    #[test]
    fn moisture_update_keeps_weights_but_moves_the_mean() {
        let mut fuel = timber_and_grass(WeightingMethod::Rothermel);
        fuel.compute().unwrap();
        let before = fuel.aggregates().unwrap().clone();

        fuel.set_particle_moisture(Category::Dead, SizeClass::OneHour, 0.10)
            .unwrap();
        let after = fuel.aggregates().unwrap();
        assert_eq!(before.class_weights, after.class_weights);
        assert_eq!(before.category_weights, after.category_weights);
        assert!(
            after.category(Category::Dead).unwrap().fuel_moisture
                > before.category(Category::Dead).unwrap().fuel_moisture
        );
    }

    #[test]
    fn moisture_update_rejects_missing_size_class() {
        let mut fuel = timber_and_grass(WeightingMethod::Rothermel);
        assert_eq!(
            fuel.set_particle_moisture(Category::Live, SizeClass::TenHour, 0.9)
                .unwrap_err(),
            FireModelError::MissingSizeClass {
                category: Category::Live,
                size_class: SizeClass::TenHour,
            }
        );
    }

    #[test]
    fn live_extinction_rothermel_matches_eqn_88() {
        let mut fuel = timber_and_grass(WeightingMethod::Rothermel);
        fuel.compute_live_extinction_moisture().unwrap();
        assert_relative_eq!(
            fuel.extinction_moisture(Category::Live).unwrap(),
            9.053999999999998,
            max_relative = 1e-12
        );
    }

    #[test]
    fn live_extinction_albini_weights_every_class() {
        let mut fuel = timber_and_grass(WeightingMethod::Albini);
        fuel.compute_live_extinction_moisture().unwrap();
        assert_relative_eq!(
            fuel.extinction_moisture(Category::Live).unwrap(),
            10.286918305097265,
            max_relative = 1e-12
        );
    }

    #[test]
    fn live_extinction_skips_silently_without_live_fuel() {
        for method in [WeightingMethod::Rothermel, WeightingMethod::Albini] {
            let mut fuel = FuelComplex::new(method);
            fuel.set_particle(
                Category::Dead,
                SizeClass::OneHour,
                particle(method, 3500.0, 0.034, 0.06),
            )
            .unwrap();
            fuel.set_extinction_moisture(Category::Dead, 0.12).unwrap();
            fuel.set_depth(1.0).unwrap();

            fuel.compute_live_extinction_moisture().unwrap();
            assert!(fuel.extinction_moisture(Category::Live).is_none());
        }
    }

    #[test]
    fn mixed_weighting_methods_are_rejected() {
        let mut fuel = FuelComplex::new(WeightingMethod::Rothermel);
        let err = fuel
            .set_particle(
                Category::Dead,
                SizeClass::OneHour,
                particle(WeightingMethod::Albini, 3500.0, 0.034, 0.06),
            )
            .unwrap_err();
        assert!(matches!(err, FireModelError::MethodMismatch { .. }));
    }

    #[test]
    fn compute_requires_depth_and_particles() {
        let mut empty = FuelComplex::new(WeightingMethod::Rothermel);
        assert_eq!(empty.compute().unwrap_err(), FireModelError::DepthNotSet);
        empty.set_depth(1.0).unwrap();
        assert_eq!(empty.compute().unwrap_err(), FireModelError::EmptyComplex);
    }

    #[test]
    fn compute_requires_particle_moisture() {
        let mut fuel = FuelComplex::new(WeightingMethod::Rothermel);
        fuel.set_particle(
            Category::Dead,
            SizeClass::OneHour,
            FuelParticle::new(WeightingMethod::Rothermel, 3500.0, 0.034).unwrap(),
        )
        .unwrap();
        fuel.set_depth(1.0).unwrap();
        assert_eq!(
            fuel.compute().unwrap_err(),
            FireModelError::MoistureNotSet {
                category: Category::Dead,
                size_class: SizeClass::OneHour,
            }
        );
    }
}
