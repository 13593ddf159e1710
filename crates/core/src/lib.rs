//! Surface fire spread modeling after Rothermel (1972), with Albini's
//! (1976) revisions available as an alternative weighting method.
//!
//! The crate is layered bottom-up:
//!
//! - [`core_types`] defines fuel categories, size classes and the
//!   [`FuelParticle`] with its derived intermediates.
//! - [`physics`] holds the scalar component equations and the
//!   [`WeightingMethod`] selector.
//! - [`complex`] aggregates heterogeneous particles into the
//!   surface-area-weighted means the categorical model consumes.
//! - [`model`] runs the spread calculation, either over a homogeneous bed
//!   ([`BasicSpreadModel`]) or over a fuel complex
//!   ([`WeightedSpreadModel`]).
//! - [`catalog`] supplies the thirteen standard NFFL fuel models and
//!   [`fbp`] wraps everything behind a field-unit prediction façade.
//!
//! Quantities are in English units throughout: feet, pounds, BTU, minutes
//! and radians. Moisture contents are dry-weight fractions.
//!
//! ```
//! use surface_fire_core::{FireBehavior, SizeClass, StandardFuelModel, WeightingMethod};
//!
//! let mut fbp = FireBehavior::standard(StandardFuelModel::ShortGrass, WeightingMethod::Albini);
//! fbp.set_dead_fuel_moistures(&[(SizeClass::OneHour, 0.06)])?;
//! fbp.set_midflame_wind(5.0)?;
//! let ros = fbp.rate_of_spread()?;
//! assert!(ros > 0.0);
//! # Ok::<(), surface_fire_core::FireModelError>(())
//! ```

pub mod catalog;
pub mod complex;
pub mod core_types;
pub mod error;
pub mod fbp;
pub mod model;
pub mod physics;

pub use catalog::StandardFuelModel;
pub use complex::{Aggregates, CategoryAggregate, FuelComplex};
pub use core_types::{Category, FuelParticle, SizeClass};
pub use error::{FireModelError, FireResult};
pub use fbp::FireBehavior;
pub use model::{BasicSpreadModel, HomogeneousFuel, SpreadOutputs, WeightedSpreadModel};
pub use physics::WeightingMethod;
