//! Physics of the surface fire spread model.
//!
//! `equations` holds the scalar Rothermel component formulas shared by the
//! particle, the aggregated fuel complex and both spread model variants;
//! `weighting` selects between the Rothermel and Albini disciplines.

pub mod equations;
pub mod weighting;

pub use weighting::WeightingMethod;
