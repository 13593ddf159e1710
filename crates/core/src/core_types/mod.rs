//! Core data types: fuel categories, size classes and fuel particles.

pub mod category;
pub mod particle;

pub use category::{Category, SizeClass};
pub use particle::FuelParticle;
