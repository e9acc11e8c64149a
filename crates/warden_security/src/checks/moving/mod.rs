//! Movement checks.

pub mod water_walk;
