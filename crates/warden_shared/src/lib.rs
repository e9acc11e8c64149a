//! # WARDEN Shared
//!
//! Common types used by both the host adapter and the check engine.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - the block classifier
//! - world access
//! - any per-player state
//!
//! If you need world types, put them in `warden_core`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod events;
pub mod math;

pub use constants::{block_ids, FOOTPRINT_LOWER_MAGIC, FOOTPRINT_UPPER_MAGIC, WATER_WALK_DECAY};
pub use events::{HostEvent, PlayerId, TargetBox};
pub use math::Vec3;
