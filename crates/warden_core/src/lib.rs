//! # WARDEN Core
//!
//! Spatial classification machinery every movement and combat check is
//! built on:
//! - a 256-entry block type table mapping ids to capability masks
//! - a location evaluator sampling a player's footprint against that table
//! - geometric predicates for aim alignment and reach
//!
//! ## Architecture Rules
//!
//! 1. **Build once, share everywhere** - the block table is immutable after
//!    construction and passed by reference, never reached through a global
//! 2. **Fixed work per query** - an evaluation is a bounded number of table
//!    lookups, independent of world size
//! 3. **No per-player state** - that lives in `warden_security`
//!
//! ## Example
//!
//! ```rust
//! use warden_core::{BlockTypeTable, ClassicCatalog, ChunkedWorld, LocationEvaluator};
//! use warden_shared::{block_ids, Vec3};
//!
//! let table = BlockTypeTable::build(&ClassicCatalog);
//! let mut world = ChunkedWorld::new();
//! world.set(0, 63, 0, block_ids::STONE, 0)?;
//!
//! let mask = LocationEvaluator::new(&table).evaluate(&world, Vec3::new(0.5, 64.0, 0.5));
//! assert!(mask.is_on_ground());
//! # Ok::<(), warden_core::CoreError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod blocks;
pub mod error;
pub mod geometry;
pub mod location;
pub mod world;

pub use blocks::{BlockId, BlockTypeTable, CapabilityMask, ClassicCatalog, MaterialCatalog, MaterialKind};
pub use error::{CoreError, CoreResult};
pub use geometry::{aim_deviation, reach_deviation};
pub use location::{lower_border, upper_border, LocationEvaluator};
pub use world::{BlockAccess, ChunkedWorld};
