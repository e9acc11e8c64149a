//! # Location Evaluation
//!
//! Answers "what is a player touching if they stand at this precise point":
//! ground below, something around them, liquid, web or an unclimbable vine.
//!
//! ## Footprint
//!
//! The player hitbox is approximated by four block columns chosen with two
//! asymmetric rounding functions ([`lower_border`], [`upper_border`]). The
//! columns are evaluated independently and OR-combined, so any corner with
//! ground counts for the whole footprint. This favours missed detections over
//! false positives.

use warden_shared::constants::{FOOTPRINT_LOWER_MAGIC, FOOTPRINT_UPPER_MAGIC};
use warden_shared::Vec3;

use crate::blocks::{BlockTypeTable, CapabilityMask};
use crate::world::BlockAccess;

/// Lower footprint cell for a coordinate.
///
/// `floor(d)` when `d` is at least 0.45 into its cell, otherwise the cell
/// below it.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn lower_border(d: f64) -> i32 {
    let floor = d.floor();
    if floor + FOOTPRINT_LOWER_MAGIC <= d {
        floor as i32
    } else {
        (floor - 1.0) as i32
    }
}

/// Upper footprint cell for a coordinate.
///
/// `floor(d) + 1` when `d` is more than 0.55 into its cell, otherwise
/// `floor(d)`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn upper_border(d: f64) -> i32 {
    let floor = d.floor();
    if floor + FOOTPRINT_UPPER_MAGIC < d {
        (floor + 1.0) as i32
    } else {
        floor as i32
    }
}

/// Evaluates precise points against a block table.
///
/// Cheap to copy; holds only a reference to the shared table.
#[derive(Clone, Copy, Debug)]
pub struct LocationEvaluator<'t> {
    table: &'t BlockTypeTable,
}

impl<'t> LocationEvaluator<'t> {
    /// Creates an evaluator over a built table.
    #[must_use]
    pub const fn new(table: &'t BlockTypeTable) -> Self {
        Self { table }
    }

    /// The table this evaluator reads.
    #[must_use]
    pub const fn table(&self) -> &'t BlockTypeTable {
        self.table
    }

    /// Combined capability mask for a player standing at `point`.
    ///
    /// Result bits are drawn from `INGROUND`, `ONGROUND`, `LIQUID`, `WEB`
    /// and `VINE`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn evaluate<W: BlockAccess + ?Sized>(&self, world: &W, point: Vec3) -> CapabilityMask {
        let lower_x = lower_border(point.x);
        let upper_x = upper_border(point.x);
        let y = point.y.floor() as i32;
        let lower_z = lower_border(point.z);
        let upper_z = upper_border(point.z);

        let mut result = self.evaluate_column(world, lower_x, y, lower_z)
            | self.evaluate_column(world, upper_x, y, lower_z)
            | self.evaluate_column(world, upper_x, y, upper_z)
            | self.evaluate_column(world, lower_x, y, upper_z);

        if !result.is_in_ground() {
            // Literal position: catches standing inside a wall the corners miss.
            let (bx, by, bz) = point.block_coords();
            if self.table.type_at(world, bx, by, bz).is_solid() {
                result |= CapabilityMask::INGROUND;
            }
        }

        result
    }

    /// Evaluates a single block column at feet height `y`.
    ///
    /// Returns some combination of `INGROUND`, `ONGROUND`, `LIQUID`, `WEB`
    /// and `VINE`, or nothing.
    #[must_use]
    pub fn evaluate_column<W: BlockAccess + ?Sized>(&self, world: &W, x: i32, y: i32, z: i32) -> CapabilityMask {
        let top = self.table.type_at(world, x, y.saturating_add(1), z);
        let base = self.table.type_at(world, x, y, z);
        let below = self.table.type_at(world, x, y.saturating_sub(1), z);

        let mut kind = CapabilityMask::EMPTY;

        // Fences are 1.5 blocks tall: behave as if a block sat on top of one.
        if below == CapabilityMask::FENCE && base != CapabilityMask::FENCE && top.is_nonsolid() {
            kind = CapabilityMask::INGROUND;
        } else if below != CapabilityMask::FENCE
            && base.is_nonsolid()
            && self.table.type_at(world, x, y.saturating_sub(2), z) == CapabilityMask::FENCE
        {
            kind = CapabilityMask::ONGROUND;
        } else if top.is_nonsolid() {
            if (below.is_solid() && base.is_nonsolid()) || base.is_ladder() || top.is_ladder() {
                kind = CapabilityMask::ONGROUND;
            } else if base.is_solid() {
                kind = CapabilityMask::INGROUND;
            }
        }

        if base.is_liquid() || top.is_liquid() {
            kind |= CapabilityMask::LIQUID | CapabilityMask::INGROUND;
        }
        if base.is_web() || top.is_web() {
            kind |= CapabilityMask::WEB;
        }
        if base.is_vine() {
            kind |= CapabilityMask::VINE;
        }

        kind
    }
}
