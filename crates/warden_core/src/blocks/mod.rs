//! # Block Classification
//!
//! Turns raw block type ids into movement-relevant capability masks.
//!
//! ## Design
//!
//! - One mask per id, stored in a dense 256-entry table
//! - The table is built once from a material catalog plus overrides
//! - Composite flags always carry their base bits, so every test is a
//!   plain "all bits present" check

mod catalog;
mod table;

pub use catalog::{ClassicCatalog, MaterialCatalog, MaterialKind};
pub use table::BlockTypeTable;

use warden_shared::constants::MAX_BLOCK_ID;

use crate::error::{CoreError, CoreResult};

/// Bounded block type id (always a valid index into the block table).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u8);

impl BlockId {
    /// Air.
    pub const AIR: Self = Self(0);

    /// Bounds a raw id reported by the host.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BlockIdOutOfRange`] for ids above the table size.
    pub fn new(raw: u32) -> CoreResult<Self> {
        u8::try_from(raw)
            .map(Self)
            .map_err(|_| CoreError::BlockIdOutOfRange { id: raw, max: MAX_BLOCK_ID })
    }

    /// Wraps an id that is bounded by construction.
    #[inline]
    #[must_use]
    pub const fn from_u8(id: u8) -> Self {
        Self(id)
    }

    /// Raw id.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Table index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for BlockId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// Bit set of movement-relevant block properties.
///
/// `INGROUND` and `ONGROUND` are positional flags produced by the location
/// evaluator; they never appear in the block table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CapabilityMask(u16);

impl CapabilityMask {
    /// No flags.
    pub const EMPTY: Self = Self(0);
    /// Can be walked through.
    pub const NONSOLID: Self = Self(0x001);
    /// Can be stood on.
    pub const SOLID: Self = Self(0x002);
    /// Water or lava. Implies `NONSOLID`.
    pub const LIQUID: Self = Self(0x004 | 0x001);
    /// Climbable. Implies `NONSOLID | SOLID`.
    pub const LADDER: Self = Self(0x008 | 0x001 | 0x002);
    /// 1.5 blocks tall. Implies `NONSOLID | SOLID`.
    pub const FENCE: Self = Self(0x010 | 0x001 | 0x002);
    /// Slows movement. Implies `NONSOLID | SOLID`.
    pub const WEB: Self = Self(0x020 | 0x001 | 0x002);
    /// Vine without a supporting block: slows but cannot be climbed. Implies `NONSOLID`.
    pub const VINE: Self = Self(0x040 | 0x001);
    /// Position is inside something.
    pub const INGROUND: Self = Self(0x080);
    /// Position has something to stand on.
    pub const ONGROUND: Self = Self(0x100);

    /// Raw bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Builds a mask from raw bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns true when every bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Bitwise union.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true when no flag is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Something that can be stood on.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.contains(Self::SOLID)
    }

    /// Something that can be walked through.
    #[inline]
    #[must_use]
    pub const fn is_nonsolid(self) -> bool {
        self.contains(Self::NONSOLID)
    }

    /// Water or lava.
    #[inline]
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        self.contains(Self::LIQUID)
    }

    /// Climbable.
    #[inline]
    #[must_use]
    pub const fn is_ladder(self) -> bool {
        self.contains(Self::LADDER)
    }

    /// Fence-like.
    #[inline]
    #[must_use]
    pub const fn is_fence(self) -> bool {
        self.contains(Self::FENCE)
    }

    /// Cobweb.
    #[inline]
    #[must_use]
    pub const fn is_web(self) -> bool {
        self.contains(Self::WEB)
    }

    /// Unclimbable vine.
    #[inline]
    #[must_use]
    pub const fn is_vine(self) -> bool {
        self.contains(Self::VINE)
    }

    /// Evaluated position is inside something.
    #[inline]
    #[must_use]
    pub const fn is_in_ground(self) -> bool {
        self.contains(Self::INGROUND)
    }

    /// Evaluated position has ground below.
    #[inline]
    #[must_use]
    pub const fn is_on_ground(self) -> bool {
        self.contains(Self::ONGROUND)
    }
}

impl std::ops::BitOr for CapabilityMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for CapabilityMask {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}
