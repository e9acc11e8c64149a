//! The block type table: one capability mask per block type id.

use warden_shared::block_ids;
use warden_shared::constants::BLOCK_TABLE_SIZE;

use super::catalog::{MaterialCatalog, MaterialKind};
use super::{BlockId, CapabilityMask};
use crate::error::CoreResult;
use crate::world::BlockAccess;

/// Both standable and passable: partial geometry the generic pass gets wrong.
const AMBIGUOUS: CapabilityMask = CapabilityMask::NONSOLID.union(CapabilityMask::SOLID);

/// Masks that replace the generic classification. Applied in order, last wins.
const OVERRIDES: &[(u8, CapabilityMask)] = &[
    (block_ids::AIR, CapabilityMask::NONSOLID),
    (block_ids::LADDER, CapabilityMask::LADDER),
    (block_ids::WATER_LILY, CapabilityMask::LADDER),
    // Climbable unless the attachment test says otherwise, see `type_at`.
    (block_ids::VINE, CapabilityMask::LADDER),
    (block_ids::FENCE, CapabilityMask::FENCE),
    (block_ids::FENCE_GATE, CapabilityMask::FENCE),
    (block_ids::NETHER_FENCE, CapabilityMask::FENCE),
    (block_ids::WEB, CapabilityMask::WEB),
    (block_ids::IRON_FENCE, AMBIGUOUS),
    (block_ids::THIN_GLASS, AMBIGUOUS),
    // Signs report a solid material but have no collision box.
    (block_ids::WALL_SIGN, CapabilityMask::NONSOLID),
    (block_ids::SIGN_POST, CapabilityMask::NONSOLID),
    (block_ids::WOODEN_DOOR, AMBIGUOUS),
    (block_ids::IRON_DOOR_BLOCK, AMBIGUOUS),
    (block_ids::TRAP_DOOR, AMBIGUOUS),
    (block_ids::DIODE_BLOCK_OFF, AMBIGUOUS),
    (block_ids::DIODE_BLOCK_ON, AMBIGUOUS),
    (block_ids::STONE_PLATE, AMBIGUOUS),
    (block_ids::WOOD_PLATE, AMBIGUOUS),
];

/// Immutable id → capability table.
///
/// Build it once at startup and hand out shared references; nothing mutates
/// it afterwards.
#[derive(Clone, Debug)]
pub struct BlockTypeTable {
    masks: [CapabilityMask; BLOCK_TABLE_SIZE],
}

impl BlockTypeTable {
    /// Builds the table from a material catalog.
    ///
    /// Ids the catalog does not know are treated as both solid and nonsolid.
    #[must_use]
    pub fn build<C: MaterialCatalog + ?Sized>(catalog: &C) -> Self {
        let mut masks = [AMBIGUOUS; BLOCK_TABLE_SIZE];
        let mut known = 0usize;

        for (id, mask) in (0..=u8::MAX).zip(masks.iter_mut()) {
            if let Some(kind) = catalog.material(id) {
                known += 1;
                *mask = match kind {
                    MaterialKind::Solid => CapabilityMask::SOLID,
                    MaterialKind::Liquid => CapabilityMask::LIQUID,
                    MaterialKind::Passable => CapabilityMask::NONSOLID,
                };
            }
        }

        for &(id, mask) in OVERRIDES {
            masks[usize::from(id)] = mask;
        }

        tracing::debug!(known, overrides = OVERRIDES.len(), "block type table built");

        Self { masks }
    }

    /// Mask for a bounded id.
    #[inline]
    #[must_use]
    pub const fn get(&self, id: BlockId) -> CapabilityMask {
        self.masks[id.index()]
    }

    /// Mask for a raw id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::BlockIdOutOfRange`] when `id` does not fit
    /// the table; the id is never clamped or wrapped.
    pub fn classify(&self, id: u32) -> CoreResult<CapabilityMask> {
        BlockId::new(id).map(|id| self.get(id))
    }

    /// Mask of the block at a cell, with unsupported vines reported as
    /// [`CapabilityMask::VINE`].
    #[must_use]
    pub fn type_at<W: BlockAccess + ?Sized>(&self, world: &W, x: i32, y: i32, z: i32) -> CapabilityMask {
        let id = world.block_type_at(x, y, z);
        if id.get() == block_ids::VINE && !self.is_climbable(world, x, y, z) {
            return CapabilityMask::VINE;
        }
        self.get(id)
    }

    /// Whether a vine tile can be climbed.
    ///
    /// The aux data names the face the vine hangs on. A vine with no single
    /// face bit is climbable; otherwise the block on that face must be solid.
    #[must_use]
    pub fn is_climbable<W: BlockAccess + ?Sized>(&self, world: &W, x: i32, y: i32, z: i32) -> bool {
        let (dx, dz) = match world.block_data_at(x, y, z) {
            0x1 => (-1, 0), // west
            0x2 => (0, -1), // north
            0x4 => (1, 0),  // east
            0x8 => (0, 1),  // south
            _ => return true,
        };
        self.get(world.block_type_at(x.saturating_add(dx), y, z.saturating_add(dz))).is_solid()
    }
}
