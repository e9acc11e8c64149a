//! # Block Ids & Tuning Constants
//!
//! **CRITICAL:** The tuning values below are what every deployed check
//! configuration was calibrated against. Changing one silently retunes
//! every threshold in every action list.

// =============================================================================
// FOOTPRINT TUNING
// =============================================================================

/// A coordinate whose fractional part is at least this value still touches
/// only its own cell on the lower side.
pub const FOOTPRINT_LOWER_MAGIC: f64 = 0.45;

/// A coordinate whose fractional part is above this value reaches into the
/// next cell on the upper side.
pub const FOOTPRINT_UPPER_MAGIC: f64 = 0.55;

// =============================================================================
// SCORING TUNING
// =============================================================================

/// Per-event violation level decay for the water-walk check.
pub const WATER_WALK_DECAY: f64 = 0.95;

/// Number of past events remembered for "had a solid block above".
pub const BLOCKS_ABOVE_HISTORY: usize = 4;

/// Largest absolute coordinate on any axis a move may report. Anything
/// further out cannot be mapped to a block cell.
pub const WORLD_COORDINATE_LIMIT: f64 = 30_000_000.0;

/// Highest valid block type id (the table holds one entry per id).
pub const MAX_BLOCK_ID: u32 = 255;

/// Number of entries in the block type table.
pub const BLOCK_TABLE_SIZE: usize = 256;

// =============================================================================
// CLASSIC BLOCK IDS
// =============================================================================

/// Block type ids of the classic block catalog.
///
/// Only the ids the classifier overrides or the checks reference by name
/// are listed here; the full catalog lives in `warden_core::blocks`.
pub mod block_ids {
    /// Empty space.
    pub const AIR: u8 = 0;
    /// Plain stone.
    pub const STONE: u8 = 1;
    /// Grass-covered dirt.
    pub const GRASS: u8 = 2;
    /// Dirt.
    pub const DIRT: u8 = 3;
    /// Flowing water.
    pub const WATER: u8 = 8;
    /// Still water.
    pub const STATIONARY_WATER: u8 = 9;
    /// Flowing lava.
    pub const LAVA: u8 = 10;
    /// Still lava.
    pub const STATIONARY_LAVA: u8 = 11;
    /// Sand.
    pub const SAND: u8 = 12;
    /// Cobweb.
    pub const WEB: u8 = 30;
    /// Single stone slab.
    pub const STEP: u8 = 44;
    /// Oak stairs.
    pub const WOOD_STAIRS: u8 = 53;
    /// Free-standing sign.
    pub const SIGN_POST: u8 = 63;
    /// Wooden door.
    pub const WOODEN_DOOR: u8 = 64;
    /// Ladder.
    pub const LADDER: u8 = 65;
    /// Cobblestone stairs.
    pub const COBBLESTONE_STAIRS: u8 = 67;
    /// Wall-mounted sign.
    pub const WALL_SIGN: u8 = 68;
    /// Stone pressure plate.
    pub const STONE_PLATE: u8 = 70;
    /// Iron door.
    pub const IRON_DOOR_BLOCK: u8 = 71;
    /// Wooden pressure plate.
    pub const WOOD_PLATE: u8 = 72;
    /// Fence.
    pub const FENCE: u8 = 85;
    /// Unpowered redstone repeater.
    pub const DIODE_BLOCK_OFF: u8 = 93;
    /// Powered redstone repeater.
    pub const DIODE_BLOCK_ON: u8 = 94;
    /// Trap door.
    pub const TRAP_DOOR: u8 = 96;
    /// Iron bars.
    pub const IRON_FENCE: u8 = 101;
    /// Glass pane.
    pub const THIN_GLASS: u8 = 102;
    /// Vine.
    pub const VINE: u8 = 106;
    /// Fence gate.
    pub const FENCE_GATE: u8 = 107;
    /// Brick stairs.
    pub const BRICK_STAIRS: u8 = 108;
    /// Stone brick stairs.
    pub const SMOOTH_STAIRS: u8 = 109;
    /// Lily pad.
    pub const WATER_LILY: u8 = 111;
    /// Nether brick fence.
    pub const NETHER_FENCE: u8 = 113;
    /// Nether brick stairs.
    pub const NETHER_BRICK_STAIRS: u8 = 114;

    /// Half-height blocks known to confuse liquid-surface detection.
    pub const HALF_HEIGHT: [u8; 6] = [
        STEP,
        WOOD_STAIRS,
        COBBLESTONE_STAIRS,
        BRICK_STAIRS,
        SMOOTH_STAIRS,
        NETHER_BRICK_STAIRS,
    ];

    /// Returns true for flowing or still water and lava.
    #[must_use]
    pub const fn is_any_liquid(id: u8) -> bool {
        matches!(id, WATER | STATIONARY_WATER | LAVA | STATIONARY_LAVA)
    }

    /// Returns true for still water and still lava.
    #[must_use]
    pub const fn is_stationary_liquid(id: u8) -> bool {
        matches!(id, STATIONARY_WATER | STATIONARY_LAVA)
    }

    /// Returns true for stair and slab ids.
    #[must_use]
    pub const fn is_half_height(id: u8) -> bool {
        matches!(
            id,
            STEP | WOOD_STAIRS | COBBLESTONE_STAIRS | BRICK_STAIRS | SMOOTH_STAIRS | NETHER_BRICK_STAIRS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::block_ids;

    #[test]
    fn test_half_height_list_matches_predicate() {
        for id in block_ids::HALF_HEIGHT {
            assert!(block_ids::is_half_height(id));
        }
        assert!(!block_ids::is_half_height(block_ids::STONE));
    }

    #[test]
    fn test_liquid_predicates() {
        assert!(block_ids::is_any_liquid(block_ids::WATER));
        assert!(block_ids::is_stationary_liquid(block_ids::STATIONARY_LAVA));
        assert!(!block_ids::is_stationary_liquid(block_ids::WATER));
        assert!(!block_ids::is_any_liquid(block_ids::AIR));
    }
}
