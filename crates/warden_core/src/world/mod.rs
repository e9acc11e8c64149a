//! # World Access
//!
//! The host owns the authoritative world. Checks only ever read it through
//! [`BlockAccess`], one cell at a time.

mod chunk;

pub use chunk::{Block, Chunk, ChunkCoord, ChunkedWorld, BLOCKS_PER_CHUNK, CHUNK_HEIGHT, CHUNK_SIZE};

use crate::blocks::BlockId;

/// Read access to block cells of one world.
///
/// Implementations must return ids that fit the block table; the host
/// adapter bounds raw ids with [`BlockId::new`] before handing them over.
pub trait BlockAccess {
    /// Type id of the block at a cell.
    fn block_type_at(&self, x: i32, y: i32, z: i32) -> BlockId;

    /// Auxiliary data (orientation/attachment bits) of the block at a cell.
    fn block_data_at(&self, x: i32, y: i32, z: i32) -> u8;
}

impl<W: BlockAccess + ?Sized> BlockAccess for &W {
    fn block_type_at(&self, x: i32, y: i32, z: i32) -> BlockId {
        (**self).block_type_at(x, y, z)
    }

    fn block_data_at(&self, x: i32, y: i32, z: i32) -> u8 {
        (**self).block_data_at(x, y, z)
    }
}
