//! # Chunk Storage
//!
//! In-memory world made of fixed-size chunks. The check engine never needs
//! one, but tests, benchmarks and offline trace analysis do.
//!
//! ## Chunk Format
//!
//! Chunks are 16x16x256 blocks (width x depth x height).
//! Each block is stored as a (type id, aux data) byte pair.

use std::collections::HashMap;

use super::BlockAccess;
use crate::blocks::BlockId;
use crate::error::{CoreError, CoreResult};

/// Chunk width/depth in blocks.
pub const CHUNK_SIZE: usize = 16;

/// Chunk height in blocks.
pub const CHUNK_HEIGHT: usize = 256;

/// Total blocks per chunk.
pub const BLOCKS_PER_CHUNK: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_HEIGHT;

/// Chunk coordinate (identifies a chunk in the world grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not blocks).
    pub x: i32,
    /// Z coordinate (in chunks, not blocks).
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Converts world block coordinates to chunk coordinate.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub const fn from_block_pos(block_x: i32, block_z: i32) -> Self {
        Self {
            x: block_x.div_euclid(CHUNK_SIZE as i32),
            z: block_z.div_euclid(CHUNK_SIZE as i32),
        }
    }
}

/// A single block cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Block {
    /// Block type id.
    pub id: u8,
    /// Auxiliary data (liquid level, vine faces, ...).
    pub data: u8,
}

impl Block {
    /// Air block (empty).
    pub const AIR: Self = Self { id: 0, data: 0 };

    /// Creates a block with id and aux data.
    #[inline]
    #[must_use]
    pub const fn new(id: u8, data: u8) -> Self {
        Self { id, data }
    }
}

/// A chunk of world data.
#[derive(Clone)]
pub struct Chunk {
    /// Chunk position in the world.
    pub coord: ChunkCoord,
    /// Block data (indexed as [y][z][x], flattened).
    blocks: Box<[Block]>,
}

impl Chunk {
    /// Creates a new empty chunk at the given coordinates.
    #[must_use]
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![Block::AIR; BLOCKS_PER_CHUNK].into_boxed_slice(),
        }
    }

    #[inline]
    const fn index(x: usize, y: usize, z: usize) -> usize {
        (y * CHUNK_SIZE + z) * CHUNK_SIZE + x
    }

    /// Gets a block at local coordinates. Out-of-range reads return air.
    #[inline]
    #[must_use]
    pub fn get_block(&self, x: usize, y: usize, z: usize) -> Block {
        if x < CHUNK_SIZE && y < CHUNK_HEIGHT && z < CHUNK_SIZE {
            self.blocks[Self::index(x, y, z)]
        } else {
            Block::AIR
        }
    }

    /// Sets a block at local coordinates. Out-of-range writes are ignored.
    #[inline]
    pub fn set_block(&mut self, x: usize, y: usize, z: usize, block: Block) {
        if x < CHUNK_SIZE && y < CHUNK_HEIGHT && z < CHUNK_SIZE {
            self.blocks[Self::index(x, y, z)] = block;
        }
    }
}

/// Sparse world of chunks. Unloaded chunks read as air.
#[derive(Clone, Default)]
pub struct ChunkedWorld {
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl ChunkedWorld {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loaded chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Gets the block at world coordinates.
    #[must_use]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Block {
        let Some((coord, lx, ly, lz)) = Self::locate(x, y, z) else {
            return Block::AIR;
        };
        self.chunks
            .get(&coord)
            .map_or(Block::AIR, |chunk| chunk.get_block(lx, ly, lz))
    }

    /// Sets the block at world coordinates, loading the chunk if needed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ChunkOutOfBounds`] when `y` is outside `0..256`.
    pub fn set(&mut self, x: i32, y: i32, z: i32, id: u8, data: u8) -> CoreResult<()> {
        let (coord, lx, ly, lz) =
            Self::locate(x, y, z).ok_or(CoreError::ChunkOutOfBounds { x, y, z })?;
        self.chunks
            .entry(coord)
            .or_insert_with(|| Chunk::new(coord))
            .set_block(lx, ly, lz, Block::new(id, data));
        Ok(())
    }

    /// Fills the inclusive box between two corners with one block.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ChunkOutOfBounds`] if any cell is outside the
    /// height range; cells before it are already written.
    pub fn fill(&mut self, min: (i32, i32, i32), max: (i32, i32, i32), id: u8, data: u8) -> CoreResult<()> {
        for y in min.1..=max.1 {
            for z in min.2..=max.2 {
                for x in min.0..=max.0 {
                    self.set(x, y, z, id, data)?;
                }
            }
        }
        Ok(())
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn locate(x: i32, y: i32, z: i32) -> Option<(ChunkCoord, usize, usize, usize)> {
        if y < 0 || y >= CHUNK_HEIGHT as i32 {
            return None;
        }
        let coord = ChunkCoord::from_block_pos(x, z);
        let lx = x.rem_euclid(CHUNK_SIZE as i32) as usize;
        let lz = z.rem_euclid(CHUNK_SIZE as i32) as usize;
        Some((coord, lx, y as usize, lz))
    }
}

impl BlockAccess for ChunkedWorld {
    fn block_type_at(&self, x: i32, y: i32, z: i32) -> BlockId {
        BlockId::from_u8(self.get(x, y, z).id)
    }

    fn block_data_at(&self, x: i32, y: i32, z: i32) -> u8 {
        self.get(x, y, z).data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_coord_negative() {
        assert_eq!(ChunkCoord::from_block_pos(-1, 15), ChunkCoord::new(-1, 0));
        assert_eq!(ChunkCoord::from_block_pos(16, -17), ChunkCoord::new(1, -2));
    }

    #[test]
    fn test_set_and_get_across_chunks() {
        let mut world = ChunkedWorld::new();
        world.set(-1, 10, -1, 1, 0).unwrap();
        world.set(16, 10, 0, 9, 3).unwrap();

        assert_eq!(world.get(-1, 10, -1), Block::new(1, 0));
        assert_eq!(world.block_data_at(16, 10, 0), 3);
        assert_eq!(world.get(0, 10, 0), Block::AIR);
        assert_eq!(world.chunk_count(), 2);
    }

    #[test]
    fn test_height_range() {
        let mut world = ChunkedWorld::new();
        assert_eq!(
            world.set(0, 256, 0, 1, 0),
            Err(CoreError::ChunkOutOfBounds { x: 0, y: 256, z: 0 })
        );
        assert!(world.set(0, -1, 0, 1, 0).is_err());
        assert_eq!(world.get(0, -5, 0), Block::AIR);
        assert_eq!(world.get(0, 300, 0), Block::AIR);
    }
}
