//! # Core Error Types
//!
//! All errors that can occur while classifying blocks or editing worlds.

use thiserror::Error;

/// Errors that can occur in the classification engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A block type id does not fit the classifier table.
    #[error("block type id {id} out of range (max {max})")]
    BlockIdOutOfRange {
        /// The rejected id.
        id: u32,
        /// Largest id the table holds.
        max: u32,
    },

    /// A block write targeted a cell outside the world's height range.
    #[error("block position ({x}, {y}, {z}) is outside the world height range")]
    ChunkOutOfBounds {
        /// Block X.
        x: i32,
        /// Block Y.
        y: i32,
        /// Block Z.
        z: i32,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
