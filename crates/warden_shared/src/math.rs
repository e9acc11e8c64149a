//! Mathematical types shared between the host adapter and the checks.
//!
//! Every position handed to a check is a precise world point, not a block
//! cell. Double precision matches the coordinates the host reports.

use serde::{Deserialize, Serialize};

use crate::constants::WORLD_COORDINATE_LIMIT;

/// 3D Vector - precise location, eye position, view direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// The same point shifted vertically by `dy` blocks.
    #[must_use]
    pub fn raised(self, dy: f64) -> Self {
        Self::new(self.x, self.y + dy, self.z)
    }

    /// Coordinates of the block cell containing this point.
    ///
    /// Uses `floor`, so `-0.5` lands in cell `-1`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn block_coords(self) -> (i32, i32, i32) {
        (
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }

    /// Returns true when every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true when every component is finite and no further than
    /// [`WORLD_COORDINATE_LIMIT`] from the origin.
    #[must_use]
    pub fn is_inside_world(self) -> bool {
        self.is_finite() && [self.x, self.y, self.z].iter().all(|c| c.abs() <= WORLD_COORDINATE_LIMIT)
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
