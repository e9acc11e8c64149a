//! # Geometric Predicates
//!
//! Pure numeric checks used by combat and interaction checks. Both return a
//! non-negative deviation; 0 means "within what the rules permit".

use warden_shared::{TargetBox, Vec3};

/// How far a view ray misses a target box.
///
/// The target center is projected onto the view ray at the eye-to-target
/// distance; the per-axis offset between projection and real center, less
/// half the box extent plus `precision`, is summed over the three axes.
/// Sums above 1 are compressed with a square root so one badly-off axis does
/// not dominate linearly.
///
/// `direction` must be normalized.
#[must_use]
pub fn aim_deviation(eye: Vec3, direction: Vec3, target: &TargetBox, precision: f64) -> f64 {
    let offset = target.center - eye;
    let predicted = direction * offset.length();

    let horizontal = target.width / 2.0 + precision;
    let vertical = target.height / 2.0 + precision;

    let mut off = 0.0;
    off += ((offset.x - predicted.x).abs() - horizontal).max(0.0);
    off += ((offset.z - predicted.z).abs() - horizontal).max(0.0);
    off += ((offset.y - predicted.y).abs() - vertical).max(0.0);

    if off > 1.0 {
        off = off.sqrt();
    }

    off
}

/// How far beyond `limit` a target point is from the eye.
#[must_use]
pub fn reach_deviation(eye: Vec3, target: Vec3, limit: f64) -> f64 {
    (eye.distance(target) - limit).max(0.0)
}
