//! Host events consumed by the check engine.
//!
//! The host adapter translates its own callbacks into these values. They are
//! also the unit of a recorded trace, so they serialize with a `type` tag.

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Stable player identifier assigned by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Axis-aligned box of an attacked or interacted-with target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetBox {
    /// Center of the box.
    pub center: Vec3,
    /// Horizontal extent (both X and Z).
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl TargetBox {
    /// Creates a new target box.
    #[must_use]
    pub const fn new(center: Vec3, width: f64, height: f64) -> Self {
        Self { center, width, height }
    }
}

/// Events the host forwards to the engine, in arrival order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Player connected.
    Join {
        /// Player identifier
        player: PlayerId,
        /// Display name, used in action messages
        name: String,
    },

    /// Player moved from one precise location to another.
    Move {
        /// Player identifier
        player: PlayerId,
        /// World the move happened in
        world: String,
        /// Previous location
        from: Vec3,
        /// Reported new location
        to: Vec3,
    },

    /// Player attacked an entity.
    Attack {
        /// Player identifier
        player: PlayerId,
        /// World the attack happened in
        world: String,
        /// Eye position of the attacker
        eye: Vec3,
        /// Normalized view direction of the attacker
        direction: Vec3,
        /// Box of the attacked entity
        target: TargetBox,
    },

    /// Player disconnected.
    Leave {
        /// Player identifier
        player: PlayerId,
    },
}

impl HostEvent {
    /// The player this event belongs to.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        match self {
            Self::Join { player, .. }
            | Self::Move { player, .. }
            | Self::Attack { player, .. }
            | Self::Leave { player } => *player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_of_event() {
        let event = HostEvent::Leave { player: PlayerId(7) };
        assert_eq!(event.player(), PlayerId(7));
        assert_eq!(PlayerId(7).to_string(), "#7");
    }
}
