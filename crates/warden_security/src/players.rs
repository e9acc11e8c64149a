//! # Per-Player Check Data
//!
//! Arena of per-player records keyed by [`PlayerId`]. A record is created on
//! first contact and discarded on disconnect; it is only ever touched while
//! handling that player's own events.

use std::collections::HashMap;

use warden_shared::constants::BLOCKS_ABOVE_HISTORY;
use warden_shared::PlayerId;

use crate::violation::ViolationLevel;

/// Movement check state.
#[derive(Clone, Debug, Default)]
pub struct MovingData {
    /// Water-walk violation level.
    pub water_walk: ViolationLevel,
    /// "Solid block above" over the last few moves, oldest first.
    pub had_blocks_above: [bool; BLOCKS_ABOVE_HISTORY],
}

impl MovingData {
    /// Whether any remembered move had a solid block above.
    #[must_use]
    pub fn any_blocks_above(&self) -> bool {
        self.had_blocks_above.iter().any(|&above| above)
    }

    /// Drops the oldest entry and appends `above`.
    pub fn rotate_blocks_above(&mut self, above: bool) {
        self.had_blocks_above.rotate_left(1);
        self.had_blocks_above[BLOCKS_ABOVE_HISTORY - 1] = above;
    }
}

/// Combat check state.
#[derive(Clone, Debug, Default)]
pub struct FightData {
    /// Aim direction violation level and penalty stamp.
    pub direction: ViolationLevel,
    /// Reach violation level and penalty stamp.
    pub reach: ViolationLevel,
}

/// Everything the checks remember about one player.
#[derive(Clone, Debug, Default)]
pub struct PlayerChecks {
    /// Display name, used in action messages.
    pub name: String,
    /// Movement checks.
    pub moving: MovingData,
    /// Combat checks.
    pub fight: FightData,
}

impl PlayerChecks {
    /// Fresh record for a named player.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// Owns every connected player's check data.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: HashMap<PlayerId, PlayerChecks>,
}

impl PlayerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player, replacing any stale record under the same id.
    pub fn join(&mut self, id: PlayerId, name: impl Into<String>) -> &mut PlayerChecks {
        let name = name.into();
        tracing::debug!(player = %id, name = %name, "Player data created");
        let slot = self.players.entry(id).or_default();
        *slot = PlayerChecks::new(name);
        slot
    }

    /// Record for `id`, created on first contact.
    ///
    /// Players first seen here are named after their id.
    pub fn get_or_create(&mut self, id: PlayerId) -> &mut PlayerChecks {
        self.players.entry(id).or_insert_with(|| {
            tracing::debug!(player = %id, "Player data created on first event");
            PlayerChecks::new(id.to_string())
        })
    }

    /// Discards a player's record. Returns it if one existed.
    pub fn leave(&mut self, id: PlayerId) -> Option<PlayerChecks> {
        let removed = self.players.remove(&id);
        if removed.is_some() {
            tracing::debug!(player = %id, "Player data discarded");
        }
        removed
    }

    /// Read access to a player's record.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&PlayerChecks> {
        self.players.get(&id)
    }

    /// Number of tracked players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if no player is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut registry = PlayerRegistry::new();
        registry.join(PlayerId(1), "Steve").fight.reach.vl = 12.0;
        assert_eq!(registry.get(PlayerId(1)).map(|p| p.name.as_str()), Some("Steve"));

        // Rejoin starts from a clean record.
        registry.join(PlayerId(1), "Steve");
        assert_eq!(registry.get(PlayerId(1)).map(|p| p.fight.reach.vl), Some(0.0));

        assert!(registry.leave(PlayerId(1)).is_some());
        assert!(registry.leave(PlayerId(1)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_or_create_names_unknown_players() {
        let mut registry = PlayerRegistry::new();
        registry.get_or_create(PlayerId(9)).moving.water_walk.vl = 3.0;
        let data = registry.get_or_create(PlayerId(9));
        assert_eq!(data.name, "#9");
        assert_eq!(data.moving.water_walk.vl, 3.0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_blocks_above_history() {
        let mut moving = MovingData::default();
        assert!(!moving.any_blocks_above());

        moving.rotate_blocks_above(true);
        assert_eq!(moving.had_blocks_above, [false, false, false, true]);

        for _ in 0..BLOCKS_ABOVE_HISTORY - 1 {
            moving.rotate_blocks_above(false);
            assert!(moving.any_blocks_above());
        }
        moving.rotate_blocks_above(false);
        assert!(!moving.any_blocks_above());
    }
}
