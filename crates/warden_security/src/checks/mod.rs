//! # Checks
//!
//! Each check turns one host event into a deviation magnitude, feeds it to
//! the player's violation level and reports whether the event must be
//! cancelled.
//!
//! ## Composition
//!
//! ```text
//! host event ─► precise from/to ─► LocationEvaluator ─► deviation
//!                                                          │
//!                    ViolationLevel (decay + add) ◄────────┘
//!                              │
//!                     ActionList at VL ─► log / warn / cancel / kick
//! ```

pub mod fight;
pub mod moving;

use warden_core::{BlockAccess, LocationEvaluator};
use warden_shared::{PlayerId, Vec3};

use crate::actions::{ActionContext, ActionSink};

/// Every check the engine knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckType {
    /// Walking on liquid surfaces or jumping out of streams.
    WaterWalk,
    /// Attacking something the player is not looking at.
    Direction,
    /// Attacking something out of reach.
    Reach,
}

impl CheckType {
    /// All checks, in configuration order.
    pub const ALL: [Self; 3] = [Self::WaterWalk, Self::Direction, Self::Reach];

    /// Dotted configuration path of the check.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WaterWalk => "moving.waterwalk",
            Self::Direction => "fight.direction",
            Self::Reach => "fight.reach",
        }
    }
}

impl std::fmt::Display for CheckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Host permission lookup.
pub trait PermissionCheck {
    /// Whether `player` is exempt from `check`.
    fn has_bypass(&self, player: PlayerId, check: CheckType) -> bool;
}

/// Nobody bypasses anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBypass;

impl PermissionCheck for NoBypass {
    fn has_bypass(&self, _player: PlayerId, _check: CheckType) -> bool {
        false
    }
}

/// What one check concluded about one event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CheckOutcome {
    /// Deviation fed to the violation level. 0 for a clean event.
    pub magnitude: f64,
    /// The event must be vetoed.
    pub cancel: bool,
    /// Position the host should move the player back to.
    pub correction: Option<Vec3>,
}

impl CheckOutcome {
    /// Nothing wrong.
    pub const CLEAN: Self = Self { magnitude: 0.0, cancel: false, correction: None };
}

/// Everything a check reads or triggers besides the player's own data.
pub struct CheckContext<'a> {
    /// Player the event belongs to.
    pub player: PlayerId,
    /// Display name of that player.
    pub player_name: &'a str,
    /// Evaluator over the shared block table.
    pub evaluator: LocationEvaluator<'a>,
    /// World the event happened in.
    pub world: &'a dyn BlockAccess,
    /// Name of that world, for action messages.
    pub world_name: &'a str,
    /// Host side effects requested by actions.
    pub sink: &'a mut dyn ActionSink,
    /// Logical event time in milliseconds.
    pub now_ms: u64,
}

impl<'a> CheckContext<'a> {
    /// Template values for `check`. The VL is filled in on escalation.
    #[must_use]
    pub fn action_context(&self, check: CheckType) -> ActionContext<'a> {
        ActionContext {
            player: self.player,
            player_name: self.player_name,
            check,
            world: self.world_name,
            vl: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = CheckType::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CheckType::ALL.len());
        assert_eq!(CheckType::Reach.to_string(), "fight.reach");
    }
}
