//! Reach: the attacked entity must be within arm's length of the eye.

use warden_core::reach_deviation;
use warden_shared::{TargetBox, Vec3};

use super::score_attack;
use crate::checks::{CheckContext, CheckOutcome, CheckType};
use crate::config::ReachConfig;
use crate::players::FightData;

/// Scores one attack against the target's center.
pub fn check(
    ctx: &mut CheckContext<'_>,
    data: &mut FightData,
    config: &ReachConfig,
    eye: Vec3,
    target: &TargetBox,
) -> CheckOutcome {
    debug_assert!(config.enabled, "reach check run while disabled");
    if !config.enabled {
        return CheckOutcome::CLEAN;
    }

    let distance = reach_deviation(eye, target.center, config.limit);
    score_attack(
        ctx,
        CheckType::Reach,
        &mut data.reach,
        config.decay,
        config.penalty_time_ms,
        &config.actions,
        distance,
    )
}
