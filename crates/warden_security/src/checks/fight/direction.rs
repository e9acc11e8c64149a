//! Aim direction: the attacked entity must lie along the attacker's view ray.

use warden_core::aim_deviation;
use warden_shared::{TargetBox, Vec3};

use super::score_attack;
use crate::checks::{CheckContext, CheckOutcome, CheckType};
use crate::config::DirectionConfig;
use crate::players::FightData;

/// Scores one attack.
///
/// `direction` must be normalized. Returns a cancelling outcome while the
/// attacker is inside the penalty window of an earlier cancelled attack.
pub fn check(
    ctx: &mut CheckContext<'_>,
    data: &mut FightData,
    config: &DirectionConfig,
    eye: Vec3,
    direction: Vec3,
    target: &TargetBox,
) -> CheckOutcome {
    debug_assert!(config.enabled, "direction check run while disabled");
    if !config.enabled {
        return CheckOutcome::CLEAN;
    }

    let off = aim_deviation(eye, direction, target, config.precision);
    score_attack(
        ctx,
        CheckType::Direction,
        &mut data.direction,
        config.decay,
        config.penalty_time_ms,
        &config.actions,
        off,
    )
}
