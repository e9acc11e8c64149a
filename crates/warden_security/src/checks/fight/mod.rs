//! Combat checks.
//!
//! Both checks share the same shape: while the player is inside the penalty
//! window of an earlier cancelled attack every attack is cancelled; otherwise
//! the deviation is scored and the window reopens whenever the matched
//! action step cancels.

pub mod direction;
pub mod reach;

use crate::actions::ActionList;
use crate::checks::{CheckContext, CheckOutcome, CheckType};
use crate::violation::ViolationLevel;

/// Scoring shared by the combat checks.
pub(crate) fn score_attack(
    ctx: &mut CheckContext<'_>,
    check: CheckType,
    level: &mut ViolationLevel,
    decay: f64,
    penalty_time_ms: u64,
    actions: &ActionList,
    magnitude: f64,
) -> CheckOutcome {
    level.record(decay, magnitude);

    let mut cancel = false;
    if magnitude > 0.0 {
        let context = ctx.action_context(check);
        if level.escalate(actions, context, &mut *ctx.sink) {
            level.stamp(ctx.now_ms);
            cancel = true;
        }
    }

    if !cancel && level.in_penalty(ctx.now_ms, penalty_time_ms) {
        tracing::debug!(player = %ctx.player, check = %check, "Attack inside penalty window");
        cancel = true;
    }

    CheckOutcome { magnitude, cancel, correction: None }
}
