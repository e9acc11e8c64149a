//! # Violation Levels
//!
//! A leaky bucket per player and check. Every relevant event first decays
//! the level, then adds the event's deviation. Isolated minor infractions
//! fade; sustained ones compound toward `m / (1 - decay)`.

use crate::actions::{execute_actions, ActionContext, ActionList, ActionSink};

/// Decaying violation accumulator with an optional penalty window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViolationLevel {
    /// Current level. Never negative.
    pub vl: f64,
    /// Time of the last violation that requested a cancel.
    pub last_violation_ms: Option<u64>,
}

impl ViolationLevel {
    /// Multiplies the level by `factor`.
    pub fn decay(&mut self, factor: f64) {
        self.vl *= factor;
    }

    /// Adds a deviation. Negative and NaN magnitudes are ignored.
    pub fn add(&mut self, magnitude: f64) {
        if magnitude > 0.0 {
            self.vl += magnitude;
        }
    }

    /// Decays, then adds.
    pub fn record(&mut self, decay: f64, magnitude: f64) {
        self.decay(decay);
        self.add(magnitude);
    }

    /// Runs the action step matching the current level.
    ///
    /// Returns true if that step requests cancellation.
    pub fn escalate(&self, actions: &ActionList, mut context: ActionContext<'_>, sink: &mut dyn ActionSink) -> bool {
        context.vl = self.vl;
        execute_actions(actions, &context, sink)
    }

    /// Opens the penalty window at `now_ms`.
    pub fn stamp(&mut self, now_ms: u64) {
        self.last_violation_ms = Some(now_ms);
    }

    /// Whether `now_ms` falls inside the penalty window.
    ///
    /// A window of 0 ms never matches. A stamp in the future (host clock
    /// went backwards) is discarded.
    pub fn in_penalty(&mut self, now_ms: u64, penalty_ms: u64) -> bool {
        let Some(last) = self.last_violation_ms else {
            return false;
        };
        if last > now_ms {
            self.last_violation_ms = None;
            return false;
        }
        penalty_ms > 0 && now_ms - last <= penalty_ms
    }
}
