//! # Action Lists
//!
//! Graduated responses to a violation level. A list is an ascending table of
//! thresholds; the step with the highest threshold not above the current VL
//! is the one that runs. Lower steps do not cascade.
//!
//! ```text
//! threshold   0 ──► log + cancel
//! threshold  50 ──► warn + cancel
//! threshold 400 ──► kick
//! ```

use serde::{Deserialize, Serialize};
use warden_shared::PlayerId;

use crate::checks::CheckType;
use crate::config::ConfigError;

/// Log target for violation records.
pub const VIOLATION_TARGET: &str = "warden::violation";

/// One response to a violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Structured log line.
    Log {
        /// Message template
        message: String,
    },
    /// Chat warning to the offending player.
    Warn {
        /// Message template
        message: String,
    },
    /// Veto the event.
    Cancel,
    /// Disconnect the player.
    Kick {
        /// Reason template shown on disconnect
        reason: String,
    },
}

/// Actions run once the VL reaches `threshold`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionStep {
    /// Lowest VL this step applies to.
    pub threshold: f64,
    /// Actions of this step.
    #[serde(default)]
    pub run: Vec<Action>,
}

impl ActionStep {
    /// Creates a step.
    #[must_use]
    pub fn new(threshold: f64, run: Vec<Action>) -> Self {
        Self { threshold, run }
    }
}

/// Ascending threshold table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionList {
    steps: Vec<ActionStep>,
}

impl ActionList {
    /// Builds a validated list for `check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or its thresholds are not
    /// finite, non-negative and strictly ascending.
    pub fn new(check: CheckType, steps: Vec<ActionStep>) -> Result<Self, ConfigError> {
        let list = Self { steps };
        if list.is_empty() {
            return Err(ConfigError::EmptyActionList { check: check.to_string() });
        }
        list.validate(check)?;
        Ok(list)
    }

    /// Wraps steps without validation, for built-in defaults.
    pub(crate) fn from_steps(steps: Vec<ActionStep>) -> Self {
        Self { steps }
    }

    /// Checks threshold ordering. An empty list is valid here; whether a
    /// check may run without actions is decided by its configuration.
    ///
    /// # Errors
    ///
    /// Returns the first malformed threshold.
    pub fn validate(&self, check: CheckType) -> Result<(), ConfigError> {
        let mut previous: Option<f64> = None;
        for step in &self.steps {
            if !step.threshold.is_finite() || step.threshold < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    check: check.to_string(),
                    threshold: step.threshold,
                });
            }
            if let Some(previous) = previous {
                if step.threshold <= previous {
                    return Err(ConfigError::UnsortedThresholds {
                        check: check.to_string(),
                        previous,
                        next: step.threshold,
                    });
                }
            }
            previous = Some(step.threshold);
        }
        Ok(())
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if there are no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps, ascending.
    #[must_use]
    pub fn steps(&self) -> &[ActionStep] {
        &self.steps
    }

    /// Step with the highest threshold `<= vl`, if any.
    ///
    /// A NaN VL matches nothing.
    #[must_use]
    pub fn matching(&self, vl: f64) -> Option<&ActionStep> {
        let idx = self.steps.partition_point(|step| step.threshold <= vl);
        idx.checked_sub(1).map(|i| &self.steps[i])
    }
}

/// Values substituted into message templates.
#[derive(Clone, Copy, Debug)]
pub struct ActionContext<'a> {
    /// Offending player.
    pub player: PlayerId,
    /// Display name of the player.
    pub player_name: &'a str,
    /// Check that raised the violation.
    pub check: CheckType,
    /// World of the event.
    pub world: &'a str,
    /// Violation level at execution time.
    pub vl: f64,
}

impl ActionContext<'_> {
    /// Violation level as shown to humans: truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn display_vl(&self) -> i64 {
        self.vl as i64
    }

    /// Expands `[player]`, `[check]`, `[vl]` and `[world]` in `template`.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        template
            .replace("[player]", self.player_name)
            .replace("[check]", self.check.name())
            .replace("[vl]", &self.display_vl().to_string())
            .replace("[world]", self.world)
    }
}

/// Host side effects requested by actions. Fire-and-forget.
pub trait ActionSink {
    /// Sends a chat warning to `player`.
    fn warn(&mut self, player: PlayerId, message: &str);
    /// Disconnects `player`.
    fn kick(&mut self, player: PlayerId, reason: &str);
}

/// Sink that keeps every request, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Warnings sent.
    pub warnings: Vec<(PlayerId, String)>,
    /// Kicks requested.
    pub kicks: Vec<(PlayerId, String)>,
}

impl ActionSink for RecordingSink {
    fn warn(&mut self, player: PlayerId, message: &str) {
        self.warnings.push((player, message.to_owned()));
    }

    fn kick(&mut self, player: PlayerId, reason: &str) {
        self.kicks.push((player, reason.to_owned()));
    }
}

/// Runs the step matching `context.vl`.
///
/// Returns true if that step contains [`Action::Cancel`].
pub fn execute_actions(list: &ActionList, context: &ActionContext<'_>, sink: &mut dyn ActionSink) -> bool {
    let Some(step) = list.matching(context.vl) else {
        return false;
    };

    let mut cancel = false;
    for action in &step.run {
        match action {
            Action::Log { message } => {
                tracing::warn!(
                    target: VIOLATION_TARGET,
                    player = %context.player,
                    check = %context.check,
                    vl = context.display_vl(),
                    "{}",
                    context.render(message)
                );
            }
            Action::Warn { message } => sink.warn(context.player, &context.render(message)),
            Action::Cancel => cancel = true,
            Action::Kick { reason } => sink.kick(context.player, &context.render(reason)),
        }
    }
    cancel
}
