//! # Check Configuration
//!
//! Loaded once at startup, validated, then shared read-only. Every section
//! falls back to its defaults when omitted, so a partial file only needs the
//! values it changes.
//!
//! ```toml
//! [global.moving.waterwalk]
//! decay = 0.95
//!
//! [global.fight.reach]
//! limit = 4.5
//!
//! [worlds.nether.moving.waterwalk]
//! enabled = false
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actions::{Action, ActionList, ActionStep};
use crate::checks::CheckType;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the layout.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An enabled check has nothing to do at any VL.
    #[error("{check}: enabled check has an empty action list")]
    EmptyActionList {
        /// Check path
        check: String,
    },

    /// A threshold is negative, infinite or NaN.
    #[error("{check}: invalid threshold {threshold}")]
    InvalidThreshold {
        /// Check path
        check: String,
        /// Offending value
        threshold: f64,
    },

    /// Thresholds are not strictly ascending.
    #[error("{check}: thresholds must be strictly ascending ({previous} then {next})")]
    UnsortedThresholds {
        /// Check path
        check: String,
        /// Earlier threshold
        previous: f64,
        /// Threshold that follows it
        next: f64,
    },

    /// A numeric setting is outside its allowed range.
    #[error("{check}: {field} = {value} is out of range")]
    InvalidRange {
        /// Check path
        check: String,
        /// Setting name
        field: &'static str,
        /// Offending value
        value: f64,
    },
}

/// Top-level configuration: a global check set plus per-world overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WardenConfig {
    /// Settings for worlds without their own section.
    pub global: CheckConfigSet,
    /// Complete replacement sets keyed by world name.
    pub worlds: HashMap<String, CheckConfigSet>,
}

impl WardenConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a parse error or the first validation failure.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), worlds = config.worlds.len(), "Loaded check configuration");
        Ok(config)
    }

    /// Validates the global set and every world set.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.global.validate()?;
        for set in self.worlds.values() {
            set.validate()?;
        }
        Ok(())
    }

    /// Settings in force for `world`.
    #[must_use]
    pub fn for_world(&self, world: &str) -> &CheckConfigSet {
        self.worlds.get(world).unwrap_or(&self.global)
    }
}

/// Every check's settings for one scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckConfigSet {
    /// Movement checks.
    pub moving: MovingConfig,
    /// Combat checks.
    pub fight: FightConfig,
}

impl CheckConfigSet {
    /// Whether `check` is enabled in this scope.
    #[must_use]
    pub fn is_enabled(&self, check: CheckType) -> bool {
        match check {
            CheckType::WaterWalk => self.moving.waterwalk.enabled,
            CheckType::Direction => self.fight.direction.enabled,
            CheckType::Reach => self.fight.reach.enabled,
        }
    }

    /// Validates every check section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let water = &self.moving.waterwalk;
        validate_section(CheckType::WaterWalk, water.enabled, &water.actions)?;
        validate_decay(CheckType::WaterWalk, water.decay)?;

        let direction = &self.fight.direction;
        validate_section(CheckType::Direction, direction.enabled, &direction.actions)?;
        validate_decay(CheckType::Direction, direction.decay)?;
        validate_non_negative(CheckType::Direction, "precision", direction.precision)?;

        let reach = &self.fight.reach;
        validate_section(CheckType::Reach, reach.enabled, &reach.actions)?;
        validate_decay(CheckType::Reach, reach.decay)?;
        validate_non_negative(CheckType::Reach, "limit", reach.limit)?;

        Ok(())
    }
}

/// Movement check settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovingConfig {
    /// Water-walk check.
    pub waterwalk: WaterWalkConfig,
}

/// Combat check settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FightConfig {
    /// Aim direction check.
    pub direction: DirectionConfig,
    /// Attack reach check.
    pub reach: ReachConfig,
}

/// Water-walk check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaterWalkConfig {
    /// Run the check.
    pub enabled: bool,
    /// Per-event VL multiplier.
    pub decay: f64,
    /// Responses by VL.
    pub actions: ActionList,
}

/// Aim direction check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DirectionConfig {
    /// Run the check.
    pub enabled: bool,
    /// Extra tolerance around the target box, in blocks.
    pub precision: f64,
    /// Events are cancelled for this long after a cancelling violation.
    pub penalty_time_ms: u64,
    /// Per-event VL multiplier.
    pub decay: f64,
    /// Responses by VL.
    pub actions: ActionList,
}

/// Attack reach check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReachConfig {
    /// Run the check.
    pub enabled: bool,
    /// Allowed eye-to-target distance, in blocks.
    pub limit: f64,
    /// Events are cancelled for this long after a cancelling violation.
    pub penalty_time_ms: u64,
    /// Per-event VL multiplier.
    pub decay: f64,
    /// Responses by VL.
    pub actions: ActionList,
}

// --- Default implementations ---

impl Default for WaterWalkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            decay: warden_shared::WATER_WALK_DECAY,
            actions: ActionList::from_steps(vec![
                ActionStep::new(0.0, vec![Action::Cancel]),
                ActionStep::new(
                    10.0,
                    vec![
                        Action::Log { message: "[player] failed [check] in [world]: VL [vl]".to_string() },
                        Action::Cancel,
                    ],
                ),
                ActionStep::new(
                    100.0,
                    vec![
                        Action::Log { message: "[player] failed [check] in [world]: VL [vl]".to_string() },
                        Action::Warn { message: "Stop walking on water".to_string() },
                        Action::Cancel,
                    ],
                ),
            ]),
        }
    }
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            precision: 0.75,
            penalty_time_ms: 300,
            decay: 0.95,
            actions: ActionList::from_steps(vec![
                ActionStep::new(0.0, vec![Action::Cancel]),
                ActionStep::new(
                    5.0,
                    vec![
                        Action::Log { message: "[player] failed [check]: VL [vl]".to_string() },
                        Action::Cancel,
                    ],
                ),
            ]),
        }
    }
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            limit: 4.0,
            penalty_time_ms: 500,
            decay: 0.95,
            actions: ActionList::from_steps(vec![
                ActionStep::new(0.0, vec![Action::Cancel]),
                ActionStep::new(
                    5.0,
                    vec![
                        Action::Log { message: "[player] failed [check]: VL [vl]".to_string() },
                        Action::Cancel,
                    ],
                ),
            ]),
        }
    }
}

// --- Validation ---

fn validate_section(check: CheckType, enabled: bool, actions: &ActionList) -> Result<(), ConfigError> {
    if enabled && actions.is_empty() {
        return Err(ConfigError::EmptyActionList { check: check.to_string() });
    }
    actions.validate(check)
}

fn validate_decay(check: CheckType, decay: f64) -> Result<(), ConfigError> {
    if decay > 0.0 && decay <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { check: check.to_string(), field: "decay", value: decay })
    }
}

fn validate_non_negative(check: CheckType, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { check: check.to_string(), field, value })
    }
}
