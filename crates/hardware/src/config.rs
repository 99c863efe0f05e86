//! Configuration system for the issue-slot model.
//!
//! This module defines the configuration structures used to parameterize the
//! slot and its simulation driver. It provides:
//! 1. **Defaults:** Baseline bus widths for the wakeup and branch networks.
//! 2. **Structures:** Hierarchical config for general and slot settings.
//! 3. **Validation:** Range checks returning [`ConfigError`].
//!
//! Configuration is supplied via JSON from the Python API or built with `Config::default()`.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the slot.
mod defaults {
    /// Number of lanes on the slow wakeup bus (one per writeback port).
    pub const SLOW_WAKEUP_LANES: usize = 4;

    /// Number of in-flight branches a branch mask can name.
    pub const BRANCH_MASK_BITS: u32 = 12;
}

/// Root configuration structure containing all model settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use slotsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_ticks);
/// assert_eq!(config.slot.slow_wakeup_lanes, 4);
/// ```
///
/// Deserializing from JSON (typical Python API usage):
///
/// ```
/// use slotsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_ticks": true },
///     "slot": { "slow_wakeup_lanes": 2, "branch_mask_bits": 8 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_ticks);
/// assert_eq!(config.slot.slow_wakeup_lanes, 2);
/// assert!(config.slot.check_lane_count);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Issue slot bus widths and checks
    #[serde(default)]
    pub slot: SlotConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document does not match the schema,
    /// or a range error from [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is within its supported range.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range setting found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.slot.slow_wakeup_lanes == 0 {
            return Err(ConfigError::NoWakeupLanes);
        }
        if self.slot.branch_mask_bits == 0 || self.slot.branch_mask_bits > 64 {
            return Err(ConfigError::BranchMaskBits(self.slot.branch_mask_bits));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every tick's outputs at debug level.
    #[serde(default)]
    pub trace_ticks: bool,
}

impl GeneralConfig {
    /// Whether per-tick tracing is on, honouring the `always-trace` feature.
    #[inline]
    pub const fn tracing_enabled(&self) -> bool {
        cfg!(feature = "always-trace") || self.trace_ticks
    }
}

/// Issue slot configuration.
///
/// Describes the buses the slot snoops. The slot itself is otherwise
/// parameter-free.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotConfig {
    /// Lanes on the slow wakeup bus
    #[serde(default = "SlotConfig::default_slow_wakeup_lanes")]
    pub slow_wakeup_lanes: usize,

    /// Width of branch masks in bits (1..=64)
    #[serde(default = "SlotConfig::default_branch_mask_bits")]
    pub branch_mask_bits: u32,

    /// Reject ticks whose slow bus does not have exactly `slow_wakeup_lanes` lanes.
    #[serde(default = "SlotConfig::default_check_lane_count")]
    pub check_lane_count: bool,
}

impl SlotConfig {
    /// Returns the default slow wakeup lane count.
    fn default_slow_wakeup_lanes() -> usize {
        defaults::SLOW_WAKEUP_LANES
    }

    /// Returns the default branch mask width.
    fn default_branch_mask_bits() -> u32 {
        defaults::BRANCH_MASK_BITS
    }

    /// Lane-count checking is on unless explicitly disabled.
    fn default_check_lane_count() -> bool {
        true
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            slow_wakeup_lanes: defaults::SLOW_WAKEUP_LANES,
            branch_mask_bits: defaults::BRANCH_MASK_BITS,
            check_lane_count: true,
        }
    }
}
