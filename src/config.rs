//! Controller tuning, loadable from JSON.

use crate::constants::{CATCH_UP_MAX_DURATION, REFERENCE_DRAG_DISTANCE};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning values for the drag catch-up animation.
///
/// Every field is optional in JSON and falls back to the crate constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Drag distance at which catch-up takes zero time
    pub reference_drag_distance: f64,
    /// Catch-up duration in seconds for a drag starting at the bottom edge
    pub catch_up_max_duration: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            reference_drag_distance: REFERENCE_DRAG_DISTANCE,
            catch_up_max_duration: CATCH_UP_MAX_DURATION,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded controller config");
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.reference_drag_distance.is_finite() || self.reference_drag_distance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "reference_drag_distance must be positive, got {}",
                self.reference_drag_distance
            )));
        }
        if !self.catch_up_max_duration.is_finite() || self.catch_up_max_duration < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "catch_up_max_duration must be non-negative, got {}",
                self.catch_up_max_duration
            )));
        }
        Ok(())
    }

    /// Catch-up duration for a drag that begins `distance_from_bottom` above
    /// the bottom edge. Shrinks linearly to zero at the reference distance.
    pub fn catch_up_duration(&self, distance_from_bottom: f64) -> f64 {
        let duration =
            (1.0 - distance_from_bottom / self.reference_drag_distance) * self.catch_up_max_duration;
        // max() also maps NaN to zero
        duration.max(0.0)
    }
}
