use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Transactions kept after sorting; larger lists render poorly.
    pub max_transactions: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self { Self { max_transactions: 100 } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeMetricsConfig {
    pub width_scale: f64,
    pub min_width:   f64,
    pub max_width:   f64,
    pub max_offset:  f64,
}

impl Default for EdgeMetricsConfig {
    fn default() -> Self {
        Self {
            width_scale: 2.5,
            min_width:   1.0,
            max_width:   10.0,
            max_offset:  20.0,
        }
    }
}

impl EdgeMetricsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_width.is_finite() && self.min_width >= 0.0) {
            return Err(ConfigError::InvalidValue {
                key:    "metrics.min_width",
                reason: format!("must be a non-negative number, got {}", self.min_width),
            });
        }
        if !(self.max_width.is_finite() && self.max_width >= self.min_width) {
            return Err(ConfigError::InvalidValue {
                key:    "metrics.max_width",
                reason: format!("must be at least min_width ({}), got {}", self.min_width, self.max_width),
            });
        }
        if !(self.width_scale.is_finite() && self.width_scale > 0.0) {
            return Err(ConfigError::InvalidValue {
                key:    "metrics.width_scale",
                reason: format!("must be positive, got {}", self.width_scale),
            });
        }
        if !(self.max_offset.is_finite() && self.max_offset >= 0.0) {
            return Err(ConfigError::InvalidValue {
                key:    "metrics.max_offset",
                reason: format!("must be non-negative, got {}", self.max_offset),
            });
        }
        Ok(())
    }
}
