use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub zoom_in_factor:    f64,
    pub zoom_out_factor:   f64,
    pub fit_padding:       f64,
    pub selection_padding: f64,
    pub export:            ExportConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor:    1.2,
            zoom_out_factor:   0.8,
            fit_padding:       50.0,
            selection_padding: 100.0,
            export:            ExportConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom_in_factor.is_finite() && self.zoom_in_factor > 0.0) {
            return Err(ConfigError::InvalidValue {
                key:    "render.zoom_in_factor",
                reason: format!("must be positive, got {}", self.zoom_in_factor),
            });
        }
        if !(self.zoom_out_factor.is_finite() && self.zoom_out_factor > 0.0) {
            return Err(ConfigError::InvalidValue {
                key:    "render.zoom_out_factor",
                reason: format!("must be positive, got {}", self.zoom_out_factor),
            });
        }
        if !(self.export.scale.is_finite() && self.export.scale > 0.0) {
            return Err(ConfigError::InvalidValue {
                key:    "render.export.scale",
                reason: format!("must be positive, got {}", self.export.scale),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub background: String,
    pub scale:      f64,
    /// Export the whole graph, not just the visible viewport.
    pub full:       bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            background: "#131118".to_string(),
            scale:      2.0,
            full:       true,
        }
    }
}

/// Force-directed layout parameters passed through to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub name:               String,
    pub fit:                bool,
    pub padding:            f64,
    pub node_repulsion:     f64,
    pub ideal_edge_length:  f64,
    pub edge_elasticity:    f64,
    pub nesting_factor:     f64,
    pub gravity:            f64,
    pub randomize:          bool,
    pub animate:            bool,
    pub animation_duration: u64,
    pub animation_easing:   String,
    /// Pin the target node at the origin. Read from config only; the backend
    /// sees the resulting constraint instead.
    #[serde(skip_serializing)]
    pub pin_target:         bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            name:               "cose-bilkent".to_string(),
            fit:                true,
            padding:            50.0,
            node_repulsion:     8000.0,
            ideal_edge_length:  150.0,
            edge_elasticity:    0.45,
            nesting_factor:     0.1,
            gravity:            0.25,
            randomize:          false,
            animate:            true,
            animation_duration: 700,
            animation_easing:   "ease-in-out-cubic".to_string(),
            pin_target:         true,
        }
    }
}
