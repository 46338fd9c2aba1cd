//! Cartoon geometry options with TOML preset support.
//!
//! All dimensions default to the classic ribbon proportions. Options
//! serialize to/from TOML so viewers can store cartoon presets; partial
//! files override individual fields.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RibbonError;

/// Tunable cartoon geometry parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct CartoonOptions {
    /// Spline samples per segment.
    pub spline_steps: usize,
    /// Points per cross-section ring. Must be a multiple of 4.
    pub profile_detail: usize,
    /// Helix ribbon width in angstroms.
    pub ribbon_width: f32,
    /// Helix ribbon thickness.
    pub ribbon_height: f32,
    /// Signed offset of the helix ribbon from the backbone axis.
    pub ribbon_offset: f32,
    /// Width of the arrowhead base where a strand terminates.
    pub arrow_head_width: f32,
    /// Width of the arrow shaft along a strand.
    pub arrow_width: f32,
    /// Arrow thickness.
    pub arrow_height: f32,
    /// Coil tube diameter.
    pub tube_size: f32,
}

impl Default for CartoonOptions {
    fn default() -> Self {
        Self {
            spline_steps: 32,
            profile_detail: 16,
            ribbon_width: 2.0,
            ribbon_height: 0.125,
            ribbon_offset: 1.5,
            arrow_head_width: 3.0,
            arrow_width: 2.0,
            arrow_height: 0.5,
            tube_size: 0.75,
        }
    }
}

impl CartoonOptions {
    /// Generate a JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CartoonOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RibbonError> {
        let content = std::fs::read_to_string(path).map_err(RibbonError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RibbonError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RibbonError::Io)?;
        }
        std::fs::write(path, content).map_err(RibbonError::Io)
    }
}
