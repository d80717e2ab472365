//! Engine tunables.
//!
//! The defaults reproduce the editor's stock behavior: a 4px grid, 15px
//! magnetic snap, a 75px neighbor search window, and corner candidates that
//! always outrank single-edge ones.
//!
//! ```
//! use floorplan_logic::config::{validate_config, LayoutConfig};
//!
//! let config = LayoutConfig::default();
//! assert!(validate_config(&config).is_empty());
//! assert_eq!(config.search_distance(), 75.0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{self, scores};

/// Layout engine configuration. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Grid step for coordinate quantization.
    pub grid_size: f32,
    /// Substitute for missing/non-finite coordinates.
    pub fallback_coord: f32,
    /// Acceptance radius for single-axis snaps.
    pub snap_distance: f32,
    /// Search window and corner acceptance radius, in multiples of `snap_distance`.
    pub search_multiplier: f32,
    pub corner_base_score: f32,
    pub edge_base_score: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_size: constants::DEFAULT_GRID_SIZE,
            fallback_coord: constants::FALLBACK_COORD,
            snap_distance: constants::DEFAULT_SNAP_DISTANCE,
            search_multiplier: constants::SEARCH_MULTIPLIER,
            corner_base_score: scores::CORNER_BASE,
            edge_base_score: scores::EDGE_BASE,
        }
    }
}

impl LayoutConfig {
    /// Config with the default tuning but a different snap distance.
    pub fn with_snap_distance(snap_distance: f32) -> Self {
        Self {
            snap_distance,
            ..Self::default()
        }
    }

    /// Radius of the neighbor search and of corner acceptance.
    pub fn search_distance(&self) -> f32 {
        self.snap_distance * self.search_multiplier
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be positive and finite, got {0}")]
    InvalidGridSize(f32),
    #[error("fallback coordinate must be finite, got {0}")]
    InvalidFallback(f32),
    #[error("snap distance must be positive and finite, got {0}")]
    InvalidSnapDistance(f32),
    #[error("search multiplier must be at least 1, got {0}")]
    SearchMultiplierTooSmall(f32),
    /// A corner at the far edge of the search window would lose to a
    /// single-axis snap.
    #[error("corner base score {corner} does not outrank edge base score {edge} across the search window")]
    CornerScoreTooLow { corner: f32, edge: f32 },
}

/// Validate a layout configuration, returning all errors found.
pub fn validate_config(config: &LayoutConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if !(config.grid_size.is_finite() && config.grid_size > 0.0) {
        errors.push(ConfigError::InvalidGridSize(config.grid_size));
    }
    if !config.fallback_coord.is_finite() {
        errors.push(ConfigError::InvalidFallback(config.fallback_coord));
    }
    if !(config.snap_distance.is_finite() && config.snap_distance > 0.0) {
        errors.push(ConfigError::InvalidSnapDistance(config.snap_distance));
    }
    if !(config.search_multiplier >= 1.0) {
        errors.push(ConfigError::SearchMultiplierTooSmall(
            config.search_multiplier,
        ));
    }

    let worst_corner = config.corner_base_score - config.search_distance();
    if !(worst_corner > config.edge_base_score) {
        errors.push(ConfigError::CornerScoreTooLow {
            corner: config.corner_base_score,
            edge: config.edge_base_score,
        });
    }

    errors
}
