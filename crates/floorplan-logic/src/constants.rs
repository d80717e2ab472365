//! Engine constants: grid size, snap distances and candidate scores.
//!
//! These are the defaults behind [`LayoutConfig`](crate::config::LayoutConfig).
//! Hosts that need different tuning build a config instead of editing these.

/// Grid step that coordinates are quantized to, in pixels.
pub const DEFAULT_GRID_SIZE: f32 = 4.0;

/// Substitute for a missing or non-finite coordinate. Keeps a dragged table
/// near the top-left of the plan instead of jumping to the origin.
pub const FALLBACK_COORD: f32 = 100.0;

/// Single-axis snaps are accepted only within this distance of the raw drag.
pub const DEFAULT_SNAP_DISTANCE: f32 = 15.0;

/// Neighbor search and corner acceptance use `snap_distance` times this.
pub const SEARCH_MULTIPLIER: f32 = 5.0;

pub mod scores {
    /// Base score of a two-axis (corner) candidate.
    pub const CORNER_BASE: f32 = 200.0;
    /// Base score of a single-axis candidate.
    pub const EDGE_BASE: f32 = 50.0;
    /// The unmodified drag position.
    pub const BASELINE: f32 = 0.0;
}
