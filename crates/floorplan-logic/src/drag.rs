//! One drag frame: snap, quantize, validate.
//!
//! 1. Snap the raw drag position against the neighbors
//! 2. Quantize the snapped position onto the grid
//! 3. Check the quantized position for collisions
//! 4. If the snap collides, retry with the quantized raw position unsnapped
//! 5. If that collides too, report the frame as blocked

use serde::{Deserialize, Serialize};

use crate::bounds::{Point, Rect};
use crate::collision::can_place;
use crate::config::LayoutConfig;
use crate::normalize::{normalize_point, normalize_with};
use crate::snap::{snap_with, SnapResult};

/// Result of resolving one drag frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragOutcome {
    /// Grid-aligned position to show (and persist if `accepted`).
    pub position: Point,
    /// The snap that produced `position`. Unsnapped when the snap was
    /// dropped in favor of the raw position.
    pub snap: SnapResult,
    /// Whether `position` is free of collisions.
    pub accepted: bool,
}

/// Resolve a drag of `dragging` to the raw position `(raw_x, raw_y)`.
///
/// `others` may include `dragging` itself; it is skipped by id. Either raw
/// coordinate may be missing or non-finite, in which case the normalizer's
/// fallback is used for that axis.
pub fn resolve_drag(
    dragging: &Rect,
    raw_x: Option<f32>,
    raw_y: Option<f32>,
    others: &[Rect],
    config: &LayoutConfig,
) -> DragOutcome {
    // Snap distances are measured from where the pointer really is, so
    // finite coordinates reach the snap unquantized.
    let raw = Point::new(raw_axis(raw_x, config), raw_axis(raw_y, config));
    let moved = dragging.at(raw.x, raw.y);

    let snapped = snap_with(&moved, others, config);
    let position = normalize_point(Some(snapped.x), Some(snapped.y), config);
    if can_place(dragging, position.x, position.y, others) {
        return DragOutcome {
            position,
            snap: snapped,
            accepted: true,
        };
    }

    let fallback = normalize_point(Some(raw.x), Some(raw.y), config);
    let accepted = can_place(dragging, fallback.x, fallback.y, others);
    if !accepted {
        log::debug!(
            "table #{} blocked at ({:.1},{:.1})",
            dragging.id,
            fallback.x,
            fallback.y
        );
    }
    DragOutcome {
        position: fallback,
        snap: SnapResult::unsnapped(fallback.x, fallback.y),
        accepted,
    }
}

/// A finite coordinate as-is; anything else becomes the configured fallback.
fn raw_axis(coord: Option<f32>, config: &LayoutConfig) -> f32 {
    match coord {
        Some(v) if v.is_finite() => v,
        other => normalize_with(other, config),
    }
}
