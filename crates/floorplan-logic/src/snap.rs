//! Magnetic docking of a dragged table against its neighbors.
//!
//! Algorithm: "generate, score, pick"
//! 1. Every valid neighbor inside the search window (`5 × snap_distance`)
//!    proposes edge docks: dock below / above when the X-ranges nearly
//!    overlap, dock right-of / left-of when the Y-ranges nearly overlap.
//! 2. Each (vertical, horizontal) pair is tried as a corner. The corner is
//!    real only if, placed there, the table still overlaps the horizontal
//!    target along Y and the vertical target along X. Corners inside the
//!    search window score `200 − distance`.
//! 3. Each edge dock on its own is accepted within `snap_distance` and
//!    scores `50 − distance`.
//! 4. The raw drag position is always a candidate with score `0`.
//! 5. Highest score wins. A corner always beats an edge, so completing a
//!    grid is preferred over a nearer single-edge snap.
//!
//! Equal scores resolve by generation order; callers must not depend on
//! which of two tied neighbors wins.

use serde::{Deserialize, Serialize};

use crate::bounds::{Point, Rect, TableId};
use crate::config::LayoutConfig;
use crate::constants::scores;

/// Corrected drag position plus what it docked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    pub x: f32,
    pub y: f32,
    /// X was moved so a left/right edge sits flush against a neighbor.
    pub snapped_horizontally: bool,
    /// Y was moved so a top/bottom edge sits flush against a neighbor.
    pub snapped_vertically: bool,
    pub horizontal_target: Option<TableId>,
    pub vertical_target: Option<TableId>,
    /// The primary neighbor to highlight: the horizontal target if any,
    /// else the vertical one.
    pub snap_target_id: Option<TableId>,
}

impl SnapResult {
    pub(crate) fn unsnapped(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            snapped_horizontally: false,
            snapped_vertically: false,
            horizontal_target: None,
            vertical_target: None,
            snap_target_id: None,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped_horizontally || self.snapped_vertically
    }

    /// Every distinct neighbor this result docked against.
    pub fn target_ids(&self) -> Vec<TableId> {
        let mut ids: Vec<TableId> = self
            .horizontal_target
            .into_iter()
            .chain(self.vertical_target)
            .collect();
        ids.dedup();
        ids
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One edge dock: the new coordinate on one axis and the neighbor it
/// lies flush against.
#[derive(Debug, Clone, Copy)]
struct EdgeDock {
    coord: f32,
    target: Rect,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    x: f32,
    y: f32,
    score: f32,
    horizontal: Option<TableId>,
    vertical: Option<TableId>,
}

impl From<Candidate> for SnapResult {
    fn from(c: Candidate) -> Self {
        SnapResult {
            x: c.x,
            y: c.y,
            snapped_horizontally: c.horizontal.is_some(),
            snapped_vertically: c.vertical.is_some(),
            horizontal_target: c.horizontal,
            vertical_target: c.vertical,
            snap_target_id: c.horizontal.or(c.vertical),
        }
    }
}

/// Length of the shared part of `[a0, a1]` and `[b0, b1]`; negative when
/// they are apart.
fn range_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    a1.min(b1) - a0.max(b0)
}

fn x_overlap(a: &Rect, b: &Rect) -> f32 {
    range_overlap(a.left(), a.right(), b.left(), b.right())
}

fn y_overlap(a: &Rect, b: &Rect) -> f32 {
    range_overlap(a.top(), a.bottom(), b.top(), b.bottom())
}

/// Snap with the default 15px snap distance.
///
/// The raw drag position is `dragging.pos_x / pos_y`.
pub fn snap(dragging: &Rect, others: &[Rect]) -> SnapResult {
    snap_with(dragging, others, &LayoutConfig::default())
}

/// Snap using the distances and scores in `config`.
pub fn snap_with(dragging: &Rect, others: &[Rect], config: &LayoutConfig) -> SnapResult {
    let raw = Point::new(dragging.pos_x, dragging.pos_y);
    if !dragging.is_valid() {
        log::debug!("table #{} has invalid geometry, not snapping", dragging.id);
        return SnapResult::unsnapped(raw.x, raw.y);
    }

    let snap_distance = config.snap_distance;
    let search = config.search_distance();
    let (vertical, horizontal) = edge_docks(dragging, others, snap_distance, search);

    let mut candidates = vec![Candidate {
        x: raw.x,
        y: raw.y,
        score: scores::BASELINE,
        horizontal: None,
        vertical: None,
    }];

    // Corners
    for v in &vertical {
        for h in &horizontal {
            let placed = dragging.at(h.coord, v.coord);
            let genuine =
                y_overlap(&placed, &h.target) > 0.0 && x_overlap(&placed, &v.target) > 0.0;
            if !genuine {
                continue;
            }
            let distance = raw.distance_to(&Point::new(h.coord, v.coord));
            if distance <= search {
                candidates.push(Candidate {
                    x: h.coord,
                    y: v.coord,
                    score: config.corner_base_score - distance,
                    horizontal: Some(h.target.id),
                    vertical: Some(v.target.id),
                });
            }
        }
    }

    // Single-axis
    for v in &vertical {
        let distance = (v.coord - raw.y).abs();
        if distance <= snap_distance {
            candidates.push(Candidate {
                x: raw.x,
                y: v.coord,
                score: config.edge_base_score - distance,
                horizontal: None,
                vertical: Some(v.target.id),
            });
        }
    }
    for h in &horizontal {
        let distance = (h.coord - raw.x).abs();
        if distance <= snap_distance {
            candidates.push(Candidate {
                x: h.coord,
                y: raw.y,
                score: config.edge_base_score - distance,
                horizontal: Some(h.target.id),
                vertical: None,
            });
        }
    }

    // A NaN base score in the config would outrank every real score under
    // `total_cmp`. The baseline is never NaN.
    let before = candidates.len();
    candidates.retain(|c| !c.score.is_nan());
    if candidates.len() < before {
        log::warn!(
            "dropped {} snap candidates with NaN scores for table #{}",
            before - candidates.len(),
            dragging.id
        );
    }

    // Stable: ties keep generation order, baseline first.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    let best = candidates[0];
    log::trace!(
        "snap #{}: ({:.1},{:.1}) → ({:.1},{:.1}) score={:.1} of {} candidates",
        dragging.id,
        raw.x,
        raw.y,
        best.x,
        best.y,
        best.score,
        candidates.len()
    );
    best.into()
}

/// Collect vertical (Y) and horizontal (X) edge docks from every neighbor
/// inside the search window.
fn edge_docks(
    dragging: &Rect,
    others: &[Rect],
    snap_distance: f32,
    search: f32,
) -> (Vec<EdgeDock>, Vec<EdgeDock>) {
    let mut vertical = Vec::new();
    let mut horizontal = Vec::new();

    for other in others {
        if other.id == dragging.id {
            continue;
        }
        if !other.is_valid() {
            log::debug!("skipping table #{} with invalid geometry", other.id);
            continue;
        }

        let gap_x = -x_overlap(dragging, other);
        let gap_y = -y_overlap(dragging, other);
        if gap_x > search || gap_y > search {
            continue;
        }

        // X-ranges (nearly) overlap: can dock below or above.
        if gap_x < snap_distance {
            vertical.push(EdgeDock {
                coord: other.bottom(),
                target: *other,
            });
            vertical.push(EdgeDock {
                coord: other.top() - dragging.height,
                target: *other,
            });
        }
        // Y-ranges (nearly) overlap: can dock right-of or left-of.
        if gap_y < snap_distance {
            horizontal.push(EdgeDock {
                coord: other.right(),
                target: *other,
            });
            horizontal.push(EdgeDock {
                coord: other.left() - dragging.width,
                target: *other,
            });
        }
    }

    (vertical, horizontal)
}
