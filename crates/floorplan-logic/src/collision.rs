//! Placement checks for a table at a proposed position.
//!
//! Overlap is strict: rectangles must share a positive area to collide.
//! Perfectly touching edges are allowed, otherwise a table snapped flush
//! against its neighbor would be rejected the moment it docked.

use crate::bounds::{Rect, TableId};

/// Tables in `all`, other than `moving` itself, that `moving` would
/// overlap at `(x, y)`.
fn blockers<'a>(
    moving: &Rect,
    x: f32,
    y: f32,
    all: &'a [Rect],
) -> impl Iterator<Item = &'a Rect> {
    let candidate = moving.at(x, y);
    all.iter()
        .filter(move |other| other.id != candidate.id && candidate.overlaps(other))
}

/// Ids of every other table that `moving` would overlap at `(x, y)`.
///
/// `moving` itself is skipped by id, so `all` may be the full floor plan.
pub fn colliding_ids(moving: &Rect, x: f32, y: f32, all: &[Rect]) -> Vec<TableId> {
    blockers(moving, x, y, all).map(|other| other.id).collect()
}

/// Can `moving` be placed with its top-left corner at `(x, y)`?
///
/// Same answer as `colliding_ids(..).is_empty()`, but stops at the first
/// blocker.
pub fn can_place(moving: &Rect, x: f32, y: f32, all: &[Rect]) -> bool {
    blockers(moving, x, y, all).next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: TableId, x: f32, y: f32) -> Rect {
        Rect::new(id, x, y, 80.0, 80.0)
    }

    #[test]
    fn flush_right_edge_is_allowed() {
        let a = table(1, 284.0, 200.0);
        let b = table(2, 0.0, 0.0);
        // b's left edge at 364 == a's right edge.
        assert!(can_place(&b, 364.0, 200.0, &[a, b]));
    }

    #[test]
    fn flush_below_is_allowed() {
        let a = table(1, 284.0, 200.0);
        let b = table(2, 0.0, 0.0);
        assert!(can_place(&b, 284.0, 280.0, &[a, b]));
    }

    #[test]
    fn corner_touch_is_allowed() {
        let a = table(1, 0.0, 0.0);
        let b = table(2, 500.0, 500.0);
        assert!(can_place(&b, 80.0, 80.0, &[a, b]));
    }

    #[test]
    fn any_positive_overlap_blocks() {
        let a = table(1, 284.0, 200.0);
        let b = table(2, 0.0, 0.0);
        assert!(!can_place(&b, 363.0, 200.0, &[a, b]));
        assert!(!can_place(&b, 284.0, 279.5, &[a, b]));
    }

    #[test]
    fn self_is_excluded() {
        let a = table(1, 100.0, 100.0);
        // Moving a onto its own stored position is not a collision.
        assert!(can_place(&a, 104.0, 100.0, &[a]));
    }

    #[test]
    fn reports_every_blocker() {
        let a = table(1, 0.0, 0.0);
        let b = table(2, 80.0, 0.0);
        let c = table(3, 400.0, 400.0);
        let moving = table(4, 0.0, 200.0);
        let ids = colliding_ids(&moving, 40.0, 40.0, &[a, b, c, moving]);
        assert_eq!(ids, vec![1, 2]);
        assert!(!can_place(&moving, 40.0, 40.0, &[a, b, c, moving]));
    }

    #[test]
    fn can_place_agrees_with_colliding_ids() {
        let plan = [table(1, 0.0, 0.0), table(2, 80.0, 0.0), table(3, 0.0, 80.0)];
        let moving = table(4, 400.0, 400.0);
        for (x, y) in [(40.0, 40.0), (160.0, 0.0), (80.0, 80.0), (120.0, 60.0), (0.0, 159.0)] {
            assert_eq!(
                can_place(&moving, x, y, &plan),
                colliding_ids(&moving, x, y, &plan).is_empty(),
                "at ({x}, {y})"
            );
        }
    }

    #[test]
    fn empty_plan_always_accepts() {
        assert!(can_place(&table(1, 0.0, 0.0), 12.0, 34.0, &[]));
    }
}
