//! Even seat distribution around a table group's outline.
//!
//! A group is seated as one rectangle: the combined bounding box of its
//! members. Rows that are gapped or staggered by a few pixels therefore
//! still get one consistent outline instead of seats on mismatched axes.
//!
//! ```text
//!   seat 1 ──► top edge ──────────┐
//!   (min_x, min_y)                │ right edge
//!   ▲                             ▼
//!   │ left edge                   │
//!   └────────── bottom edge ◄─────┘
//! ```
//!
//! The walk starts at the top-left corner and runs clockwise (Y grows
//! downward). Seat `i` (1-based) sits at arc length `(i − 1) × P / n`.
//! A seat landing exactly on a corner belongs to the edge that starts
//! there, so the top-right corner is reported on the right edge, and so on.

use serde::{Deserialize, Serialize};

use crate::bounds::{bounding_box, BoundingBox, Point, Rect, TableId};
use crate::group::{resolve_group, TableRecord};

/// A seat location with its 1-based sequence number around the outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatPosition {
    pub index: u32,
    pub x: f32,
    pub y: f32,
}

/// Place `seat_count` points evenly around the group's combined outline,
/// clockwise from the top-left corner.
///
/// Returns an empty list when `seat_count` is zero or the group has no
/// usable table.
pub fn distribute_seats_on_perimeter(group: &[Rect], seat_count: usize) -> Vec<Point> {
    if seat_count == 0 {
        return Vec::new();
    }

    let usable: Vec<Rect> = group
        .iter()
        .filter(|r| {
            let ok = r.is_valid();
            if !ok {
                log::debug!("skipping table #{} with invalid geometry for seating", r.id);
            }
            ok
        })
        .copied()
        .collect();
    let Some(bb) = bounding_box(&usable) else {
        return Vec::new();
    };

    let perimeter = bb.perimeter();
    let step = perimeter / seat_count as f32;
    // Arc of each seat from its index, so drift never accumulates.
    (0..seat_count)
        .map(|i| point_on_outline(&bb, i as f32 * step))
        .collect()
}

/// [`distribute_seats_on_perimeter`] with sequence numbers attached.
pub fn seat_positions(group: &[Rect], seat_count: usize) -> Vec<SeatPosition> {
    distribute_seats_on_perimeter(group, seat_count)
        .into_iter()
        .zip(1u32..)
        .map(|(p, index)| SeatPosition {
            index,
            x: p.x,
            y: p.y,
        })
        .collect()
}

/// Seat the whole combined group that `anchor` belongs to.
pub fn seats_for_group(
    anchor: TableId,
    tables: &[TableRecord],
    seat_count: usize,
) -> Vec<SeatPosition> {
    seat_positions(&resolve_group(anchor, tables), seat_count)
}

/// Convert an arc length (clockwise from the top-left corner) into a point
/// on the box outline. Arcs outside `[0, P)` wrap around.
pub fn point_on_outline(bb: &BoundingBox, arc: f32) -> Point {
    let perimeter = bb.perimeter();
    if !(perimeter > 0.0) {
        return Point::new(bb.min_x, bb.min_y);
    }

    let mut s = arc.rem_euclid(perimeter);
    if s < bb.width {
        return Point::new(bb.min_x + s, bb.min_y);
    }
    s -= bb.width;
    if s < bb.height {
        return Point::new(bb.max_x, bb.min_y + s);
    }
    s -= bb.height;
    if s < bb.width {
        return Point::new(bb.max_x - s, bb.max_y);
    }
    s -= bb.width;
    Point::new(bb.min_x, bb.max_y - s.min(bb.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_pair() -> Vec<Rect> {
        vec![
            Rect::new(1, 284.0, 200.0, 80.0, 80.0),
            Rect::new(2, 284.0, 280.0, 80.0, 80.0),
        ]
    }

    fn staggered_row() -> Vec<Rect> {
        vec![
            Rect::new(1, 0.0, 0.0, 110.0, 110.0),
            Rect::new(2, 110.0, 20.0, 110.0, 110.0),
            Rect::new(3, 220.0, 40.0, 110.0, 110.0),
        ]
    }

    /// Inverse of `point_on_outline` for points on the box boundary.
    fn arc_of(bb: &BoundingBox, p: &Point) -> f32 {
        if p.y == bb.min_y && p.x < bb.max_x {
            p.x - bb.min_x
        } else if p.x == bb.max_x && p.y < bb.max_y {
            bb.width + (p.y - bb.min_y)
        } else if p.y == bb.max_y && p.x > bb.min_x {
            bb.width + bb.height + (bb.max_x - p.x)
        } else {
            2.0 * bb.width + bb.height + (bb.max_y - p.y)
        }
    }

    #[test]
    fn stacked_pair_eight_seats() {
        let seats = distribute_seats_on_perimeter(&stacked_pair(), 8);
        let expected = [
            (284.0, 200.0),
            (344.0, 200.0),
            (364.0, 240.0),
            (364.0, 300.0),
            (364.0, 360.0),
            (304.0, 360.0),
            (284.0, 320.0),
            (284.0, 260.0),
        ];
        let got: Vec<(f32, f32)> = seats.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn seats_are_clockwise() {
        let group = staggered_row();
        let bb = bounding_box(&group).unwrap();
        let seats = distribute_seats_on_perimeter(&group, 12);
        let arcs: Vec<f32> = seats.iter().map(|p| arc_of(&bb, p)).collect();
        assert!(
            arcs.windows(2).all(|w| w[0] < w[1]),
            "not clockwise: {arcs:?}"
        );
    }

    #[test]
    fn staggered_rows_use_more_than_one_y() {
        let seats = distribute_seats_on_perimeter(&staggered_row(), 8);
        assert_eq!(seats.len(), 8);
        let first_y = seats[0].y;
        assert!(seats.iter().any(|p| p.y != first_y));
    }

    #[test]
    fn seats_are_distinct() {
        let seats = distribute_seats_on_perimeter(&stacked_pair(), 24);
        for (i, a) in seats.iter().enumerate() {
            for b in &seats[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn seats_stay_on_the_outline() {
        let group = staggered_row();
        let bb = bounding_box(&group).unwrap();
        for p in distribute_seats_on_perimeter(&group, 10) {
            let on_x_edge = p.x == bb.min_x || p.x == bb.max_x;
            let on_y_edge = p.y == bb.min_y || p.y == bb.max_y;
            assert!(on_x_edge || on_y_edge, "{p:?} is inside the box");
            assert!(p.x >= bb.min_x && p.x <= bb.max_x);
            assert!(p.y >= bb.min_y && p.y <= bb.max_y);
        }
    }

    #[test]
    fn empty_group_or_zero_seats() {
        assert!(distribute_seats_on_perimeter(&[], 6).is_empty());
        assert!(distribute_seats_on_perimeter(&stacked_pair(), 0).is_empty());
    }

    #[test]
    fn invalid_members_are_ignored() {
        let mut group = stacked_pair();
        group.push(Rect::new(3, 0.0, 0.0, 0.0, 0.0));
        let seats = distribute_seats_on_perimeter(&group, 8);
        assert_eq!(seats[0], Point::new(284.0, 200.0));
    }

    #[test]
    fn single_seat_sits_top_left() {
        let seats = distribute_seats_on_perimeter(&stacked_pair(), 1);
        assert_eq!(seats, vec![Point::new(284.0, 200.0)]);
    }

    #[test]
    fn indexed_seats_count_from_one() {
        let seats = seat_positions(&stacked_pair(), 4);
        let indices: Vec<u32> = seats.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!((seats[1].x, seats[1].y), (364.0, 240.0));
        assert_eq!((seats[3].x, seats[3].y), (284.0, 320.0));
    }

    #[test]
    fn outline_wraps() {
        let bb = bounding_box(&stacked_pair()).unwrap();
        assert_eq!(point_on_outline(&bb, 480.0), Point::new(284.0, 200.0));
        assert_eq!(point_on_outline(&bb, -60.0), Point::new(284.0, 260.0));
    }
}
