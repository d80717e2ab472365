//! Table footprints, points and aggregate bounding boxes.
//!
//! All geometry is axis-aligned and lives in one shared pixel space with Y
//! growing downward: `pos_y` is a table's top edge.

use serde::{Deserialize, Serialize};

/// Stable identifier of a table within one floor plan.
pub type TableId = u64;

/// One table's axis-aligned footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub id: TableId,
    pub pos_x: f32,
    pub pos_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(id: TableId, pos_x: f32, pos_y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            pos_x,
            pos_y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos_x
    }
    pub fn right(&self) -> f32 {
        self.pos_x + self.width
    }
    pub fn top(&self) -> f32 {
        self.pos_y
    }
    pub fn bottom(&self) -> f32 {
        self.pos_y + self.height
    }

    /// Finite position and strictly positive, finite dimensions.
    pub fn is_valid(&self) -> bool {
        self.pos_x.is_finite()
            && self.pos_y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Same table, moved so its top-left corner sits at `(x, y)`.
    pub fn at(&self, x: f32, y: f32) -> Self {
        Self {
            pos_x: x,
            pos_y: y,
            ..*self
        }
    }

    /// True only when the two footprints share a positive area.
    ///
    /// Edges that coincide exactly are not an overlap, which is what lets
    /// flush-docked tables sit side by side.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.left()
            || self.left() >= other.right()
            || self.bottom() <= other.top()
            || self.top() >= other.bottom())
    }
}

/// A location in plan space: a click, a snapped corner or a seat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Aggregate extent of a set of rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    fn from_extremes(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Length of the outline, `2 × (width + height)`.
    pub fn perimeter(&self) -> f32 {
        2.0 * (self.width + self.height)
    }
}

/// Combined extent of `rects`, or `None` for an empty slice.
pub fn bounding_box(rects: &[Rect]) -> Option<BoundingBox> {
    let (first, rest) = rects.split_first()?;
    let init = (first.left(), first.top(), first.right(), first.bottom());
    let (min_x, min_y, max_x, max_y) = rest.iter().fold(init, |(min_x, min_y, max_x, max_y), r| {
        (
            min_x.min(r.left()),
            min_y.min(r.top()),
            max_x.max(r.right()),
            max_y.max(r.bottom()),
        )
    });
    Some(BoundingBox::from_extremes(min_x, min_y, max_x, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_box() {
        assert_eq!(bounding_box(&[]), None);
    }

    #[test]
    fn single_rect_box_is_the_rect() {
        let bb = bounding_box(&[Rect::new(1, 10.0, 20.0, 30.0, 40.0)]).unwrap();
        assert_eq!(bb.min_x, 10.0);
        assert_eq!(bb.min_y, 20.0);
        assert_eq!(bb.max_x, 40.0);
        assert_eq!(bb.max_y, 60.0);
        assert_eq!(bb.width, 30.0);
        assert_eq!(bb.height, 40.0);
    }

    #[test]
    fn stacked_pair_box() {
        let rects = [
            Rect::new(1, 284.0, 200.0, 80.0, 80.0),
            Rect::new(2, 284.0, 280.0, 80.0, 80.0),
        ];
        let bb = bounding_box(&rects).unwrap();
        assert_eq!(
            bb,
            BoundingBox {
                min_x: 284.0,
                min_y: 200.0,
                max_x: 364.0,
                max_y: 360.0,
                width: 80.0,
                height: 160.0,
            }
        );
        assert_eq!(bb.perimeter(), 480.0);
    }

    #[test]
    fn gapped_and_staggered_rects() {
        let rects = [
            Rect::new(1, 0.0, 20.0, 50.0, 50.0),
            Rect::new(2, 100.0, 0.0, 50.0, 50.0),
            Rect::new(3, 40.0, 90.0, 10.0, 10.0),
        ];
        let bb = bounding_box(&rects).unwrap();
        assert_eq!((bb.min_x, bb.min_y, bb.max_x, bb.max_y), (0.0, 0.0, 150.0, 100.0));
    }

    #[test]
    fn flush_edges_do_not_overlap() {
        let a = Rect::new(1, 284.0, 200.0, 80.0, 80.0);
        let b = Rect::new(2, 364.0, 200.0, 80.0, 80.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn one_pixel_overlap_is_an_overlap() {
        let a = Rect::new(1, 0.0, 0.0, 80.0, 80.0);
        let b = Rect::new(2, 79.0, 79.0, 80.0, 80.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn validity() {
        assert!(Rect::new(1, 0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(1, 0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rect::new(1, 0.0, 0.0, 1.0, -5.0).is_valid());
        assert!(!Rect::new(1, f32::NAN, 0.0, 1.0, 1.0).is_valid());
    }

    #[test]
    fn rect_serializes_snake_case() {
        let json = serde_json::to_string(&Rect::new(7, 1.0, 2.0, 3.0, 4.0)).unwrap();
        assert!(json.contains("\"pos_x\":1.0"), "{json}");
    }
}
