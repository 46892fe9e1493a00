//! Rectangular clipping bounds
//!
//! The map boundary is an axis-aligned rectangle. Besides plain extent
//! queries it supports the two geometric services the boundary clipper
//! needs: classifying which boundary lines a point lies on, and walking
//! the rectangle perimeter to find the corner points between two
//! boundary positions.

use super::BORDER_EPSILON;
use crate::vector::Vector;

/// Axis-aligned rectangle with `y` growing upward.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Bitmask flag for a point on the left boundary line.
    pub const LEFT: u8 = 1;
    /// Bitmask flag for a point on the right boundary line.
    pub const RIGHT: u8 = 2;
    /// Bitmask flag for a point on the bottom boundary line.
    pub const BOTTOM: u8 = 4;
    /// Bitmask flag for a point on the top boundary line.
    pub const TOP: u8 = 8;

    /// Creates a rectangle from its lower-left corner and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates the square `[0, size] x [0, size]` used as a map boundary.
    pub fn square(size: f64) -> Self {
        Rect::new(0.0, 0.0, size, size)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the four corner points in counter-clockwise order,
    /// starting at the lower-left corner.
    pub fn corners(&self) -> [Vector; 4] {
        [
            Vector::xy(self.left(), self.bottom()),
            Vector::xy(self.right(), self.bottom()),
            Vector::xy(self.right(), self.top()),
            Vector::xy(self.left(), self.top()),
        ]
    }

    /// Returns a bitmask of the boundary lines `point` lies on, within
    /// [`BORDER_EPSILON`]. A point in the interior (or outside) of every
    /// boundary line yields `0`; a rectangle corner sets two bits.
    pub fn side_mask(&self, point: &Vector) -> u8 {
        let mut mask = 0;
        if (point.x() - self.left()).abs() < BORDER_EPSILON {
            mask |= Rect::LEFT;
        }
        if (point.x() - self.right()).abs() < BORDER_EPSILON {
            mask |= Rect::RIGHT;
        }
        if (point.y() - self.bottom()).abs() < BORDER_EPSILON {
            mask |= Rect::BOTTOM;
        }
        if (point.y() - self.top()).abs() < BORDER_EPSILON {
            mask |= Rect::TOP;
        }
        mask
    }

    /// Moves coordinates that lie within [`BORDER_EPSILON`] of a boundary
    /// line exactly onto that line.
    pub(crate) fn snap_to_boundary(&self, mut point: Vector) -> Vector {
        for (axis, bound) in [
            (0, self.left()),
            (0, self.right()),
            (1, self.bottom()),
            (1, self.top()),
        ] {
            if (point.get(axis) - bound).abs() < BORDER_EPSILON {
                point.set(axis, bound);
            }
        }
        point
    }

    /// Scalar position of a boundary point along the perimeter, measured
    /// counter-clockwise from the lower-left corner. Returns `None` when
    /// the point does not lie on any boundary line.
    fn perimeter_position(&self, point: &Vector) -> Option<f64> {
        let mask = self.side_mask(point);
        if mask & Rect::BOTTOM != 0 {
            return Some(point.x() - self.left());
        }
        if mask & Rect::RIGHT != 0 {
            return Some(self.width + (point.y() - self.bottom()));
        }
        if mask & Rect::TOP != 0 {
            return Some(self.width + self.height + (self.right() - point.x()));
        }
        if mask & Rect::LEFT != 0 {
            return Some(2.0 * self.width + self.height + (self.top() - point.y()));
        }
        None
    }

    /// Rectangle corners to insert between two boundary points when a cell
    /// polygon is stitched along the boundary.
    ///
    /// The corners are taken going the shorter way around the perimeter
    /// from `from` to `to`, ordered along the walk; a tie between the two
    /// directions resolves counter-clockwise. Returns an empty list when
    /// either point is off the boundary or no corner lies between them.
    pub(crate) fn connector_corners(&self, from: &Vector, to: &Vector) -> Vec<Vector> {
        let (start, end) = match (self.perimeter_position(from), self.perimeter_position(to)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Vec::new(),
        };
        let perimeter = 2.0 * (self.width + self.height);
        let ccw_span = (end - start).rem_euclid(perimeter);
        let cw_span = perimeter - ccw_span;

        let corner_positions = [
            0.0,
            self.width,
            self.width + self.height,
            2.0 * self.width + self.height,
        ];
        let corner_points = self.corners();

        let mut picked: Vec<(f64, Vector)> = Vec::new();
        for (pos, corner) in corner_positions.iter().zip(corner_points.iter()) {
            let offset = if ccw_span <= cw_span {
                (pos - start).rem_euclid(perimeter)
            } else {
                (start - pos).rem_euclid(perimeter)
            };
            let span = ccw_span.min(cw_span);
            if offset > BORDER_EPSILON && offset < span - BORDER_EPSILON {
                picked.push((offset, corner.clone()));
            }
        }
        picked.sort_by(|a, b| a.0.total_cmp(&b.0));
        picked.into_iter().map(|(_, corner)| corner).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.left(), 1.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 2.0);
        assert_eq!(r.top(), 6.0);
    }

    #[test]
    fn test_side_mask() {
        let r = Rect::square(2.0);
        assert_eq!(r.side_mask(&Vector::xy(0.0, 1.0)), Rect::LEFT);
        assert_eq!(r.side_mask(&Vector::xy(2.0, 1.0)), Rect::RIGHT);
        assert_eq!(r.side_mask(&Vector::xy(1.0, 0.0)), Rect::BOTTOM);
        assert_eq!(r.side_mask(&Vector::xy(1.0, 2.0)), Rect::TOP);
        assert_eq!(
            r.side_mask(&Vector::xy(2.0, 2.0)),
            Rect::RIGHT | Rect::TOP
        );
        assert_eq!(r.side_mask(&Vector::xy(1.0, 1.0)), 0);
    }

    #[test]
    fn test_snap_to_boundary() {
        let r = Rect::square(2.0);
        let snapped = r.snap_to_boundary(Vector::xy(1.9999999, 0.0000005));
        assert_eq!(snapped, Vector::xy(2.0, 0.0));
        let untouched = r.snap_to_boundary(Vector::xy(1.99, 0.5));
        assert_eq!(untouched, Vector::xy(1.99, 0.5));
    }

    #[test]
    fn test_connector_skips_interior_points() {
        let r = Rect::square(2.0);
        assert!(r
            .connector_corners(&Vector::xy(1.0, 1.0), &Vector::xy(2.0, 1.0))
            .is_empty());
    }

    #[test]
    fn test_connector_same_side_inserts_nothing() {
        let r = Rect::square(2.0);
        assert!(r
            .connector_corners(&Vector::xy(0.5, 0.0), &Vector::xy(1.5, 0.0))
            .is_empty());
    }

    #[test]
    fn test_connector_adjacent_sides_inserts_shared_corner() {
        let r = Rect::square(2.0);
        let corners = r.connector_corners(&Vector::xy(0.0, 0.5), &Vector::xy(0.5, 0.0));
        assert_eq!(corners, vec![Vector::xy(0.0, 0.0)]);
    }

    #[test]
    fn test_connector_goes_the_shorter_way() {
        let r = Rect::square(2.0);
        // From the top side near the right edge down to the right side:
        // the short way passes the top-right corner only.
        let corners = r.connector_corners(&Vector::xy(1.5, 2.0), &Vector::xy(2.0, 1.5));
        assert_eq!(corners, vec![Vector::xy(2.0, 2.0)]);
    }

    #[test]
    fn test_connector_clockwise_walk_orders_corners_along_the_walk() {
        let r = Rect::square(2.0);
        // Bottom near the left corner to left side near the same corner:
        // clockwise is shorter and passes only the lower-left corner.
        let corners = r.connector_corners(&Vector::xy(0.5, 0.0), &Vector::xy(0.0, 0.5));
        assert_eq!(corners, vec![Vector::xy(0.0, 0.0)]);
    }

    #[test]
    fn test_connector_tie_resolves_counter_clockwise() {
        let r = Rect::square(2.0);
        // Opposite boundary points: both directions span half the
        // perimeter, so the counter-clockwise pair is chosen.
        let corners = r.connector_corners(&Vector::xy(1.0, 2.0), &Vector::xy(1.0, 0.0));
        assert_eq!(corners, vec![Vector::xy(0.0, 2.0), Vector::xy(0.0, 0.0)]);
    }
}
