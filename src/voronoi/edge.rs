//! Bisector edges between neighboring sites
//!
//! An [`Edge`] is the perpendicular bisector separating two sites'
//! cells. The provider records the Voronoi vertices bounding it; either
//! endpoint may be absent, in which case the bisector extends to
//! infinity on that side and is cut down by the map boundary during
//! clipping.

use super::orientation::Orientation;
use super::rect::Rect;
use super::VERTEX_MERGE_DISTANCE_SQ;
use crate::error::Result;
use crate::vector::Vector;

/// A bisector between two sites, with boundary-clipped endpoints.
///
/// Endpoint slots follow one convention throughout the crate: walking
/// from the [`Orientation::Left`] endpoint toward the
/// [`Orientation::Right`] endpoint, the left site lies on the walker's
/// left. `direction` points the same way, so a missing left endpoint
/// means the bisector is unbounded against `direction` and a missing
/// right endpoint means it is unbounded along it.
#[derive(Debug, Clone)]
pub struct Edge {
    index: usize,
    left_site: usize,
    right_site: Option<usize>,
    origin: Vector,
    direction: Vector,
    endpoints: [Option<Vector>; 2],
    clipped: Option<[Vector; 2]>,
}

impl Edge {
    /// Creates an unbounded bisector between two sites.
    ///
    /// `origin` must be a point on the bisector line (the midpoint of the
    /// two site positions works); it anchors clipping when neither
    /// endpoint is known. `direction` must follow the left-of-walk
    /// convention described on [`Edge`].
    pub fn new(
        index: usize,
        left_site: usize,
        right_site: Option<usize>,
        origin: Vector,
        direction: Vector,
    ) -> Self {
        Edge {
            index,
            left_site,
            right_site,
            origin,
            direction,
            endpoints: [None, None],
            clipped: None,
        }
    }

    /// Records the Voronoi vertex bounding this bisector on one side.
    pub fn set_endpoint(&mut self, orientation: Orientation, vertex: Vector) {
        self.endpoints[orientation.index()] = Some(vertex);
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Site on the left of the bisector.
    #[inline]
    pub fn left_site(&self) -> usize {
        self.left_site
    }

    /// Site on the right of the bisector, absent for a one-sided bisector
    /// on the hull of the diagram.
    #[inline]
    pub fn right_site(&self) -> Option<usize> {
        self.right_site
    }

    /// The unclipped Voronoi vertex on the given side, if the provider
    /// found one.
    #[inline]
    pub fn endpoint(&self, orientation: Orientation) -> Option<&Vector> {
        self.endpoints[orientation.index()].as_ref()
    }

    /// Whether any part of this bisector survived clipping.
    #[inline]
    pub fn visible(&self) -> bool {
        self.clipped.is_some()
    }

    /// Both boundary-clipped endpoints, `None` until [`Edge::clip_to_bounds`]
    /// has run or when the bisector is entirely outside the bound or
    /// degenerate.
    #[inline]
    pub fn clipped_ends(&self) -> Option<&[Vector; 2]> {
        self.clipped.as_ref()
    }

    /// The boundary-clipped endpoint on the given side.
    #[inline]
    pub fn clipped_end(&self, orientation: Orientation) -> Option<&Vector> {
        self.clipped
            .as_ref()
            .map(|ends| &ends[orientation.index()])
    }

    /// Cuts the bisector down to the part inside `bounds`.
    ///
    /// The edge ends up not visible when it lies entirely outside the
    /// bound, or when the clipped piece is shorter than the vertex-merge
    /// distance and would only produce a duplicate corner.
    pub fn clip_to_bounds(&mut self, bounds: &Rect) -> Result<()> {
        let left = self.endpoints[Orientation::Left.index()].clone();
        let right = self.endpoints[Orientation::Right.index()].clone();
        let (anchor, dir, mut t0, mut t1) = match (&left, &right) {
            (Some(l), Some(r)) => (l.clone(), r.sub(l)?, 0.0, 1.0),
            (Some(l), None) => (l.clone(), self.direction.clone(), 0.0, f64::INFINITY),
            (None, Some(r)) => (r.clone(), self.direction.scale(-1.0), 0.0, f64::INFINITY),
            (None, None) => (
                self.origin.clone(),
                self.direction.clone(),
                f64::NEG_INFINITY,
                f64::INFINITY,
            ),
        };

        let inside = clip_axis(-dir.x(), anchor.x() - bounds.left(), &mut t0, &mut t1)
            && clip_axis(dir.x(), bounds.right() - anchor.x(), &mut t0, &mut t1)
            && clip_axis(-dir.y(), anchor.y() - bounds.bottom(), &mut t0, &mut t1)
            && clip_axis(dir.y(), bounds.top() - anchor.y(), &mut t0, &mut t1);
        if !inside {
            self.clipped = None;
            return Ok(());
        }

        let near = bounds.snap_to_boundary(point_at(&anchor, &dir, t0));
        let far = bounds.snap_to_boundary(point_at(&anchor, &dir, t1));
        if near.dist_squared(&far)? < VERTEX_MERGE_DISTANCE_SQ {
            self.clipped = None;
            return Ok(());
        }

        // When clipping ran anchored at the right endpoint, the far end of
        // the parameter range is the left side of the edge.
        self.clipped = Some(match (&left, &right) {
            (None, Some(_)) => [far, near],
            _ => [near, far],
        });
        Ok(())
    }
}

fn point_at(anchor: &Vector, dir: &Vector, t: f64) -> Vector {
    Vector::xy(anchor.x() + t * dir.x(), anchor.y() + t * dir.y())
}

/// One Liang-Barsky half-plane constraint `p * t <= q`. Tightens the
/// feasible parameter range and reports whether it is still non-empty.
fn clip_axis(p: f64, q: f64, t0: &mut f64, t1: &mut f64) -> bool {
    if p == 0.0 {
        return q >= 0.0;
    }
    let r = q / p;
    if p < 0.0 {
        if r > *t1 {
            return false;
        }
        if r > *t0 {
            *t0 = r;
        }
    } else {
        if r < *t0 {
            return false;
        }
        if r < *t1 {
            *t1 = r;
        }
    }
    true
}
