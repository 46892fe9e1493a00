//! Per-seed cell accumulators and the boundary clipper
//!
//! A [`Site`] collects the bisector edges the provider discovers for one
//! seed point. Once clipping has run, the site stitches its visible
//! edges into a single closed cell polygon: edges are reordered by angle
//! around the seed, traversed endpoint to endpoint, and joined along the
//! map boundary where the cell was cut open, inserting boundary corners
//! as needed. The resulting ring is memoized and always wound
//! counter-clockwise.

use super::edge::Edge;
use super::orientation::Orientation;
use super::polygon;
use super::rect::Rect;
use super::CONNECT_DISTANCE_SQ;
use crate::error::Result;
use crate::vector::Vector;

/// One Voronoi generator point and its accumulated bisector edges.
#[derive(Debug, Clone)]
pub struct Site {
    index: usize,
    coords: Vector,
    edges: Vec<usize>,
    edge_orientations: Vec<Orientation>,
    region: Option<Vec<Vector>>,
}

impl Site {
    /// Creates a site for a seed point.
    pub fn new(index: usize, coords: Vector) -> Self {
        Site {
            index,
            coords,
            edges: Vec::new(),
            edge_orientations: Vec::new(),
            region: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the seed point.
    #[inline]
    pub fn coords(&self) -> &Vector {
        &self.coords
    }

    /// Registers an incident bisector edge by its diagram index.
    pub fn add_edge(&mut self, edge_index: usize) {
        self.edges.push(edge_index);
    }

    /// Diagram indices of the bisector edges incident to this site.
    #[inline]
    pub fn edge_indices(&self) -> &[usize] {
        &self.edges
    }

    /// The closed cell polygon, empty until the diagram has been clipped
    /// or when no edge of this site is visible inside the bound.
    #[inline]
    pub fn region(&self) -> &[Vector] {
        self.region.as_deref().unwrap_or(&[])
    }

    /// Resolves the cell polygon once; later calls keep the stored ring.
    pub(crate) fn resolve_region(&mut self, edges: &[Edge], bounds: &Rect) -> Result<()> {
        if self.region.is_some() {
            return Ok(());
        }
        self.reorder_edges(edges)?;
        let mut points = self.assemble_region(edges, bounds)?;
        if polygon::is_clockwise(&points) {
            points.reverse();
        }
        self.region = Some(points);
        Ok(())
    }

    /// Sorts the visible edges by angle around the seed point and records
    /// which side of each bisector this site occupies. Edges without a
    /// visible part keep their registration but move behind the sorted
    /// ones.
    fn reorder_edges(&mut self, edges: &[Edge]) -> Result<()> {
        let mut keyed: Vec<(f64, usize)> = Vec::new();
        let mut hidden: Vec<usize> = Vec::new();
        for &ei in &self.edges {
            match edges[ei].clipped_ends() {
                Some([a, b]) => {
                    let mid = a.add(b)?.scale(0.5);
                    let angle = (mid.y() - self.coords.y()).atan2(mid.x() - self.coords.x());
                    keyed.push((angle, ei));
                }
                None => hidden.push(ei),
            }
        }
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.edges = keyed.iter().map(|&(_, ei)| ei).chain(hidden).collect();
        self.edge_orientations = self
            .edges
            .iter()
            .map(|&ei| {
                if edges[ei].left_site() == self.index {
                    Orientation::Left
                } else {
                    Orientation::Right
                }
            })
            .collect();
        Ok(())
    }

    /// Walks the angularly ordered visible edges and emits the cell ring.
    fn assemble_region(&self, edges: &[Edge], bounds: &Rect) -> Result<Vec<Vector>> {
        let mut points: Vec<Vector> = Vec::new();
        for (pos, &ei) in self.edges.iter().enumerate() {
            let ends = match edges[ei].clipped_ends() {
                Some(ends) => ends,
                None => continue,
            };
            let orientation = self.edge_orientations[pos];
            let first = &ends[orientation.index()];
            let second = &ends[orientation.other().index()];
            if points.is_empty() {
                points.push(first.clone());
                points.push(second.clone());
                continue;
            }
            Self::connect(&mut points, first, bounds, false)?;
            if points[0].dist_squared(second)? >= CONNECT_DISTANCE_SQ {
                points.push(second.clone());
            }
        }
        if !points.is_empty() {
            let start = points[0].clone();
            Self::connect(&mut points, &start, bounds, true)?;
        }
        Ok(points)
    }

    /// Joins the ring's last point to `new_point`. Coinciding points need
    /// nothing; otherwise any boundary corners between the two are
    /// inserted, and the point itself is appended unless this is the
    /// closing step back to the ring's start.
    fn connect(
        points: &mut Vec<Vector>,
        new_point: &Vector,
        bounds: &Rect,
        closing: bool,
    ) -> Result<()> {
        let last = points[points.len() - 1].clone();
        if last.dist_squared(new_point)? < CONNECT_DISTANCE_SQ {
            return Ok(());
        }
        points.extend(bounds.connector_corners(&last, new_point));
        if !closing {
            points.push(new_point.clone());
        }
        Ok(())
    }
}
