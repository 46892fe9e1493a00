//! Dual-graph assembly from a clipped Voronoi diagram
//!
//! Every site becomes a cell, every visible bisector becomes a graph
//! edge, and every clipped endpoint resolves to a corner. Corner
//! resolution is where numerical noise is absorbed: vertices within the
//! merge distance collapse into a single corner, found through a spatial
//! hash bucketed by the floor of the x coordinate.

use std::collections::HashMap;

use crate::error::{MapGenError, Result};
use crate::graph::{Center, Corner, Edge};
use crate::vector::Vector;
use crate::voronoi::Edge as BisectorEdge;
use crate::voronoi::{Diagram, Orientation, BORDER_EPSILON, VERTEX_MERGE_DISTANCE_SQ};

/// Accumulates cells, corners and edges for one generation run.
pub(crate) struct GraphBuilder {
    size: usize,
    centers: Vec<Center>,
    corners: Vec<Corner>,
    edges: Vec<Edge>,
    corner_buckets: HashMap<i64, Vec<usize>>,
}

impl GraphBuilder {
    pub(crate) fn new(size: usize) -> Self {
        GraphBuilder {
            size,
            centers: Vec::new(),
            corners: Vec::new(),
            edges: Vec::new(),
            corner_buckets: HashMap::new(),
        }
    }

    /// Turns a clipped diagram into the three output collections. With
    /// `improve` set, corners are smoothed after the wiring is complete.
    pub(crate) fn build(
        mut self,
        diagram: &Diagram,
        improve: bool,
    ) -> Result<(Vec<Center>, Vec<Corner>, Vec<Edge>)> {
        for site in diagram.sites() {
            let mut center = Center::new(self.centers.len(), site.coords().clone());
            center.map_border = self.on_map_border(site.coords());
            self.centers.push(center);
        }
        for bisector in diagram.edges() {
            if !bisector.visible() {
                continue;
            }
            self.add_edge(bisector)?;
        }
        if improve {
            self.improve_corners()?;
        }
        Ok((self.centers, self.corners, self.edges))
    }

    /// Adds one graph edge for a clipped bisector and wires both duals.
    fn add_edge(&mut self, bisector: &BisectorEdge) -> Result<()> {
        let d1 = bisector.left_site();
        if d1 >= self.centers.len() {
            return Err(MapGenError::InconsistentGraph(format!(
                "bisector {} references unknown site {}",
                bisector.index(),
                d1
            )));
        }
        let d2 = bisector.right_site();
        if let Some(right) = d2 {
            if right >= self.centers.len() {
                return Err(MapGenError::InconsistentGraph(format!(
                    "bisector {} references unknown site {}",
                    bisector.index(),
                    right
                )));
            }
        }

        let c1 = self.make_corner(bisector.clipped_end(Orientation::Left))?;
        let c2 = self.make_corner(bisector.clipped_end(Orientation::Right))?;
        let midpoint = match (c1, c2) {
            (Some(a), Some(b)) => Some(
                self.corners[a]
                    .location
                    .add(&self.corners[b].location)?
                    .scale(0.5),
            ),
            _ => None,
        };

        let index = self.edges.len();
        self.edges.push(Edge {
            index,
            d1,
            d2,
            c1,
            c2,
            midpoint,
            river_size: 0,
        });

        push_unique(&mut self.centers[d1].borders, index);
        if let Some(d2) = d2 {
            push_unique(&mut self.centers[d2].borders, index);
            push_unique(&mut self.centers[d1].neighbors, d2);
            push_unique(&mut self.centers[d2].neighbors, d1);
        }
        for corner in [c1, c2].into_iter().flatten() {
            push_unique(&mut self.corners[corner].protrudes, index);
            push_unique(&mut self.corners[corner].touches, d1);
            push_unique(&mut self.centers[d1].corners, corner);
            if let Some(d2) = d2 {
                push_unique(&mut self.corners[corner].touches, d2);
                push_unique(&mut self.centers[d2].corners, corner);
            }
        }
        if let (Some(a), Some(b)) = (c1, c2) {
            if a != b {
                push_unique(&mut self.corners[a].adjacent, b);
                push_unique(&mut self.corners[b].adjacent, a);
            }
        }
        Ok(())
    }

    /// Resolves a Voronoi vertex to its corner, reusing any corner within
    /// the merge distance. The home bucket and its two neighbors are
    /// scanned, since coordinates near an integer boundary may fall on
    /// either side of it. `None` input resolves to no corner.
    fn make_corner(&mut self, point: Option<&Vector>) -> Result<Option<usize>> {
        let point = match point {
            Some(point) => point,
            None => return Ok(None),
        };
        let bucket = point.x().floor() as i64;
        for key in bucket - 1..=bucket + 1 {
            if let Some(candidates) = self.corner_buckets.get(&key) {
                for &ci in candidates {
                    let dist = self.corners[ci].location.dist_squared(point)?;
                    if dist < VERTEX_MERGE_DISTANCE_SQ {
                        return Ok(Some(ci));
                    }
                }
            }
        }
        let index = self.corners.len();
        let mut corner = Corner::new(index, point.clone());
        corner.map_border = self.on_map_border(point);
        self.corners.push(corner);
        self.corner_buckets.entry(bucket).or_default().push(index);
        Ok(Some(index))
    }

    fn on_map_border(&self, point: &Vector) -> bool {
        let size = self.size as f64;
        point.x().abs() < BORDER_EPSILON
            || (point.x() - size).abs() < BORDER_EPSILON
            || point.y().abs() < BORDER_EPSILON
            || (point.y() - size).abs() < BORDER_EPSILON
    }

    /// Moves every interior corner to the centroid of the cells touching
    /// it, which evens out cell shapes. Boundary corners keep their exact
    /// clipped position so the map outline stays rectangular. Edge
    /// midpoints are recomputed afterwards.
    fn improve_corners(&mut self) -> Result<()> {
        let mut moved: Vec<Option<Vector>> = vec![None; self.corners.len()];
        for corner in &self.corners {
            if corner.map_border || corner.touches.is_empty() {
                continue;
            }
            let mut sum = Vector::zeros(2);
            for &center in &corner.touches {
                sum = sum.add(&self.centers[center].location)?;
            }
            moved[corner.index] = Some(sum.scale(1.0 / corner.touches.len() as f64));
        }
        for (index, location) in moved.into_iter().enumerate() {
            if let Some(location) = location {
                self.corners[index].location = location;
            }
        }
        for edge in &mut self.edges {
            if let (Some(a), Some(b)) = (edge.c1, edge.c2) {
                edge.midpoint = Some(
                    self.corners[a]
                        .location
                        .add(&self.corners[b].location)?
                        .scale(0.5),
                );
            }
        }
        Ok(())
    }
}

/// Appends a relation unless it is already recorded.
fn push_unique(list: &mut Vec<usize>, value: usize) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voronoi::{Rect, Site};

    #[test]
    fn test_vertices_within_merge_distance_collapse() {
        let mut builder = GraphBuilder::new(4);
        let a = builder
            .make_corner(Some(&Vector::xy(1.0000000001, 2.0)))
            .unwrap();
        let b = builder.make_corner(Some(&Vector::xy(1.0, 2.0))).unwrap();
        assert_eq!(a, b);
        assert_eq!(builder.corners.len(), 1);
    }

    #[test]
    fn test_merge_works_across_bucket_boundaries() {
        let mut builder = GraphBuilder::new(8);
        let a = builder
            .make_corner(Some(&Vector::xy(0.9999999, 5.0)))
            .unwrap();
        let b = builder
            .make_corner(Some(&Vector::xy(1.0000001, 5.0)))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(builder.corners.len(), 1);
    }

    #[test]
    fn test_vertices_at_merge_distance_stay_distinct() {
        let mut builder = GraphBuilder::new(4);
        let a = builder.make_corner(Some(&Vector::xy(0.0, 0.0))).unwrap();
        let b = builder.make_corner(Some(&Vector::xy(0.001, 0.0))).unwrap();
        let c = builder.make_corner(Some(&Vector::xy(0.002, 0.0))).unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(builder.corners.len(), 3);
    }

    #[test]
    fn test_missing_vertex_resolves_to_no_corner() {
        let mut builder = GraphBuilder::new(4);
        assert_eq!(builder.make_corner(None).unwrap(), None);
        assert!(builder.corners.is_empty());
    }

    #[test]
    fn test_map_border_flag_matches_the_boundary_lines() {
        let mut builder = GraphBuilder::new(2);
        let on_left = builder.make_corner(Some(&Vector::xy(0.0, 1.5))).unwrap();
        let on_right = builder.make_corner(Some(&Vector::xy(2.0, 1.0))).unwrap();
        let on_top = builder.make_corner(Some(&Vector::xy(1.5, 2.0))).unwrap();
        let interior = builder.make_corner(Some(&Vector::xy(1.0, 1.0))).unwrap();
        assert!(builder.corners[on_left.unwrap()].map_border);
        assert!(builder.corners[on_right.unwrap()].map_border);
        assert!(builder.corners[on_top.unwrap()].map_border);
        assert!(!builder.corners[interior.unwrap()].map_border);
    }

    #[test]
    fn test_bisector_with_unknown_site_aborts_the_build() {
        let site = Site::new(0, Vector::xy(0.5, 0.5));
        let edge = BisectorEdge::new(0, 7, Some(0), Vector::xy(1.0, 1.0), Vector::xy(0.0, 1.0));
        let mut diagram = Diagram::new(vec![site], vec![edge]);
        diagram.clip_to_bounds(&Rect::square(2.0)).unwrap();
        let err = GraphBuilder::new(2).build(&diagram, false).unwrap_err();
        assert!(matches!(err, MapGenError::InconsistentGraph(_)));
    }
}
