//! The generated map graph
//!
//! Three index-addressable collections with bidirectional adjacency:
//! [`Center`]s (one per seed point), [`Corner`]s (one per distinct
//! Voronoi vertex) and [`Edge`]s (one per bisector that survived
//! clipping, joining the Delaunay and Voronoi duals). Terrain passes
//! mutate cells and corners in place; the graph's own guarantees end at
//! structural consistency.

mod center;
mod corner;
mod edge;

pub use center::{Biome, Center};
pub use corner::Corner;
pub use edge::Edge;

use crate::config::MapConfig;
use crate::error::Result;
use crate::generation;
use crate::voronoi::{DelaunayProvider, VoronoiProvider};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;
#[cfg(feature = "spatial-index")]
use crate::vector::Vector;

/// A complete polygonal map graph
///
/// # Example
///
/// ```
/// use polygon_map_graph::{MapConfig, MapGraph};
///
/// let config = MapConfig::builder()
///     .size(4)
///     .unwrap()
///     .seed(42)
///     .build();
///
/// let graph = MapGraph::generate(config).unwrap();
/// assert_eq!(graph.center_count(), 16);
///
/// for center in graph.centers() {
///     // Every cell knows its polygon corners and its neighbors.
///     assert!(!center.corners.is_empty());
///     assert!(!center.neighbors.is_empty());
/// }
/// ```
#[derive(Clone)]
pub struct MapGraph {
    config: MapConfig,
    centers: Vec<Center>,
    corners: Vec<Corner>,
    edges: Vec<Edge>,
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl MapGraph {
    /// Generate a map graph with the built-in Voronoi provider
    ///
    /// # Arguments
    ///
    /// * `config` - Map configuration (size, seed, strategy, smoothing)
    pub fn generate(config: MapConfig) -> Result<Self> {
        Self::generate_with_provider(config, &DelaunayProvider)
    }

    /// Generate a map graph with a custom Voronoi provider
    ///
    /// The provider only has to honor the [`VoronoiProvider`] output
    /// contract; everything downstream of it is unchanged.
    pub fn generate_with_provider<P>(config: MapConfig, provider: &P) -> Result<Self>
    where
        P: VoronoiProvider,
    {
        generation::generate(config, provider)
    }

    pub(crate) fn from_parts(
        config: MapConfig,
        centers: Vec<Center>,
        corners: Vec<Corner>,
        edges: Vec<Edge>,
    ) -> Self {
        #[cfg(feature = "spatial-index")]
        let spatial_index = {
            let locations: Vec<Vector> = centers.iter().map(|c| c.location.clone()).collect();
            SpatialIndex::new(&locations)
        };

        Self {
            config,
            centers,
            corners,
            edges,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        }
    }

    /// The configuration this graph was generated from
    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Extent of the square map boundary
    #[inline]
    pub fn size(&self) -> usize {
        self.config.size()
    }

    #[inline]
    pub fn center_count(&self) -> usize {
        self.centers.len()
    }

    #[inline]
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a cell by ID, `None` when out of bounds
    #[inline]
    pub fn center(&self, id: usize) -> Option<&Center> {
        self.centers.get(id)
    }

    /// Get a corner by ID, `None` when out of bounds
    #[inline]
    pub fn corner(&self, id: usize) -> Option<&Corner> {
        self.corners.get(id)
    }

    /// Get an edge by ID, `None` when out of bounds
    #[inline]
    pub fn edge(&self, id: usize) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Mutable cell access for terrain passes
    #[inline]
    pub fn center_mut(&mut self, id: usize) -> Option<&mut Center> {
        self.centers.get_mut(id)
    }

    /// Mutable corner access for terrain and river passes
    #[inline]
    pub fn corner_mut(&mut self, id: usize) -> Option<&mut Corner> {
        self.corners.get_mut(id)
    }

    /// Mutable edge access for river passes
    #[inline]
    pub fn edge_mut(&mut self, id: usize) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    #[inline]
    pub fn centers(&self) -> &[Center] {
        &self.centers
    }

    #[inline]
    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbor IDs of a cell, empty for an invalid ID
    pub fn neighbors_of(&self, center_id: usize) -> &[usize] {
        self.centers
            .get(center_id)
            .map(|c| c.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Find cells within a hop count of a starting cell (BFS)
    ///
    /// Returns the starting cell and every cell reachable over at most
    /// `hops` shared edges, in no particular order. Empty for an invalid
    /// starting ID.
    ///
    /// # Example
    ///
    /// ```
    /// # use polygon_map_graph::{MapConfig, MapGraph};
    /// # let config = MapConfig::builder().size(4).unwrap().seed(1).build();
    /// # let graph = MapGraph::generate(config).unwrap();
    /// let nearby = graph.centers_within_hops(0, 2);
    /// assert!(nearby.contains(&0));
    /// ```
    pub fn centers_within_hops(&self, center_id: usize, hops: usize) -> Vec<usize> {
        if center_id >= self.centers.len() {
            return vec![];
        }

        let mut visited = std::collections::HashSet::new();
        let mut current = vec![center_id];
        visited.insert(center_id);

        for _ in 0..hops {
            let mut next = Vec::new();
            for &cell in &current {
                for &neighbor in self.neighbors_of(cell) {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            current = next;
        }

        visited.into_iter().collect()
    }

    /// Find the cell whose seed point is nearest to a position
    /// (requires the `spatial-index` feature)
    ///
    /// # Example
    ///
    /// ```
    /// # use polygon_map_graph::{MapConfig, MapGraph, Vector};
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// # let config = MapConfig::builder().size(4).unwrap().seed(1).build();
    /// # let graph = MapGraph::generate(config).unwrap();
    /// let cell_id = graph.find_center_at(&Vector::xy(0.2, 0.1));
    /// assert_eq!(cell_id, 0);
    /// # }
    /// ```
    #[cfg(feature = "spatial-index")]
    pub fn find_center_at(&self, position: &Vector) -> usize {
        self.spatial_index.find_nearest(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedStrategy;
    use crate::vector::Vector;
    use crate::voronoi::VERTEX_MERGE_DISTANCE_SQ;

    fn grid_graph(size: usize) -> MapGraph {
        let config = MapConfig::builder().size(size).unwrap().seed(1).build();
        MapGraph::generate(config).unwrap()
    }

    fn jittered_graph(size: usize, seed: u32, improve: bool) -> MapGraph {
        let config = MapConfig::builder()
            .size(size)
            .unwrap()
            .seed(seed)
            .strategy(SeedStrategy::JitteredGrid { jitter: 0.3 })
            .unwrap()
            .improve_corners(improve)
            .build();
        MapGraph::generate(config).unwrap()
    }

    #[test]
    fn test_two_by_two_grid_scenario() {
        let graph = grid_graph(2);

        assert_eq!(graph.center_count(), 4);
        assert_eq!(graph.center(0).unwrap().location, Vector::xy(0.0, 0.0));
        assert_eq!(graph.center(1).unwrap().location, Vector::xy(0.0, 1.0));
        assert_eq!(graph.center(2).unwrap().location, Vector::xy(1.0, 0.0));
        assert_eq!(graph.center(3).unwrap().location, Vector::xy(1.0, 1.0));

        // All four circumcenters coincide at (0.5, 0.5); the diagonal
        // bisector degenerates away, leaving the four hub-to-boundary
        // edges and five distinct corners.
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.corner_count(), 5);
        assert!(graph
            .corners()
            .iter()
            .any(|c| c.location == Vector::xy(0.5, 0.5)));
        for center in graph.centers() {
            assert_eq!(center.neighbors.len(), 2);
        }
    }

    #[test]
    fn test_map_border_flags_on_the_boundary() {
        let graph = grid_graph(2);
        for corner in graph.corners() {
            let on_boundary = corner.location.x() == 0.0
                || corner.location.x() == 2.0
                || corner.location.y() == 0.0
                || corner.location.y() == 2.0;
            assert_eq!(corner.map_border, on_boundary);
        }
        assert!(graph.center(0).unwrap().map_border);
        assert!(graph.center(1).unwrap().map_border);
        assert!(graph.center(2).unwrap().map_border);
        assert!(!graph.center(3).unwrap().map_border);
    }

    #[test]
    fn test_adjacency_is_bidirectional() {
        let graph = jittered_graph(6, 42, true);

        for edge in graph.edges() {
            assert!(graph.center(edge.d1).unwrap().borders.contains(&edge.index));
            if let Some(d2) = edge.d2 {
                assert!(graph.center(d2).unwrap().borders.contains(&edge.index));
                assert!(graph.center(edge.d1).unwrap().neighbors.contains(&d2));
                assert!(graph.center(d2).unwrap().neighbors.contains(&edge.d1));
            }
            if let (Some(a), Some(b)) = (edge.c1, edge.c2) {
                assert!(graph.corner(a).unwrap().adjacent.contains(&b));
                assert!(graph.corner(b).unwrap().adjacent.contains(&a));
                assert!(graph.corner(a).unwrap().protrudes.contains(&edge.index));
                assert!(graph.corner(b).unwrap().protrudes.contains(&edge.index));
            }
        }

        for corner in graph.corners() {
            for &center in &corner.touches {
                assert!(graph
                    .center(center)
                    .unwrap()
                    .corners
                    .contains(&corner.index));
            }
        }
        for center in graph.centers() {
            for &neighbor in &center.neighbors {
                assert!(graph
                    .center(neighbor)
                    .unwrap()
                    .neighbors
                    .contains(&center.index));
            }
        }
    }

    #[test]
    fn test_no_two_corners_within_merge_distance() {
        let graph = jittered_graph(6, 7, false);
        let corners = graph.corners();
        for (i, a) in corners.iter().enumerate() {
            for b in &corners[i + 1..] {
                assert!(
                    a.location.dist_squared(&b.location).unwrap() >= VERTEX_MERGE_DISTANCE_SQ
                );
            }
        }
    }

    #[test]
    fn test_midpoints_sit_between_their_corners() {
        let graph = jittered_graph(5, 11, true);
        for edge in graph.edges() {
            if let (Some(a), Some(b)) = (edge.c1, edge.c2) {
                let expected = graph
                    .corner(a)
                    .unwrap()
                    .location
                    .add(&graph.corner(b).unwrap().location)
                    .unwrap()
                    .scale(0.5);
                assert_eq!(edge.midpoint.as_ref(), Some(&expected));
            }
        }
    }

    #[test]
    fn test_corner_smoothing_leaves_the_boundary_alone() {
        let base = jittered_graph(4, 9, false);
        let smoothed = jittered_graph(4, 9, true);

        assert_eq!(base.corner_count(), smoothed.corner_count());
        let mut any_moved = false;
        for (before, after) in base.corners().iter().zip(smoothed.corners()) {
            if before.map_border {
                assert_eq!(before.location, after.location);
            } else if before.location != after.location {
                any_moved = true;
            }
        }
        assert!(any_moved, "smoothing should move interior corners");
    }

    #[test]
    fn test_centers_within_hops() {
        let graph = grid_graph(4);

        let just_start = graph.centers_within_hops(0, 0);
        assert_eq!(just_start, vec![0]);

        let one_hop = graph.centers_within_hops(0, 1);
        assert_eq!(one_hop.len(), 1 + graph.neighbors_of(0).len());

        let two_hops = graph.centers_within_hops(0, 2);
        assert!(two_hops.len() > one_hop.len());
    }

    #[test]
    fn test_invalid_ids_are_tolerated() {
        let graph = grid_graph(3);
        assert!(graph.center(999).is_none());
        assert!(graph.corner(999).is_none());
        assert!(graph.edge(999).is_none());
        assert!(graph.neighbors_of(999).is_empty());
        assert!(graph.centers_within_hops(999, 3).is_empty());
    }

    #[test]
    fn test_terrain_fields_are_writable() {
        let mut graph = grid_graph(3);
        if let Some(center) = graph.center_mut(0) {
            center.elevation = 0.75;
            center.water = true;
            center.biome = Biome::Lake;
        }
        assert_eq!(graph.center(0).unwrap().elevation, 0.75);
        assert!(graph.center(0).unwrap().water);
        assert_eq!(graph.center(0).unwrap().biome, Biome::Lake);
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_find_center_at() {
        let graph = grid_graph(3);
        assert_eq!(graph.find_center_at(&Vector::xy(0.1, 0.2)), 0);
        let last = graph.center_count() - 1;
        assert_eq!(graph.find_center_at(&Vector::xy(2.2, 1.9)), last);
    }
}
