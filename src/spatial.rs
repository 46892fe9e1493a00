//! Spatial indexing for fast position-to-cell lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

#[cfg(feature = "spatial-index")]
use crate::vector::Vector;

/// Wrapper around a KD-tree for nearest-cell queries
///
/// Converts arbitrary map positions into cell IDs in O(log n), which is
/// what pickers, cursors and unit placement need once a map graph
/// exists.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build a spatial index from cell seed locations
    ///
    /// Called once at the end of graph generation.
    ///
    /// # Arguments
    ///
    /// * `locations` - Seed location of every cell, in cell-index order
    ///
    /// # Example
    ///
    /// ```
    /// use polygon_map_graph::Vector;
    /// # #[cfg(feature = "spatial-index")]
    /// use polygon_map_graph::SpatialIndex;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let locations = vec![
    ///     Vector::xy(0.0, 0.0),
    ///     Vector::xy(4.0, 0.0),
    ///     Vector::xy(0.0, 4.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&locations);
    /// assert_eq!(index.find_nearest(&Vector::xy(0.5, 0.1)), 0);
    /// # }
    /// ```
    pub fn new(locations: &[Vector]) -> Self {
        let points: Vec<[f64; 2]> = locations.iter().map(|p| [p.x(), p.y()]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Find the cell whose seed location is nearest to a position
    ///
    /// # Arguments
    ///
    /// * `position` - Map position to query
    ///
    /// # Returns
    ///
    /// Cell ID of the nearest cell
    pub fn find_nearest(&self, position: &Vector) -> usize {
        let query = [position.x(), position.y()];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}

#[cfg(test)]
#[cfg(feature = "spatial-index")]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let locations = vec![
            Vector::xy(0.0, 0.0),
            Vector::xy(2.0, 0.0),
            Vector::xy(0.0, 2.0),
            Vector::xy(2.0, 2.0),
        ];

        let index = SpatialIndex::new(&locations);

        assert_eq!(index.find_nearest(&Vector::xy(0.2, 0.3)), 0);
        assert_eq!(index.find_nearest(&Vector::xy(1.8, 0.1)), 1);
        assert_eq!(index.find_nearest(&Vector::xy(0.3, 1.7)), 2);
        assert_eq!(index.find_nearest(&Vector::xy(2.4, 2.4)), 3);
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let locations = vec![Vector::xy(5.0, 0.0), Vector::xy(0.0, 5.0)];

        let index = SpatialIndex::new(&locations);

        assert_eq!(index.find_nearest(&locations[0]), 0);
        assert_eq!(index.find_nearest(&locations[1]), 1);
    }
}
