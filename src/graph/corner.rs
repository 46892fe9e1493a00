//! Deduplicated cell-polygon vertices

use crate::vector::Vector;

/// One distinct Voronoi vertex of the map graph.
///
/// Vertices within the merge distance of each other collapse into a
/// single corner, so downstream passes can treat the corner set as free
/// of near-duplicates. River and watershed fields are written by the
/// river simulation, not by the builder.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corner {
    pub index: usize,
    pub location: Vector,
    pub water: bool,
    pub ocean: bool,
    pub coast: bool,
    /// Whether the corner lies on one of the four map boundary lines.
    pub map_border: bool,
    pub elevation: f64,
    pub moisture: f64,
    /// Volume tag of the river flowing through this corner, zero for none.
    pub river_size: u32,
    /// Adjacent corner with the lowest elevation, where water drains to.
    pub lowest_corner: Option<usize>,
    /// Border corner this corner's water eventually reaches.
    pub watershed: Option<usize>,
    pub watershed_size: u32,
    /// Centers whose polygons meet at this corner.
    pub touches: Vec<usize>,
    /// Edges radiating out of this corner.
    pub protrudes: Vec<usize>,
    /// Corners connected to this one by an edge.
    pub adjacent: Vec<usize>,
}

impl Corner {
    pub(crate) fn new(index: usize, location: Vector) -> Self {
        Corner {
            index,
            location,
            water: false,
            ocean: false,
            coast: false,
            map_border: false,
            elevation: 0.0,
            moisture: 0.0,
            river_size: 0,
            lowest_corner: None,
            watershed: None,
            watershed_size: 0,
            touches: Vec::new(),
            protrudes: Vec::new(),
            adjacent: Vec::new(),
        }
    }
}
