//! Graph edges joining the Delaunay and Voronoi duals

use crate::vector::Vector;

/// One bisector that survived clipping, as a graph edge.
///
/// `d1`/`d2` are the two cells the edge separates (the Delaunay dual)
/// and `c1`/`c2` the two corners it runs between (the Voronoi primal).
/// The second cell and either corner may be absent for bisectors on the
/// hull of the diagram or cut off by the map boundary.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub index: usize,
    pub d1: usize,
    pub d2: Option<usize>,
    pub c1: Option<usize>,
    pub c2: Option<usize>,
    /// Midpoint between the two corners, present when both exist. Kept in
    /// step with corner smoothing.
    pub midpoint: Option<Vector>,
    /// Volume tag of the river running along this edge, zero for none.
    pub river_size: u32,
}
