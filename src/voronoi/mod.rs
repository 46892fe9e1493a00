//! Voronoi cell support and boundary clipping
//!
//! The types here carry a Voronoi diagram from a provider to the graph
//! builder: [`Site`]s accumulate the bisector [`Edge`]s the provider
//! discovers, [`Rect`] is the map boundary every cell is clipped to, and
//! [`Diagram`] bundles the two collections and runs the clipping pass.
//! The sweep algorithm itself is behind the [`VoronoiProvider`] trait;
//! [`DelaunayProvider`] is the built-in implementation.

mod delaunay;
mod edge;
mod orientation;
mod polygon;
mod rect;
mod site;

pub use delaunay::DelaunayProvider;
pub use edge::Edge;
pub use orientation::Orientation;
pub use polygon::signed_area;
pub use rect::Rect;
pub use site::Site;

use crate::error::{MapGenError, Result};
use crate::vector::Vector;

/// Squared distance below which two Voronoi vertices collapse into one
/// corner. A clipped edge shorter than this is degenerate and dropped.
pub(crate) const VERTEX_MERGE_DISTANCE_SQ: f64 = 1e-6;

/// Squared distance below which two ring points count as the same point
/// while a cell polygon is stitched together.
pub(crate) const CONNECT_DISTANCE_SQ: f64 = 2.5e-5;

/// How far off a boundary line a coordinate may sit and still count as
/// lying on it.
pub(crate) const BORDER_EPSILON: f64 = 1e-6;

/// Computes a Voronoi diagram for a set of seed points.
///
/// Implementations must return a [`Diagram`] honoring its index
/// contract: site `i` corresponds to input point `i`, edge positions
/// match [`Edge::index`], and every edge is registered with the sites it
/// separates. Failures inside a provider are reported as
/// [`MapGenError::GenerationFailed`].
pub trait VoronoiProvider {
    fn compute(&self, points: &[Vector]) -> Result<Diagram>;
}

/// An unclipped Voronoi diagram: one [`Site`] per seed point plus the
/// bisector [`Edge`]s between them.
#[derive(Debug, Clone)]
pub struct Diagram {
    sites: Vec<Site>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Bundles provider output into a diagram.
    ///
    /// `edges[i].index()` must equal `i`, and every edge index registered
    /// with a site must point into `edges`; [`Diagram::clip_to_bounds`]
    /// rejects diagrams violating the latter.
    pub fn new(sites: Vec<Site>, edges: Vec<Edge>) -> Self {
        Diagram { sites, edges }
    }

    #[inline]
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Clips every edge to `bounds` and resolves every site's cell
    /// polygon. Running it again on the same diagram is a no-op for the
    /// regions, which stay memoized.
    pub fn clip_to_bounds(&mut self, bounds: &Rect) -> Result<()> {
        for site in &self.sites {
            for &ei in site.edge_indices() {
                if ei >= self.edges.len() {
                    return Err(MapGenError::InconsistentGraph(format!(
                        "site {} references unknown edge {}",
                        site.index(),
                        ei
                    )));
                }
            }
        }
        for edge in &mut self.edges {
            edge.clip_to_bounds(bounds)?;
        }
        for site in &mut self.sites {
            site.resolve_region(&self.edges, bounds)?;
        }
        Ok(())
    }
}
