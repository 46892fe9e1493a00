//! # Polygon Map Graph
//!
//! Voronoi-based polygonal map graphs for procedural world generation.
//!
//! The crate seeds a point set, computes its Voronoi diagram, clips the
//! diagram to a square map boundary and assembles the result into a graph
//! of cells, corners and edges with full bidirectional adjacency. Terrain
//! passes (elevation, moisture, rivers, biomes) run on top of the graph
//! and write their results into its fields.
//!
//! ## Quick Start
//!
//! ```
//! use polygon_map_graph::{MapConfig, MapGraph, SeedStrategy};
//!
//! let config = MapConfig::builder()
//!     .size(8)
//!     .unwrap()
//!     .seed(42)
//!     .strategy(SeedStrategy::JitteredGrid { jitter: 0.3 })
//!     .unwrap()
//!     .build();
//!
//! let graph = MapGraph::generate(config).unwrap();
//!
//! for center in graph.centers() {
//!     println!(
//!         "cell {} has {} corners and {} neighbors",
//!         center.index,
//!         center.corners.len(),
//!         center.neighbors.len()
//!     );
//! }
//! ```
//!
//! ## Features
//!
//! - `spatial-index` (enabled by default): k-d tree lookup of the cell
//!   nearest to a position via [`MapGraph::find_center_at`]
//! - `serde`: `Serialize`/`Deserialize` implementations for the
//!   configuration and graph element types

// Modules
pub mod config;
pub mod error;
pub mod graph;
pub mod vector;
pub mod voronoi;

mod generation;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use config::{MapConfig, MapConfigBuilder, SeedStrategy};
pub use error::{MapGenError, Result};
pub use graph::{Biome, Center, Corner, Edge, MapGraph};
pub use vector::Vector;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;
