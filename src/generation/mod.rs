//! Map generation pipeline
//!
//! Seeds the point set, runs the Voronoi provider, clips the diagram to
//! the map boundary and assembles the final graph.

mod builder;
mod points;

use std::time::Instant;

use crate::config::MapConfig;
use crate::error::Result;
use crate::graph::MapGraph;
use crate::voronoi::{Rect, VoronoiProvider};

use builder::GraphBuilder;

pub(crate) fn generate<P>(config: MapConfig, provider: &P) -> Result<MapGraph>
where
    P: VoronoiProvider,
{
    let start = Instant::now();

    // Step 1: Lay out the seed points
    let points = points::seed_points(&config);
    eprintln!(
        "[Graph] Seeded {} points (size {}, seed {})",
        points.len(),
        config.size(),
        config.seed()
    );

    // Step 2: Compute the Voronoi diagram
    let mut diagram = provider.compute(&points)?;
    eprintln!(
        "[Graph] Voronoi diagram has {} bisectors for {} sites",
        diagram.edges().len(),
        diagram.sites().len()
    );

    // Step 3: Clip every bisector to the map boundary
    let bounds = Rect::square(config.size() as f64);
    diagram.clip_to_bounds(&bounds)?;

    // Step 4: Assemble the dual graph
    let improve = config.improve_corners();
    let (centers, corners, edges) = GraphBuilder::new(config.size()).build(&diagram, improve)?;
    eprintln!(
        "[Graph] Built {} cells, {} corners, {} edges in {:?}",
        centers.len(),
        corners.len(),
        edges.len(),
        start.elapsed()
    );

    Ok(MapGraph::from_parts(config, centers, corners, edges))
}
