//! Complete workflow demonstration for polygon_map_graph

use polygon_map_graph::*;

fn main() -> Result<()> {
    println!("=== polygon_map_graph Demo ===\n");

    // Step 1: Configure the map
    println!("Step 1: Configuring map...");
    let config = MapConfig::builder()
        .size(16)?
        .seed(12345)
        .strategy(SeedStrategy::JitteredGrid { jitter: 0.3 })?
        .build();

    println!("  Seed: {}", config.seed());
    println!("  Size: {0}x{0}", config.size());

    // Step 2: Generate the graph
    println!("\nStep 2: Generating graph...");
    let mut graph = MapGraph::generate(config)?;
    println!("  Cells: {}", graph.center_count());
    println!("  Corners: {}", graph.corner_count());
    println!("  Edges: {}", graph.edge_count());

    // Step 3: Inspect the structure
    println!("\nStep 3: Structure:");
    let total_neighbors: usize = graph.centers().iter().map(|c| c.neighbors.len()).sum();
    let total_corners: usize = graph.centers().iter().map(|c| c.corners.len()).sum();
    let cell_count = graph.center_count() as f64;
    println!("  Average neighbors per cell: {:.2}", total_neighbors as f64 / cell_count);
    println!("  Average corners per cell: {:.2}", total_corners as f64 / cell_count);

    let border_cells = graph.centers().iter().filter(|c| c.map_border).count();
    let border_corners = graph.corners().iter().filter(|c| c.map_border).count();
    println!("  Boundary cells: {}", border_cells);
    println!("  Boundary corners: {}", border_corners);

    // Step 4: Run a toy terrain pass
    println!("\nStep 4: Toy terrain pass (water ring):");
    let water_ids: Vec<usize> = graph
        .centers()
        .iter()
        .filter(|c| c.map_border)
        .map(|c| c.index)
        .collect();
    for id in &water_ids {
        if let Some(center) = graph.center_mut(*id) {
            center.water = true;
            center.ocean = true;
            center.biome = Biome::Ocean;
        }
    }
    let ocean = graph.centers().iter().filter(|c| c.ocean).count();
    println!("  Marked {} ocean cells", ocean);

    // Step 5: Query the spatial index
    #[cfg(feature = "spatial-index")]
    {
        println!("\nStep 5: Spatial queries:");
        let position = Vector::xy(4.5, 7.2);
        let cell_id = graph.find_center_at(&position);
        let cell = graph.center(cell_id).unwrap();
        println!("  Position {} -> cell {} at {}", position, cell_id, cell.location);
        println!("  Cells within 2 hops: {}", graph.centers_within_hops(cell_id, 2).len());
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
