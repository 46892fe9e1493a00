//! Configuration for map-graph generation

use crate::error::{MapGenError, Result};

/// How seed points are laid out before the Voronoi diagram is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeedStrategy {
    /// The integer lattice `(x, y)` for `0 <= x, y < size`.
    Grid,
    /// The integer lattice with every point displaced by a random offset
    /// drawn from `(-jitter, jitter)` per axis. `jitter` must stay below
    /// `0.5` so no point crosses into a neighboring lattice cell.
    JitteredGrid { jitter: f64 },
}

/// Parameters for one generated map graph.
///
/// Built through [`MapConfig::builder`]; the builder validates sizes and
/// jitter and draws a random seed when none is given.
///
/// # Example
///
/// ```
/// use polygon_map_graph::{MapConfig, SeedStrategy};
///
/// let config = MapConfig::builder()
///     .size(16)
///     .unwrap()
///     .seed(42)
///     .strategy(SeedStrategy::JitteredGrid { jitter: 0.3 })
///     .unwrap()
///     .build();
/// assert_eq!(config.size(), 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapConfig {
    size: usize,
    seed: u32,
    strategy: SeedStrategy,
    improve_corners: bool,
}

impl MapConfig {
    /// Starts building a configuration with default values.
    pub fn builder() -> MapConfigBuilder {
        MapConfigBuilder::new()
    }

    /// Extent of the seed lattice and of the square map boundary
    /// `[0, size] x [0, size]`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Seed for the random parts of generation.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    pub fn strategy(&self) -> SeedStrategy {
        self.strategy
    }

    /// Whether corners are smoothed toward the centroid of their touching
    /// cells after the graph is built.
    #[inline]
    pub fn improve_corners(&self) -> bool {
        self.improve_corners
    }
}

/// Builder for [`MapConfig`].
#[derive(Debug, Clone)]
pub struct MapConfigBuilder {
    size: usize,
    seed: Option<u32>,
    strategy: SeedStrategy,
    improve_corners: bool,
}

impl MapConfigBuilder {
    pub fn new() -> Self {
        MapConfigBuilder {
            size: 32,
            seed: None,
            strategy: SeedStrategy::Grid,
            improve_corners: true,
        }
    }

    /// Sets the seed-lattice extent. Must be at least 1.
    pub fn size(mut self, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MapGenError::InvalidConfig(
                "map size must be at least 1".to_string(),
            ));
        }
        self.size = size;
        Ok(self)
    }

    /// Fixes the random seed. Without this, `build` draws one.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seeding strategy. Jitter must lie in `[0, 0.5)`.
    pub fn strategy(mut self, strategy: SeedStrategy) -> Result<Self> {
        if let SeedStrategy::JitteredGrid { jitter } = strategy {
            if !(0.0..0.5).contains(&jitter) {
                return Err(MapGenError::InvalidConfig(format!(
                    "jitter must lie in [0, 0.5), got {}",
                    jitter
                )));
            }
        }
        self.strategy = strategy;
        Ok(self)
    }

    /// Enables or disables the corner-smoothing pass.
    pub fn improve_corners(mut self, enabled: bool) -> Self {
        self.improve_corners = enabled;
        self
    }

    pub fn build(self) -> MapConfig {
        MapConfig {
            size: self.size,
            seed: self.seed.unwrap_or_else(rand::random),
            strategy: self.strategy,
            improve_corners: self.improve_corners,
        }
    }
}

impl Default for MapConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
