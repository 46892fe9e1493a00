//! Map cells

use crate::vector::Vector;

/// Biome classification written by downstream terrain passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Biome {
    #[default]
    Ocean,
    Marsh,
    Ice,
    Lake,
    Beach,
    Snow,
    Tundra,
    Bare,
    Scorched,
    Taiga,
    Shrubland,
    TemperateDesert,
    TemperateRainForest,
    TemperateDeciduousForest,
    Grassland,
    TropicalRainForest,
    TropicalSeasonalForest,
    SubtropicalDesert,
}

/// One map cell: a seed point together with its graph relations.
///
/// The builder fills `index`, `location`, `map_border` and the three
/// relation sets; all terrain fields start at their defaults and are
/// meant to be written by later pipeline stages through
/// [`MapGraph::center_mut`](crate::MapGraph::center_mut).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Center {
    pub index: usize,
    pub location: Vector,
    pub water: bool,
    pub ocean: bool,
    pub coast: bool,
    /// Whether the seed point itself lies on the map boundary.
    pub map_border: bool,
    pub biome: Biome,
    pub elevation: f64,
    pub moisture: f64,
    /// Centers sharing an edge with this one.
    pub neighbors: Vec<usize>,
    /// Edges bounding this cell.
    pub borders: Vec<usize>,
    /// Corners of this cell's polygon.
    pub corners: Vec<usize>,
}

impl Center {
    pub(crate) fn new(index: usize, location: Vector) -> Self {
        Center {
            index,
            location,
            water: false,
            ocean: false,
            coast: false,
            map_border: false,
            biome: Biome::default(),
            elevation: 0.0,
            moisture: 0.0,
            neighbors: Vec::new(),
            borders: Vec::new(),
            corners: Vec::new(),
        }
    }
}
