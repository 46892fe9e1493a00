//! Fixed-precision position vectors
//!
//! Coordinates are rounded to ten decimal places whenever they enter a
//! [`Vector`], so vectors reached through different floating-point paths
//! but describing the same position compare equal and hash identically.
//! Corner deduplication in the graph builder relies on this.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{MapGenError, Result};

/// Number of decimal places kept by [`Vector`] coordinates.
pub const PRECISION: u32 = 10;

const ROUNDING_SCALE: f64 = 1e10;

/// Rounds a coordinate to [`PRECISION`] decimal places.
/// Negative zero is normalized so bit-level equality matches numeric equality.
fn round_coord(value: f64) -> f64 {
    let rounded = (value * ROUNDING_SCALE).round() / ROUNDING_SCALE;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// An n-dimensional position or displacement with fixed-precision coordinates.
///
/// The map graph only uses two dimensions, but the type itself is
/// dimension-agnostic. Every write path rounds to [`PRECISION`] decimal
/// places, which keeps equality, hashing and ordering stable under
/// floating-point noise.
///
/// Arithmetic between vectors of differing dimension fails with
/// [`MapGenError::DimensionMismatch`] rather than truncating or padding.
///
/// # Example
///
/// ```
/// use polygon_map_graph::Vector;
///
/// let a = Vector::xy(0.5, 1.0);
/// let b = Vector::xy(0.25, 0.5);
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum, Vector::xy(0.75, 1.5));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Creates a vector of the given dimension with all coordinates zero.
    pub fn zeros(dim: usize) -> Self {
        Vector {
            data: vec![0.0; dim],
        }
    }

    /// Creates a vector from explicit coordinates, rounding each one.
    pub fn new(coords: &[f64]) -> Self {
        Vector {
            data: coords.iter().map(|&c| round_coord(c)).collect(),
        }
    }

    /// Creates a two-dimensional vector.
    pub fn xy(x: f64, y: f64) -> Self {
        Vector::new(&[x, y])
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Returns the coordinate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for this vector's dimension.
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.data[index]
    }

    /// Sets the coordinate at `index`, applying the fixed-precision rounding.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for this vector's dimension.
    #[inline]
    pub fn set(&mut self, index: usize, value: f64) {
        self.data[index] = round_coord(value);
    }

    /// Returns the first coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Returns the second coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Returns the squared Euclidean length.
    pub fn squared_length(&self) -> f64 {
        self.data.iter().map(|c| c * c).sum()
    }

    /// Component-wise sum of two vectors.
    ///
    /// # Returns
    ///
    /// The rounded sum, or [`MapGenError::DimensionMismatch`] when the
    /// dimensions differ.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_dim(other)?;
        let coords: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Vector::new(&coords))
    }

    /// Component-wise difference of two vectors.
    ///
    /// # Returns
    ///
    /// The rounded difference, or [`MapGenError::DimensionMismatch`] when
    /// the dimensions differ.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.check_dim(other)?;
        let coords: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Vector::new(&coords))
    }

    /// Multiplies every coordinate by `factor`, rounding the result.
    pub fn scale(&self, factor: f64) -> Vector {
        let coords: Vec<f64> = self.data.iter().map(|c| c * factor).collect();
        Vector::new(&coords)
    }

    /// Dot product of two vectors.
    ///
    /// # Returns
    ///
    /// The scalar product, or [`MapGenError::DimensionMismatch`] when the
    /// dimensions differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dim(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Squared Euclidean distance between two points.
    ///
    /// # Returns
    ///
    /// The squared distance, or [`MapGenError::DimensionMismatch`] when the
    /// dimensions differ.
    pub fn dist_squared(&self, other: &Vector) -> Result<f64> {
        self.check_dim(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum())
    }

    fn check_dim(&self, other: &Vector) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(MapGenError::DimensionMismatch {
                left: self.data.len(),
                right: other.data.len(),
            });
        }
        Ok(())
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.len().hash(state);
        for c in &self.data {
            c.to_bits().hash(state);
        }
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order used for deterministic sorting: squared length first, then
/// dimension, then coordinates lexicographically.
impl Ord for Vector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.squared_length()
            .total_cmp(&other.squared_length())
            .then_with(|| self.data.len().cmp(&other.data.len()))
            .then_with(|| {
                for (a, b) in self.data.iter().zip(other.data.iter()) {
                    let ord = a.total_cmp(b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            })
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
