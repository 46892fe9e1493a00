//! Seed-point layout
//!
//! Turns a [`MapConfig`] into the finite set of distinct seed points the
//! Voronoi provider is invoked with. The plain grid is fully
//! deterministic; the jittered grid displaces every point with a seeded
//! RNG, so the same configuration always reproduces the same map.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{MapConfig, SeedStrategy};
use crate::vector::Vector;

/// Lays out the seed points for one generation run.
pub(crate) fn seed_points(config: &MapConfig) -> Vec<Vector> {
    let points = match config.strategy() {
        SeedStrategy::Grid => grid(config.size()),
        SeedStrategy::JitteredGrid { jitter } => {
            jittered_grid(config.size(), jitter, config.seed())
        }
    };
    distinct(points)
}

/// Drops points that collapse onto an earlier one under the fixed-precision
/// rounding, keeping the first occurrence and the overall order. The Voronoi
/// provider requires distinct input points.
fn distinct(points: Vec<Vector>) -> Vec<Vector> {
    let mut seen = HashSet::with_capacity(points.len());
    points.into_iter().filter(|p| seen.insert(p.clone())).collect()
}

/// The integer lattice `(x, y)` for `0 <= x, y < size`, in x-major order.
/// Cell indices follow this order.
fn grid(size: usize) -> Vec<Vector> {
    let mut points = Vec::with_capacity(size * size);
    for x in 0..size {
        for y in 0..size {
            points.push(Vector::xy(x as f64, y as f64));
        }
    }
    points
}

/// Grid points displaced per axis by an offset from `(-jitter, jitter)`,
/// clamped into the map boundary.
fn jittered_grid(size: usize, jitter: f64, seed: u32) -> Vec<Vector> {
    if jitter <= 0.0 {
        return grid(size);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    let bound = size as f64;
    let mut points = Vec::with_capacity(size * size);
    for x in 0..size {
        for y in 0..size {
            let dx: f64 = rng.gen_range(-jitter..jitter);
            let dy: f64 = rng.gen_range(-jitter..jitter);
            points.push(Vector::xy(
                (x as f64 + dx).clamp(0.0, bound),
                (y as f64 + dy).clamp(0.0, bound),
            ));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: usize, strategy: SeedStrategy, seed: u32) -> MapConfig {
        MapConfig::builder()
            .size(size)
            .unwrap()
            .seed(seed)
            .strategy(strategy)
            .unwrap()
            .build()
    }

    #[test]
    fn test_grid_order_and_count() {
        let points = seed_points(&config(2, SeedStrategy::Grid, 0));
        assert_eq!(
            points,
            vec![
                Vector::xy(0.0, 0.0),
                Vector::xy(0.0, 1.0),
                Vector::xy(1.0, 0.0),
                Vector::xy(1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_jittered_grid_is_deterministic_per_seed() {
        let strategy = SeedStrategy::JitteredGrid { jitter: 0.3 };
        let a = seed_points(&config(5, strategy, 42));
        let b = seed_points(&config(5, strategy, 42));
        let c = seed_points(&config(5, strategy, 43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_jittered_points_stay_near_their_lattice_cell() {
        let strategy = SeedStrategy::JitteredGrid { jitter: 0.4 };
        let points = seed_points(&config(6, strategy, 7));
        let lattice = seed_points(&config(6, SeedStrategy::Grid, 7));
        assert_eq!(points.len(), lattice.len());
        for (moved, base) in points.iter().zip(lattice.iter()) {
            assert!((moved.x() - base.x()).abs() < 0.5);
            assert!((moved.y() - base.y()).abs() < 0.5);
            assert!(moved.x() >= 0.0 && moved.x() <= 6.0);
            assert!(moved.y() >= 0.0 && moved.y() <= 6.0);
        }
    }

    #[test]
    fn test_zero_jitter_reduces_to_the_grid() {
        let points = seed_points(&config(3, SeedStrategy::JitteredGrid { jitter: 0.0 }, 9));
        assert_eq!(points, seed_points(&config(3, SeedStrategy::Grid, 9)));
    }

    #[test]
    fn test_coinciding_points_keep_the_first_occurrence() {
        let points = distinct(vec![
            Vector::xy(1.0, 2.0),
            Vector::xy(1.00000000004, 2.0),
            Vector::xy(1.5, 2.0),
        ]);
        assert_eq!(points, vec![Vector::xy(1.0, 2.0), Vector::xy(1.5, 2.0)]);
    }
}
