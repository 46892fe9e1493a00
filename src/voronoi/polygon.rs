//! Winding and area helpers for closed cell polygons

use crate::vector::Vector;

/// Signed area of a closed polygon given as a vertex ring (the last
/// vertex connects back to the first). Positive for counter-clockwise
/// winding, negative for clockwise, zero for degenerate rings.
pub fn signed_area(points: &[Vector]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = &points[i];
        let b = &points[(i + 1) % points.len()];
        sum += a.x() * b.y() - b.x() * a.y();
    }
    sum / 2.0
}

/// Whether a vertex ring is wound clockwise.
pub(crate) fn is_clockwise(points: &[Vector]) -> bool {
    signed_area(points) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_area_counter_clockwise_square() {
        let ring = vec![
            Vector::xy(0.0, 0.0),
            Vector::xy(2.0, 0.0),
            Vector::xy(2.0, 2.0),
            Vector::xy(0.0, 2.0),
        ];
        assert_eq!(signed_area(&ring), 4.0);
        assert!(!is_clockwise(&ring));
    }

    #[test]
    fn test_signed_area_clockwise_triangle() {
        let ring = vec![
            Vector::xy(0.0, 0.0),
            Vector::xy(0.0, 1.0),
            Vector::xy(1.0, 0.0),
        ];
        assert_eq!(signed_area(&ring), -0.5);
        assert!(is_clockwise(&ring));
    }

    #[test]
    fn test_degenerate_rings_have_zero_area() {
        assert_eq!(signed_area(&[]), 0.0);
        assert_eq!(
            signed_area(&[Vector::xy(1.0, 1.0), Vector::xy(2.0, 2.0)]),
            0.0
        );
    }
}
