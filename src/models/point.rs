//! Planar point type for Euclidean instances.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Draws `n` points uniformly from the square `[0, side) × [0, side)`.
    ///
    /// Returns an empty vector when `side` is not a positive finite number.
    pub fn random_square<R: Rng>(n: usize, side: f64, rng: &mut R) -> Vec<Point> {
        if !side.is_finite() || side <= 0.0 {
            return Vec::new();
        }
        (0..n)
            .map(|_| Point::new(rng.random_range(0.0..side), rng.random_range(0.0..side)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_random_square_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = Point::random_square(50, 100.0, &mut rng);
        assert_eq!(points.len(), 50);
        for p in &points {
            assert!((0.0..100.0).contains(&p.x()));
            assert!((0.0..100.0).contains(&p.y()));
        }
    }

    #[test]
    fn test_random_square_invalid_side() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Point::random_square(5, 0.0, &mut rng).is_empty());
        assert!(Point::random_square(5, f64::NAN, &mut rng).is_empty());
    }

    #[test]
    fn test_random_square_reproducible() {
        let a = Point::random_square(10, 100.0, &mut StdRng::seed_from_u64(7));
        let b = Point::random_square(10, 100.0, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
