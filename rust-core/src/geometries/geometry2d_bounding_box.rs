// 2D bounding box module: Contains the axis-aligned box used as the real-valued extent of a cell
// Synthesizers size a cell as a bounding box first and derive integer subcell counts from it

use nalgebra::Vector2;

/// 2D axis-aligned bounding box
///
/// Represents a rectangular region in 2D space defined by minimum and maximum corners.
/// In grid coordinates `x` runs along the columns (beta) and `y` along the rows (gamma).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum corner
    pub min: Vector2<f64>,
    /// Maximum corner
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum corners
    ///
    /// # Panics
    /// This function will panic in debug mode if min coordinates are greater than max coordinates
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y,
                     "Minimum coordinates must be less than or equal to maximum coordinates");
        Self { min, max }
    }

    /// Create a box anchored at the origin with the given width and height
    pub fn from_extent(width: f64, height: f64) -> Self {
        Self::new(Vector2::zeros(), Vector2::new(width, height))
    }

    /// Compute the union of this bounding box with another
    pub fn union(&self, other: &BoundingBox2D) -> BoundingBox2D {
        BoundingBox2D {
            min: Vector2::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
            ),
            max: Vector2::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
            ),
        }
    }

    /// Width of the box (x-dimension)
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box (y-dimension)
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) / 2.0
    }

    /// The four corners, counter-clockwise from `min`
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    /// Center of subcell `(row, col)` when the box is split into `ng x nb` equal subcells
    pub fn subcell_center(&self, row: usize, col: usize, ng: usize, nb: usize) -> Vector2<f64> {
        let dx = self.width() / nb as f64;
        let dy = self.height() / ng as f64;
        Vector2::new(
            self.min.x + (col as f64 + 0.5) * dx,
            self.min.y + (row as f64 + 0.5) * dy,
        )
    }
}
