use nalgebra::Vector2;

use crate::geometries::geometry2d_bounding_box::BoundingBox2D;

/// Base trait for 2D regions used to classify subcell centers
pub trait Geometry2D: std::fmt::Debug {
    /// Check if a point is inside the region (boundary inclusive)
    fn contains_point(&self, point: Vector2<f64>) -> bool;

    /// Get the bounding box of the region
    fn bounding_box(&self) -> BoundingBox2D;

    /// Get the center of the region
    fn center(&self) -> Vector2<f64>;
}

/// Circular fiber cross-section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Geometry2D for Circle {
    fn contains_point(&self, point: Vector2<f64>) -> bool {
        // Squared distances keep ties on the boundary exact
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D {
            min: self.center - Vector2::new(self.radius, self.radius),
            max: self.center + Vector2::new(self.radius, self.radius),
        }
    }

    fn center(&self) -> Vector2<f64> {
        self.center
    }
}

/// Union of the fiber cross-sections placed in one cell
#[derive(Debug, Clone, Default)]
pub struct FiberLayout {
    pub fibers: Vec<Circle>,
}

impl FiberLayout {
    pub fn new(fibers: Vec<Circle>) -> Self {
        Self { fibers }
    }

    /// Place fibers of a common radius at each center
    pub fn uniform<I>(centers: I, radius: f64) -> Self
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        Self {
            fibers: centers.into_iter().map(|c| Circle::new(c, radius)).collect(),
        }
    }

    pub fn add_fiber(&mut self, fiber: Circle) {
        self.fibers.push(fiber);
    }

    pub fn len(&self) -> usize {
        self.fibers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fibers.is_empty()
    }
}

impl Geometry2D for FiberLayout {
    fn contains_point(&self, point: Vector2<f64>) -> bool {
        self.fibers.iter().any(|f| f.contains_point(point))
    }

    fn bounding_box(&self) -> BoundingBox2D {
        let mut boxes = self.fibers.iter().map(|f| f.bounding_box());
        match boxes.next() {
            Some(first) => boxes.fold(first, |acc, b| acc.union(&b)),
            None => BoundingBox2D::new(Vector2::zeros(), Vector2::zeros()),
        }
    }

    fn center(&self) -> Vector2<f64> {
        if self.fibers.is_empty() {
            return Vector2::zeros();
        }
        let sum: Vector2<f64> = self.fibers.iter().map(|f| f.center).sum();
        sum / self.fibers.len() as f64
    }
}
