// Geometries module: Contains the geometric primitives used to place fibers in a cell
// This module provides circles, their unions, and the bounding box that frames a cell

// ======================== MODULE DECLARATIONS ========================
pub mod geometry2d;
pub mod geometry2d_bounding_box;

// Test modules
mod _tests_geometry2d;

// ======================== CORE GEOMETRY TRAITS & OBJECTS ========================
pub use geometry2d::Geometry2D; // trait - base trait for regions that classify subcell centers
// Geometry2D trait methods:
//   contains_point(&self, point: Vector2<f64>) -> bool       - checks if point is inside (boundary inclusive)
//   bounding_box(&self) -> BoundingBox2D                     - returns axis-aligned bounding box
//   center(&self) -> Vector2<f64>                            - returns geometric center

pub use geometry2d::{
    Circle,      // struct - circular fiber cross-section
    FiberLayout, // struct - union of the fibers placed in one cell
};
// FiberLayout impl methods:
//   new(fibers: Vec<Circle>) -> Self                         - layout from explicit circles
//   uniform(centers, radius) -> Self                         - equal-radius fibers at each center
//   add_fiber(&mut self, fiber: Circle)                      - appends a fiber
//   + all Geometry2D trait methods (contains_point is union membership)

// ======================== GEOMETRIC UTILITIES ========================
pub use geometry2d_bounding_box::BoundingBox2D; // struct - 2D axis-aligned bounding box
// BoundingBox2D impl methods:
//   new(min, max) -> Self / from_extent(width, height) -> Self
//   union(&self, other) -> BoundingBox2D
//   width / height / area / center / corners
//   subcell_center(&self, row, col, ng, nb) -> Vector2<f64>  - center of a subcell of an ng x nb split
