// Grid module: Contains the rectangular material-identifier raster and its pairing with derived properties
// Every other module produces or consumes these types

// ======================== MODULE DECLARATIONS ========================
pub mod grid2d;
pub mod microstructure;

// Test modules
mod _tests_grid2d;

// ======================== CORE DATA MODEL ========================
pub use grid2d::Grid; // struct - NG x NB raster of material identifiers backed by nalgebra::DMatrix
// Grid impl methods:
//   filled(ng, nb, id) -> Result<Grid, RucError>           - uniform grid, rejects zero dimensions
//   from_rows(rows: Vec<Vec<MaterialId>>) -> Result<Grid, RucError> - rejects empty and ragged input
//   nb(&self) -> usize / ng(&self) -> usize                - column count / row count
//   get(&self, row, col) -> Option<MaterialId>             - bounds-checked access
//   row(&self, row) -> impl Iterator<Item = MaterialId>    - iterate one row
//   to_rows(&self) -> Vec<Vec<MaterialId>>                 - nested row vectors
//   count(&self, id) -> usize                              - subcells holding id
//   column_count(&self, col, id) -> usize                  - subcells in one column holding id
//   flip_vertical / flip_horizontal(&self) -> Grid         - mirror rows / columns
//   hstack / vstack(&self, other) -> Result<Grid, RucError> - concatenate grids

pub use microstructure::Microstructure; // struct - grid plus its MicrostructureProperties
