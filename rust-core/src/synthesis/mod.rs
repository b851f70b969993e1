// Synthesis module: Contains the parametric generators of fiber-packing unit cells
// This module builds grids for hexagonal and square packings from volume fraction, radius and subcell count

// ======================== MODULE DECLARATIONS ========================
pub mod discretization;
pub mod hexagonal;
pub mod packing;
pub mod packing_validations;
pub mod request;
pub mod square;

mod _tests_square;

// ======================== PACKING FAMILIES ========================
pub use packing::PackingFamily; // enum - Hexagonal (corner + center fibers, aspect sqrt(3)) or Square (one centered fiber)
// PackingFamily impl methods:
//   packing_limit(&self) -> f64                              - exclusive upper bound on VF
//   fibers_per_cell(&self) -> usize                          - 2 (hexagonal) or 1 (square)
//   aspect_ratio(&self) -> f64                               - cell height / width
//   fiber_centers(&self, cell: &BoundingBox2D) -> Vec<Vector2<f64>>
//   fiber_layout(&self, cell: &BoundingBox2D, radius: f64) -> FiberLayout

// ======================== REQUESTS ========================
pub use request::{
    GeometryRequest,   // struct - family + parameter combination + material ids
    PackingParameters, // enum - VF & subcells, VF & radius, or subcells & radius
    synthesize,        // fn(&GeometryRequest) -> Result<Microstructure, RucError> - dispatches to the six generators
};

// ======================== GENERATORS ========================
pub use hexagonal::{
    hexagonal_pack_nb_radius, // fn(nb, radius, materials) -> Result<Microstructure, RucError>
    hexagonal_pack_vf_nb,     // fn(vf, nb, materials) -> Result<Microstructure, RucError> - quarter cell mirrored
    hexagonal_pack_vf_radius, // fn(vf, radius, materials) -> Result<Microstructure, RucError>
    hexagonal_quarter_cell,   // fn(qx, qy, radius, materials) -> Grid - quarter of a hexagonal cell
    mirror_quarter,           // fn(&Grid) -> Result<Grid, RucError> - mirror a quarter into a full cell
};

pub use square::{
    square_pack_nb_radius, // fn(nb, radius, materials) -> Result<Microstructure, RucError>
    square_pack_vf_nb,     // fn(vf, nb, materials) -> Result<Microstructure, RucError>
    square_pack_vf_radius, // fn(vf, radius, materials) -> Result<Microstructure, RucError>
};

// ======================== DISCRETIZATION ========================
pub use discretization::{
    force_even,       // fn(usize) -> usize
    hexagonal_rows,   // fn(nx) -> usize - even row count for aspect sqrt(3)
    rasterize,        // fn(cell, ng, nb, region, materials) -> Grid - classify subcell centers
    round_count,      // fn(f64) -> usize - ties to even
    widen_for_radius, // fn(nb, radius) -> usize - fixed-margin widening
};
