// Constants

use crate::materials::MaterialId;

// Packing limits (maximum circle-packing density of the lattice)
pub const HEXAGONAL_PACKING_LIMIT: f64 = 0.906_899_682_117_108_9; // pi / (2 * sqrt(3))
pub const SQUARE_PACKING_LIMIT: f64 = std::f64::consts::FRAC_PI_4; // pi / 4

// Geometry
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub const SUBCELL_MARGIN: f64 = 1.05; // Growth factor when the requested width cannot hold a fiber
pub const MAX_SUBCELLS: usize = 4096; // Largest subcell count along either axis of a synthesized cell

// *RUC format
pub const RUC_MARKER: &str = "*RUC";
pub const MODEL_KEY: &str = "MOD";
pub const ARCHID_KEY: &str = "ARCHID";
pub const CANONICAL_MODEL: u32 = 202;
pub const SUPPORTED_ARCHETYPE: u32 = 99;
pub const SUPPORTED_DIMENSION: u32 = 2;
pub const CONTINUATION_MARKER: char = '&';
pub const WRAPPED_ITEMS_PER_LINE: usize = 20; // List items per physical line in wrapped *RUC output

// Default material identifiers
pub const DEFAULT_FIBER_ID: MaterialId = 1;
pub const DEFAULT_MATRIX_ID: MaterialId = 2;
