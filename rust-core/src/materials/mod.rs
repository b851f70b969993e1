// Materials module: Contains the material identifiers of a two-phase composite
// This module provides the fiber/matrix identifier pair used by synthesis, analysis and the codecs

// ======================== MODULE DECLARATIONS ========================
pub mod material;

// ======================== MATERIAL IDENTIFIERS ========================
pub use material::{
    MaterialId,   // type - integer material identifier stored in every subcell
    MaterialPair, // struct - fiber (F) and matrix (M) identifiers of a two-phase microstructure
};
