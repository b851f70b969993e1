// Analysis module: Contains property extraction from material-identifier grids
// This module recovers volume fraction and effective fiber radius from any raster, synthesized or decoded

// ======================== MODULE DECLARATIONS ========================
pub mod labeling;
pub mod mask_analyzer;
pub mod properties;

mod _tests_mask_analyzer;

// ======================== DERIVED PROPERTIES ========================
pub use properties::MicrostructureProperties; // struct - VF, R, NB, NG, F, M of a grid

// ======================== CONNECTED COMPONENTS ========================
pub use labeling::{
    Component,        // struct - area and pixel extent of one 8-connected component
    PixelBounds,      // struct - inclusive row/column extent, with touches_border()
    label_components, // fn(grid: &Grid, foreground: MaterialId) -> Vec<Component> - two-pass union-find labeling
};

// ======================== MASK ANALYSIS ========================
pub use mask_analyzer::{
    analyze,                 // fn(grid, F, M) -> MicrostructureProperties - VF plus mean interior fiber radius
    analyze_volume_fraction, // fn(grid, F, M) -> MicrostructureProperties - VF only, radius undefined
    central_column_radius,   // fn(grid, F) -> Option<f64> - half the fiber count of column NB/2
    equivalent_radius,       // fn(&Component) -> f64 - radius of the circle with the component's area
    interior_fibers,         // fn(grid, F) -> Vec<Component> - components clear of the border
    mean_interior_radius,    // fn(grid, F) -> Option<f64> - mean equivalent radius of interior fibers
    synthesized_properties,  // fn(grid, F, M) -> MicrostructureProperties - properties reported by synthesizers
    volume_fraction,         // fn(grid, F) -> f64 - fraction of fiber subcells
};
