// Mask analysis: recovers volume fraction and effective fiber radius from an arbitrary raster

use std::f64::consts::PI;

use log::debug;

use crate::analysis::labeling::{label_components, Component};
use crate::analysis::properties::MicrostructureProperties;
use crate::grid::Grid;
use crate::materials::MaterialId;

/// Fraction of subcells equal to `fiber`
pub fn volume_fraction(grid: &Grid, fiber: MaterialId) -> f64 {
    grid.count(fiber) as f64 / grid.len() as f64
}

/// Components of `fiber` cells whose extent stays clear of the grid border.
///
/// A component touching any edge is a fiber cut by the periodic boundary and
/// does not show its full cross-section.
pub fn interior_fibers(grid: &Grid, fiber: MaterialId) -> Vec<Component> {
    label_components(grid, fiber)
        .into_iter()
        .filter(|c| !c.bounds.touches_border(grid.ng(), grid.nb()))
        .collect()
}

/// Radius of a circle with the same area as the component
pub fn equivalent_radius(component: &Component) -> f64 {
    let diameter = 2.0 * (component.area as f64 / PI).sqrt();
    diameter / 2.0
}

/// Mean equivalent radius over the interior fibers, `None` when there are none
pub fn mean_interior_radius(grid: &Grid, fiber: MaterialId) -> Option<f64> {
    let fibers = interior_fibers(grid, fiber);
    if fibers.is_empty() {
        return None;
    }
    let total: f64 = fibers.iter().map(equivalent_radius).sum();
    Some(total / fibers.len() as f64)
}

/// Half the number of fiber cells in column `NB / 2`.
///
/// This is the radius synthesizers report: every generated cell has a fiber
/// centred on that column. `None` when the column holds no fiber.
pub fn central_column_radius(grid: &Grid, fiber: MaterialId) -> Option<f64> {
    match grid.column_count(grid.nb() / 2, fiber) {
        0 => None,
        cells => Some(cells as f64 / 2.0),
    }
}

/// Derive volume fraction, mean fiber radius and dimensions from a grid.
///
/// Never fails: a grid without a measurable interior fiber reports `radius: None`.
pub fn analyze(grid: &Grid, fiber: MaterialId, matrix: MaterialId) -> MicrostructureProperties {
    let props = MicrostructureProperties {
        volume_fraction: volume_fraction(grid, fiber),
        radius: mean_interior_radius(grid, fiber),
        nb: grid.nb(),
        ng: grid.ng(),
        fiber,
        matrix,
    };
    debug!(
        "analyzed {}x{} grid: VF={:.4}, R={:?}",
        props.ng, props.nb, props.volume_fraction, props.radius
    );
    props
}

/// Same as [`analyze`] without component labeling; `radius` is left undefined.
pub fn analyze_volume_fraction(grid: &Grid, fiber: MaterialId, matrix: MaterialId) -> MicrostructureProperties {
    MicrostructureProperties {
        volume_fraction: volume_fraction(grid, fiber),
        radius: None,
        nb: grid.nb(),
        ng: grid.ng(),
        fiber,
        matrix,
    }
}

/// Properties reported for a freshly synthesized grid (radius read from the central column)
pub fn synthesized_properties(grid: &Grid, fiber: MaterialId, matrix: MaterialId) -> MicrostructureProperties {
    MicrostructureProperties {
        radius: central_column_radius(grid, fiber),
        ..analyze_volume_fraction(grid, fiber, matrix)
    }
}
