// Shared discretization: real-valued cell extents to integer subcell counts,
// and subcell-center classification against a fiber layout

use log::info;

use crate::config::SUBCELL_MARGIN;
use crate::geometries::{BoundingBox2D, Geometry2D};
use crate::grid::Grid;
use crate::materials::MaterialPair;
use crate::synthesis::packing::PackingFamily;

/// Drop an odd count to the even number below it
pub fn force_even(subcells: usize) -> usize {
    subcells - subcells % 2
}

/// Nearest subcell count for a non-negative extent, ties to even
pub fn round_count(extent: f64) -> usize {
    extent.round_ties_even().max(0.0) as usize
}

/// Even row count keeping an `nx`-wide cell at aspect sqrt(3)
pub fn hexagonal_rows(nx: usize) -> usize {
    2 * round_count(PackingFamily::Hexagonal.aspect_ratio() * nx as f64 / 2.0)
}

/// Grow `subcells` by the fixed margin when it cannot hold a fiber of `radius`
pub fn widen_for_radius(subcells: usize, radius: f64) -> usize {
    let diameter = 2.0 * radius;
    if subcells as f64 <= diameter {
        let widened = (SUBCELL_MARGIN * diameter) as usize;
        info!(
            "{} subcells cannot hold a fiber of radius {}; widening to {}",
            subcells, radius, widened
        );
        widened
    } else {
        subcells
    }
}

/// Split `cell` into `ng x nb` equal subcells and classify each subcell center.
///
/// Subcells whose center lies inside `region` (boundary inclusive) receive the
/// fiber id; all others keep the matrix id.
pub fn rasterize(
    cell: &BoundingBox2D,
    ng: usize,
    nb: usize,
    region: &dyn Geometry2D,
    materials: MaterialPair,
) -> Grid {
    Grid::from_fn(ng, nb, |row, col| {
        materials.classify(region.contains_point(cell.subcell_center(row, col, ng, nb)))
    })
}
