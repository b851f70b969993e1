// Hexagonal packing synthesizers
//
// The cell is a rectangle of aspect sqrt(3) holding fibers at its four corners
// and its center, so that tiling it reproduces a hexagonal fiber lattice.

use std::f64::consts::PI;

use log::debug;

use crate::analysis::synthesized_properties;
use crate::config::SQRT_3;
use crate::error::RucError;
use crate::geometries::{BoundingBox2D, FiberLayout};
use crate::grid::{Grid, Microstructure};
use crate::materials::MaterialPair;
use crate::synthesis::discretization::{
    force_even, hexagonal_rows, rasterize, round_count, widen_for_radius,
};
use crate::synthesis::packing::PackingFamily;
use crate::synthesis::packing_validations::{
    validate_even_width, validate_extent, validate_radius, validate_resolved,
    validate_subcell_limit, validate_subcells, validate_volume_fraction,
};

const FAMILY: PackingFamily = PackingFamily::Hexagonal;

/// Hexagonal pack from a volume fraction and a subcell count in the beta direction.
///
/// The column count is forced even and the row count follows from the sqrt(3)
/// aspect ratio. One quarter of the cell is classified and mirrored into the
/// other three quarters.
pub fn hexagonal_pack_vf_nb(
    volume_fraction: f64,
    nb: usize,
    materials: MaterialPair,
) -> Result<Microstructure, RucError> {
    validate_volume_fraction(volume_fraction, FAMILY)?;
    validate_subcells(nb)?;
    materials.validate()?;

    let nx = force_even(nb);
    validate_even_width(nx, nb)?;
    validate_subcell_limit(nx, "beta")?;
    let ny = hexagonal_rows(nx);
    validate_subcell_limit(ny, "gamma")?;

    // Two fibers per cell: 2 * pi * R^2 = VF * nx * ny
    let radius = (volume_fraction * (nx * ny) as f64 / (2.0 * PI)).sqrt();
    debug!(
        "hexagonal VF={} NB={}: {} x {} subcells, radius {:.4}",
        volume_fraction, nb, ny, nx, radius
    );

    let quarter = hexagonal_quarter_cell(nx / 2, ny / 2, radius, materials);
    let grid = mirror_quarter(&quarter)?;
    Ok(finish(grid, materials))
}

/// Hexagonal pack from a volume fraction and a fiber radius in subcells.
///
/// The lattice spacing is solved from VF and R; the cell is discretized at
/// roughly unit resolution by rounding its real extent.
pub fn hexagonal_pack_vf_radius(
    volume_fraction: f64,
    radius: f64,
    materials: MaterialPair,
) -> Result<Microstructure, RucError> {
    validate_volume_fraction(volume_fraction, FAMILY)?;
    validate_radius(radius)?;
    materials.validate()?;

    let spacing = (2.0 * PI * radius * radius / (volume_fraction * SQRT_3)).sqrt();
    let height = spacing * FAMILY.aspect_ratio();
    validate_extent(spacing, "beta")?;
    validate_extent(height, "gamma")?;
    let cell = BoundingBox2D::from_extent(spacing, height);
    let nb = round_count(cell.width());
    let ng = round_count(cell.height());
    validate_resolved(nb, ng, radius)?;
    debug!(
        "hexagonal VF={} R={}: spacing {:.4}, {} x {} subcells",
        volume_fraction, radius, spacing, ng, nb
    );

    let grid = rasterize(&cell, ng, nb, &FAMILY.fiber_layout(&cell, radius), materials);
    Ok(finish(grid, materials))
}

/// Hexagonal pack from a subcell count in the beta direction and a fiber radius.
///
/// A count that cannot hold the fiber diameter is widened by the fixed margin
/// before being forced even.
pub fn hexagonal_pack_nb_radius(
    nb: usize,
    radius: f64,
    materials: MaterialPair,
) -> Result<Microstructure, RucError> {
    validate_subcells(nb)?;
    validate_radius(radius)?;
    materials.validate()?;

    let widened = widen_for_radius(nb, radius);
    let nx = force_even(widened);
    validate_even_width(nx, widened)?;
    validate_subcell_limit(nx, "beta")?;
    let ny = hexagonal_rows(nx);
    validate_subcell_limit(ny, "gamma")?;
    debug!("hexagonal NB={} R={}: {} x {} subcells", nb, radius, ny, nx);

    let cell = BoundingBox2D::from_extent(nx as f64, ny as f64);
    let grid = rasterize(&cell, ny, nx, &FAMILY.fiber_layout(&cell, radius), materials);
    Ok(finish(grid, materials))
}

/// Lower-left quarter of a hexagonal cell: `qy` rows by `qx` columns of unit
/// subcells with fibers centered on its origin corner and its opposite corner.
pub fn hexagonal_quarter_cell(qx: usize, qy: usize, radius: f64, materials: MaterialPair) -> Grid {
    let quarter = BoundingBox2D::from_extent(qx as f64, qy as f64);
    let layout = FiberLayout::uniform([quarter.min, quarter.max], radius);
    rasterize(&quarter, qy, qx, &layout, materials)
}

/// Assemble a full cell from its quarter by mirroring across both mid-lines
pub fn mirror_quarter(quarter: &Grid) -> Result<Grid, RucError> {
    let top = quarter.hstack(&quarter.flip_horizontal())?;
    top.vstack(&top.flip_vertical())
}

fn finish(grid: Grid, materials: MaterialPair) -> Microstructure {
    let properties = synthesized_properties(&grid, materials.fiber, materials.matrix);
    Microstructure::new(grid, properties)
}
