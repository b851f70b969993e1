// Square packing synthesizers: one fiber centered in a square cell

use std::f64::consts::PI;

use log::debug;

use crate::analysis::synthesized_properties;
use crate::error::RucError;
use crate::geometries::BoundingBox2D;
use crate::grid::Microstructure;
use crate::materials::MaterialPair;
use crate::synthesis::discretization::{force_even, rasterize, round_count, widen_for_radius};
use crate::synthesis::packing::PackingFamily;
use crate::synthesis::packing_validations::{
    validate_even_width, validate_extent, validate_radius, validate_resolved,
    validate_subcell_limit, validate_subcells, validate_volume_fraction,
};

const FAMILY: PackingFamily = PackingFamily::Square;

/// Square pack from a volume fraction and a subcell count.
///
/// The count is forced even and used for both axes; the radius follows from
/// `pi * R^2 = VF * nx^2`.
pub fn square_pack_vf_nb(
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
    let radius = ((nx * nx) as f64 * volume_fraction / PI).sqrt();
    debug!(
        "square VF={} NB={}: {} x {} subcells, radius {:.4}",
        volume_fraction, nb, nx, nx, radius
    );

    Ok(square_cell(nx as f64, nx, radius, materials))
}

/// Square pack from a volume fraction and a fiber radius in subcells.
///
/// The cell side `sqrt(pi * R^2 / VF)` is rounded to the subcell count.
pub fn square_pack_vf_radius(
    volume_fraction: f64,
    radius: f64,
    materials: MaterialPair,
) -> Result<Microstructure, RucError> {
    validate_volume_fraction(volume_fraction, FAMILY)?;
    validate_radius(radius)?;
    materials.validate()?;

    let side = (PI * radius * radius / volume_fraction).sqrt();
    validate_extent(side, "beta")?;
    let subcells = round_count(side);
    validate_resolved(subcells, subcells, radius)?;
    debug!(
        "square VF={} R={}: side {:.4}, {} x {} subcells",
        volume_fraction, radius, side, subcells, subcells
    );

    Ok(square_cell(side, subcells, radius, materials))
}

/// Square pack from a subcell count and a fiber radius in subcells.
///
/// Widening and evenness follow the hexagonal subcell/radius variant.
pub fn square_pack_nb_radius(
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
    debug!("square NB={} R={}: {} x {} subcells", nb, radius, nx, nx);

    Ok(square_cell(nx as f64, nx, radius, materials))
}

/// Classify a `side x side` cell split into `subcells x subcells` subcells
fn square_cell(
    side: f64,
    subcells: usize,
    radius: f64,
    materials: MaterialPair,
) -> Microstructure {
    let cell = BoundingBox2D::from_extent(side, side);
    let grid = rasterize(&cell, subcells, subcells, &FAMILY.fiber_layout(&cell, radius), materials);
    let properties = synthesized_properties(&grid, materials.fiber, materials.matrix);
    Microstructure::new(grid, properties)
}
