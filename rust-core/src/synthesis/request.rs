use serde::{Deserialize, Serialize};

use crate::error::RucError;
use crate::grid::Microstructure;
use crate::materials::MaterialPair;
use crate::synthesis::hexagonal::{
    hexagonal_pack_nb_radius, hexagonal_pack_vf_nb, hexagonal_pack_vf_radius,
};
use crate::synthesis::packing::PackingFamily;
use crate::synthesis::square::{square_pack_nb_radius, square_pack_vf_nb, square_pack_vf_radius};

/// The two physical parameters that define a cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PackingParameters {
    VolumeFractionAndSubcells { volume_fraction: f64, subcells: usize },
    VolumeFractionAndRadius { volume_fraction: f64, radius: f64 },
    SubcellsAndRadius { subcells: usize, radius: f64 },
}

/// One synthesis call: packing family, parameter combination and material ids
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryRequest {
    pub family: PackingFamily,
    pub parameters: PackingParameters,
    pub materials: MaterialPair,
}

impl GeometryRequest {
    pub fn new(family: PackingFamily, parameters: PackingParameters, materials: MaterialPair) -> Self {
        Self {
            family,
            parameters,
            materials,
        }
    }

    pub fn hexagonal(parameters: PackingParameters, materials: MaterialPair) -> Self {
        Self::new(PackingFamily::Hexagonal, parameters, materials)
    }

    pub fn square(parameters: PackingParameters, materials: MaterialPair) -> Self {
        Self::new(PackingFamily::Square, parameters, materials)
    }

    /// Pick the variant from whichever two of the three parameters are given
    pub fn from_parameters(
        family: PackingFamily,
        volume_fraction: Option<f64>,
        subcells: Option<usize>,
        radius: Option<f64>,
        materials: MaterialPair,
    ) -> Result<Self, RucError> {
        let parameters = match (volume_fraction, subcells, radius) {
            (Some(volume_fraction), Some(subcells), None) => {
                PackingParameters::VolumeFractionAndSubcells { volume_fraction, subcells }
            }
            (Some(volume_fraction), None, Some(radius)) => {
                PackingParameters::VolumeFractionAndRadius { volume_fraction, radius }
            }
            (None, Some(subcells), Some(radius)) => {
                PackingParameters::SubcellsAndRadius { subcells, radius }
            }
            _ => {
                return Err(RucError::InvalidParameter(
                    "exactly two of volume fraction, subcell count and radius must be given"
                        .to_string(),
                ))
            }
        };
        Ok(Self::new(family, parameters, materials))
    }

    pub fn synthesize(&self) -> Result<Microstructure, RucError> {
        synthesize(self)
    }
}

/// Build the grid and properties described by `request`
pub fn synthesize(request: &GeometryRequest) -> Result<Microstructure, RucError> {
    let materials = request.materials;
    match (request.family, request.parameters) {
        (PackingFamily::Hexagonal, PackingParameters::VolumeFractionAndSubcells { volume_fraction, subcells }) => {
            hexagonal_pack_vf_nb(volume_fraction, subcells, materials)
        }
        (PackingFamily::Hexagonal, PackingParameters::VolumeFractionAndRadius { volume_fraction, radius }) => {
            hexagonal_pack_vf_radius(volume_fraction, radius, materials)
        }
        (PackingFamily::Hexagonal, PackingParameters::SubcellsAndRadius { subcells, radius }) => {
            hexagonal_pack_nb_radius(subcells, radius, materials)
        }
        (PackingFamily::Square, PackingParameters::VolumeFractionAndSubcells { volume_fraction, subcells }) => {
            square_pack_vf_nb(volume_fraction, subcells, materials)
        }
        (PackingFamily::Square, PackingParameters::VolumeFractionAndRadius { volume_fraction, radius }) => {
            square_pack_vf_radius(volume_fraction, radius, materials)
        }
        (PackingFamily::Square, PackingParameters::SubcellsAndRadius { subcells, radius }) => {
            square_pack_nb_radius(subcells, radius, materials)
        }
    }
}
