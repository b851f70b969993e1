// Parameter checks run before any synthesis work; nothing is clamped

use crate::config::MAX_SUBCELLS;
use crate::error::RucError;
use crate::synthesis::packing::PackingFamily;

/// Volume fraction must lie strictly inside (0, packing limit of the family)
pub fn validate_volume_fraction(volume_fraction: f64, family: PackingFamily) -> Result<(), RucError> {
    let limit = family.packing_limit();
    if !volume_fraction.is_finite() || volume_fraction <= 0.0 || volume_fraction >= limit {
        return Err(RucError::InvalidParameter(format!(
            "volume fraction {} must lie in (0, {:.4}) for {} packing",
            volume_fraction, limit, family
        )));
    }
    Ok(())
}

pub fn validate_radius(radius: f64) -> Result<(), RucError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(RucError::InvalidParameter(format!(
            "fiber radius {} must be a positive number of subcells",
            radius
        )));
    }
    Ok(())
}

pub fn validate_subcells(subcells: usize) -> Result<(), RucError> {
    if subcells == 0 {
        return Err(RucError::InvalidParameter(
            "subcell count must be positive".to_string(),
        ));
    }
    Ok(())
}

/// An even subcell count derived from `requested` must leave at least two subcells
pub fn validate_even_width(even: usize, requested: usize) -> Result<(), RucError> {
    if even < 2 {
        return Err(RucError::InvalidParameter(format!(
            "subcell count {} leaves no subcells once forced even; at least 2 are required",
            requested
        )));
    }
    Ok(())
}

/// A real-valued cell extent must round to at least one subcell per axis
pub fn validate_resolved(nb: usize, ng: usize, radius: f64) -> Result<(), RucError> {
    if nb == 0 || ng == 0 {
        return Err(RucError::InvalidParameter(format!(
            "fiber radius {} is too small to resolve: the cell rounds to {} x {} subcells",
            radius, ng, nb
        )));
    }
    Ok(())
}

/// A real-valued cell extent must be finite and fit within `MAX_SUBCELLS`
/// unit subcells before it is rounded to a count
pub fn validate_extent(extent: f64, axis: &str) -> Result<(), RucError> {
    if !extent.is_finite() || extent > MAX_SUBCELLS as f64 {
        return Err(RucError::InvalidParameter(format!(
            "cell extent {} along {} exceeds the limit of {} subcells",
            extent, axis, MAX_SUBCELLS
        )));
    }
    Ok(())
}

/// A derived subcell count must not exceed `MAX_SUBCELLS`
pub fn validate_subcell_limit(subcells: usize, axis: &str) -> Result<(), RucError> {
    if subcells > MAX_SUBCELLS {
        return Err(RucError::InvalidParameter(format!(
            "{} subcells along {} exceed the limit of {}",
            subcells, axis, MAX_SUBCELLS
        )));
    }
    Ok(())
}
