use std::fmt;

use serde::{Deserialize, Serialize};

use crate::materials::MaterialId;

/// Properties derived from a grid and its fiber/matrix identifiers.
///
/// # Fields
/// * `volume_fraction` - fraction of subcells equal to the fiber id (`VF`), in [0, 1]
/// * `radius` - mean fiber radius in subcell units (`R`); `None` when no fiber could be measured
/// * `nb`, `ng` - column and row counts of the source grid
/// * `fiber`, `matrix` - identifiers used for the computation (`F`, `M`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MicrostructureProperties {
    pub volume_fraction: f64,
    pub radius: Option<f64>,
    pub nb: usize,
    pub ng: usize,
    pub fiber: MaterialId,
    pub matrix: MaterialId,
}

impl fmt::Display for MicrostructureProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10}{}", "Property", "Value")?;
        writeln!(f, "{:<10}{:.4}", "VF", self.volume_fraction)?;
        match self.radius {
            Some(r) => writeln!(f, "{:<10}{:.4}", "R", r)?,
            None => writeln!(f, "{:<10}{}", "R", "undefined")?,
        }
        writeln!(f, "{:<10}{}", "NB", self.nb)?;
        writeln!(f, "{:<10}{}", "NG", self.ng)?;
        writeln!(f, "{:<10}{}", "F", self.fiber)?;
        write!(f, "{:<10}{}", "M", self.matrix)
    }
}
