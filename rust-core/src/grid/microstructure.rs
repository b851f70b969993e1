use serde::{Deserialize, Serialize};

use crate::analysis::MicrostructureProperties;
use crate::grid::Grid;

/// A grid together with the properties derived from it.
///
/// Returned by every synthesizer and by the file readers. The properties are
/// computed once from `grid` and are never edited independently of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Microstructure {
    pub grid: Grid,
    pub properties: MicrostructureProperties,
}

impl Microstructure {
    pub fn new(grid: Grid, properties: MicrostructureProperties) -> Self {
        Self { grid, properties }
    }

    pub fn into_parts(self) -> (Grid, MicrostructureProperties) {
        (self.grid, self.properties)
    }
}
