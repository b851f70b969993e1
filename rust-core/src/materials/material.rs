// Material module: Contains the fiber/matrix identifier pair
// A subcell stores nothing but an integer identifier; the physical material behind it
// is resolved by the downstream analysis tool.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FIBER_ID, DEFAULT_MATRIX_ID};
use crate::error::RucError;

/// Integer material identifier stored in each subcell of a grid
pub type MaterialId = i32;

/// Fiber and matrix identifiers of a two-phase microstructure
///
/// # Fields
/// * `fiber` - identifier written to subcells inside a fiber cross-section (`F`)
/// * `matrix` - identifier written to every other subcell (`M`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialPair {
    pub fiber: MaterialId,
    pub matrix: MaterialId,
}

impl MaterialPair {
    pub fn new(fiber: MaterialId, matrix: MaterialId) -> Self {
        Self { fiber, matrix }
    }

    /// Reject pairs that cannot describe two distinct phases
    pub fn validate(&self) -> Result<(), RucError> {
        if self.fiber == self.matrix {
            return Err(RucError::InvalidParameter(format!(
                "fiber and matrix identifiers must differ (both are {})",
                self.fiber
            )));
        }
        Ok(())
    }

    /// Identifier for a subcell given whether its center lies inside a fiber
    pub fn classify(&self, inside_fiber: bool) -> MaterialId {
        if inside_fiber {
            self.fiber
        } else {
            self.matrix
        }
    }
}

impl Default for MaterialPair {
    /// Fiber 1, matrix 2
    fn default() -> Self {
        Self::new(DEFAULT_FIBER_ID, DEFAULT_MATRIX_ID)
    }
}
