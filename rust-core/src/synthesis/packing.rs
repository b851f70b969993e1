use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::{HEXAGONAL_PACKING_LIMIT, SQRT_3, SQUARE_PACKING_LIMIT};
use crate::geometries::{BoundingBox2D, FiberLayout};

/// Fiber arrangement of a repeating unit cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackingFamily {
    /// Rectangular cell of aspect sqrt(3) with fibers at the four corners and the center
    Hexagonal,
    /// Square cell with one centered fiber
    Square,
}

impl PackingFamily {
    /// Maximum circle-packing density of the lattice (exclusive upper bound on VF)
    pub fn packing_limit(&self) -> f64 {
        match self {
            PackingFamily::Hexagonal => HEXAGONAL_PACKING_LIMIT,
            PackingFamily::Square => SQUARE_PACKING_LIMIT,
        }
    }

    /// Whole fibers per cell (corner quarters count as one quarter each)
    pub fn fibers_per_cell(&self) -> usize {
        match self {
            PackingFamily::Hexagonal => 2,
            PackingFamily::Square => 1,
        }
    }

    /// Cell height over cell width
    pub fn aspect_ratio(&self) -> f64 {
        match self {
            PackingFamily::Hexagonal => SQRT_3,
            PackingFamily::Square => 1.0,
        }
    }

    /// Fiber centers for a cell spanning `cell`
    pub fn fiber_centers(&self, cell: &BoundingBox2D) -> Vec<Vector2<f64>> {
        match self {
            PackingFamily::Hexagonal => {
                let mut centers = cell.corners().to_vec();
                centers.push(cell.center());
                centers
            }
            PackingFamily::Square => vec![cell.center()],
        }
    }

    /// Equal-radius fibers at every center of the cell
    pub fn fiber_layout(&self, cell: &BoundingBox2D, radius: f64) -> FiberLayout {
        FiberLayout::uniform(self.fiber_centers(cell), radius)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PackingFamily::Hexagonal => "hexagonal",
            PackingFamily::Square => "square",
        }
    }
}

impl fmt::Display for PackingFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
