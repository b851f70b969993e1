use std::collections::BTreeSet;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::RucError;
use crate::materials::MaterialId;

/// Rectangular grid of material identifiers.
///
/// Rows run along the gamma direction (`NG` of them), columns along the beta
/// direction (`NB` of them). A grid always has at least one row and one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: DMatrix<MaterialId>,
}

impl Grid {
    /// Create an `ng x nb` grid with every subcell set to `id`.
    pub fn filled(ng: usize, nb: usize, id: MaterialId) -> Result<Self, RucError> {
        if ng == 0 || nb == 0 {
            return Err(RucError::InvalidParameter(format!(
                "grid dimensions must be positive (got {} rows x {} columns)",
                ng, nb
            )));
        }
        Ok(Self {
            cells: DMatrix::from_element(ng, nb, id),
        })
    }

    /// Build a grid from row vectors. Empty input and ragged rows are format errors.
    pub fn from_rows(rows: Vec<Vec<MaterialId>>) -> Result<Self, RucError> {
        let ng = rows.len();
        let nb = rows.first().map(Vec::len).unwrap_or(0);
        if ng == 0 || nb == 0 {
            return Err(RucError::Format("grid has no cells".to_string()));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != nb) {
            return Err(RucError::Format(format!(
                "row {} has {} columns, expected {}",
                index + 1,
                row.len(),
                nb
            )));
        }

        let flat: Vec<MaterialId> = rows.into_iter().flatten().collect();
        Ok(Self {
            cells: DMatrix::from_row_slice(ng, nb, &flat),
        })
    }

    /// Build an `ng x nb` grid by evaluating `f(row, col)` for every subcell.
    ///
    /// Callers guarantee non-zero dimensions.
    pub(crate) fn from_fn<F>(ng: usize, nb: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> MaterialId,
    {
        debug_assert!(ng > 0 && nb > 0, "Grid dimensions must be positive");
        Self {
            cells: DMatrix::from_fn(ng, nb, f),
        }
    }

    /// Number of columns (beta direction)
    pub fn nb(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows (gamma direction)
    pub fn ng(&self) -> usize {
        self.cells.nrows()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid holds at least one subcell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<MaterialId> {
        self.cells.get((row, col)).copied()
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = MaterialId> + '_ {
        (0..self.nb()).map(move |col| self.cells[(row, col)])
    }

    pub fn to_rows(&self) -> Vec<Vec<MaterialId>> {
        (0..self.ng()).map(|r| self.row(r).collect()).collect()
    }

    pub fn as_matrix(&self) -> &DMatrix<MaterialId> {
        &self.cells
    }

    /// Number of subcells holding `id`
    pub fn count(&self, id: MaterialId) -> usize {
        self.cells.iter().filter(|&&v| v == id).count()
    }

    /// Number of subcells in column `col` holding `id`
    pub fn column_count(&self, col: usize, id: MaterialId) -> usize {
        if col >= self.nb() {
            return 0;
        }
        self.cells.column(col).iter().filter(|&&v| v == id).count()
    }

    pub fn distinct_ids(&self) -> BTreeSet<MaterialId> {
        self.cells.iter().copied().collect()
    }

    /// Reverse the row order (mirror across the horizontal mid-line).
    pub fn flip_vertical(&self) -> Self {
        let ng = self.ng();
        Self::from_fn(ng, self.nb(), |r, c| self.cells[(ng - 1 - r, c)])
    }

    /// Reverse the column order (mirror across the vertical mid-line).
    pub fn flip_horizontal(&self) -> Self {
        let nb = self.nb();
        Self::from_fn(self.ng(), nb, |r, c| self.cells[(r, nb - 1 - c)])
    }

    /// Place `right` to the right of `self`. Row counts must agree.
    pub fn hstack(&self, right: &Grid) -> Result<Self, RucError> {
        if self.ng() != right.ng() {
            return Err(RucError::InvalidParameter(format!(
                "cannot place a grid with {} rows beside one with {} rows",
                right.ng(),
                self.ng()
            )));
        }
        let split = self.nb();
        Ok(Self::from_fn(self.ng(), split + right.nb(), |r, c| {
            if c < split {
                self.cells[(r, c)]
            } else {
                right.cells[(r, c - split)]
            }
        }))
    }

    /// Place `below` underneath `self`. Column counts must agree.
    pub fn vstack(&self, below: &Grid) -> Result<Self, RucError> {
        if self.nb() != below.nb() {
            return Err(RucError::InvalidParameter(format!(
                "cannot place a grid with {} columns below one with {} columns",
                below.nb(),
                self.nb()
            )));
        }
        let split = self.ng();
        Ok(Self::from_fn(split + below.ng(), self.nb(), |r, c| {
            if r < split {
                self.cells[(r, c)]
            } else {
                below.cells[(r - split, c)]
            }
        }))
    }
}
