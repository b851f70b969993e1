// Connected-component labeling: two-pass union-find over a binary raster
// Components are 8-connected (diagonal neighbours join)

use crate::grid::Grid;
use crate::materials::MaterialId;

/// Inclusive pixel extent of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl PixelBounds {
    fn at(row: usize, col: usize) -> Self {
        Self {
            min_row: row,
            max_row: row,
            min_col: col,
            max_col: col,
        }
    }

    fn include(&mut self, row: usize, col: usize) {
        self.min_row = self.min_row.min(row);
        self.max_row = self.max_row.max(row);
        self.min_col = self.min_col.min(col);
        self.max_col = self.max_col.max(col);
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// True if the extent reaches the first or last row or column of an `ng x nb` image
    pub fn touches_border(&self, ng: usize, nb: usize) -> bool {
        self.min_row == 0 || self.min_col == 0 || self.max_row + 1 >= ng || self.max_col + 1 >= nb
    }
}

/// One connected foreground component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Pixel count
    pub area: usize,
    pub bounds: PixelBounds,
}

/// Disjoint-set forest over provisional labels
#[derive(Debug, Default)]
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn make_set(&mut self) -> usize {
        let label = self.parent.len();
        self.parent.push(label);
        label
    }

    fn find(&mut self, mut label: usize) -> usize {
        // Path halving
        while self.parent[label] != label {
            self.parent[label] = self.parent[self.parent[label]];
            label = self.parent[label];
        }
        label
    }

    /// Merge two sets; the smaller root label survives
    fn union(&mut self, a: usize, b: usize) -> usize {
        let (ra, rb) = (self.find(a), self.find(b));
        let (keep, drop) = if ra <= rb { (ra, rb) } else { (rb, ra) };
        self.parent[drop] = keep;
        keep
    }
}

/// Label the 8-connected components of the cells equal to `foreground`.
///
/// Components are returned in order of their first pixel in row-major scan order.
pub fn label_components(grid: &Grid, foreground: MaterialId) -> Vec<Component> {
    let (ng, nb) = (grid.ng(), grid.nb());
    let matrix = grid.as_matrix();
    let mut labels: Vec<Option<usize>> = vec![None; ng * nb];
    let mut sets = DisjointSet::default();

    // First pass: provisional labels from the already-visited neighbours (W, NW, N, NE)
    for row in 0..ng {
        for col in 0..nb {
            if matrix[(row, col)] != foreground {
                continue;
            }

            let mut neighbours = Vec::with_capacity(4);
            if col > 0 {
                neighbours.push(labels[row * nb + col - 1]);
            }
            if row > 0 {
                let above = (row - 1) * nb;
                if col > 0 {
                    neighbours.push(labels[above + col - 1]);
                }
                neighbours.push(labels[above + col]);
                if col + 1 < nb {
                    neighbours.push(labels[above + col + 1]);
                }
            }

            let mut assigned: Option<usize> = None;
            for label in neighbours.into_iter().flatten() {
                assigned = Some(match assigned {
                    Some(current) => sets.union(current, label),
                    None => sets.find(label),
                });
            }
            labels[row * nb + col] = Some(assigned.unwrap_or_else(|| sets.make_set()));
        }
    }

    // Second pass: resolve equivalences and accumulate area and extent per root
    let mut slot_of_root: Vec<Option<usize>> = vec![None; sets.parent.len()];
    let mut components: Vec<Component> = Vec::new();
    for row in 0..ng {
        for col in 0..nb {
            let Some(label) = labels[row * nb + col] else {
                continue;
            };
            let root = sets.find(label);
            match slot_of_root[root] {
                Some(slot) => {
                    let component = &mut components[slot];
                    component.area += 1;
                    component.bounds.include(row, col);
                }
                None => {
                    slot_of_root[root] = Some(components.len());
                    components.push(Component {
                        area: 1,
                        bounds: PixelBounds::at(row, col),
                    });
                }
            }
        }
    }

    components
}
