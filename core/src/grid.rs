use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome board of one prediction: 5x5 cell marks, row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionGrid {
    marks: Array2<CellMark>,
    safe_count: usize,
}

impl PredictionGrid {
    /// Builds a grid with the given flat indexes marked safe, all others unsafe.
    ///
    /// Index `i` lands on row `i / 5`, column `i % 5`. Duplicate indexes are
    /// counted once.
    pub fn from_safe_indexes(indexes: &[CellIndex]) -> Result<Self> {
        let mut marks: Array2<CellMark> = Array2::default((GRID_SIDE, GRID_SIDE));
        let mut safe_count = 0;

        for &index in indexes {
            if index >= TOTAL_CELLS {
                return Err(PredictError::IndexOutOfRange);
            }
            let cell = &mut marks[to_row_col(index)];
            if !cell.is_safe() {
                *cell = CellMark::Safe;
                safe_count += 1;
            }
        }

        Ok(Self { marks, safe_count })
    }

    pub fn safe_count(&self) -> usize {
        self.safe_count
    }

    pub fn mark_at(&self, index: CellIndex) -> CellMark {
        self.marks[to_row_col(index)]
    }

    /// Flat indexes of all safe cells, in row-major order.
    pub fn safe_indexes(&self) -> Vec<CellIndex> {
        (0..TOTAL_CELLS)
            .filter(|&index| self.mark_at(index).is_safe())
            .collect()
    }
}

impl Index<(usize, usize)> for PredictionGrid {
    type Output = CellMark;

    fn index(&self, coords: (usize, usize)) -> &Self::Output {
        &self.marks[coords]
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn empty_selection_yields_all_unsafe() {
        let grid = PredictionGrid::from_safe_indexes(&[]).unwrap();

        assert_eq!(grid.safe_count(), 0);
        assert_eq!(grid.safe_indexes(), vec![]);
    }

    #[test]
    fn indexes_land_row_major() {
        let grid = PredictionGrid::from_safe_indexes(&[7, 24]).unwrap();

        assert_eq!(grid[(1, 2)], CellMark::Safe);
        assert_eq!(grid[(4, 4)], CellMark::Safe);
        assert_eq!(grid[(0, 0)], CellMark::Unsafe);
        assert_eq!(grid.safe_count(), 2);
    }

    #[test]
    fn duplicate_indexes_count_once() {
        let grid = PredictionGrid::from_safe_indexes(&[3, 3, 3]).unwrap();

        assert_eq!(grid.safe_count(), 1);
        assert_eq!(grid.safe_indexes(), vec![3]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(
            PredictionGrid::from_safe_indexes(&[TOTAL_CELLS]),
            Err(PredictError::IndexOutOfRange)
        );
    }
}
