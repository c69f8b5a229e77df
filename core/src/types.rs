/// Side length of the prediction board.
pub const GRID_SIDE: usize = 5;

/// Total number of board positions.
pub const TOTAL_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Hex digits consumed per derived board position.
pub const CHUNK_LEN: usize = 4;

/// Flat board position in `0..TOTAL_CELLS`, row-major.
pub type CellIndex = usize;

/// Maps a flat index to its `(row, column)` pair.
pub const fn to_row_col(index: CellIndex) -> (usize, usize) {
    (index / GRID_SIDE, index % GRID_SIDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_indexes_map_row_major() {
        assert_eq!(to_row_col(0), (0, 0));
        assert_eq!(to_row_col(7), (1, 2));
        assert_eq!(to_row_col(24), (4, 4));
    }
}
