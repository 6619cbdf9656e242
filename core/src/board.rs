use std::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Static minefield: cell contents are fixed at construction, all visibility
/// state lives in [`GameSession`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mines: CellCount,
}

impl Board {
    /// Builds a board with mines at exactly the given positions. Duplicate
    /// positions collapse into one mine.
    pub fn from_mine_positions(width: Axis, height: Axis, mines: &[Pos]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default((width as usize, height as usize));

        for &pos in mines {
            if pos.0 >= width || pos.1 >= height {
                return Err(GameError::OutOfBounds);
            }
            mask[pos.as_index()] = true;
        }

        let count = mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        GameConfig::new(width, height, count)?;

        Ok(Self::from_mask(mask, count))
    }

    /// Folds a mine mask into the cell grid, computing every safe tile's
    /// adjacent-mine count up front.
    fn from_mask(mask: Array2<bool>, mines: CellCount) -> Self {
        let cells = Array2::from_shape_fn(mask.dim(), |(x, y)| {
            let pos = (x as Axis, y as Axis);
            if mask[pos.as_index()] {
                Cell::Mine
            } else {
                let adjacent = mask
                    .iter_neighbors(pos)
                    .filter(|&neighbor| mask[neighbor.as_index()])
                    .count() as u8;
                Cell::Safe(adjacent)
            }
        });
        log::debug!("built {}x{} board with {} mines", cells.dim().0, cells.dim().1, mines);
        Self { cells, mines }
    }

    pub fn config(&self) -> GameConfig {
        let (width, height) = self.size();
        GameConfig::new_unchecked(width, height, self.mines)
    }

    pub fn size(&self) -> Pos {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn width(&self) -> Axis {
        self.size().0
    }

    pub fn height(&self) -> Axis {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_pos(&self, pos: Pos) -> Result<Pos> {
        let (width, height) = self.size();
        if pos.0 < width && pos.1 < height {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Content of the tile at `pos`, or `OutOfBounds` outside the grid.
    pub fn cell_at(&self, pos: Pos) -> Result<Cell> {
        let pos = self.validate_pos(pos)?;
        Ok(self[pos])
    }

    pub fn iter_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        self.cells.iter_neighbors(pos)
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.as_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Pos, mines: &[Pos]) -> Board {
        Board::from_mine_positions(size.0, size.1, mines).unwrap()
    }

    #[test]
    fn single_center_mine_counts() {
        let board = board((3, 3), &[(1, 1)]);

        assert_eq!(board[(1, 1)], Cell::Mine);
        for pos in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)] {
            assert_eq!(board[pos], Cell::Safe(1));
        }
    }

    #[test]
    fn counts_are_grid_bounded() {
        // mines in both corners of a 2x2, safe tiles see both
        let board = board((2, 2), &[(0, 0), (1, 1)]);

        assert_eq!(board[(1, 0)], Cell::Safe(2));
        assert_eq!(board[(0, 1)], Cell::Safe(2));
    }

    #[test]
    fn stored_counts_match_live_recount() {
        let board = RandomBoardGenerator::new(99)
            .generate(GameConfig::new_unchecked(9, 9, 10))
            .unwrap();

        for x in 0..board.width() {
            for y in 0..board.height() {
                let Cell::Safe(stored) = board[(x, y)] else {
                    continue;
                };
                let live = board
                    .iter_neighbors((x, y))
                    .filter(|&pos| board[pos].is_mine())
                    .count() as u8;
                assert_eq!(stored, live, "count mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn duplicate_positions_collapse() {
        let board = board((2, 2), &[(0, 0), (0, 0)]);
        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn rejects_fully_mined_board() {
        let all: Vec<Pos> = vec![(0, 0), (1, 0), (0, 1), (1, 1)];
        assert_eq!(
            Board::from_mine_positions(2, 2, &all),
            Err(GameError::InvalidConfig)
        );
    }

    #[test]
    fn rejects_mine_outside_grid() {
        assert_eq!(
            Board::from_mine_positions(2, 2, &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn cell_at_checks_bounds() {
        let board = board((2, 2), &[(0, 0)]);

        assert_eq!(board.cell_at((0, 0)), Ok(Cell::Mine));
        assert_eq!(board.cell_at((2, 1)), Err(GameError::OutOfBounds));
        assert_eq!(board.cell_at((0, 2)), Err(GameError::OutOfBounds));
    }
}
