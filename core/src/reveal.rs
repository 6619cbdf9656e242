use hashbrown::HashSet;

use crate::*;

/// Result of one reveal traversal.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// The starting tile held a mine; nothing else was traversed.
    Exploded(Pos),
    /// Every tile the cascade reached, the starting tile included.
    Revealed(HashSet<Pos>),
}

/// Flood-fill reveal starting at `start`.
///
/// Tiles with a zero adjacent-mine count expand to all of their in-bounds
/// neighbors; tiles that border a mine are revealed but stop the cascade.
/// Mines are never entered, so the returned set holds safe tiles only.
///
/// The traversal is an explicit LIFO work stack over a visited set; each tile
/// is visited at most once, `O(width * height)` in the worst case. The
/// function is stateless across calls: what the player has already explored
/// is [`GameSession`]'s concern, not this one's.
pub fn reveal(board: &Board, start: Pos) -> Result<RevealOutcome> {
    if board.cell_at(start)?.is_mine() {
        log::debug!("reveal at {start:?} hit a mine");
        return Ok(RevealOutcome::Exploded(start));
    }

    let mut visited: HashSet<Pos> = HashSet::new();
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        if !visited.insert(pos) {
            continue;
        }
        log::trace!("revealed tile at {pos:?}");

        // a tile bordering any mine stays revealed but does not propagate
        if board[pos] == Cell::Safe(0) {
            stack.extend(board.iter_neighbors(pos).filter(|next| !visited.contains(next)));
        }
    }

    log::debug!("reveal at {start:?} opened {} tiles", visited.len());
    Ok(RevealOutcome::Revealed(visited))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Pos, mines: &[Pos]) -> Board {
        Board::from_mine_positions(size.0, size.1, mines).unwrap()
    }

    /// 5x5 board with a full mine cross at column 2 and row 2, cutting the
    /// grid into four 2x2 quadrants of safe tiles.
    fn cross_board() -> Board {
        let mut mines = Vec::new();
        for i in 0..5 {
            mines.push((2, i));
            mines.push((i, 2));
        }
        board((5, 5), &mines)
    }

    fn revealed(outcome: RevealOutcome) -> HashSet<Pos> {
        match outcome {
            RevealOutcome::Revealed(tiles) => tiles,
            RevealOutcome::Exploded(pos) => panic!("unexpected explosion at {pos:?}"),
        }
    }

    #[test]
    fn mine_start_explodes_without_traversal() {
        let board = board((5, 5), &[(0, 4)]);

        assert_eq!(
            reveal(&board, (0, 4)),
            Ok(RevealOutcome::Exploded((0, 4)))
        );
    }

    #[test]
    fn cascade_fills_quadrant_bounded_by_mines() {
        let tiles = revealed(reveal(&cross_board(), (0, 0)).unwrap());

        let quadrant: HashSet<Pos> = [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().collect();
        assert_eq!(tiles, quadrant);
    }

    #[test]
    fn mine_bordering_tile_reveals_alone() {
        // (1, 1) touches the cross, so the cascade stops immediately
        let tiles = revealed(reveal(&cross_board(), (1, 1)).unwrap());

        assert_eq!(tiles, [(1, 1)].into_iter().collect());
    }

    #[test]
    fn open_field_cascade_reaches_every_safe_tile() {
        let board = board((4, 4), &[(3, 3)]);

        let tiles = revealed(reveal(&board, (0, 0)).unwrap());

        assert_eq!(tiles.len(), 15);
        assert!(!tiles.contains(&(3, 3)));
    }

    #[test]
    fn cascade_never_contains_a_mine() {
        let config = GameConfig::new_unchecked(8, 8, 12);
        let board = RandomBoardGenerator::new(42).generate(config).unwrap();

        for x in 0..board.width() {
            for y in 0..board.height() {
                if board[(x, y)].is_mine() {
                    continue;
                }
                for pos in revealed(reveal(&board, (x, y)).unwrap()) {
                    assert!(!board[pos].is_mine(), "mine at {pos:?} was revealed");
                }
            }
        }
    }

    #[test]
    fn repeat_reveal_is_idempotent() {
        let board = cross_board();

        let first = revealed(reveal(&board, (0, 0)).unwrap());
        let second = revealed(reveal(&board, (0, 0)).unwrap());

        assert_eq!(first, second);
    }

    #[test]
    fn out_of_bounds_start_is_an_error() {
        assert_eq!(reveal(&cross_board(), (5, 0)), Err(GameError::OutOfBounds));
    }
}
