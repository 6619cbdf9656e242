use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// Classic three-digit countdown budget, in seconds.
pub const DEFAULT_STARTING_TIME: Seconds = 999;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no state mutation is accepted anymore.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    Ticked,
    Expired,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Terminal-state payload for a score recorder: everything the record needs
/// except the fields the caller owns (player name, difficulty label).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub outcome: GameStatus,
    pub turns_used: u32,
    pub elapsed_seconds: Seconds,
    pub unexplored_safe_tiles: CellCount,
    pub board_width: Axis,
    pub board_height: Axis,
}

/// One play of one board, from the first guess to a terminal state.
///
/// Owns the board exclusively; starting a new game means dropping this pair
/// and constructing a fresh one, there is no in-place reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    explored: HashSet<Pos>,
    flagged: HashSet<Pos>,
    turns_used: u32,
    starting_time: Seconds,
    remaining_time: Seconds,
    status: GameStatus,
}

impl GameSession {
    pub fn new(board: Board, starting_time: Seconds) -> Self {
        Self {
            board,
            explored: HashSet::new(),
            flagged: HashSet::new(),
            turns_used: 0,
            starting_time,
            remaining_time: starting_time,
            status: GameStatus::InProgress,
        }
    }

    /// Generates a random board for `config` and wraps it in a fresh session.
    pub fn start(config: GameConfig, seed: u64, starting_time: Seconds) -> Result<Self> {
        let board = RandomBoardGenerator::new(seed).generate(config)?;
        Ok(Self::new(board, starting_time))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn turns_used(&self) -> u32 {
        self.turns_used
    }

    pub fn remaining_time(&self) -> Seconds {
        self.remaining_time
    }

    pub fn elapsed_seconds(&self) -> Seconds {
        self.starting_time - self.remaining_time
    }

    /// How many mines have not been flagged yet; negative when the player has
    /// flagged more tiles than there are mines.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged.len() as isize)
    }

    pub fn explored_count(&self) -> CellCount {
        self.explored.len() as CellCount
    }

    /// Reveals starting from `pos` and consumes a turn. Guessing a flagged,
    /// already-explored, or post-game tile changes nothing and costs nothing.
    pub fn guess(&mut self, pos: Pos) -> Result<GuessOutcome> {
        use GuessOutcome::*;

        let pos = self.board.validate_pos(pos)?;

        if self.status.is_terminal()
            || self.flagged.contains(&pos)
            || self.explored.contains(&pos)
        {
            return Ok(NoChange);
        }

        self.turns_used += 1;

        Ok(match reveal(&self.board, pos)? {
            RevealOutcome::Exploded(mine_pos) => {
                self.explored.insert(mine_pos);
                self.status = GameStatus::Lost;
                log::debug!("mine detonated at {mine_pos:?}, game lost");
                Exploded
            }
            RevealOutcome::Revealed(tiles) => {
                // flagged tiles stay hidden until unflagged and guessed again
                self.explored
                    .extend(tiles.into_iter().filter(|tile| !self.flagged.contains(tile)));

                if self.explored_count() == self.board.safe_cell_count() {
                    self.status = GameStatus::Won;
                    log::debug!("all safe tiles explored, game won");
                    Won
                } else {
                    Revealed
                }
            }
        })
    }

    /// Marks or unmarks `pos` as a suspected mine. Explored tiles cannot be
    /// flagged.
    pub fn toggle_flag(&mut self, pos: Pos) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let pos = self.board.validate_pos(pos)?;

        if self.status.is_terminal() || self.explored.contains(&pos) {
            return Ok(NoChange);
        }

        if !self.flagged.remove(&pos) {
            self.flagged.insert(pos);
        }
        Ok(Changed)
    }

    /// Advances the countdown by one second. Running out of time loses the
    /// game regardless of the minefield.
    pub fn tick(&mut self) -> TickOutcome {
        use TickOutcome::*;

        if self.status.is_terminal() || self.remaining_time == 0 {
            return NoChange;
        }

        self.remaining_time -= 1;
        if self.remaining_time == 0 {
            self.status = GameStatus::Lost;
            log::debug!("time expired, game lost");
            Expired
        } else {
            Ticked
        }
    }

    /// Render-only snapshot of one tile.
    pub fn visible_state(&self, pos: Pos) -> Result<TileView> {
        let cell = self.board.cell_at(pos)?;

        Ok(if self.flagged.contains(&pos) {
            TileView::Flagged
        } else if !self.explored.contains(&pos) {
            TileView::Hidden
        } else if cell.is_mine() {
            TileView::Exploded
        } else {
            TileView::Revealed(cell)
        })
    }

    pub fn summary(&self) -> SessionSummary {
        let explored_safe = self
            .explored
            .iter()
            .filter(|&&pos| !self.board[pos].is_mine())
            .count() as CellCount;
        let (board_width, board_height) = self.board.size();

        SessionSummary {
            outcome: self.status,
            turns_used: self.turns_used,
            elapsed_seconds: self.elapsed_seconds(),
            unexplored_safe_tiles: self.board.safe_cell_count() - explored_safe,
            board_width,
            board_height,
        }
    }
}
