use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod reveal;
mod session;
mod tile;
mod types;

/// Board dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Axis,
    pub height: Axis,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Axis, height: Axis, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Axis, height: Axis, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    /// Checks `width >= 1`, `height >= 1` and `1 <= mines <= width * height - 1`.
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.height < 1 {
            return Err(GameError::InvalidConfig);
        }
        if self.mines < 1 || self.mines > self.total_cells() - 1 {
            return Err(GameError::InvalidConfig);
        }
        Ok(())
    }

    pub const fn size(&self) -> Pos {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}
