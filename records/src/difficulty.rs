use sapper_core::CellCount;
use serde::{Deserialize, Serialize};

/// Mine-density presets, resolved against the board area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom(CellCount),
}

impl Difficulty {
    /// Mine count for a board with `total_cells` tiles: 10% / 20% / 30% of
    /// the area for the presets, the explicit count for `Custom`. The result
    /// is clamped into the playable range `1..=total_cells - 1`.
    pub fn mine_count(self, total_cells: CellCount) -> CellCount {
        let raw = match self {
            Self::Easy => total_cells / 10,
            Self::Medium => total_cells / 5,
            Self::Hard => (total_cells as u64 * 3 / 10) as CellCount,
            Self::Custom(count) => count,
        };
        raw.clamp(1, total_cells.saturating_sub(1).max(1))
    }

    /// Scoreboard label for this difficulty.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Custom(_) => "Custom",
        }
    }
}
