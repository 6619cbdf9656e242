use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use sapper_core::{Axis, CellCount, Seconds, SessionSummary};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::{Difficulty, Result};

/// One finished game, as persisted to the scoreboard file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_name: String,
    pub difficulty: String,
    pub turns_used: u32,
    pub elapsed_seconds: Seconds,
    pub unexplored_safe_tiles: CellCount,
    pub board_width: Axis,
    pub board_height: Axis,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl ScoreRecord {
    pub fn from_summary(
        player_name: impl Into<String>,
        difficulty: Difficulty,
        summary: &SessionSummary,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            difficulty: difficulty.label().to_owned(),
            turns_used: summary.turns_used,
            elapsed_seconds: summary.elapsed_seconds,
            unexplored_safe_tiles: summary.unexplored_safe_tiles,
            board_width: summary.board_width,
            board_height: summary.board_height,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let when = self.recorded_at.format(&Rfc3339).map_err(|_| fmt::Error)?;
        write!(
            f,
            "{}: {} {}x{} {}s  @ {}",
            self.player_name,
            self.difficulty,
            self.board_width,
            self.board_height,
            self.elapsed_seconds,
            when
        )
    }
}

/// JSON-file score store. Every write reads the existing records back first,
/// so concurrent games of the same player append rather than overwrite.
#[derive(Clone, Debug)]
pub struct Scoreboard {
    path: PathBuf,
}

impl Scoreboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All persisted records in file order. A missing file reads as an empty
    /// scoreboard.
    pub fn load(&self) -> Result<Vec<ScoreRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn append(&self, record: &ScoreRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record.clone());
        fs::write(&self.path, serde_json::to_string(&records)?)?;
        log::info!(
            "recorded score for {} ({})",
            record.player_name,
            record.difficulty
        );
        Ok(())
    }

    /// Records sorted by time spent, fastest first.
    pub fn standings(&self) -> Result<Vec<ScoreRecord>> {
        let mut records = self.load()?;
        records.sort_by_key(|record| record.elapsed_seconds);
        Ok(records)
    }
}
