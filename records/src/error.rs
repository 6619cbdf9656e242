use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Scoreboard file access failed")]
    Io(#[from] std::io::Error),
    #[error("Scoreboard data is not valid")]
    Format(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
