//! Error types for chess-duel-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("square out of bounds: row {row}, col {col}")]
    OutOfBounds { row: i64, col: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
