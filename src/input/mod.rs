pub mod directions;
pub mod reader;
pub mod scores;

use thiserror::Error;

use crate::model::error::ScoreError;

pub use directions::load_directions;
pub use scores::load_scores;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {file}: {error}")]
    Open {
        file: String,
        #[source]
        error: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error in {file} line {line}: {message}")]
    Parse {
        file: String,
        line: u64,
        message: String,
    },
    #[error("missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },
    #[error("invalid input in {file} line {line}: {error}")]
    Score {
        file: String,
        line: u64,
        #[source]
        error: ScoreError,
    },
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
