use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    #[error("schema mismatch: no direction defined for category '{category}'")]
    MissingDirection { category: String },
    #[error("schema mismatch: direction defined for unknown category '{category}'")]
    UnknownDirection { category: String },
    #[error("duplicate team '{team}'")]
    DuplicateTeam { team: String },
    #[error("duplicate category '{category}'")]
    DuplicateCategory { category: String },
    #[error("team '{team}' does not match the category layout: {detail}")]
    RaggedRow { team: String, detail: String },
    #[error("team '{team}' has a non-finite score for '{category}': {value}")]
    NonFiniteScore {
        team: String,
        category: String,
        value: f64,
    },
    #[error("max points must be positive and finite, got {0}")]
    InvalidMaxPoints(f64),
    #[error("category '{category}' has zero variance")]
    ZeroVariance { category: String },
    #[error("all team totals are equal; no spread to rescale")]
    ZeroSpread,
}

impl ScoreError {
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(
            self,
            ScoreError::MissingDirection { .. } | ScoreError::UnknownDirection { .. }
        )
    }
}
