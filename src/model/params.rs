use serde::Serialize;

use crate::model::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSpreadPolicy {
    /// Tied categories and tied totals score `max_points / 2`.
    Midpoint,
    /// Tied categories and tied totals are errors.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaMode {
    /// Direction entries without a matching category are ignored.
    Lenient,
    /// Direction entries without a matching category are errors.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringParams {
    pub max_points: f64,
    pub zero_spread: ZeroSpreadPolicy,
    pub schema: SchemaMode,
    pub keep_absolute: bool,
}

impl ScoringParams {
    pub const CSV_MAX_POINTS: f64 = 1.0;
    pub const DEMO_MAX_POINTS: f64 = 10.0;

    pub fn csv_default() -> Self {
        Self {
            max_points: Self::CSV_MAX_POINTS,
            zero_spread: ZeroSpreadPolicy::Midpoint,
            schema: SchemaMode::Lenient,
            keep_absolute: true,
        }
    }

    pub fn demo_default() -> Self {
        let mut base = Self::csv_default();
        base.max_points = Self::DEMO_MAX_POINTS;
        base.keep_absolute = false;
        base
    }

    pub fn midpoint(&self) -> f64 {
        self.max_points / 2.0
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if !self.max_points.is_finite() || self.max_points <= 0.0 {
            return Err(ScoreError::InvalidMaxPoints(self.max_points));
        }
        Ok(())
    }
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self::csv_default()
    }
}
