pub mod directions;
pub mod error;
pub mod matrix;
pub mod params;
pub mod results;
pub mod sample;

pub use directions::{Direction, DirectionMap};
pub use error::ScoreError;
pub use matrix::ScoreMatrix;
pub use params::{SchemaMode, ScoringParams, ZeroSpreadPolicy};
pub use results::{CategoryStats, NormalizedMatrix, RankedTeam, TeamResult, TeamResults};

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
