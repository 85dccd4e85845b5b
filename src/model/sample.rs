use crate::model::directions::DirectionMap;
use crate::model::error::ScoreError;
use crate::model::matrix::ScoreMatrix;

/// Three teams over four stations, used by the argument-less demo run.
pub fn sample_scores() -> Result<ScoreMatrix, ScoreError> {
    ScoreMatrix::from_rows([
        (
            "team1",
            vec![
                ("station1", 40.0),
                ("station2", 20.0),
                ("station3", 50.0),
                ("station4", 150.0),
            ],
        ),
        (
            "team2",
            vec![
                ("station1", 20.0),
                ("station2", 20.0),
                ("station3", 40.0),
                ("station4", 200.0),
            ],
        ),
        (
            "team3",
            vec![
                ("station1", 30.0),
                ("station2", 10.0),
                ("station3", 30.0),
                ("station4", 200.0),
            ],
        ),
    ])
}

/// Stations 1-3 are timed (lower wins); station 4 is points (higher wins).
pub fn sample_directions() -> DirectionMap {
    DirectionMap::from_flags([
        ("station1", false),
        ("station2", false),
        ("station3", false),
        ("station4", true),
    ])
}
