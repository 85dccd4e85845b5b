use std::io::Read;
use std::path::Path;

use crate::input::InputError;
use crate::input::reader::{csv_reader, open_maybe_gz};
use crate::model::matrix::ScoreMatrix;

pub fn load_scores(path: &Path) -> Result<ScoreMatrix, InputError> {
    let reader = open_maybe_gz(path)?;
    parse_scores(reader, &path.display().to_string())
}

/// Header row, then one row per team. The `team` column (any case) holds the
/// team id, falling back to the first column; every other column is a
/// numeric category score.
pub fn parse_scores<R: Read>(reader: R, file: &str) -> Result<ScoreMatrix, InputError> {
    let mut rdr = csv_reader(reader);
    let header = rdr.headers()?.clone();
    if header.is_empty() {
        return Err(InputError::Parse {
            file: file.to_string(),
            line: 1,
            message: "scores file is empty".to_string(),
        });
    }

    let team_col = header
        .iter()
        .position(|h| h.eq_ignore_ascii_case("team"))
        .unwrap_or(0);
    let categories: Vec<String> = header
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != team_col)
        .map(|(_, name)| name.to_string())
        .collect();

    let mut matrix = ScoreMatrix::new(categories).map_err(|e| InputError::Score {
        file: file.to_string(),
        line: 1,
        error: e,
    })?;

    for (row_idx, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_idx as u64 + 2);

        let team = record.get(team_col).unwrap_or("");
        if team.is_empty() {
            return Err(InputError::Parse {
                file: file.to_string(),
                line,
                message: "empty team identifier".to_string(),
            });
        }

        let mut values = Vec::with_capacity(matrix.n_categories());
        for (idx, field) in record.iter().enumerate() {
            if idx == team_col {
                continue;
            }
            let value = field.parse::<f64>().map_err(|_| InputError::Parse {
                file: file.to_string(),
                line,
                message: format!(
                    "score '{}' for team '{}' in column '{}' is not a number",
                    field,
                    team,
                    header.get(idx).unwrap_or("?")
                ),
            })?;
            values.push(value);
        }

        matrix
            .push_team(team, values)
            .map_err(|e| InputError::Score {
                file: file.to_string(),
                line,
                error: e,
            })?;
    }

    tracing::debug!(
        "read {} teams x {} categories from {}",
        matrix.n_teams(),
        matrix.n_categories(),
        file
    );
    Ok(matrix)
}
