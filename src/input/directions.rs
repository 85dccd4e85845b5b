use std::io::Read;
use std::path::Path;

use crate::input::InputError;
use crate::input::reader::{csv_reader, open_maybe_gz};
use crate::model::directions::{Direction, DirectionMap};

pub const TASK_COLUMN: &str = "task";
pub const FLAG_COLUMN: &str = "higher_is_better";

pub fn load_directions(path: &Path) -> Result<DirectionMap, InputError> {
    let reader = open_maybe_gz(path)?;
    parse_directions(reader, &path.display().to_string())
}

/// `task,higher_is_better` rows. A flag is true only when it reads `true`
/// (any case); anything else means lower is better. Repeated tasks keep the
/// last row.
pub fn parse_directions<R: Read>(reader: R, file: &str) -> Result<DirectionMap, InputError> {
    let mut rdr = csv_reader(reader);
    let header = rdr.headers()?.clone();
    let task_col = find_column(&header, TASK_COLUMN, file)?;
    let flag_col = find_column(&header, FLAG_COLUMN, file)?;

    let mut map = DirectionMap::new();
    for (row_idx, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_idx as u64 + 2);

        let task = record.get(task_col).unwrap_or("");
        if task.is_empty() {
            return Err(InputError::Parse {
                file: file.to_string(),
                line,
                message: "empty task identifier".to_string(),
            });
        }
        let raw_flag = record.get(flag_col).unwrap_or("");
        let direction = parse_flag(raw_flag);
        if direction == Direction::LowerIsBetter && !raw_flag.eq_ignore_ascii_case("false") {
            tracing::warn!(
                "{} line {}: flag '{}' for '{}' is not true/false; treating as lower-is-better",
                file,
                line,
                raw_flag,
                task
            );
        }
        if map.insert(task, direction).is_some() {
            tracing::warn!(
                "{} line {}: duplicate direction for '{}'; keeping the last one",
                file,
                line,
                task
            );
        }
    }

    Ok(map)
}

pub fn parse_flag(raw: &str) -> Direction {
    Direction::from_higher_is_better(raw.trim().eq_ignore_ascii_case("true"))
}

fn find_column(header: &::csv::StringRecord, name: &str, file: &str) -> Result<usize, InputError> {
    header
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| InputError::MissingColumn {
            file: file.to_string(),
            column: name.to_string(),
        })
}
