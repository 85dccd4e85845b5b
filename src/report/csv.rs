use crate::model::results::TeamResults;
use crate::report::{ReportError, format_score};

pub const TEAM_COLUMN: &str = "team";
pub const TOTAL_COLUMN: &str = "total_normalised";

/// `team,total_normalised,<raw categories...>`, one row per team in input
/// order. Rendered fully in memory so a failure never leaves a partial file.
pub fn render_results_csv(results: &TeamResults) -> Result<Vec<u8>, ReportError> {
    let mut w = ::csv::Writer::from_writer(Vec::new());

    let mut header = Vec::with_capacity(results.categories.len() + 2);
    header.push(TEAM_COLUMN);
    header.push(TOTAL_COLUMN);
    header.extend(results.categories.iter().map(String::as_str));
    w.write_record(&header)?;

    for team in &results.teams {
        let absolute = team
            .absolute
            .as_ref()
            .ok_or_else(|| ReportError::MissingAbsolute(team.team.clone()))?;
        let mut row = Vec::with_capacity(absolute.len() + 2);
        row.push(team.team.clone());
        row.push(format_score(team.total));
        row.extend(absolute.iter().map(|v| format_score(*v)));
        w.write_record(&row)?;
    }

    w.into_inner().map_err(|e| ReportError::Io(e.into_error()))
}
