use std::fs;
use std::path::Path;

use crate::model::params::ScoringParams;
use crate::model::results::TeamResults;
use crate::report::ReportError;
use crate::report::csv::render_results_csv;
use crate::report::json::render_summary_json;

/// Writes the results CSV and, if requested, the JSON run summary.
///
/// Everything is rendered before the first file is created, and the results
/// CSV is always the last file written: any earlier failure leaves no output.
pub fn write_reports(
    results: &TeamResults,
    params: &ScoringParams,
    output: &Path,
    summary: Option<&Path>,
) -> Result<(), ReportError> {
    let csv_bytes = render_results_csv(results)?;
    let summary_json = match summary {
        Some(_) => Some(render_summary_json(results, params)?),
        None => None,
    };

    if let (Some(path), Some(json)) = (summary, summary_json) {
        write_summary(path, &json)?;
    }

    ensure_parent(output)?;
    fs::write(output, csv_bytes)?;
    tracing::info!("wrote {} team rows to {}", results.len(), output.display());
    Ok(())
}

pub fn write_summary(path: &Path, json: &str) -> Result<(), ReportError> {
    ensure_parent(path)?;
    fs::write(path, json)?;
    tracing::info!("wrote run summary to {}", path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
