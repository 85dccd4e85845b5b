pub mod csv;
pub mod json;
pub mod text;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("team '{0}' has no absolute scores to report")]
    MissingAbsolute(String),
}

/// Shortest round-trip form that always keeps a decimal point (`10.0`, not `10`).
///
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent form with a
/// bare exponent (`1e-7`, `1e16`); Python's `str(float)` writes `1e-07` and
/// `1e+16` for the same values. Both parse back to the same `f64`.
pub fn format_score(v: f64) -> String {
    format!("{v:?}")
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
