use serde::Serialize;

use crate::model::params::ScoringParams;
use crate::model::results::{CategoryStats, RankedTeam, TeamResults};

#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub params: &'a ScoringParams,
    pub n_teams: usize,
    pub n_categories: usize,
    pub categories: &'a [CategoryStats],
    pub zero_variance_categories: Vec<&'a str>,
    pub ranking: Vec<RankedTeam<'a>>,
}

pub fn build_summary<'a>(results: &'a TeamResults, params: &'a ScoringParams) -> RunSummary<'a> {
    RunSummary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        params,
        n_teams: results.len(),
        n_categories: results.categories.len(),
        categories: &results.stats,
        zero_variance_categories: results
            .stats
            .iter()
            .filter(|s| s.zero_variance)
            .map(|s| s.name.as_str())
            .collect(),
        ranking: results.ranked(),
    }
}

pub fn render_summary_json(
    results: &TeamResults,
    params: &ScoringParams,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_summary(results, params))
}
