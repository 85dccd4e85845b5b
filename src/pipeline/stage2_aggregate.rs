use crate::model::directions::DirectionMap;
use crate::model::error::ScoreError;
use crate::model::matrix::ScoreMatrix;
use crate::model::params::{ScoringParams, ZeroSpreadPolicy};
use crate::model::results::{TeamResult, TeamResults};
use crate::pipeline::stage1_normalize::normalize;

/// Normalizes, sums each team's category scores and rescales the sums into
/// `[0, max_points]`.
pub fn aggregate(
    scores: &ScoreMatrix,
    directions: &DirectionMap,
    params: &ScoringParams,
) -> Result<TeamResults, ScoreError> {
    let normalized = normalize(scores, directions, params)?;

    let sums: Vec<f64> = normalized
        .scores
        .rows()
        .map(|(_, row)| row.iter().sum::<f64>())
        .collect();
    let finals = rescale_totals(&sums, params)?;

    let mut teams = Vec::with_capacity(sums.len());
    for (team_idx, (team, row)) in normalized.scores.rows().enumerate() {
        let absolute = if params.keep_absolute {
            Some(scores.row(team_idx).to_vec())
        } else {
            None
        };
        teams.push(TeamResult {
            team: team.to_string(),
            total: finals[team_idx],
            normalized_sum: sums[team_idx],
            category_scores: row.to_vec(),
            absolute,
        });
    }

    tracing::info!(
        "aggregated {} teams over {} categories (max points {})",
        teams.len(),
        scores.n_categories(),
        params.max_points
    );

    Ok(TeamResults {
        categories: scores.categories().to_vec(),
        max_points: params.max_points,
        stats: normalized.stats,
        teams,
    })
}

/// Min-max rescale of team totals into `[0, max_points]`.
pub fn rescale_totals(totals: &[f64], params: &ScoringParams) -> Result<Vec<f64>, ScoreError> {
    if totals.is_empty() {
        return Err(ScoreError::EmptyInput("no team totals to rescale"));
    }
    let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max != min {
        let span = max - min;
        return Ok(totals
            .iter()
            .map(|t| (t - min) / span * params.max_points)
            .collect());
    }

    match params.zero_spread {
        ZeroSpreadPolicy::Reject => Err(ScoreError::ZeroSpread),
        ZeroSpreadPolicy::Midpoint => {
            tracing::warn!(
                "all {} team totals are equal ({}); assigning midpoint {}",
                totals.len(),
                min,
                params.midpoint()
            );
            Ok(vec![params.midpoint(); totals.len()])
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
