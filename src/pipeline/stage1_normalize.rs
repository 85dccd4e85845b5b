use crate::model::directions::{Direction, DirectionMap};
use crate::model::error::ScoreError;
use crate::model::matrix::ScoreMatrix;
use crate::model::params::{SchemaMode, ScoringParams, ZeroSpreadPolicy};
use crate::model::results::{CategoryStats, NormalizedMatrix};

/// Standardizes every category independently into `[0, max_points]`.
///
/// The raw matrix is only borrowed; the result owns fresh storage.
/// Directions are resolved for all categories before any statistic is
/// computed, so a missing entry fails the whole call up front.
pub fn normalize(
    scores: &ScoreMatrix,
    directions: &DirectionMap,
    params: &ScoringParams,
) -> Result<NormalizedMatrix, ScoreError> {
    params.validate()?;
    if scores.n_teams() == 0 {
        return Err(ScoreError::EmptyInput("score matrix has no teams"));
    }
    let resolved = resolve_directions(scores, directions, params.schema)?;

    let n_teams = scores.n_teams();
    let n_categories = scores.n_categories();
    let mut values = vec![vec![0.0f64; n_categories]; n_teams];
    let mut stats = Vec::with_capacity(n_categories);

    for (cat_idx, (name, direction)) in scores
        .categories()
        .iter()
        .zip(resolved.iter().copied())
        .enumerate()
    {
        let column = scores.column(cat_idx);
        let (mean, std_dev) = mean_std(&column);

        if std_dev == 0.0 {
            match params.zero_spread {
                ZeroSpreadPolicy::Reject => {
                    return Err(ScoreError::ZeroVariance {
                        category: name.clone(),
                    });
                }
                ZeroSpreadPolicy::Midpoint => {
                    tracing::warn!(
                        "category '{}' has no variance across {} teams; assigning midpoint {}",
                        name,
                        n_teams,
                        params.midpoint()
                    );
                }
            }
        }

        for (team_idx, &v) in column.iter().enumerate() {
            values[team_idx][cat_idx] = standardize(v, mean, std_dev, direction, params.max_points);
        }

        tracing::debug!(
            "category '{}': mean={} std_dev={} direction={:?}",
            name,
            mean,
            std_dev,
            direction
        );
        stats.push(CategoryStats {
            name: name.clone(),
            mean,
            std_dev,
            direction,
            zero_variance: std_dev == 0.0,
        });
    }

    Ok(NormalizedMatrix {
        scores: scores.with_values(values),
        stats,
        max_points: params.max_points,
    })
}

/// Mean and population standard deviation (divisor `n`).
///
/// A column of identical values reports a standard deviation of exactly
/// zero, even where summation rounding would leave a residue. Deviations
/// are divided by the largest one before squaring so distinct values near
/// the bottom of the `f64` range keep a nonzero spread.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    let Some(&first) = values.first() else {
        return (0.0, 0.0);
    };
    if values.iter().all(|&v| v == first) {
        return (first, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let scale = values.iter().map(|v| (v - mean).abs()).fold(0.0f64, f64::max);
    if scale == 0.0 {
        return (mean, 0.0);
    }
    let variance = values
        .iter()
        .map(|v| ((v - mean) / scale).powi(2))
        .sum::<f64>()
        / n;
    (mean, scale * variance.sqrt())
}

/// Single-value standardization. A zero `std_dev` yields the midpoint.
pub fn standardize(value: f64, mean: f64, std_dev: f64, direction: Direction, max_points: f64) -> f64 {
    if std_dev == 0.0 {
        return max_points / 2.0;
    }
    let z = (value - mean) / std_dev;
    direction.scale(z, max_points)
}

fn resolve_directions(
    scores: &ScoreMatrix,
    directions: &DirectionMap,
    schema: SchemaMode,
) -> Result<Vec<Direction>, ScoreError> {
    let resolved = scores
        .categories()
        .iter()
        .map(|name| directions.require(name))
        .collect::<Result<Vec<_>, _>>()?;

    for (name, _) in directions.iter() {
        if scores.category_index(name).is_some() {
            continue;
        }
        match schema {
            SchemaMode::Strict => {
                return Err(ScoreError::UnknownDirection {
                    category: name.to_string(),
                });
            }
            SchemaMode::Lenient => {
                tracing::warn!("direction for '{}' matches no scored category; ignoring", name);
            }
        }
    }

    Ok(resolved)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
