use serde::Serialize;

use crate::model::directions::Direction;
use crate::model::matrix::ScoreMatrix;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub name: String,
    pub mean: f64,
    pub std_dev: f64,
    pub direction: Direction,
    /// All teams tied; every score in this category is the midpoint.
    pub zero_variance: bool,
}

/// Standardized scores, same shape as the raw matrix they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMatrix {
    pub scores: ScoreMatrix,
    pub stats: Vec<CategoryStats>,
    pub max_points: f64,
}

impl NormalizedMatrix {
    pub fn get(&self, team: &str, category: &str) -> Option<f64> {
        self.scores.get(team, category)
    }

    pub fn stats_for(&self, category: &str) -> Option<&CategoryStats> {
        self.stats.iter().find(|s| s.name == category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamResult {
    pub team: String,
    /// Final score in `[0, max_points]`.
    pub total: f64,
    /// Sum of the per-category standardized scores before rescaling.
    pub normalized_sum: f64,
    pub category_scores: Vec<f64>,
    /// Raw input scores, carried through for reporting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamResults {
    pub categories: Vec<String>,
    pub max_points: f64,
    pub stats: Vec<CategoryStats>,
    pub teams: Vec<TeamResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedTeam<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub result: &'a TeamResult,
}

impl TeamResults {
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, team: &str) -> Option<&TeamResult> {
        self.teams.iter().find(|t| t.team == team)
    }

    pub fn total(&self, team: &str) -> Option<f64> {
        self.get(team).map(|t| t.total)
    }

    /// Teams by final total, best first. Equal totals share a rank and keep
    /// input order.
    pub fn ranked(&self) -> Vec<RankedTeam<'_>> {
        let mut order: Vec<&TeamResult> = self.teams.iter().collect();
        order.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut out: Vec<RankedTeam<'_>> = Vec::with_capacity(order.len());
        for (idx, result) in order.into_iter().enumerate() {
            let rank = match out.last() {
                Some(prev) if prev.result.total == result.total => prev.rank,
                _ => idx + 1,
            };
            out.push(RankedTeam { rank, result });
        }
        out
    }
}
