use std::collections::HashSet;

use crate::model::error::ScoreError;

/// Rectangular team × category table of raw scores.
///
/// Teams and categories keep insertion order. Every row has one value per
/// category, team ids are unique and all values are finite; the constructors
/// reject anything else, so downstream stages never re-check the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    categories: Vec<String>,
    teams: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    /// Empty matrix with a fixed category layout. Fails on zero or duplicate
    /// categories.
    pub fn new<S: Into<String>>(
        categories: impl IntoIterator<Item = S>,
    ) -> Result<Self, ScoreError> {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return Err(ScoreError::EmptyInput("score matrix has no categories"));
        }
        let mut seen = HashSet::with_capacity(categories.len());
        for name in &categories {
            if !seen.insert(name.as_str()) {
                return Err(ScoreError::DuplicateCategory {
                    category: name.clone(),
                });
            }
        }
        Ok(Self {
            categories,
            teams: Vec::new(),
            values: Vec::new(),
        })
    }

    /// Builds a matrix from `(team, [(category, score)])` rows. The first row
    /// fixes the category order; later rows may list the same categories in
    /// any order.
    pub fn from_rows<I, T, C>(rows: I) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = (T, Vec<(C, f64)>)>,
        T: Into<String>,
        C: AsRef<str>,
    {
        let mut rows = rows.into_iter();
        let Some((first_team, first_scores)) = rows.next() else {
            return Err(ScoreError::EmptyInput("score matrix has no teams"));
        };
        let mut matrix = Self::new(first_scores.iter().map(|(c, _)| c.as_ref().to_string()))?;
        matrix.push_named(first_team, first_scores)?;
        for (team, scores) in rows {
            matrix.push_named(team, scores)?;
        }
        Ok(matrix)
    }

    /// Appends a row whose values follow [`ScoreMatrix::categories`] order.
    pub fn push_team(
        &mut self,
        team: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), ScoreError> {
        let team = team.into();
        if self.teams.iter().any(|t| *t == team) {
            return Err(ScoreError::DuplicateTeam { team });
        }
        if values.len() != self.categories.len() {
            return Err(ScoreError::RaggedRow {
                detail: format!(
                    "expected {} scores, found {}",
                    self.categories.len(),
                    values.len()
                ),
                team,
            });
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(ScoreError::NonFiniteScore {
                category: self.categories[idx].clone(),
                value: values[idx],
                team,
            });
        }
        self.teams.push(team);
        self.values.push(values);
        Ok(())
    }

    fn push_named<C: AsRef<str>>(
        &mut self,
        team: impl Into<String>,
        scores: Vec<(C, f64)>,
    ) -> Result<(), ScoreError> {
        let team = team.into();
        let mut slots: Vec<Option<f64>> = vec![None; self.categories.len()];
        for (category, value) in &scores {
            let category = category.as_ref();
            let Some(idx) = self.category_index(category) else {
                return Err(ScoreError::RaggedRow {
                    team,
                    detail: format!("unexpected category '{category}'"),
                });
            };
            if slots[idx].replace(*value).is_some() {
                return Err(ScoreError::DuplicateCategory {
                    category: category.to_string(),
                });
            }
        }
        let mut values = Vec::with_capacity(slots.len());
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(v) => values.push(v),
                None => {
                    return Err(ScoreError::RaggedRow {
                        team,
                        detail: format!("missing category '{}'", self.categories[idx]),
                    });
                }
            }
        }
        self.push_team(team, values)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn n_teams(&self) -> usize {
        self.teams.len()
    }

    pub fn n_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    pub fn team_index(&self, team: &str) -> Option<usize> {
        self.teams.iter().position(|t| t == team)
    }

    pub fn row(&self, team_idx: usize) -> &[f64] {
        &self.values[team_idx]
    }

    pub fn get(&self, team: &str, category: &str) -> Option<f64> {
        let t = self.team_index(team)?;
        let c = self.category_index(category)?;
        Some(self.values[t][c])
    }

    /// One category's values across all teams, in team order.
    pub fn column(&self, category_idx: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[category_idx]).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.teams
            .iter()
            .zip(self.values.iter())
            .map(|(team, row)| (team.as_str(), row.as_slice()))
    }

    /// Same teams and categories, new values. Only callable with a table of
    /// identical shape.
    pub(crate) fn with_values(&self, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(values.len(), self.teams.len());
        debug_assert!(values.iter().all(|r| r.len() == self.categories.len()));
        Self {
            categories: self.categories.clone(),
            teams: self.teams.clone(),
            values,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
