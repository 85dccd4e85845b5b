use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::error::ScoreError;

/// Half-width of the z-score window mapped onto `[0, max_points]`.
pub const Z_WINDOW: f64 = 3.0;
/// Full width of the z-score window.
pub const Z_SPAN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    pub fn from_higher_is_better(flag: bool) -> Self {
        if flag {
            Direction::HigherIsBetter
        } else {
            Direction::LowerIsBetter
        }
    }

    pub fn higher_is_better(self) -> bool {
        matches!(self, Direction::HigherIsBetter)
    }

    /// Maps a z-score onto `[0, max_points]` for `|z| <= 3`. Larger `|z|`
    /// lands outside the range and is left unclamped.
    pub fn scale(self, z: f64, max_points: f64) -> f64 {
        match self {
            Direction::HigherIsBetter => (z + Z_WINDOW) / Z_SPAN * max_points,
            Direction::LowerIsBetter => (Z_WINDOW - z) / Z_SPAN * max_points,
        }
    }
}

/// Category → preferred direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionMap {
    entries: BTreeMap<String, Direction>,
}

impl DirectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        flags
            .into_iter()
            .map(|(name, flag)| (name, Direction::from_higher_is_better(flag)))
            .collect()
    }

    /// Returns the previous direction if the category was already present.
    pub fn insert(&mut self, category: impl Into<String>, direction: Direction) -> Option<Direction> {
        self.entries.insert(category.into(), direction)
    }

    pub fn get(&self, category: &str) -> Option<Direction> {
        self.entries.get(category).copied()
    }

    pub fn require(&self, category: &str) -> Result<Direction, ScoreError> {
        self.get(category).ok_or_else(|| ScoreError::MissingDirection {
            category: category.to_string(),
        })
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Direction)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, Direction)> for DirectionMap {
    fn from_iter<T: IntoIterator<Item = (S, Direction)>>(iter: T) -> Self {
        let mut map = DirectionMap::new();
        for (name, direction) in iter {
            map.insert(name, direction);
        }
        map
    }
}
