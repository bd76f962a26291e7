use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::error::{VizError, VizResult};

/// Square, symmetric table of pairwise correlation coefficients.
///
/// Keys keep their insertion order so row/column layout is stable across
/// rebuilds. The diagonal is always exactly `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    keys: IndexSet<String>,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Builds a matrix by evaluating `compute(row, col)` once for every
    /// `row < col` and mirroring the result.
    pub fn from_upper_triangle<F>(keys: &[&str], mut compute: F) -> VizResult<Self>
    where
        F: FnMut(usize, usize) -> VizResult<f64>,
    {
        let mut key_set = IndexSet::with_capacity(keys.len());
        for key in keys {
            if !key_set.insert((*key).to_owned()) {
                return Err(VizError::InvalidData(format!(
                    "duplicate correlation key `{key}`"
                )));
            }
        }

        let size = key_set.len();
        let mut values = vec![0.0; size * size];
        for row in 0..size {
            values[row * size + row] = 1.0;
            for col in (row + 1)..size {
                let coefficient = compute(row, col)?;
                if !coefficient.is_finite() || !(-1.0..=1.0).contains(&coefficient) {
                    return Err(VizError::InvalidData(format!(
                        "correlation `{}`/`{}` must be finite and in [-1, 1], got {coefficient}",
                        keys[row], keys[col]
                    )));
                }
                values[row * size + col] = coefficient;
                values[col * size + row] = coefficient;
            }
        }

        Ok(Self {
            keys: key_set,
            values,
        })
    }

    /// Builds a matrix from explicitly stated pairs. Every unordered pair of
    /// distinct keys must be present (in either order).
    pub fn from_pairs(keys: &[&str], pairs: &[(&str, &str, f64)]) -> VizResult<Self> {
        Self::from_upper_triangle(keys, |row, col| {
            let (left, right) = (keys[row], keys[col]);
            pairs
                .iter()
                .find(|(a, b, _)| (*a == left && *b == right) || (*a == right && *b == left))
                .map(|(_, _, value)| *value)
                .ok_or_else(|| {
                    VizError::InvalidData(format!("missing correlation for `{left}`/`{right}`"))
                })
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.keys.get_index(index).map(String::as_str)
    }

    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    #[must_use]
    pub fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        let size = self.len();
        if row >= size || col >= size {
            return None;
        }
        Some(self.values[row * size + col])
    }

    /// Looks up the coefficient for `(row, col)` by key.
    #[must_use]
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        self.value_at(self.index_of(row)?, self.index_of(col)?)
    }

    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let size = self.len();
        (0..size).all(|row| {
            self.values[row * size + row] == 1.0
                && (0..size).all(|col| self.values[row * size + col] == self.values[col * size + row])
        })
    }

    /// Off-diagonal pair with the largest absolute coefficient.
    #[must_use]
    pub fn strongest_pair(&self) -> Option<(&str, &str, f64)> {
        let size = self.len();
        (0..size)
            .flat_map(|row| ((row + 1)..size).map(move |col| (row, col)))
            .max_by_key(|&(row, col)| OrderedFloat(self.values[row * size + col].abs()))
            .and_then(|(row, col)| {
                Some((
                    self.key_at(row)?,
                    self.key_at(col)?,
                    self.values[row * size + col],
                ))
            })
    }
}
