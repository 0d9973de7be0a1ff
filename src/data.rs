//! Data
//!
//! Typed feature values and the labeled dataset the tree learner consumes.
//! The kind of every column is resolved once, when the dataset is created,
//! and travels with every subset produced by a split.
use crate::errors::ArborError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Logical type of a feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Ordered values, split with `<` / `>=`.
    Numerical,
    /// Unordered values, split with equality.
    Categorical,
}

/// A single cell of the feature table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureValue {
    Numerical(f64),
    Categorical(String),
}

impl FeatureValue {
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureValue::Numerical(_) => FeatureKind::Numerical,
            FeatureValue::Categorical(_) => FeatureKind::Categorical,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Numerical(v) => Some(*v),
            FeatureValue::Categorical(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FeatureValue::Numerical(_) => None,
            FeatureValue::Categorical(v) => Some(v.as_str()),
        }
    }

    /// Total order used to sort the candidate values of a column.
    /// Numerical values sort before categorical ones, although a
    /// validated column never mixes the two.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FeatureValue::Numerical(a), FeatureValue::Numerical(b)) => a.total_cmp(b),
            (FeatureValue::Categorical(a), FeatureValue::Categorical(b)) => a.cmp(b),
            (FeatureValue::Numerical(_), FeatureValue::Categorical(_)) => Ordering::Less,
            (FeatureValue::Categorical(_), FeatureValue::Numerical(_)) => Ordering::Greater,
        }
    }
}

impl Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeatureValue::Numerical(v) => write!(f, "{}", v),
            FeatureValue::Categorical(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Numerical(v)
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Numerical(v as f64)
    }
}

impl From<i32> for FeatureValue {
    fn from(v: i32) -> Self {
        FeatureValue::Numerical(f64::from(v))
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        FeatureValue::Categorical(v.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(v: String) -> Self {
        FeatureValue::Categorical(v)
    }
}

/// Contiguous column major matrix of numerical features.
///
/// Used as a convenience input for purely numerical datasets, see
/// [`Dataset::from_matrix`].
pub struct Matrix<'a, T> {
    /// The raw data stored in a single slice.
    pub data: &'a [T],
    /// Number of rows in the matrix.
    pub rows: usize,
    /// Number of columns in the matrix.
    pub cols: usize,
}

impl<'a, T> Matrix<'a, T> {
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        Matrix { data, rows, cols }
    }

    /// Get access to a row of the data, as an iterator.
    pub fn get_row_iter(&self, row: usize) -> std::iter::StepBy<std::iter::Skip<std::slice::Iter<'a, T>>> {
        self.data.iter().skip(row).step_by(self.rows)
    }
}

/// Labeled tabular data.
///
/// Rows and labels are positionally aligned. Every subset produced by the
/// partitioner owns its rows outright, so children never alias their parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Vec<FeatureValue>>,
    labels: Vec<usize>,
    kinds: Arc<[FeatureKind]>,
}

impl Dataset {
    /// Create a dataset from typed rows and integer labels.
    ///
    /// The kind of each column is taken from its value in the first row.
    /// Fails if the number of rows and labels differ, if a label is negative,
    /// if rows have different widths, if a value disagrees with its column's
    /// kind, or if a numerical value is NaN.
    pub fn new(rows: Vec<Vec<FeatureValue>>, labels: &[i64]) -> Result<Self, ArborError> {
        if rows.len() != labels.len() {
            return Err(ArborError::ShapeMismatch(rows.len(), labels.len()));
        }
        let labels = labels
            .iter()
            .enumerate()
            .map(|(row, &label)| usize::try_from(label).map_err(|_| ArborError::InvalidLabel { row, label }))
            .collect::<Result<Vec<usize>, ArborError>>()?;

        let kinds: Vec<FeatureKind> = match rows.first() {
            Some(first) => first.iter().map(FeatureValue::kind).collect(),
            None => Vec::new(),
        };
        for (row, values) in rows.iter().enumerate() {
            if values.len() != kinds.len() {
                return Err(ArborError::RaggedRow {
                    row,
                    expected: kinds.len(),
                    found: values.len(),
                });
            }
            for (feature, (value, kind)) in values.iter().zip(kinds.iter()).enumerate() {
                if value.kind() != *kind {
                    return Err(ArborError::MixedFeatureKind { feature, row });
                }
                if let FeatureValue::Numerical(v) = value {
                    if v.is_nan() {
                        return Err(ArborError::NaNValueFound { row, feature });
                    }
                }
            }
        }

        Ok(Dataset {
            rows,
            labels,
            kinds: kinds.into(),
        })
    }

    /// Create a purely numerical dataset from a column major matrix.
    pub fn from_matrix(data: &Matrix<f64>, labels: &[i64]) -> Result<Self, ArborError> {
        let rows = (0..data.rows)
            .map(|i| data.get_row_iter(i).map(|v| FeatureValue::Numerical(*v)).collect())
            .collect();
        Dataset::new(rows, labels)
    }

    /// Build a subset that shares the column kinds of its parent.
    pub(crate) fn from_parts(rows: Vec<Vec<FeatureValue>>, labels: Vec<usize>, kinds: Arc<[FeatureKind]>) -> Self {
        Dataset { rows, labels, kinds }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_features(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<FeatureValue>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &[FeatureValue] {
        &self.rows[i]
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }

    pub(crate) fn shared_kinds(&self) -> Arc<[FeatureKind]> {
        Arc::clone(&self.kinds)
    }

    pub fn kind(&self, feature: usize) -> FeatureKind {
        self.kinds[feature]
    }

    /// Every distinct value observed in a column, sorted ascending.
    pub fn distinct_values(&self, feature: usize) -> Vec<FeatureValue> {
        let mut values: Vec<FeatureValue> = self.rows.iter().map(|r| r[feature].clone()).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();
        values
    }

    /// Number of distinct labels present.
    pub fn n_classes(&self) -> usize {
        let mut labels = self.labels.clone();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }

    /// Split the dataset back into rows and labels.
    pub fn into_parts(self) -> (Vec<Vec<FeatureValue>>, Vec<usize>) {
        (self.rows, self.labels)
    }
}
