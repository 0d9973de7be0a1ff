//! Splitter
//!
//! Partitioning of a dataset on a single feature test, and the exhaustive
//! search for the test with the lowest weighted impurity.
use crate::constants::UNIT_SCORE_CEILING;
use crate::data::{Dataset, FeatureKind, FeatureValue};
use crate::errors::ArborError;
use crate::impurity::{weighted_impurity, Criterion};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Initial best score of the split search. A candidate is only kept when it
/// scores strictly below this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreCeiling {
    /// Seed the search with 1. Entropy with more than two classes can exceed
    /// this, in which case no split is ever registered.
    #[default]
    Unit,
    /// Seed the search with positive infinity, any candidate is registered.
    Unbounded,
}

impl ScoreCeiling {
    pub fn value(&self) -> f64 {
        match self {
            ScoreCeiling::Unit => UNIT_SCORE_CEILING,
            ScoreCeiling::Unbounded => f64::INFINITY,
        }
    }
}

/// The best split of a group, with the two groups it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo {
    pub feature: usize,
    pub value: FeatureValue,
    pub score: f64,
    /// Samples failing the test.
    pub left: Dataset,
    /// Samples passing the test.
    pub right: Dataset,
}

/// Whether a value passes the test of a split, sending it right.
///
/// Numerical features pass when `value >= split_value` under IEEE
/// comparison, categorical features pass when `value == split_value`. A value
/// of the other kind than the split value never passes.
#[inline]
pub fn passes(kind: FeatureKind, value: &FeatureValue, split_value: &FeatureValue) -> bool {
    match kind {
        FeatureKind::Numerical => match (value.as_f64(), split_value.as_f64()) {
            (Some(v), Some(s)) => v >= s,
            _ => false,
        },
        FeatureKind::Categorical => value == split_value,
    }
}

fn check_feature(data: &Dataset, feature: usize) -> Result<(), ArborError> {
    if feature >= data.n_features() {
        Err(ArborError::InvalidParameter(
            "feature".to_string(),
            format!("index below {}", data.n_features()),
            feature.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Divide a dataset into the samples failing (left) and passing (right) the
/// test `feature` against `value`. Labels travel with their rows.
pub fn partition(data: &Dataset, feature: usize, value: &FeatureValue) -> Result<(Dataset, Dataset), ArborError> {
    check_feature(data, feature)?;
    let kind = data.kind(feature);
    let (mut left_rows, mut left_labels) = (Vec::new(), Vec::new());
    let (mut right_rows, mut right_labels) = (Vec::new(), Vec::new());
    for (row, &label) in data.rows().iter().zip(data.labels()) {
        if passes(kind, &row[feature], value) {
            right_rows.push(row.clone());
            right_labels.push(label);
        } else {
            left_rows.push(row.clone());
            left_labels.push(label);
        }
    }
    Ok((
        Dataset::from_parts(left_rows, left_labels, data.shared_kinds()),
        Dataset::from_parts(right_rows, right_labels, data.shared_kinds()),
    ))
}

/// Labels only version of `partition`, used to score candidates.
fn partition_labels(data: &Dataset, feature: usize, value: &FeatureValue) -> (Vec<usize>, Vec<usize>) {
    let kind = data.kind(feature);
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (row, &label) in data.rows().iter().zip(data.labels()) {
        if passes(kind, &row[feature], value) {
            right.push(label);
        } else {
            left.push(label);
        }
    }
    (left, right)
}

/// Lowest scoring value of one feature, if any scores below `ceiling`.
/// Ties keep the smallest value.
fn best_value_for_feature(
    data: &Dataset,
    feature: usize,
    criterion: Criterion,
    ceiling: f64,
) -> Option<(FeatureValue, f64)> {
    let mut best = None;
    let mut best_score = ceiling;
    for value in data.distinct_values(feature) {
        let (left, right) = partition_labels(data, feature, &value);
        let score = weighted_impurity(&left, &right, criterion);
        if score < best_score {
            best_score = score;
            best = Some(value);
        }
    }
    best.map(|v| (v, best_score))
}

/// Exhaustively search every feature and every distinct value of it for the
/// split with the lowest weighted impurity.
///
/// Candidates are visited feature by feature, values in ascending order, and
/// only a strictly lower score replaces the current best, so ties keep the
/// earliest candidate. With `parallel` the features are scanned on the rayon
/// pool and reduced in feature order, giving the same result.
pub fn find_best_split(
    data: &Dataset,
    criterion: Criterion,
    ceiling: ScoreCeiling,
    parallel: bool,
) -> Result<SplitInfo, ArborError> {
    let seed = ceiling.value();
    let per_feature: Vec<Option<(FeatureValue, f64)>> = if parallel {
        (0..data.n_features())
            .into_par_iter()
            .map(|f| best_value_for_feature(data, f, criterion, seed))
            .collect()
    } else {
        (0..data.n_features())
            .map(|f| best_value_for_feature(data, f, criterion, seed))
            .collect()
    };

    let mut best: Option<(usize, FeatureValue)> = None;
    let mut best_score = seed;
    for (feature, candidate) in per_feature.into_iter().enumerate() {
        if let Some((value, score)) = candidate {
            if score < best_score {
                best_score = score;
                best = Some((feature, value));
            }
        }
    }

    let (feature, value) = best.ok_or(ArborError::NoSplitFound(data.n_rows()))?;
    let (left, right) = partition(data, feature, &value)?;
    Ok(SplitInfo {
        feature,
        value,
        score: best_score,
        left,
        right,
    })
}
