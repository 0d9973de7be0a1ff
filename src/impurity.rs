//! Impurity
//!
//! Scores for the class label disorder of a group of samples, and the size
//! weighted combination of two groups that the split search minimizes.
use crate::errors::ArborError;
use crate::utils::{items_to_strings, label_counts};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Impurity function used to score candidate splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// `1 - sum(p_c^2)`
    #[default]
    Gini,
    /// `-sum(p_c * log2(p_c))`
    Entropy,
}

impl Criterion {
    /// Impurity of a group of labels under this criterion.
    pub fn impurity(&self, labels: &[usize]) -> f64 {
        match self {
            Criterion::Gini => gini_impurity(labels),
            Criterion::Entropy => entropy(labels),
        }
    }

    /// Largest impurity a group with `n_classes` classes can reach.
    pub fn max_impurity(&self, n_classes: usize) -> f64 {
        if n_classes == 0 {
            return 0.0;
        }
        let k = n_classes as f64;
        match self {
            Criterion::Gini => 1.0 - 1.0 / k,
            Criterion::Entropy => k.log2(),
        }
    }
}

impl FromStr for Criterion {
    type Err = ArborError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gini" => Ok(Criterion::Gini),
            "entropy" => Ok(Criterion::Entropy),
            _ => Err(ArborError::InvalidCriterion(
                s.to_string(),
                items_to_strings(vec!["gini", "entropy"]),
            )),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::Gini => "gini",
            Criterion::Entropy => "entropy",
        };
        write!(f, "{name}")
    }
}

/// Class fractions of the classes present in a group.
fn fractions(labels: &[usize]) -> impl Iterator<Item = f64> {
    let total = labels.len() as f64;
    label_counts(labels).into_values().map(move |c| c as f64 / total)
}

/// Gini impurity of a group of labels. An empty group is pure.
pub fn gini_impurity(labels: &[usize]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let correct: f64 = fractions(labels).map(|p| p * p).sum();
    (1.0 - correct).max(0.0)
}

/// Entropy, in bits, of a group of labels. An empty group is pure.
pub fn entropy(labels: &[usize]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let e: f64 = fractions(labels).map(|p| -p * p.log2()).sum();
    e.max(0.0)
}

/// Impurity of a split, each group weighted by its share of the samples.
pub fn weighted_impurity(left: &[usize], right: &[usize], criterion: Criterion) -> f64 {
    let total = (left.len() + right.len()) as f64;
    if total == 0.0 {
        return 0.0;
    }
    let wl = left.len() as f64 / total;
    let wr = right.len() as f64 / total;
    wl * criterion.impurity(left) + wr * criterion.impurity(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::precision_round;
    use approx::assert_relative_eq;

    #[test]
    fn test_gini_and_entropy_values() {
        let labels = [1, 1, 0, 1, 0];
        assert_eq!(precision_round(gini_impurity(&labels), 4), 0.48);
        assert_eq!(precision_round(entropy(&labels), 4), 0.971);
    }

    #[test]
    fn test_pure_and_empty_groups() {
        for criterion in [Criterion::Gini, Criterion::Entropy] {
            assert_eq!(criterion.impurity(&[]), 0.0);
            assert_eq!(criterion.impurity(&[3, 3, 3]), 0.0);
            assert!(criterion.impurity(&[3, 3, 2]) > 0.0);
        }
    }

    #[test]
    fn test_uniform_distribution_is_maximal() {
        let uniform = [0, 1, 2, 0, 1, 2];
        let skewed = [0, 0, 0, 0, 1, 2];
        for criterion in [Criterion::Gini, Criterion::Entropy] {
            assert_relative_eq!(criterion.impurity(&uniform), criterion.max_impurity(3), epsilon = 1e-12);
            assert!(criterion.impurity(&skewed) < criterion.impurity(&uniform));
        }
        assert_relative_eq!(entropy(&[0, 1]), 1.0);
        assert_relative_eq!(gini_impurity(&[0, 1]), 0.5);
    }

    #[test]
    fn test_weighted_impurity() {
        let w = weighted_impurity(&[1, 0, 1], &[0, 1], Criterion::Gini);
        assert_eq!(precision_round(w, 4), 0.4667);
        let w = weighted_impurity(&[1, 1], &[0, 0, 1], Criterion::Entropy);
        assert_eq!(precision_round(w, 4), 0.551);
    }

    #[test]
    fn test_weighted_impurity_perfect_separation() {
        for criterion in [Criterion::Gini, Criterion::Entropy] {
            assert_eq!(weighted_impurity(&[0, 0, 0], &[1, 1], criterion), 0.0);
        }
        assert_eq!(weighted_impurity(&[], &[], Criterion::Gini), 0.0);
    }

    #[test]
    fn test_impurity_of_large_labels() {
        let big = 1_000_000_000_000;
        assert_relative_eq!(gini_impurity(&[0, big]), 0.5);
        assert_relative_eq!(entropy(&[big, 0, big, 0]), 1.0);
        assert_eq!(entropy(&[big, big]), 0.0);
    }

    #[test]
    fn test_criterion_from_str() {
        assert_eq!("gini".parse::<Criterion>().unwrap(), Criterion::Gini);
        assert_eq!("Entropy".parse::<Criterion>().unwrap(), Criterion::Entropy);
        let err = "twoing".parse::<Criterion>().unwrap_err();
        assert_eq!(
            err,
            ArborError::InvalidCriterion("twoing".to_string(), "gini, entropy".to_string())
        );
        assert_eq!(Criterion::Entropy.to_string(), "entropy");
    }
}
