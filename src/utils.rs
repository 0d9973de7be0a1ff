use crate::errors::ArborError;
use std::collections::BTreeMap;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    items.join(", ")
}

/// Frequency count of the labels present, in ascending label order.
pub fn label_counts(labels: &[usize]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Most frequent label of a group.
///
/// Ties go to the smallest label, the first maximal count in label order.
pub fn majority_label(labels: &[usize]) -> Result<usize, ArborError> {
    let counts = label_counts(labels);
    let mut best: Option<(usize, usize)> = None;
    for (&label, &count) in counts.iter() {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label).ok_or(ArborError::EmptyGroup)
}

// Validation
pub fn validate_min_parameter(value: usize, min: usize, parameter: &str) -> Result<(), ArborError> {
    if value < min {
        Err(ArborError::InvalidParameter(
            parameter.to_string(),
            format!("integer greater than or equal to {}", min),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

#[inline]
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_counts() {
        let counts: Vec<(usize, usize)> = label_counts(&[1, 1, 0, 3]).into_iter().collect();
        assert_eq!(counts, vec![(0, 1), (1, 2), (3, 1)]);
        assert!(label_counts(&[]).is_empty());
    }

    #[test]
    fn test_label_counts_sparse_labels() {
        let big = 1_000_000_000_000;
        let counts = label_counts(&[big, 0, big]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&big], 2);
        assert_eq!(majority_label(&[big, 0, big, 0]).unwrap(), 0);
        assert_eq!(majority_label(&[big, 0, big]).unwrap(), big);
    }

    #[test]
    fn test_majority_label() {
        assert_eq!(majority_label(&[1, 1, 0, 1, 0]).unwrap(), 1);
        assert_eq!(majority_label(&[2]).unwrap(), 2);
        assert_eq!(majority_label(&[]), Err(ArborError::EmptyGroup));
    }

    #[test]
    fn test_majority_label_ties_to_smallest() {
        assert_eq!(majority_label(&[3, 1, 3, 1]).unwrap(), 1);
        assert_eq!(majority_label(&[2, 0, 0, 2, 5, 5]).unwrap(), 0);
    }

    #[test]
    fn test_majority_label_idempotent() {
        for labels in [vec![0, 1, 1], vec![4, 4, 2, 2, 3], vec![7]] {
            let label = majority_label(&labels).unwrap();
            assert_eq!(majority_label(&[label]).unwrap(), label);
        }
    }

    #[test]
    fn test_validate_min_parameter() {
        assert!(validate_min_parameter(1, 1, "max_depth").is_ok());
        let err = validate_min_parameter(0, 1, "max_depth").unwrap_err();
        assert!(matches!(err, ArborError::InvalidParameter(name, _, found) if name == "max_depth" && found == "0"));
    }

    #[test]
    fn test_precision_round() {
        assert_eq!(precision_round(0.46666666, 4), 0.4667);
    }
}
