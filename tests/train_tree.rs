use arbor::impurity::{entropy, gini_impurity, weighted_impurity};
use arbor::splitter::{find_best_split, partition};
use arbor::utils::precision_round;
use arbor::{train_tree, ArborError, Criterion, Dataset, DecisionTree, FeatureValue, Matrix, Node, ScoreCeiling};

fn jobs() -> (Vec<Vec<FeatureValue>>, Vec<i64>) {
    let rows = vec![
        vec!["tech".into(), "professional".into()],
        vec!["fashion".into(), "student".into()],
        vec!["fashion".into(), "professional".into()],
        vec!["sports".into(), "student".into()],
        vec!["tech".into(), "student".into()],
        vec!["tech".into(), "retired".into()],
        vec!["sports".into(), "professional".into()],
    ];
    (rows, vec![1, 0, 0, 0, 1, 0, 1])
}

/// Feature and value of every internal node, in pre-order.
fn structure(node: &Node, out: &mut Vec<(usize, FeatureValue)>) {
    if let Some(internal) = node.as_internal() {
        out.push((internal.feature(), internal.value().clone()));
        for child in [internal.left(), internal.right()].into_iter().flatten() {
            structure(child, out);
        }
    }
}

#[test]
fn test_reference_impurities() {
    let labels = [1, 1, 0, 1, 0];
    assert_eq!(precision_round(gini_impurity(&labels), 4), 0.48);
    assert_eq!(precision_round(entropy(&labels), 4), 0.971);
    assert_eq!(precision_round(weighted_impurity(&[1, 0, 1], &[0, 1], Criterion::Gini), 4), 0.4667);
}

#[test]
fn test_jobs_tree_structure_is_stable() {
    let (rows, labels) = jobs();
    let mut expected = Vec::new();
    structure(&train_tree(rows.clone(), &labels, 2, 2, "gini").unwrap(), &mut expected);
    assert_eq!(
        expected,
        vec![(0, FeatureValue::from("fashion")), (1, FeatureValue::from("professional"))]
    );
    for _ in 0..10 {
        let mut again = Vec::new();
        structure(&train_tree(rows.clone(), &labels, 2, 2, "gini").unwrap(), &mut again);
        assert_eq!(again, expected);
    }
}

#[test]
fn test_monotone_feature_is_found() {
    // Column major: the first column is noise, the second decides the label.
    let values = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
    let m = Matrix::new(&values, 8, 2);
    let data = Dataset::from_matrix(&m, &[0, 0, 0, 0, 1, 1, 1, 1]).unwrap();
    let split = find_best_split(&data, Criterion::Entropy, ScoreCeiling::Unit, false).unwrap();
    assert_eq!(split.feature, 1);
    assert_eq!(split.value, FeatureValue::Numerical(50.0));
    assert_eq!(split.score, 0.0);
}

#[test]
fn test_partition_round_trip() {
    let (rows, labels) = jobs();
    let data = Dataset::new(rows, &labels).unwrap();
    for feature in 0..data.n_features() {
        for value in data.distinct_values(feature) {
            let (left, right) = partition(&data, feature, &value).unwrap();
            let mut union: Vec<String> = left
                .rows()
                .iter()
                .zip(left.labels())
                .chain(right.rows().iter().zip(right.labels()))
                .map(|(r, l)| format!("{:?}{}", r, l))
                .collect();
            let mut original: Vec<String> = data
                .rows()
                .iter()
                .zip(data.labels())
                .map(|(r, l)| format!("{:?}{}", r, l))
                .collect();
            union.sort();
            original.sort();
            assert_eq!(union, original);
            assert!(right.rows().iter().all(|r| r[feature] == value));
            assert!(left.rows().iter().all(|r| r[feature] != value));
        }
    }
}

#[test]
fn test_fit_and_render() {
    let (rows, labels) = jobs();
    let data = Dataset::new(rows, &labels).unwrap();
    let mut tree = DecisionTree::new(2, 2, Criterion::Gini).unwrap();
    tree.fit(&data).unwrap();
    let rendered = tree.to_string();
    assert!(rendered.starts_with("|- X1 is not fashion\n"));
    assert_eq!(rendered.lines().count(), 7);
}

#[test]
fn test_errors_are_reported() {
    let (rows, labels) = jobs();
    assert!(matches!(
        train_tree(rows.clone(), &labels, 2, 2, "misclassification"),
        Err(ArborError::InvalidCriterion(..))
    ));
    assert!(matches!(
        train_tree(rows, &labels[1..], 2, 2, "gini"),
        Err(ArborError::ShapeMismatch(7, 6))
    ));
}
