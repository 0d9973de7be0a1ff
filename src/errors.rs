//! Errors
//!
//! Custom error types used throughout the `arbor` crate.
use thiserror::Error;

/// Errors that can occur while ingesting data or growing a tree.
#[derive(Debug, Error, PartialEq)]
pub enum ArborError {
    /// Unrecognized impurity criterion name.
    #[error("Invalid criterion {0}, expected one of {1}.")]
    InvalidCriterion(String, String),
    /// Number of feature rows does not match the number of labels.
    #[error("Features have {0} rows, but {1} labels were provided.")]
    ShapeMismatch(usize, usize),
    /// A row does not have the same number of features as the first row.
    #[error("Row {row} has {found} features, expected {expected}.")]
    RaggedRow { row: usize, expected: usize, found: usize },
    /// A value is not of the kind inferred for its column.
    #[error("Feature {feature} at row {row} does not match the kind of the column.")]
    MixedFeatureKind { feature: usize, row: usize },
    /// NaN value found in a numerical feature.
    #[error("A NaN value was found in feature {feature} at row {row}.")]
    NaNValueFound { row: usize, feature: usize },
    /// Labels must be non-negative integers.
    #[error("Label {label} at row {row} is not a non-negative integer.")]
    InvalidLabel { row: usize, label: i64 },
    /// No candidate split scored below the score ceiling.
    #[error("No split found for a group of {0} samples.")]
    NoSplitFound(usize),
    /// A leaf was requested for a group with no samples.
    #[error("Unable to assign a label to an empty group.")]
    EmptyGroup,
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to write configuration to file.
    #[error("Unable to write configuration to file: {0}")]
    UnableToWrite(String),
    /// Unable to read configuration from file.
    #[error("Unable to read configuration from a file {0}")]
    UnableToRead(String),
    /// Unable to build the thread pool used for parallel builds.
    #[error("Unable to build thread pool: {0}")]
    ThreadPool(String),
}
