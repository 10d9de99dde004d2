//! Errors
//!
//! Custom error types used throughout the `id3_tree` crate.
use thiserror::Error;

/// Errors that can occur while building, evaluating or feeding a decision tree.
#[derive(Debug, Error, PartialEq)]
pub enum Id3Error {
    /// A statistic was requested over a dataset with no examples.
    #[error("Unable to compute {0} of an empty dataset.")]
    EmptyDataset(String),
    /// Feature name is not part of the dataset schema.
    #[error("Feature {0} is not a part of the dataset.")]
    UnknownFeature(String),
    /// Number of feature values does not match the number of feature names.
    #[error("Expected {expected} feature values, but {found} were provided.")]
    Arity { expected: usize, found: usize },
    /// Expected and actual label sequences differ in length.
    #[error("Expected and actual labels differ in length ({expected} != {actual}).")]
    LengthMismatch { expected: usize, actual: usize },
    /// Label is not a member of the label space.
    #[error("Label {0} is not a part of the label space.")]
    UnknownLabel(String),
    /// There is no feature left to split on.
    #[error("The dataset has no features to choose from.")]
    NoFeatures,
    /// The tree was used before `fit` was called.
    #[error("The decision tree has not been fitted yet.")]
    NotFitted,
    /// Dataset header can not be turned into a schema.
    #[error("Invalid dataset header: {0}")]
    InvalidHeader(String),
    /// Unable to read a dataset or a configuration.
    #[error("Unable to read from {0}")]
    UnableToRead(String),
    /// Unable to serialize a report.
    #[error("Unable to serialize {0}")]
    Serialization(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
}
