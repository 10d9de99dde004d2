use super::tree::DecisionTree;
use crate::constants::ACCURACY_PRECISION;
use crate::data::{Dataset, FeatureMap};
use crate::errors::Id3Error;
use crate::metric::{accuracy, ConfusionMatrix};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Outcome of evaluating a fitted tree on a labeled dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Root-to-leaf paths of the tree, one per line.
    pub branches: String,
    /// Predicted label of every example, in dataset order.
    pub predictions: Vec<String>,
    /// Fraction of correctly predicted examples.
    pub accuracy: f64,
    pub confusion_matrix: ConfusionMatrix,
}

impl Prediction {
    pub fn to_json(&self) -> Result<String, Id3Error> {
        serde_json::to_string_pretty(self).map_err(|e| Id3Error::Serialization(format!("prediction: {}", e)))
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[BRANCHES]:")?;
        write!(f, "{}", self.branches)?;
        writeln!(f, "[PREDICTIONS]: {}", self.predictions.join(" "))?;
        writeln!(f, "[ACCURACY]: {:.*}", ACCURACY_PRECISION, self.accuracy)?;
        writeln!(f, "[CONFUSION_MATRIX]: ")?;
        write!(f, "{}", self.confusion_matrix)
    }
}

impl DecisionTree {
    /// Predict the label of a single example.
    pub fn classify(&self, example: &FeatureMap) -> Result<&str, Id3Error> {
        Ok(self.root()?.classify(example))
    }

    /// Predict the label of every example in the dataset, preserving order.
    pub fn predict(&self, data: &Dataset) -> Result<Vec<String>, Id3Error> {
        let root = self.root()?;
        Ok(data
            .examples()
            .par_iter()
            .map(|example| root.classify(&example.features).to_string())
            .collect())
    }

    /// Predict the dataset and score the predictions against its labels.
    pub fn evaluate(&self, data: &Dataset) -> Result<Prediction, Id3Error> {
        if data.is_empty() {
            return Err(Id3Error::EmptyDataset("accuracy".to_string()));
        }
        let predictions = self.predict(data)?;
        let expected = data.label_sample();
        let accuracy = accuracy(&expected, &predictions)?;

        // Predicted labels missing from the test set still get a row and a column.
        let mut label_space: BTreeSet<&str> = data.label_space();
        label_space.extend(predictions.iter().map(|p| p.as_str()));
        let confusion_matrix = ConfusionMatrix::new(label_space, &expected, &predictions)?;

        info!(
            "Predicted {} examples with accuracy {:.*}.",
            predictions.len(),
            ACCURACY_PRECISION,
            accuracy
        );
        Ok(Prediction {
            branches: self.branches()?,
            predictions,
            accuracy,
            confusion_matrix,
        })
    }
}
