//! Metrics
//!
//! Evaluation of predicted labels against the expected ones.
use crate::errors::Id3Error;
use hashbrown::HashMap;
use serde::Serialize;
use std::fmt;

fn check_lengths<S: AsRef<str>, T: AsRef<str>>(expected: &[S], actual: &[T]) -> Result<(), Id3Error> {
    if expected.len() != actual.len() {
        return Err(Id3Error::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Ok(())
}

/// Fraction of positions where the actual label equals the expected one.
pub fn accuracy<S: AsRef<str>, T: AsRef<str>>(expected: &[S], actual: &[T]) -> Result<f64, Id3Error> {
    check_lengths(expected, actual)?;
    if expected.is_empty() {
        return Err(Id3Error::EmptyDataset("accuracy".to_string()));
    }
    let correct = expected
        .iter()
        .zip(actual)
        .filter(|&(e, a)| e.as_ref() == a.as_ref())
        .count();
    Ok(correct as f64 / expected.len() as f64)
}

/// Square table of counts, rows are expected labels and columns actual labels,
/// both in sorted label order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    matrix: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    pub fn new<L, S, T>(label_space: L, expected: &[S], actual: &[T]) -> Result<Self, Id3Error>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        check_lengths(expected, actual)?;
        let mut labels: Vec<String> = label_space.into_iter().map(|l| l.as_ref().to_string()).collect();
        labels.sort_unstable();
        labels.dedup();

        let mut matrix = vec![vec![0; labels.len()]; labels.len()];
        {
            let position: HashMap<&str, usize> = labels.iter().enumerate().map(|(i, l)| (l.as_str(), i)).collect();
            let index_of = |label: &str| {
                position
                    .get(label)
                    .copied()
                    .ok_or_else(|| Id3Error::UnknownLabel(label.to_string()))
            };
            for (e, a) in expected.iter().zip(actual) {
                let row = index_of(e.as_ref())?;
                let col = index_of(a.as_ref())?;
                matrix[row][col] += 1;
            }
        }
        Ok(ConfusionMatrix { labels, matrix })
    }

    /// Sorted labels indexing both rows and columns.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Count of examples expected to be `expected` and classified as `actual`.
    pub fn get(&self, expected: &str, actual: &str) -> Option<usize> {
        let row = self.labels.binary_search_by(|l| l.as_str().cmp(expected)).ok()?;
        let col = self.labels.binary_search_by(|l| l.as_str().cmp(actual)).ok()?;
        Some(self.matrix[row][col])
    }

    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Sum of the diagonal.
    pub fn correct(&self) -> usize {
        self.matrix.iter().enumerate().map(|(i, row)| row[i]).sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows: Vec<String> = self
            .matrix
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
            .collect();
        write!(f, "{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&["yes", "no", "yes", "no"], &["yes", "yes", "yes", "no"]).unwrap(), 0.75);
        assert_eq!(
            accuracy(&["yes"], &["yes", "no"]),
            Err(Id3Error::LengthMismatch { expected: 1, actual: 2 })
        );
        let empty: [&str; 0] = [];
        assert!(matches!(accuracy(&empty, &empty), Err(Id3Error::EmptyDataset(_))));
    }

    #[test]
    fn test_confusion_matrix() {
        let cm = ConfusionMatrix::new(["yes", "no"], &["yes", "no", "yes"], &["yes", "yes", "yes"]).unwrap();
        // Rows and columns are ordered no, yes.
        assert_eq!(cm.to_string(), "0 1\n0 2");
        assert_eq!(cm.labels(), &["no".to_string(), "yes".to_string()]);
        assert_eq!(cm.total(), 3);
        assert_eq!(cm.correct(), 2);
        assert_eq!(cm.get("no", "yes"), Some(1));
        assert_eq!(cm.get("no", "maybe"), None);
    }

    #[test]
    fn test_confusion_matrix_errors() {
        assert_eq!(
            ConfusionMatrix::new(["a", "b"], &["a", "b"], &["a"]),
            Err(Id3Error::LengthMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(
            ConfusionMatrix::new(["a", "b"], &["a", "b"], &["a", "c"]),
            Err(Id3Error::UnknownLabel("c".to_string()))
        );
    }

    #[test]
    fn test_confusion_matrix_repeated_labels() {
        let cm = ConfusionMatrix::new(["b", "a", "b", "a"], &["a", "b"], &["b", "b"]).unwrap();
        assert_eq!(cm.labels(), &["a".to_string(), "b".to_string()]);
        assert_eq!(cm.to_string(), "0 1\n0 1");
    }

    #[test]
    fn test_confusion_matrix_three_labels() {
        let cm = ConfusionMatrix::new(
            vec!["c".to_string(), "a".to_string(), "b".to_string()],
            &["a", "b", "c", "c"],
            &["a", "c", "c", "b"],
        )
        .unwrap();
        assert_eq!(cm.to_string(), "1 0 0\n0 0 1\n0 1 1");
        assert_eq!(cm.rows().len(), 3);
    }
}
