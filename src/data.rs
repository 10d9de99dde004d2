//! Data
//!
//! The in-memory table of labeled categorical examples the tree is grown from.
//! Besides storage, a [`Dataset`] knows how to measure its own label impurity
//! and how to partition itself by the values of a feature.
use crate::constants::GAIN_TOLERANCE;
use crate::errors::Id3Error;
use crate::utils::{entropy, mode};
use hashbrown::{HashMap, HashSet};
use std::collections::BTreeSet;
use std::fmt;

/// Mapping from feature name to feature value.
pub type FeatureMap = HashMap<String, String>;

/// A single labeled observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub features: FeatureMap,
    pub label: String,
}

impl Example {
    pub fn new(features: FeatureMap, label: String) -> Self {
        Example { features, label }
    }

    /// Value of the feature, if the example has it.
    pub fn feature(&self, name: &str) -> Option<&str> {
        self.features.get(name).map(|v| v.as_str())
    }
}

/// Table of examples sharing one schema of feature names and a class label.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    feature_names: Vec<String>,
    label_name: String,
    examples: Vec<Example>,
}

impl Dataset {
    /// Create an empty dataset from a header row, the last column is the class label.
    pub fn new<S: AsRef<str>>(header: &[S]) -> Result<Self, Id3Error> {
        let (label_name, feature_names) = header
            .split_last()
            .ok_or_else(|| Id3Error::InvalidHeader("the header has no columns".to_string()))?;
        Dataset::with_schema(
            feature_names.iter().map(|f| f.as_ref().to_string()).collect(),
            label_name.as_ref().to_string(),
        )
    }

    /// Create an empty dataset from feature names and a label name.
    pub fn with_schema(feature_names: Vec<String>, label_name: String) -> Result<Self, Id3Error> {
        {
            let mut seen = HashSet::with_capacity(feature_names.len() + 1);
            for name in feature_names.iter().chain(std::iter::once(&label_name)) {
                if !seen.insert(name.as_str()) {
                    return Err(Id3Error::InvalidHeader(format!("column {} is repeated", name)));
                }
            }
        }
        Ok(Dataset {
            feature_names,
            label_name,
            examples: Vec::new(),
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Append an example, feature values are matched positionally with the feature names.
    /// Identical examples are kept, every observation counts.
    pub fn add_example<S: AsRef<str>>(&mut self, feature_values: &[S], label: &str) -> Result<(), Id3Error> {
        if feature_values.len() != self.feature_names.len() {
            return Err(Id3Error::Arity {
                expected: self.feature_names.len(),
                found: feature_values.len(),
            });
        }
        let features = self
            .feature_names
            .iter()
            .cloned()
            .zip(feature_values.iter().map(|v| v.as_ref().to_string()))
            .collect();
        self.examples.push(Example::new(features, label.to_string()));
        Ok(())
    }

    /// Labels of all examples, in example order.
    pub fn label_sample(&self) -> Vec<&str> {
        self.labels().collect()
    }

    fn labels(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(|e| e.label.as_str())
    }

    /// Distinct labels present in the dataset, sorted.
    pub fn label_space(&self) -> BTreeSet<&str> {
        self.labels().collect()
    }

    /// Label with the highest count, ties are broken by the smallest label.
    pub fn most_frequent_label(&self) -> Result<&str, Id3Error> {
        mode(self.labels()).ok_or_else(|| Id3Error::EmptyDataset("the most frequent label".to_string()))
    }

    /// Shannon entropy (base 2) of the label distribution.
    pub fn entropy(&self) -> Result<f64, Id3Error> {
        entropy(self.labels())
    }

    /// Partition the examples by the values observed for `feature_name`.
    ///
    /// Groups come in the order their value is first seen. Each group is a fresh
    /// dataset with the feature column removed from the schema and every example.
    pub fn group_by_feature(&self, feature_name: &str) -> Result<Vec<(String, Dataset)>, Id3Error> {
        if !self.feature_names.iter().any(|f| f == feature_name) {
            return Err(Id3Error::UnknownFeature(feature_name.to_string()));
        }
        let feature_names: Vec<String> = self
            .feature_names
            .iter()
            .filter(|f| f.as_str() != feature_name)
            .cloned()
            .collect();

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(String, Dataset)> = Vec::new();
        for example in &self.examples {
            let value = example
                .feature(feature_name)
                .ok_or_else(|| Id3Error::UnknownFeature(feature_name.to_string()))?;
            let idx = *index.entry(value).or_insert_with(|| {
                groups.push((
                    value.to_string(),
                    Dataset {
                        feature_names: feature_names.clone(),
                        label_name: self.label_name.clone(),
                        examples: Vec::new(),
                    },
                ));
                groups.len() - 1
            });
            let features = example
                .features
                .iter()
                .filter(|(name, _)| name.as_str() != feature_name)
                .map(|(name, v)| (name.clone(), v.clone()))
                .collect();
            groups[idx].1.examples.push(Example::new(features, example.label.clone()));
        }
        Ok(groups)
    }

    /// Examples having `feature_value` for `feature_name`, with that column removed.
    pub fn filter_by_feature(&self, feature_name: &str, feature_value: &str) -> Result<Option<Dataset>, Id3Error> {
        Ok(self
            .group_by_feature(feature_name)?
            .into_iter()
            .find(|(value, _)| value == feature_value)
            .map(|(_, dataset)| dataset))
    }

    /// Expected reduction of entropy from partitioning by `feature_name`.
    pub fn information_gain(&self, feature_name: &str) -> Result<f64, Id3Error> {
        let total_entropy = self.entropy()?;
        let n = self.len() as f64;
        let mut remainder = 0.0;
        for (_, group) in self.group_by_feature(feature_name)? {
            remainder += group.entropy()? * group.len() as f64 / n;
        }
        // Gain is never negative, clamp rounding noise.
        Ok((total_entropy - remainder).max(0.0))
    }

    /// Feature with the highest information gain, ties are broken by the smallest name.
    pub fn most_discriminatory_feature(&self) -> Result<&str, Id3Error> {
        let mut names: Vec<&str> = self.feature_names.iter().map(|f| f.as_str()).collect();
        names.sort_unstable();
        let mut best: Option<(&str, f64)> = None;
        for name in names {
            let gain = self.information_gain(name)?;
            match best {
                Some((_, best_gain)) if gain <= best_gain + GAIN_TOLERANCE => {}
                _ => best = Some((name, gain)),
            }
        }
        best.map(|(name, _)| name).ok_or(Id3Error::NoFeatures)
    }

    /// Whether two examples share all feature values but disagree on the label.
    pub fn has_conflicts(&self) -> bool {
        let mut seen: HashMap<Vec<&str>, &str> = HashMap::with_capacity(self.len());
        for example in &self.examples {
            let key: Vec<&str> = self
                .feature_names
                .iter()
                .map(|f| example.feature(f).unwrap_or_default())
                .collect();
            match seen.get(&key) {
                Some(label) if *label != example.label => return true,
                Some(_) => {}
                None => {
                    seen.insert(key, example.label.as_str());
                }
            }
        }
        false
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Features: {}", self.feature_names.join(", "))?;
        writeln!(f, "Class label: {}", self.label_name)?;
        write!(f, "Examples: {}", self.examples.len())?;
        for example in &self.examples {
            let values: Vec<String> = self
                .feature_names
                .iter()
                .map(|name| format!("{}={}", name, example.feature(name).unwrap_or_default()))
                .collect();
            write!(f, "\n{} -> {}", values.join(" "), example.label)?;
        }
        Ok(())
    }
}
