//! Property-based tests for dataset statistics and tree induction.

use id3_tree::{Dataset, DecisionTree};
use proptest::prelude::*;
use std::collections::HashMap;

const FEATURES: [&str; 3] = ["color", "shape", "size"];

/// Rows of three categorical features with small value sets and a label.
fn rows_strategy(max_rows: usize) -> impl Strategy<Value = Vec<(Vec<String>, String)>> {
    let row = (
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), FEATURES.len()),
        prop::sample::select(vec!["yes", "no", "maybe"]),
    )
        .prop_map(|(values, label)| (values.into_iter().map(String::from).collect(), label.to_string()));
    prop::collection::vec(row, 1..max_rows)
}

fn build_dataset(rows: &[(Vec<String>, String)]) -> Dataset {
    let header: Vec<&str> = FEATURES.iter().copied().chain(std::iter::once("label")).collect();
    let mut data = Dataset::new(&header).unwrap();
    for (values, label) in rows {
        data.add_example(values, label).unwrap();
    }
    data
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Entropy lies between 0 and log2 of the number of labels, 0 only for a single label.
    #[test]
    fn entropy_bounds(rows in rows_strategy(40)) {
        let data = build_dataset(&rows);
        let e = data.entropy().unwrap();
        let n_labels = data.label_space().len();
        prop_assert!(e >= 0.0);
        prop_assert!(e <= (n_labels as f64).log2() + 1e-9);
        prop_assert_eq!(e == 0.0, n_labels == 1);
    }

    /// Grouping partitions the examples and drops exactly the grouped column.
    #[test]
    fn group_by_feature_partitions(rows in rows_strategy(40), f in 0usize..3) {
        let data = build_dataset(&rows);
        let feature = FEATURES[f];
        let groups = data.group_by_feature(feature).unwrap();
        prop_assert_eq!(groups.iter().map(|(_, g)| g.len()).sum::<usize>(), data.len());
        for (value, group) in &groups {
            prop_assert!(!group.is_empty());
            prop_assert!(group.feature_names().iter().all(|n| n != feature));
            prop_assert_eq!(group.feature_names().len(), FEATURES.len() - 1);
            let matching = data.iter().filter(|e| e.feature(feature) == Some(value.as_str())).count();
            prop_assert_eq!(matching, group.len());
        }
    }

    /// Information gain is never negative and never exceeds the entropy.
    #[test]
    fn information_gain_bounds(rows in rows_strategy(40), f in 0usize..3) {
        let data = build_dataset(&rows);
        let gain = data.information_gain(FEATURES[f]).unwrap();
        prop_assert!(gain >= 0.0);
        prop_assert!(gain <= data.entropy().unwrap() + 1e-9);
    }

    /// A feature that determines the label removes all of the entropy and wins the split,
    /// unless an equally good feature comes first by name.
    #[test]
    fn determining_feature_is_selected(
        rows in rows_strategy(40),
        f in 0usize..3,
        mapping in prop::collection::vec(prop::sample::select(vec!["yes", "no", "maybe"]), 3),
    ) {
        let rows: Vec<(Vec<String>, String)> = rows
            .into_iter()
            .map(|(values, _)| {
                let idx = ["a", "b", "c"].iter().position(|v| *v == values[f]).unwrap();
                (values, mapping[idx].to_string())
            })
            .collect();
        let data = build_dataset(&rows);
        let feature = FEATURES[f];
        let entropy = data.entropy().unwrap();
        prop_assert_eq!(data.information_gain(feature).unwrap(), entropy);

        let chosen = data.most_discriminatory_feature().unwrap();
        if chosen != feature {
            prop_assert!(chosen < feature);
            prop_assert!((data.information_gain(chosen).unwrap() - entropy).abs() < 1e-9);
        }
    }

    /// No root-to-leaf path is longer than the maximum depth.
    #[test]
    fn depth_limit_respected(rows in rows_strategy(40), max_depth in 0usize..4) {
        let data = build_dataset(&rows);
        let mut tree = DecisionTree::default().set_max_depth(Some(max_depth));
        tree.fit(&data).unwrap();
        prop_assert!(tree.depth().unwrap() <= max_depth);
        prop_assert_eq!(tree.branches().unwrap().lines().count(), tree.n_leaves().unwrap());
    }

    /// An unlimited tree reproduces the labels of a conflict-free training set.
    #[test]
    fn training_set_reproduced(rows in rows_strategy(40)) {
        // Repeated feature vectors keep the label of their first occurrence.
        let mut first_labels: HashMap<Vec<String>, String> = HashMap::new();
        let rows: Vec<(Vec<String>, String)> = rows
            .into_iter()
            .map(|(values, label)| {
                let label = first_labels.entry(values.clone()).or_insert(label).clone();
                (values, label)
            })
            .collect();
        let data = build_dataset(&rows);
        prop_assert!(!data.has_conflicts());
        let mut tree = DecisionTree::default();
        tree.fit(&data).unwrap();
        prop_assert_eq!(tree.predict(&data).unwrap(), data.label_sample());
        let prediction = tree.evaluate(&data).unwrap();
        prop_assert_eq!(prediction.accuracy, 1.0);
        prop_assert_eq!(prediction.confusion_matrix.total(), data.len());
    }

    /// Growing on a thread pool yields the same tree as growing sequentially.
    #[test]
    fn parallel_growth_is_deterministic(rows in rows_strategy(40)) {
        let data = build_dataset(&rows);
        let mut sequential = DecisionTree::default();
        sequential.fit(&data).unwrap();
        let mut parallel = DecisionTree::default().set_num_threads(Some(3));
        parallel.fit(&data).unwrap();
        prop_assert_eq!(sequential.root().unwrap(), parallel.root().unwrap());
    }
}
