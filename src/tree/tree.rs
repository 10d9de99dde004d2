use crate::config::TreeConfig;
use crate::data::Dataset;
use crate::errors::Id3Error;
use crate::node::{Branch, TreeNode};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::fmt::{self, Display};

/// Decision tree induced with the ID3 algorithm.
#[derive(Clone, Debug, Default)]
pub struct DecisionTree {
    pub cfg: TreeConfig,
    pub(crate) root: Option<TreeNode>,
}

impl DecisionTree {
    pub fn new(cfg: TreeConfig) -> Self {
        DecisionTree { cfg, root: None }
    }

    /// Grow the tree on the dataset, replacing any previously fitted tree.
    pub fn fit(&mut self, data: &Dataset) -> Result<(), Id3Error> {
        self.cfg.validate()?;
        if data.has_conflicts() {
            warn!("Training data has examples with equal features and different labels, these are resolved by majority vote.");
        }

        let grower = Id3Grower {
            max_depth: self.cfg.max_depth,
            parallel: self.cfg.is_parallel(),
        };
        let root = match self.cfg.num_threads {
            Some(num_threads) if grower.parallel => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| {
                        Id3Error::InvalidParameter(
                            "num_threads".to_string(),
                            "a buildable thread pool".to_string(),
                            e.to_string(),
                        )
                    })?;
                pool.install(|| grower.grow(data, data, 0))?
            }
            _ => grower.grow(data, data, 0)?,
        };

        info!(
            "Fitted tree on {} examples: depth {}, {} nodes, {} leaves.",
            data.len(),
            root.depth(),
            root.n_nodes(),
            root.n_leaves()
        );
        self.root = Some(root);
        Ok(())
    }

    pub fn is_fitted(&self) -> bool {
        self.root.is_some()
    }

    pub fn root(&self) -> Result<&TreeNode, Id3Error> {
        self.root.as_ref().ok_or(Id3Error::NotFitted)
    }

    pub fn depth(&self) -> Result<usize, Id3Error> {
        Ok(self.root()?.depth())
    }

    pub fn n_leaves(&self) -> Result<usize, Id3Error> {
        Ok(self.root()?.n_leaves())
    }

    /// One line per root-to-leaf path, see [`TreeNode::write_branches`].
    pub fn branches(&self) -> Result<String, Id3Error> {
        let mut s = String::new();
        self.root()?
            .write_branches(&mut s)
            .map_err(|e| Id3Error::Serialization(format!("branches: {}", e)))?;
        Ok(s)
    }
}

impl Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.root {
            Some(root) => root.write_branches(f),
            None => Ok(()),
        }
    }
}

/// Recursive top-down tree construction.
struct Id3Grower {
    max_depth: Option<usize>,
    parallel: bool,
}

impl Id3Grower {
    fn grow(&self, data: &Dataset, parent: &Dataset, depth: usize) -> Result<TreeNode, Id3Error> {
        if matches!(self.max_depth, Some(max_depth) if depth >= max_depth) {
            return Ok(TreeNode::leaf(data.most_frequent_label()?));
        }
        // Only the empty subset looks at its parent.
        if data.is_empty() {
            return Ok(TreeNode::leaf(parent.most_frequent_label()?));
        }
        if data.label_space().len() == 1 || data.feature_names().is_empty() {
            return Ok(TreeNode::leaf(data.most_frequent_label()?));
        }

        let feature = data.most_discriminatory_feature()?;
        let most_frequent_label = data.most_frequent_label()?;
        let groups = data.group_by_feature(feature)?;
        debug!(
            "Splitting {} examples on {} into {} branches at depth {}.",
            data.len(),
            feature,
            groups.len(),
            depth
        );

        let grow_branch = |(value, subset): (String, Dataset)| -> Result<Branch, Id3Error> {
            let node = self.grow(&subset, data, depth + 1)?;
            Ok(Branch { value, node })
        };
        // Collecting keeps the first-seen value order in both cases.
        let children = if self.parallel {
            groups.into_par_iter().map(grow_branch).collect::<Result<Vec<_>, _>>()?
        } else {
            groups.into_iter().map(grow_branch).collect::<Result<Vec<_>, _>>()?
        };

        Ok(TreeNode::Decision {
            feature: feature.to_string(),
            most_frequent_label: most_frequent_label.to_string(),
            children,
        })
    }
}
