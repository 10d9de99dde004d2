use crate::data::FeatureMap;
use std::fmt::{self, Write};

/// An edge of the tree, labeled with the feature value that leads to `node`.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub value: String,
    pub node: TreeNode,
}

/// A node of the induced tree.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    /// Terminal node predicting a single label.
    Leaf { label: String },
    /// Internal node splitting on `feature`. `most_frequent_label` is returned for
    /// examples whose value of `feature` has no branch.
    Decision {
        feature: String,
        most_frequent_label: String,
        children: Vec<Branch>,
    },
}

impl TreeNode {
    pub fn leaf(label: &str) -> Self {
        TreeNode::Leaf {
            label: label.to_string(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Child reached over the branch with the given feature value.
    pub fn get_child(&self, value: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Decision { children, .. } => children.iter().find(|b| b.value == value).map(|b| &b.node),
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Decision { children, .. } => 1 + children.iter().map(|b| b.node.depth()).max().unwrap_or(0),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { children, .. } => children.iter().map(|b| b.node.n_leaves()).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { children, .. } => 1 + children.iter().map(|b| b.node.n_nodes()).sum::<usize>(),
        }
    }

    /// Label predicted for the example.
    ///
    /// When the example lacks the split feature, or holds a value never seen
    /// while growing the tree, the decision node answers with its own most
    /// frequent label instead of descending further.
    pub fn classify(&self, example: &FeatureMap) -> &str {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { label } => return label,
                TreeNode::Decision {
                    feature,
                    most_frequent_label,
                    ..
                } => match example.get(feature).and_then(|v| node.get_child(v)) {
                    Some(child) => node = child,
                    None => return most_frequent_label,
                },
            }
        }
    }

    /// Write one line per leaf: the `depth:feature=value` path followed by the label.
    pub fn write_branches<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut path: Vec<String> = Vec::new();
        self.write_branches_from(&mut path, out)
    }

    fn write_branches_from<W: Write>(&self, path: &mut Vec<String>, out: &mut W) -> fmt::Result {
        match self {
            TreeNode::Leaf { label } => {
                for token in path.iter() {
                    write!(out, "{} ", token)?;
                }
                writeln!(out, "{}", label)
            }
            TreeNode::Decision { feature, children, .. } => {
                for branch in children {
                    path.push(format!("{}:{}={}", path.len() + 1, feature, branch.value));
                    branch.node.write_branches_from(path, out)?;
                    path.pop();
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeNode::Leaf { label } => write!(f, "leaf={}", label),
            TreeNode::Decision {
                feature,
                most_frequent_label,
                children,
            } => {
                let values: Vec<&str> = children.iter().map(|b| b.value.as_str()).collect();
                write!(
                    f,
                    "[{}] values={},fallback={}",
                    feature,
                    values.join("|"),
                    most_frequent_label
                )
            }
        }
    }
}
