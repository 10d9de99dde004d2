mod node;

// Modules
pub mod config;
pub mod constants;
pub mod data;
pub mod errors;
pub mod io;
pub mod metric;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use config::TreeConfig;
pub use data::{Dataset, Example, FeatureMap};
pub use errors::Id3Error;
pub use metric::ConfusionMatrix;
pub use node::{Branch, TreeNode};
pub use tree::{DecisionTree, Prediction};
