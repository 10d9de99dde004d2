pub mod predict;
pub mod setters;
#[allow(clippy::module_inception)]
pub mod tree;

pub use predict::Prediction;
pub use tree::DecisionTree;
