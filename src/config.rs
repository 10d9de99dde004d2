//! Tree Configuration
//!
//! Parameters controlling how a `DecisionTree` is grown.
use crate::errors::Id3Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_max_depth() -> Option<usize> {
    None
}
fn default_num_threads() -> Option<usize> {
    None
}

/// Configuration for the `DecisionTree`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum number of edges from the root to any leaf, unlimited when `None`.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
    /// Number of threads used to grow sibling subtrees, sequential when `None` or 1.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            max_depth: default_max_depth(),
            num_threads: default_num_threads(),
        }
    }
}

impl TreeConfig {
    /// Parse a configuration from a JSON string, missing keys take their defaults.
    pub fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        let cfg: TreeConfig =
            serde_json::from_str(json_str).map_err(|e| Id3Error::UnableToRead(format!("configuration: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Id3Error> {
        let json_str = fs::read_to_string(&path)
            .map_err(|e| Id3Error::UnableToRead(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_json(&json_str)
    }

    pub fn validate(&self) -> Result<(), Id3Error> {
        if self.num_threads == Some(0) {
            return Err(Id3Error::InvalidParameter(
                "num_threads".to_string(),
                "a positive number of threads".to_string(),
                "0".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether sibling subtrees are grown on a thread pool.
    pub fn is_parallel(&self) -> bool {
        matches!(self.num_threads, Some(n) if n > 1)
    }
}
