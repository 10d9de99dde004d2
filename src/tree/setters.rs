use super::tree::DecisionTree;

impl DecisionTree {
    // Set methods for parameters

    /// Set the maximum depth of the tree.
    /// * `max_depth` - Maximum number of edges from the root to a leaf, `None` grows
    ///   the tree until every leaf is pure or has no features left.
    pub fn set_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.cfg.max_depth = max_depth;
        self
    }

    /// Set the number of threads on the tree.
    /// * `num_threads` - Number of threads used to grow sibling subtrees.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters() {
        let tree = DecisionTree::default().set_max_depth(Some(3)).set_num_threads(Some(2));
        assert_eq!(tree.cfg.max_depth, Some(3));
        assert_eq!(tree.cfg.num_threads, Some(2));
        assert!(!tree.is_fitted());
    }
}
