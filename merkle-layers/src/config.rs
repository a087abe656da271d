use crate::{Error, HashAlgorithm, Result};

/// Parameters for [`MerkleTree::build_with_config`](crate::MerkleTree::build_with_config).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Hash primitive combining nodes.
    pub algorithm: HashAlgorithm,
    /// Upper bound on the number of input leaves, `None` for no limit.
    pub max_leaves: Option<usize>,
}

impl TreeConfig {
    /// A config using `algorithm` without a leaf limit.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        TreeConfig {
            algorithm,
            max_leaves: None,
        }
    }

    /// Set the leaf limit.
    pub fn with_max_leaves(mut self, max_leaves: usize) -> Self {
        self.max_leaves = Some(max_leaves);
        self
    }

    /// Reject configurations no input could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.max_leaves == Some(0) {
            return Err(Error::InvalidConfig("max_leaves must be at least 1".to_owned()));
        }
        Ok(())
    }

    /// Check `count` input leaves against the limit.
    pub fn check_leaf_count(&self, count: usize) -> Result<()> {
        match self.max_leaves {
            Some(max) if count > max => Err(Error::TooManyLeaves { count, max }),
            _ => Ok(()),
        }
    }
}
