use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from the fallible helpers around a Merkle tree.
///
/// Building, [`root`](crate::MerkleTree::root), [`layer`](crate::MerkleTree::layer)
/// and [`proof`](crate::MerkleTree::proof) never fail; these variants come
/// from configuration, parsing and the explicit `try_*` accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The name does not match any supported hash algorithm.
    #[error("unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),
    /// A digest string is not valid hex.
    #[error("invalid digest {digest:?}: {reason}")]
    InvalidDigest {
        /// The rejected input.
        digest: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The layer index does not exist in this tree.
    #[error("layer {layer} out of range (tree has {layer_count} layers)")]
    LayerOutOfRange {
        /// The requested index.
        layer: i64,
        /// Number of layers in the tree.
        layer_count: usize,
    },
    /// The tree configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// More leaves were supplied than the configuration allows.
    #[error("too many leaves: {count} exceeds limit {max}")]
    TooManyLeaves {
        /// Supplied leaf count.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
}
