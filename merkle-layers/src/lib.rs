//! Layered binary Merkle tree.
//!
//! A tree is built once from an ordered list of leaf digests and never
//! changes afterwards. Every layer is kept, from the leaves (layer 0) up to
//! the single root node:
//!
//! - layer 0 wraps each leaf digest; an odd leaf count is padded by
//!   duplicating the last digest into one extra node.
//! - every following layer pairs its predecessor left to right, with
//!   `parent = H(left.hash || right.hash)` over the hex text of both digests.
//!   A trailing node without a partner is paired with itself.
//!
//! # Core types
//!
//! - [`MerkleTree`] — build, root, layer access and the membership check.
//! - [`Node`] — a digest plus the positions of its children in the layer
//!   below.
//! - [`Hasher`] — the hash primitive seam, with [`Blake3Hasher`],
//!   [`Keccak256Hasher`] and the runtime-selected [`HashAlgorithm`].
//! - [`TreeConfig`] — algorithm choice and leaf limit for
//!   [`MerkleTree::build_with_config`].
//!
//! Costs of building and checking are reported through
//! [`merkle_layers_costs`].

#![warn(missing_docs)]

mod config;
mod error;
mod hash;
pub(crate) mod layer;
mod node;
mod tree;


pub use config::TreeConfig;
pub use error::{Error, Result};
pub use hash::{Blake3Hasher, Digest, HashAlgorithm, Hasher, Keccak256Hasher};
pub use merkle_layers_costs::{CostContext, CostResult, CostsExt, OperationCost};
pub use node::Node;
pub use tree::MerkleTree;

/// Build a tree over `leaves` with the default [`Blake3Hasher`].
///
/// An empty input produces a tree without layers whose root is `""`.
pub fn build<I>(leaves: I) -> MerkleTree<Blake3Hasher>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    MerkleTree::build(Blake3Hasher, leaves)
}
