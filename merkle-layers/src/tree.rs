use merkle_layers_costs::{
    CostContext, CostResult, CostsExt, OperationCost, cost_return_on_error_no_add,
};
use tracing::debug;

use crate::{
    Blake3Hasher, Error, HashAlgorithm, Hasher, Node, Result, TreeConfig,
    layer::{build_layers, leaf_layer, top_hash},
};

/// An immutable binary Merkle tree keeping every layer.
///
/// Layer 0 holds the (padded) leaves and the last layer holds the root.
/// Layer indices are `i64` so that any caller-supplied index, negative ones
/// included, can be asked about; indices outside `0..layer_count()` are
/// simply absent.
#[derive(Clone, Debug)]
pub struct MerkleTree<H = Blake3Hasher> {
    hasher: H,
    layers: Vec<Vec<Node>>,
    leaf_count: usize,
}

impl<H: Hasher> MerkleTree<H> {
    /// Build a tree over `leaves`, in order.
    pub fn build<I>(hasher: H, leaves: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::build_with_cost(hasher, leaves).unwrap()
    }

    /// Build a tree over `leaves` and report the hashing work done.
    ///
    /// For `n` leaves padded to `p`, `hash_node_calls` is the total number of
    /// nodes above layer 0, which is `p - 1` when `p` is a power of two.
    pub fn build_with_cost<I>(hasher: H, leaves: I) -> CostContext<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut cost = OperationCost::default();
        let mut leaf_count = 0;
        let base = leaf_layer(leaves.into_iter().inspect(|_| leaf_count += 1), &mut cost);
        let padded = base.len();
        let layers = build_layers(&hasher, base, &mut cost);

        debug!(
            leaves = leaf_count,
            padded,
            layers = layers.len(),
            hash_calls = cost.hash_node_calls,
            "built merkle tree"
        );

        MerkleTree {
            hasher,
            layers,
            leaf_count,
        }
        .wrap_with_cost(cost)
    }

    /// Hash every raw value with `hasher` and build a tree over the digests.
    pub fn from_data<I>(hasher: H, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let leaves: Vec<String> = values
            .into_iter()
            .map(|value| hasher.hash_leaf(value.as_ref()))
            .collect();
        Self::build(hasher, leaves)
    }

    /// The root digest, or `""` for a tree built from no leaves.
    pub fn root(&self) -> &str {
        top_hash(&self.layers)
    }

    /// The root node, if the tree has one.
    pub fn root_node(&self) -> Option<&Node> {
        match self.layers.last().map(Vec::as_slice) {
            Some([root]) => Some(root),
            _ => None,
        }
    }

    /// The nodes of `layer`, or `None` if there is no such layer.
    pub fn layer(&self, layer: i64) -> Option<&[Node]> {
        usize::try_from(layer)
            .ok()
            .and_then(|index| self.layers.get(index))
            .map(Vec::as_slice)
    }

    /// Like [`layer`](Self::layer) but reporting a missing layer as
    /// [`Error::LayerOutOfRange`].
    pub fn try_layer(&self, layer: i64) -> Result<&[Node]> {
        self.layer(layer).ok_or(Error::LayerOutOfRange {
            layer,
            layer_count: self.layers.len(),
        })
    }

    /// Resolve the children of the node at `position` in `layer`.
    ///
    /// Returns `None` for leaves and for positions that do not exist.
    pub fn children(&self, layer: i64, position: usize) -> Option<(&Node, &Node)> {
        let (left, right) = self.layer(layer)?.get(position)?.children()?;
        let below = self.layer(layer - 1)?;
        Some((below.get(left)?, below.get(right)?))
    }

    /// Check that `digest` is a node of `layer` and that the layer rebuilds
    /// to this tree's root.
    ///
    /// The whole layer is re-paired up to a fresh root, so this is a local
    /// consistency check against a tree held in full, not a compact proof
    /// that could be handed to someone else.
    pub fn proof(&self, digest: &str, layer: i64) -> bool {
        self.proof_with_cost(digest, layer).unwrap()
    }

    /// [`proof`](Self::proof), reporting the hashing work of the rebuild.
    pub fn proof_with_cost(&self, digest: &str, layer: i64) -> CostContext<bool> {
        let mut cost = OperationCost::default();

        let Some(nodes) = self.layer(layer) else {
            debug!(layer, layers = self.layers.len(), "proof: no such layer");
            return false.wrap_with_cost(cost);
        };

        if !nodes.iter().any(|node| node.hash() == digest) {
            debug!(layer, digest, "proof: digest not in layer");
            return false.wrap_with_cost(cost);
        }

        let base: Vec<Node> = nodes
            .iter()
            .map(|node| Node::leaf(node.hash().to_owned()))
            .collect();
        cost.nodes_created += base.len() as u32;
        let rebuilt = build_layers(&self.hasher, base, &mut cost);
        let verified = top_hash(&rebuilt) == self.root();

        debug!(layer, digest, verified, "proof: layer rebuilt");
        verified.wrap_with_cost(cost)
    }

    /// Number of layers; zero for an empty tree.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Index of the root layer; zero for an empty tree.
    pub fn height(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// Number of leaves supplied to the builder, before padding.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Whether the tree was built from no leaves.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// All layers from the leaves up to the root.
    pub fn layers(&self) -> impl Iterator<Item = &[Node]> + '_ {
        self.layers.iter().map(Vec::as_slice)
    }

    /// The hash primitive this tree was built with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl MerkleTree<HashAlgorithm> {
    /// Build a tree with the algorithm and limits of `config`.
    pub fn build_with_config<I>(config: &TreeConfig, leaves: I) -> CostResult<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut cost = OperationCost::default();
        cost_return_on_error_no_add!(cost, config.validate());

        let leaves: Vec<String> = leaves.into_iter().map(Into::into).collect();
        cost_return_on_error_no_add!(cost, config.check_leaf_count(leaves.len()));

        let tree = Self::build_with_cost(config.algorithm, leaves).unwrap_add_cost(&mut cost);
        Ok(tree).wrap_with_cost(cost)
    }
}
