//! Layer construction: the padded leaf layer and the pairing step that
//! produces each layer above it.

use merkle_layers_costs::OperationCost;
use tracing::trace;

use crate::{Hasher, Node};

/// Wrap each digest into a leaf node, in order.
///
/// An odd count gets one extra leaf carrying a copy of the last digest.
pub(crate) fn leaf_layer<I>(leaves: I, cost: &mut OperationCost) -> Vec<Node>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut layer: Vec<Node> = leaves.into_iter().map(|h| Node::leaf(h.into())).collect();
    if layer.len() % 2 == 1 {
        if let Some(last) = layer.last() {
            let pad = Node::leaf(last.hash().to_owned());
            layer.push(pad);
        }
    }
    cost.nodes_created += layer.len() as u32;
    layer
}

/// Pair `nodes` left to right into the next layer up.
///
/// Each parent hashes `left.hash || right.hash`. When `nodes` has odd length
/// the last node is paired with itself. The result has
/// `nodes.len().div_ceil(2)` entries.
pub(crate) fn pair_layer<H: Hasher>(
    hasher: &H,
    nodes: &[Node],
    cost: &mut OperationCost,
) -> Vec<Node> {
    let mut next = Vec::with_capacity(nodes.len().div_ceil(2));
    for (index, pair) in nodes.chunks(2).enumerate() {
        let left_pos = index * 2;
        let (right, right_pos) = match pair {
            [_, right] => (right, left_pos + 1),
            _ => (&pair[0], left_pos),
        };
        let left = &pair[0];

        let hash = hasher.hash_parts(&[left.hash().as_bytes(), right.hash().as_bytes()]);
        cost.hash_node_calls += 1;
        cost.hash_byte_calls += (left.hash().len() + right.hash().len()) as u64;

        next.push(Node::parent(hash, left_pos, right_pos));
    }
    cost.nodes_created += next.len() as u32;
    next
}

/// Stack layers on top of `base` until one holds a single node.
///
/// `base` is used as layer 0 as given. An empty base yields no layers.
pub(crate) fn build_layers<H: Hasher>(
    hasher: &H,
    base: Vec<Node>,
    cost: &mut OperationCost,
) -> Vec<Vec<Node>> {
    if base.is_empty() {
        return Vec::new();
    }

    let mut layers = vec![base];
    loop {
        let current = match layers.last() {
            Some(current) if current.len() > 1 => current,
            _ => break,
        };
        let next = pair_layer(hasher, current, cost);
        trace!(layer = layers.len(), nodes = next.len(), "paired merkle layer");
        layers.push(next);
    }
    layers
}

/// Digest of the single node in the top layer, or `""` when there is no such
/// node.
pub(crate) fn top_hash(layers: &[Vec<Node>]) -> &str {
    match layers.last().map(Vec::as_slice) {
        Some([root]) => root.hash(),
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blake3Hasher;

    fn leaves(values: &[&str]) -> Vec<Node> {
        values.iter().map(|v| Node::leaf((*v).to_owned())).collect()
    }

    #[test]
    fn test_leaf_layer_pads_odd_count() {
        let mut cost = OperationCost::default();
        let layer = leaf_layer(["a", "b", "c"], &mut cost);
        let hashes: Vec<&str> = layer.iter().map(Node::hash).collect();
        assert_eq!(hashes, ["a", "b", "c", "c"]);
        assert!(layer.iter().all(Node::is_leaf));
        assert_eq!(cost.nodes_created, 4);
        assert_eq!(cost.hash_node_calls, 0);
    }

    #[test]
    fn test_leaf_layer_keeps_even_count() {
        let mut cost = OperationCost::default();
        let layer = leaf_layer(vec!["a".to_owned(), "b".to_owned()], &mut cost);
        assert_eq!(layer.len(), 2);
        assert!(leaf_layer(Vec::<String>::new(), &mut cost).is_empty());
    }

    #[test]
    fn test_pair_layer_even() {
        let hasher = Blake3Hasher;
        let mut cost = OperationCost::default();
        let next = pair_layer(&hasher, &leaves(&["aa", "bb", "cc", "dd"]), &mut cost);

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].hash(), hasher.hash_leaf(b"aabb"));
        assert_eq!(next[1].hash(), hasher.hash_leaf(b"ccdd"));
        assert_eq!(next[0].children(), Some((0, 1)));
        assert_eq!(next[1].children(), Some((2, 3)));
        assert_eq!(cost.hash_node_calls, 2);
        assert_eq!(cost.hash_byte_calls, 8);
    }

    #[test]
    fn test_pair_layer_self_pairs_trailing_node() {
        let hasher = Blake3Hasher;
        let mut cost = OperationCost::default();
        let next = pair_layer(&hasher, &leaves(&["aa", "bb", "cc"]), &mut cost);

        assert_eq!(next.len(), 2);
        assert_eq!(next[1].hash(), hasher.hash_leaf(b"cccc"));
        assert_eq!(next[1].children(), Some((2, 2)));
        assert_eq!(cost.nodes_created, 2);
    }

    #[test]
    fn test_build_layers_halts_at_single_node() {
        let hasher = Blake3Hasher;
        let mut cost = OperationCost::default();
        let layers = build_layers(&hasher, leaves(&["a", "b", "c", "d", "e", "f"]), &mut cost);

        let sizes: Vec<usize> = layers.iter().map(Vec::len).collect();
        assert_eq!(sizes, [6, 3, 2, 1]);
        assert_eq!(cost.hash_node_calls, 6);
        assert_eq!(top_hash(&layers), layers[3][0].hash());
    }

    #[test]
    fn test_build_layers_single_and_empty_base() {
        let hasher = Blake3Hasher;
        let mut cost = OperationCost::default();

        let layers = build_layers(&hasher, leaves(&["only"]), &mut cost);
        assert_eq!(layers.len(), 1);
        assert_eq!(top_hash(&layers), "only");

        let layers = build_layers(&hasher, Vec::new(), &mut cost);
        assert!(layers.is_empty());
        assert_eq!(top_hash(&layers), "");
        assert!(cost.is_nothing());
    }
}
