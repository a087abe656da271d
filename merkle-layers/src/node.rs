/// A tree node: a digest, and for internal nodes the positions of its two
/// children in the layer directly below.
///
/// Children are owned by the layer vector they live in; a parent only
/// records where they are. The last parent of an odd-sized layer names the
/// same position as both children. The padding leaf added to an odd leaf
/// layer is its own node with a copied digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    hash: String,
    children: Option<(usize, usize)>,
}

impl Node {
    pub(crate) fn leaf(hash: String) -> Self {
        Node {
            hash,
            children: None,
        }
    }

    pub(crate) fn parent(hash: String, left: usize, right: usize) -> Self {
        Node {
            hash,
            children: Some((left, right)),
        }
    }

    /// The node's digest.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Positions of the `(left, right)` children in the layer below, or
    /// `None` for a leaf.
    pub fn children(&self) -> Option<(usize, usize)> {
        self.children
    }

    /// Position of the left child in the layer below.
    pub fn left(&self) -> Option<usize> {
        self.children.map(|(left, _)| left)
    }

    /// Position of the right child in the layer below.
    pub fn right(&self) -> Option<usize> {
        self.children.map(|(_, right)| right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}
