use crate::data::{FeatureKind, FeatureValue};

/// A node of a fitted decision tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal node predicting a single class.
    Leaf(LeafNode),
    /// Node holding a split rule and its children.
    Internal(InternalNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    /// Majority label of the samples that reached this leaf.
    pub label: usize,
    pub n_samples: usize,
}

/// Split rule with its children.
///
/// Samples failing the test go `left`, samples passing it go `right`.
/// Both children are present, except when the split sent every sample to
/// one side; the empty side is then absent and the other side is a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalNode {
    pub feature: usize,
    pub value: FeatureValue,
    /// Weighted impurity of the split.
    pub score: f64,
    pub n_samples: usize,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl InternalNode {
    pub fn feature(&self) -> usize {
        self.feature
    }

    pub fn value(&self) -> &FeatureValue {
        &self.value
    }

    pub fn kind(&self) -> FeatureKind {
        self.value.kind()
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Comparison operators of the test, for the failing and passing branch.
    pub fn operators(&self) -> (&'static str, &'static str) {
        match self.kind() {
            FeatureKind::Numerical => ("<", ">="),
            FeatureKind::Categorical => ("is not", "is"),
        }
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.left().into_iter().chain(self.right())
    }
}

impl Node {
    pub fn leaf(label: usize, n_samples: usize) -> Self {
        Node::Leaf(LeafNode { label, n_samples })
    }

    pub fn internal(
        feature: usize,
        value: FeatureValue,
        score: f64,
        n_samples: usize,
        left: Option<Node>,
        right: Option<Node>,
    ) -> Self {
        Node::Internal(InternalNode {
            feature,
            value,
            score,
            n_samples,
            left: left.map(Box::new),
            right: right.map(Box::new),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Predicted label, if this is a leaf.
    pub fn label(&self) -> Option<usize> {
        match self {
            Node::Leaf(leaf) => Some(leaf.label),
            Node::Internal(_) => None,
        }
    }

    pub fn as_internal(&self) -> Option<&InternalNode> {
        match self {
            Node::Leaf(_) => None,
            Node::Internal(node) => Some(node),
        }
    }

    pub fn n_samples(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.n_samples,
            Node::Internal(node) => node.n_samples,
        }
    }

    /// Number of split levels below and including this node, a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Internal(node) => 1 + node.children().map(Node::depth).max().unwrap_or(0),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(node) => node.children().map(Node::n_leaves).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(node) => 1 + node.children().map(Node::n_nodes).sum::<usize>(),
        }
    }
}
