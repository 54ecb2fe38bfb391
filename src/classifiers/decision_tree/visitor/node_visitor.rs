use crate::classifiers::decision_tree::nodes::{InnerNode, Leaf};

/// One operation per node kind; driven by
/// [`Node::accept`](crate::classifiers::decision_tree::nodes::Node::accept).
///
/// Implementations decide whether and in which order to descend into the
/// children of an inner node.
pub trait NodeVisitor {
    type Output;

    fn visit_leaf(&mut self, leaf: &Leaf) -> Self::Output;

    fn visit_inner(&mut self, node: &InnerNode) -> Self::Output;
}
