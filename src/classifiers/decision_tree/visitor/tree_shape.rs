use crate::classifiers::decision_tree::nodes::{InnerNode, Leaf};
use crate::classifiers::decision_tree::visitor::NodeVisitor;

/// Size summary of a (sub-)tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeShape {
    pub depth: usize,
    pub leaves: usize,
    pub nodes: usize,
}

impl NodeVisitor for TreeShape {
    type Output = TreeShape;

    fn visit_leaf(&mut self, _leaf: &Leaf) -> TreeShape {
        TreeShape {
            depth: 0,
            leaves: 1,
            nodes: 1,
        }
    }

    fn visit_inner(&mut self, node: &InnerNode) -> TreeShape {
        let mut shape = TreeShape {
            depth: 0,
            leaves: 0,
            nodes: 1,
        };
        for child in node.children() {
            let sub = child.accept(self);
            shape.depth = shape.depth.max(sub.depth + 1);
            shape.leaves += sub.leaves;
            shape.nodes += sub.nodes;
        }
        shape
    }
}
