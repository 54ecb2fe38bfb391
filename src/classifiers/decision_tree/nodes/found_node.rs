use crate::classifiers::decision_tree::nodes::{InnerNode, Leaf};

/// Result of routing an instance down a tree: the leaf it reached and the
/// inner node it came from.
#[derive(Debug, Clone, Copy)]
pub struct FoundNode<'a> {
    node: &'a Leaf,
    parent: Option<&'a InnerNode>,
    parent_branch: Option<usize>,
    depth: usize,
}

impl<'a> FoundNode<'a> {
    pub fn new(
        node: &'a Leaf,
        parent: Option<&'a InnerNode>,
        parent_branch: Option<usize>,
        depth: usize,
    ) -> Self {
        Self {
            node,
            parent,
            parent_branch,
            depth,
        }
    }

    pub fn get_node(&self) -> &'a Leaf {
        self.node
    }

    /// `None` when the tree is a single leaf.
    pub fn get_parent(&self) -> Option<&'a InnerNode> {
        self.parent
    }

    pub fn get_parent_branch(&self) -> Option<usize> {
        self.parent_branch
    }

    /// Number of inner nodes traversed to reach the leaf.
    pub fn get_depth(&self) -> usize {
        self.depth
    }
}
