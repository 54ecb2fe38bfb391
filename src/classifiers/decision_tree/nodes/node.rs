use crate::classifiers::decision_tree::nodes::{FoundNode, InnerNode, Leaf};
use crate::classifiers::decision_tree::visitor::{NodeVisitor, TreeShape, TreeStringBuilder};
use crate::core::attributes::Value;
use crate::core::instances::Instance;
use crate::error::Result;
use std::fmt;

/// A decision tree node. Children are owned by their parent; the tree has no
/// sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Inner(InnerNode),
}

impl Node {
    /// Dispatches to the visitor method matching this node's kind.
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Leaf(leaf) => visitor.visit_leaf(leaf),
            Node::Inner(inner) => visitor.visit_inner(inner),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Walks from this node to the leaf selected by the instance's values.
    ///
    /// Fails if the instance has no value for a decision attribute on the
    /// path, or a value that is not one of that attribute's branches.
    pub fn filter_instance_to_leaf<'a>(&'a self, instance: &Instance) -> Result<FoundNode<'a>> {
        let mut node = self;
        let mut parent = None;
        let mut parent_branch = None;
        let mut depth = 0;
        loop {
            match node {
                Node::Leaf(leaf) => {
                    return Ok(FoundNode::new(leaf, parent, parent_branch, depth));
                }
                Node::Inner(inner) => {
                    let branch = inner.branch_for_instance(instance)?;
                    node = inner.child(branch)?;
                    parent = Some(inner);
                    parent_branch = Some(branch);
                    depth += 1;
                }
            }
        }
    }

    pub fn classify(&self, instance: &Instance) -> Result<&Value> {
        Ok(self.filter_instance_to_leaf(instance)?.get_node().value())
    }

    pub fn shape(&self) -> TreeShape {
        self.accept(&mut TreeShape::default())
    }

    /// Longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        self.shape().depth
    }

    pub fn leaf_count(&self) -> usize {
        self.shape().leaves
    }

    pub fn node_count(&self) -> usize {
        self.shape().nodes
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<InnerNode> for Node {
    fn from(inner: InnerNode) -> Self {
        Node::Inner(inner)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TreeStringBuilder::new().build(self))
    }
}
