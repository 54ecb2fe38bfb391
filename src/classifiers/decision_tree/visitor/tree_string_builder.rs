use crate::classifiers::decision_tree::nodes::{InnerNode, Leaf, Node};
use crate::classifiers::decision_tree::visitor::NodeVisitor;

const DEFAULT_INDENT: &str = "  ";

/// Pre-order text rendering of a tree.
///
/// A leaf is written as its class label. An inner node is written as its
/// attribute name followed by one `value -> subtree` line per branch,
/// indented one level deeper than the node. Every line ends with `\n`.
pub struct TreeStringBuilder {
    indent: String,
    depth: usize,
    out: String,
}

impl TreeStringBuilder {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    pub fn with_indent<S: Into<String>>(indent: S) -> Self {
        Self {
            indent: indent.into(),
            depth: 0,
            out: String::new(),
        }
    }

    pub fn build(&mut self, root: &Node) -> String {
        self.depth = 0;
        self.out.clear();
        root.accept(self);
        std::mem::take(&mut self.out)
    }
}

impl Default for TreeStringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeVisitor for TreeStringBuilder {
    type Output = ();

    fn visit_leaf(&mut self, leaf: &Leaf) {
        self.out.push_str(leaf.label());
        self.out.push('\n');
    }

    fn visit_inner(&mut self, node: &InnerNode) {
        self.out.push_str(node.decision_attribute().name());
        self.out.push('\n');
        self.depth += 1;
        for (label, child) in node.branches() {
            for _ in 0..self.depth {
                self.out.push_str(&self.indent);
            }
            self.out.push_str(label);
            self.out.push_str(" -> ");
            child.accept(self);
        }
        self.depth -= 1;
    }
}
