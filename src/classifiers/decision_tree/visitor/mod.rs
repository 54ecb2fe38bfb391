mod node_visitor;
mod tree_shape;
mod tree_string_builder;

pub use node_visitor::NodeVisitor;
pub use tree_shape::TreeShape;
pub use tree_string_builder::TreeStringBuilder;
