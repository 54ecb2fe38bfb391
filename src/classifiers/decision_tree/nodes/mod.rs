mod found_node;
mod inner_node;
mod leaf;
mod node;

pub use found_node::FoundNode;
pub use inner_node::InnerNode;
pub use leaf::Leaf;
pub use node::Node;
