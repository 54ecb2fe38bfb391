pub mod classifier;
pub mod decision_tree;

pub use classifier::Classifier;
pub use decision_tree::DecisionTree;
