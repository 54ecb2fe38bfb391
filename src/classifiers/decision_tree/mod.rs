mod attribute_split_suggestion;
mod decision_tree;
pub mod id3;
pub mod measures;
pub mod nodes;
mod parameters;
pub mod split_criteria;
pub mod visitor;

pub use attribute_split_suggestion::AttributeSplitSuggestion;
pub use decision_tree::DecisionTree;
pub use id3::{
    select_partition_attribute, train_model, train_model_with_policy, train_on_subset,
    train_on_table,
};
pub use nodes::{FoundNode, InnerNode, Leaf, Node};
pub use parameters::{DecisionTreeParams, EmptyBranchPolicy};
pub use visitor::{NodeVisitor, TreeShape, TreeStringBuilder};
