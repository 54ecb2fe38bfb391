//! ID3 tree induction.
//!
//! Candidate attributes are passed as an ordered slice; when two candidates
//! have the same information gain the one listed first is chosen, so a given
//! table and candidate order always yield the same tree.

use crate::classifiers::decision_tree::attribute_split_suggestion::AttributeSplitSuggestion;
use crate::classifiers::decision_tree::measures::{
    self, ensure_in_view, merit_of_partition, most_common_value, split_distributions,
};
use crate::classifiers::decision_tree::nodes::{InnerNode, Leaf, Node};
use crate::classifiers::decision_tree::parameters::EmptyBranchPolicy;
use crate::core::attributes::{AttributeRef, NominalAttribute, Value};
use crate::core::table::Table;
use crate::core::views::{IndexView, PredicateView, TableView};
use crate::error::{Id3Error, Result};
use log::{debug, info};
use std::sync::Arc;

/// The candidate with the highest information gain, or `None` when there
/// are no candidates. The first candidate wins ties.
pub fn select_partition_attribute(
    view: &dyn TableView,
    class_attribute: &NominalAttribute,
    candidates: &[AttributeRef],
) -> Result<Option<AttributeSplitSuggestion>> {
    let mut best: Option<AttributeSplitSuggestion> = None;
    for attribute in candidates {
        let dists = split_distributions(view, class_attribute, attribute)?;
        let merit = merit_of_partition(&dists);
        if best.as_ref().is_none_or(|b| merit > b.get_merit()) {
            best = Some(AttributeSplitSuggestion::new(
                Arc::clone(attribute),
                dists,
                merit,
            ));
        }
    }
    Ok(best)
}

/// Builds a tree over `view` predicting `class_attribute`, splitting only on
/// `candidates`. Empty partitions predict the parent's most common class.
pub fn train_model(
    view: &dyn TableView,
    class_attribute: &NominalAttribute,
    candidates: &[AttributeRef],
) -> Result<Node> {
    train_model_with_policy(
        view,
        class_attribute,
        candidates,
        EmptyBranchPolicy::default(),
    )
}

pub fn train_model_with_policy(
    view: &dyn TableView,
    class_attribute: &NominalAttribute,
    candidates: &[AttributeRef],
    policy: EmptyBranchPolicy,
) -> Result<Node> {
    ensure_in_view(view, class_attribute)?;
    for attribute in candidates {
        ensure_in_view(view, attribute)?;
    }
    if view.is_empty() {
        return Err(Id3Error::invalid_input(
            "cannot train a decision tree on an empty view",
        ));
    }

    let root = grow(view, class_attribute, candidates, policy, 0)?;
    let shape = root.shape();
    info!(
        "trained decision tree for '{}' on {} instances: {} nodes, {} leaves, depth {}",
        class_attribute.name(),
        view.instance_count(),
        shape.nodes,
        shape.leaves,
        shape.depth
    );
    Ok(root)
}

/// Trains on every row of `table`, using all attributes except the class
/// attribute as candidates, in column order.
pub fn train_on_table(table: &Table, class_attribute: &NominalAttribute) -> Result<Node> {
    let candidates = table.attributes_except(&[class_attribute]);
    train_model(table, class_attribute, &candidates)
}

/// Like [`train_on_table`], restricted to the rows at `indices`.
pub fn train_on_subset(
    table: &Table,
    indices: &[usize],
    class_attribute: &NominalAttribute,
) -> Result<Node> {
    let subset = IndexView::new(table, indices.to_vec())?;
    let candidates = table.attributes_except(&[class_attribute]);
    train_model(&subset, class_attribute, &candidates)
}

fn grow(
    view: &dyn TableView,
    class_attribute: &NominalAttribute,
    candidates: &[AttributeRef],
    policy: EmptyBranchPolicy,
    depth: usize,
) -> Result<Node> {
    if measures::entropy(view, class_attribute)? == 0.0 {
        let value = view.instance_at(0)?.value(class_attribute)?;
        return Ok(Leaf::new(value.clone()).into());
    }

    let Some(split) = select_partition_attribute(view, class_attribute, candidates)? else {
        return Ok(Leaf::new(most_common_value(view, class_attribute)?).into());
    };

    let attribute = split.get_attribute();
    debug!(
        "depth {depth}: splitting {} instances on '{}' (gain {:.4})",
        view.instance_count(),
        attribute.name(),
        split.get_merit()
    );

    let remaining: Vec<AttributeRef> = candidates
        .iter()
        .filter(|a| a.as_ref() != attribute.as_ref())
        .cloned()
        .collect();

    let mut children = Vec::with_capacity(split.number_of_splits());
    for index in 0..split.number_of_splits() {
        let value = Value::from_index(attribute, index)?;
        let child = if split.rows_in_split(index) == 0.0 {
            empty_branch(view, class_attribute, attribute, &value, policy)?
        } else {
            let subset = PredicateView::select_instances(view, attribute, &value)?;
            grow(&subset, class_attribute, &remaining, policy, depth + 1)?
        };
        children.push(child);
    }

    Ok(InnerNode::new(Arc::clone(attribute), children)?.into())
}

fn empty_branch(
    parent: &dyn TableView,
    class_attribute: &NominalAttribute,
    attribute: &NominalAttribute,
    value: &Value,
    policy: EmptyBranchPolicy,
) -> Result<Node> {
    match policy {
        EmptyBranchPolicy::MostCommonParent => {
            let majority = most_common_value(parent, class_attribute)?;
            debug!(
                "no instances with {} = {}; predicting parent majority '{}'",
                attribute.name(),
                value,
                majority
            );
            Ok(Leaf::new(majority).into())
        }
        EmptyBranchPolicy::Fail => Err(Id3Error::invalid_input(format!(
            "no training instances with {} = {}",
            attribute.name(),
            value
        ))),
    }
}
