//! Statistics over the rows of a [`TableView`].
//!
//! All functions are pure. They fail with
//! [`Id3Error::InvalidInput`] when an attribute they are asked to measure is
//! not a column of the view or is missing from one of its instances.

use crate::classifiers::decision_tree::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::core::attributes::{NominalAttribute, Value};
use crate::core::views::TableView;
use crate::error::{Id3Error, Result};

pub(crate) fn ensure_in_view(view: &dyn TableView, attribute: &NominalAttribute) -> Result<()> {
    if view.contains_attribute(attribute) {
        Ok(())
    } else {
        Err(Id3Error::invalid_input(format!(
            "attribute '{}' is not part of the view",
            attribute.name()
        )))
    }
}

/// Number of rows per class value, indexed by domain position.
pub fn class_distribution(
    view: &dyn TableView,
    class_attribute: &NominalAttribute,
) -> Result<Vec<f64>> {
    ensure_in_view(view, class_attribute)?;
    let mut counts = vec![0.0; class_attribute.number_of_values()];
    for instance in view.instances() {
        counts[instance.value(class_attribute)?.index()] += 1.0;
    }
    Ok(counts)
}

/// Class distributions of every branch of `split_attribute`, gathered in a
/// single pass: `result[v][c]` counts rows with split value `v` and class `c`.
pub fn split_distributions(
    view: &dyn TableView,
    class_attribute: &NominalAttribute,
    split_attribute: &NominalAttribute,
) -> Result<Vec<Vec<f64>>> {
    ensure_in_view(view, class_attribute)?;
    ensure_in_view(view, split_attribute)?;
    let mut dists =
        vec![vec![0.0; class_attribute.number_of_values()]; split_attribute.number_of_values()];
    for instance in view.instances() {
        let branch = instance.value(split_attribute)?.index();
        let class = instance.value(class_attribute)?.index();
        dists[branch][class] += 1.0;
    }
    Ok(dists)
}

/// Base-2 entropy of the class distribution. 0.0 for an empty view.
pub fn entropy(view: &dyn TableView, class_attribute: &NominalAttribute) -> Result<f64> {
    let distribution = class_distribution(view, class_attribute)?;
    Ok(InfoGainSplitCriterion::compute_entropy(&distribution))
}

/// Entropy reduction obtained by partitioning the view on `split_attribute`.
///
/// Domain values that do not occur in the view contribute nothing.
pub fn information_gain(
    view: &dyn TableView,
    class_attribute: &NominalAttribute,
    split_attribute: &NominalAttribute,
) -> Result<f64> {
    let post_split = split_distributions(view, class_attribute, split_attribute)?;
    Ok(merit_of_partition(&post_split))
}

/// Information gain of a partition given its per-branch class distributions.
pub(crate) fn merit_of_partition(post_split: &[Vec<f64>]) -> f64 {
    let classes = post_split.first().map_or(0, Vec::len);
    let mut pre_split = vec![0.0; classes];
    for dist in post_split {
        for (total, count) in pre_split.iter_mut().zip(dist) {
            *total += count;
        }
    }
    InfoGainSplitCriterion::new().get_merit_of_split(&pre_split, post_split)
}

/// The most frequent class value. Ties go to the value seen first in row
/// order. An empty view has no most common value and is rejected.
pub fn most_common_value(
    view: &dyn TableView,
    class_attribute: &NominalAttribute,
) -> Result<Value> {
    ensure_in_view(view, class_attribute)?;
    if view.is_empty() {
        return Err(Id3Error::invalid_input(format!(
            "no most common value of '{}' in an empty view",
            class_attribute.name()
        )));
    }

    let mut counts = vec![0usize; class_attribute.number_of_values()];
    let mut first_seen: Vec<&Value> = Vec::new();
    for instance in view.instances() {
        let value = instance.value(class_attribute)?;
        if counts[value.index()] == 0 {
            first_seen.push(value);
        }
        counts[value.index()] += 1;
    }

    let mut best = first_seen[0];
    for &candidate in &first_seen[1..] {
        if counts[candidate.index()] > counts[best.index()] {
            best = candidate;
        }
    }
    Ok(best.clone())
}
