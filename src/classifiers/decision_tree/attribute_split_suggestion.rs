use crate::core::attributes::AttributeRef;

/// A candidate split: the attribute, the class distribution of each of its
/// branches, and the information gain of splitting on it.
#[derive(Debug, Clone)]
pub struct AttributeSplitSuggestion {
    attribute: AttributeRef,
    resulting_class_distribution: Vec<Vec<f64>>,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(
        attribute: AttributeRef,
        resulting_class_distribution: Vec<Vec<f64>>,
        merit: f64,
    ) -> Self {
        Self {
            attribute,
            resulting_class_distribution,
            merit,
        }
    }

    pub fn get_attribute(&self) -> &AttributeRef {
        &self.attribute
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }

    pub fn number_of_splits(&self) -> usize {
        self.resulting_class_distribution.len()
    }

    /// Number of rows falling into branch `split_index`.
    pub fn rows_in_split(&self, split_index: usize) -> f64 {
        self.resulting_class_distribution
            .get(split_index)
            .map(|d| d.iter().sum())
            .unwrap_or(0.0)
    }
}
