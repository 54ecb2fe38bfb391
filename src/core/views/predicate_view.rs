use crate::core::attributes::{AttributeRef, Value};
use crate::core::instances::Instance;
use crate::core::views::{IndexView, TableView};
use crate::error::{Id3Error, Result};
use std::sync::Arc;

/// The rows of a parent view whose value for `attribute` equals `value`.
///
/// Matching row indices are collected in a single pass at construction;
/// afterwards the view behaves exactly like an [`IndexView`].
pub struct PredicateView<'a> {
    rows: IndexView<'a>,
    attribute: AttributeRef,
    value: Value,
}

impl<'a> PredicateView<'a> {
    pub fn select_instances(
        parent: &'a dyn TableView,
        attribute: &AttributeRef,
        value: &Value,
    ) -> Result<PredicateView<'a>> {
        if !parent.contains_attribute(attribute) {
            return Err(Id3Error::invalid_input(format!(
                "attribute '{}' is not part of the view",
                attribute.name()
            )));
        }
        if value.attribute().as_ref() != attribute.as_ref() {
            return Err(Id3Error::invalid_input(format!(
                "value '{}' belongs to attribute '{}', not '{}'",
                value,
                value.attribute().name(),
                attribute.name()
            )));
        }

        let mut indices = Vec::new();
        for i in 0..parent.instance_count() {
            if parent.instance_at(i)?.value(attribute)? == value {
                indices.push(i);
            }
        }

        Ok(PredicateView {
            rows: IndexView::new(parent, indices)?,
            attribute: Arc::clone(attribute),
            value: value.clone(),
        })
    }

    pub fn attribute(&self) -> &AttributeRef {
        &self.attribute
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn indices(&self) -> &[usize] {
        self.rows.indices()
    }
}

impl TableView for PredicateView<'_> {
    fn attribute_count(&self) -> usize {
        self.rows.attribute_count()
    }

    fn attribute_at(&self, index: usize) -> Result<&AttributeRef> {
        self.rows.attribute_at(index)
    }

    fn instance_count(&self) -> usize {
        self.rows.instance_count()
    }

    fn instance_at(&self, index: usize) -> Result<&Instance> {
        self.rows.instance_at(index)
    }
}
