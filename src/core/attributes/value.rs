use crate::core::attributes::AttributeRef;
use crate::error::{Id3Error, Result};
use std::fmt;
use std::sync::Arc;

/// A member of an attribute's domain.
///
/// Holds the attribute handle and the position of the label inside the
/// domain, so a `Value` can never name a label outside its attribute.
#[derive(Debug, Clone)]
pub struct Value {
    attribute: AttributeRef,
    index: usize,
}

impl Value {
    pub fn from_label(attribute: &AttributeRef, label: &str) -> Result<Value> {
        let index = attribute.index_of_value(label).ok_or_else(|| {
            Id3Error::format(format!(
                "value '{label}' is not in the domain of attribute '{}'",
                attribute.name()
            ))
        })?;
        Ok(Value {
            attribute: Arc::clone(attribute),
            index,
        })
    }

    pub fn from_index(attribute: &AttributeRef, index: usize) -> Result<Value> {
        let len = attribute.number_of_values();
        if index >= len {
            return Err(Id3Error::Index { index, len });
        }
        Ok(Value {
            attribute: Arc::clone(attribute),
            index,
        })
    }

    pub fn attribute(&self) -> &AttributeRef {
        &self.attribute
    }

    /// Position of this value in the attribute's domain.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.attribute.values()[self.index]
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.label() == other.label()
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
