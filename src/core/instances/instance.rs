use crate::core::attributes::{AttributeRef, NominalAttribute, Value};
use crate::error::{Id3Error, Result};
use std::fmt;

/// One labeled row: an ordered mapping from attribute to value.
///
/// Immutable once built. Values keep a handle to their attribute, so the
/// mapping is resolved by attribute rather than by column position.
#[derive(Debug, PartialEq)]
pub struct Instance {
    values: Vec<Value>,
}

impl Instance {
    pub fn new(values: Vec<Value>) -> Result<Instance> {
        for (i, v) in values.iter().enumerate() {
            if values[..i]
                .iter()
                .any(|w| same_attribute(w.attribute(), v.attribute()))
            {
                return Err(Id3Error::invalid_input(format!(
                    "instance holds more than one value for attribute '{}'",
                    v.attribute().name()
                )));
            }
        }
        Ok(Instance { values })
    }

    /// Binds one label per attribute, in order.
    pub fn from_labels<S: AsRef<str>>(attributes: &[AttributeRef], labels: &[S]) -> Result<Instance> {
        if attributes.len() != labels.len() {
            return Err(Id3Error::format(format!(
                "expected {} values, found {}",
                attributes.len(),
                labels.len()
            )));
        }
        let values = attributes
            .iter()
            .zip(labels)
            .map(|(attribute, label)| Value::from_label(attribute, label.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Instance::new(values)
    }

    pub fn value(&self, attribute: &NominalAttribute) -> Result<&Value> {
        self.values
            .iter()
            .find(|v| same_attribute(v.attribute(), attribute))
            .ok_or_else(|| {
                Id3Error::invalid_input(format!(
                    "instance has no value for attribute '{}'",
                    attribute.name()
                ))
            })
    }

    pub fn has_attribute(&self, attribute: &NominalAttribute) -> bool {
        self.values
            .iter()
            .any(|v| same_attribute(v.attribute(), attribute))
    }

    pub fn value_at_index(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

fn same_attribute(a: &NominalAttribute, b: &NominalAttribute) -> bool {
    std::ptr::eq(a, b) || a == b
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", crate::utils::file_parsing::quote_if_needed(v.label()))?;
        }
        Ok(())
    }
}
