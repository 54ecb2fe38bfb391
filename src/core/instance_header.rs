use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::error::{Id3Error, Result};
use std::sync::Arc;

/// Relation name plus the ordered attribute list (column order) of a table.
#[derive(Debug, Clone, Default)]
pub struct InstanceHeader {
    relation_name: String,
    attributes: Vec<AttributeRef>,
}

impl InstanceHeader {
    pub fn new(relation_name: String, attributes: Vec<AttributeRef>) -> Result<InstanceHeader> {
        let mut header = InstanceHeader {
            relation_name,
            attributes: Vec::with_capacity(attributes.len()),
        };
        for attribute in attributes {
            header.push_attribute(attribute)?;
        }
        Ok(header)
    }

    pub fn empty(relation_name: String) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes: Vec::new(),
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn set_relation_name(&mut self, name: String) {
        self.relation_name = name;
    }

    pub fn attributes(&self) -> &[AttributeRef] {
        &self.attributes
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&AttributeRef> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    pub fn attribute_named(&self, name: &str) -> Option<&AttributeRef> {
        self.index_of_attribute(name).map(|i| &self.attributes[i])
    }

    /// Appends a column. Attribute names are unique within a header.
    pub fn push_attribute(&mut self, attribute: AttributeRef) -> Result<()> {
        if self.index_of_attribute(attribute.name()).is_some() {
            return Err(Id3Error::invalid_input(format!(
                "attribute '{}' is already defined",
                attribute.name()
            )));
        }
        self.attributes.push(attribute);
        Ok(())
    }

    /// All attributes in column order except the excluded ones.
    pub fn attributes_except(&self, exclude: &[&NominalAttribute]) -> Vec<AttributeRef> {
        self.attributes
            .iter()
            .filter(|a| !exclude.iter().any(|e| a.as_ref() == *e))
            .map(Arc::clone)
            .collect()
    }
}
