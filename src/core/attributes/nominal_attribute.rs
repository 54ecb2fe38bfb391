use crate::error::{Id3Error, Result};
use crate::utils::file_parsing::quote_if_needed;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an attribute. Tables, instances and tree nodes all hold
/// the same allocation; attributes are never cloned once defined.
pub type AttributeRef = Arc<NominalAttribute>;

/// A categorical column: a name plus its finite, ordered domain of labels.
#[derive(Debug, Clone)]
pub struct NominalAttribute {
    name: String,
    values: Vec<String>,
    label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    /// Builds an attribute from its name and domain.
    ///
    /// The domain must be non-empty and must not repeat a label.
    pub fn new<N, I, V>(name: N, values: I) -> Result<NominalAttribute>
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(Id3Error::format(format!(
                "attribute '{name}' declares an empty domain"
            )));
        }

        let mut label_to_index = HashMap::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            if label_to_index.insert(v.clone(), i).is_some() {
                return Err(Id3Error::format(format!(
                    "attribute '{name}' declares value '{v}' more than once"
                )));
            }
        }

        Ok(NominalAttribute {
            name,
            values,
            label_to_index,
        })
    }

    /// Same as [`NominalAttribute::new`], wrapped in a shareable handle.
    pub fn shared<N, I, V>(name: N, values: I) -> Result<AttributeRef>
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        NominalAttribute::new(name, values).map(Arc::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn arff_representation(&self) -> String {
        let labels: Vec<String> = self.values.iter().map(|v| quote_if_needed(v)).collect();
        format!(
            "@attribute {} {{{}}}",
            quote_if_needed(&self.name),
            labels.join(", ")
        )
    }
}

impl PartialEq for NominalAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.values == other.values
    }
}

impl Eq for NominalAttribute {}

impl fmt::Display for NominalAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
