use crate::core::attributes::Value;

/// Terminal node: the class value predicted for every instance reaching it.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    value: Value,
}

impl Leaf {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn label(&self) -> &str {
        self.value.label()
    }
}
