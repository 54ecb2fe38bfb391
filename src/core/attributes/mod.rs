mod nominal_attribute;
mod value;

pub use nominal_attribute::AttributeRef;
pub use nominal_attribute::NominalAttribute;
pub use value::Value;
