use crate::core::attributes::Value;
use crate::core::instances::Instance;
use crate::core::table::Table;
use crate::error::Result;

pub trait Classifier {
    /// Learns a model from every row of `table`, replacing any previous one.
    fn train_on_table(&mut self, table: &Table) -> Result<()>;

    /// Predicted class value for `instance`.
    fn classify(&self, instance: &Instance) -> Result<Value>;

    /// One vote per class value, in domain order.
    fn get_votes_for_instance(&self, instance: &Instance) -> Result<Vec<f64>>;
}
