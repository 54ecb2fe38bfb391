use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::id3::train_model_with_policy;
use crate::classifiers::decision_tree::nodes::Node;
use crate::classifiers::decision_tree::parameters::DecisionTreeParams;
use crate::core::attributes::{AttributeRef, NominalAttribute, Value};
use crate::core::instances::Instance;
use crate::core::table::Table;
use crate::error::{Id3Error, Result};
use std::sync::Arc;

/// ID3 classifier configured by [`DecisionTreeParams`].
#[derive(Debug, Default)]
pub struct DecisionTree {
    params: DecisionTreeParams,
    class_attribute: Option<AttributeRef>,
    root: Option<Node>,
}

impl DecisionTree {
    pub fn new(params: DecisionTreeParams) -> Self {
        Self {
            params,
            class_attribute: None,
            root: None,
        }
    }

    pub fn params(&self) -> &DecisionTreeParams {
        &self.params
    }

    pub fn class_attribute(&self) -> Option<&AttributeRef> {
        self.class_attribute.as_ref()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_trained(&self) -> bool {
        self.root.is_some()
    }

    /// Text rendering of the trained tree.
    pub fn render(&self) -> Result<String> {
        Ok(self.trained_root()?.to_string())
    }

    fn trained_root(&self) -> Result<&Node> {
        self.root
            .as_ref()
            .ok_or_else(|| Id3Error::invalid_input("decision tree has not been trained"))
    }

    fn resolve_class_attribute(&self, table: &Table) -> Result<AttributeRef> {
        let attribute = match &self.params.class_attribute {
            Some(name) => table.attribute_named(name).ok_or_else(|| {
                Id3Error::invalid_input(format!("class attribute '{name}' is not in the table"))
            })?,
            None => table
                .last_attribute()
                .ok_or_else(|| Id3Error::invalid_input("table has no attributes"))?,
        };
        Ok(Arc::clone(attribute))
    }

    fn candidate_attributes(
        &self,
        table: &Table,
        class_attribute: &NominalAttribute,
    ) -> Result<Vec<AttributeRef>> {
        let mut exclude: Vec<&NominalAttribute> = vec![class_attribute];
        for name in &self.params.excluded_attributes {
            let attribute = table.attribute_named(name).ok_or_else(|| {
                Id3Error::invalid_input(format!("excluded attribute '{name}' is not in the table"))
            })?;
            exclude.push(attribute.as_ref());
        }
        Ok(table.attributes_except(&exclude))
    }
}

impl Classifier for DecisionTree {
    fn train_on_table(&mut self, table: &Table) -> Result<()> {
        let class_attribute = self.resolve_class_attribute(table)?;
        let candidates = self.candidate_attributes(table, &class_attribute)?;
        let root = train_model_with_policy(
            table,
            &class_attribute,
            &candidates,
            self.params.empty_branch_policy,
        )?;
        self.class_attribute = Some(class_attribute);
        self.root = Some(root);
        Ok(())
    }

    fn classify(&self, instance: &Instance) -> Result<Value> {
        Ok(self.trained_root()?.classify(instance)?.clone())
    }

    fn get_votes_for_instance(&self, instance: &Instance) -> Result<Vec<f64>> {
        let predicted = self.classify(instance)?;
        let mut votes = vec![0.0; predicted.attribute().number_of_values()];
        votes[predicted.index()] = 1.0;
        Ok(votes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::parameters::EmptyBranchPolicy;
    use crate::testing::weather_table;

    #[test]
    fn defaults_to_last_attribute_as_class() {
        let table = weather_table();
        let mut tree = DecisionTree::default();
        assert!(!tree.is_trained());
        assert!(tree.render().is_err());

        tree.train_on_table(&table).unwrap();
        assert_eq!(tree.class_attribute().unwrap().name(), "play");
        assert!(tree.render().unwrap().starts_with("outlook\n"));
    }

    #[test]
    fn classifies_and_votes() {
        let table = weather_table();
        let mut tree = DecisionTree::default();
        tree.train_on_table(&table).unwrap();

        let day = Instance::from_labels(
            table.attributes(),
            &["rainy", "hot", "high", "TRUE", "yes"],
        )
        .unwrap();
        assert_eq!(tree.classify(&day).unwrap().label(), "no");
        assert_eq!(tree.get_votes_for_instance(&day).unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn explicit_class_and_exclusions() {
        let table = weather_table();
        let params = DecisionTreeParams {
            class_attribute: Some("windy".into()),
            excluded_attributes: vec!["play".into(), "outlook".into()],
            empty_branch_policy: EmptyBranchPolicy::MostCommonParent,
        };
        let mut tree = DecisionTree::new(params);
        tree.train_on_table(&table).unwrap();
        assert_eq!(tree.class_attribute().unwrap().name(), "windy");
        let rendered = tree.render().unwrap();
        assert!(!rendered.contains("outlook"));
        assert!(!rendered.contains("play"));
    }

    #[test]
    fn unknown_attribute_names_are_rejected() {
        let table = weather_table();
        let mut tree = DecisionTree::new(DecisionTreeParams {
            class_attribute: Some("rain".into()),
            ..Default::default()
        });
        assert!(matches!(
            tree.train_on_table(&table),
            Err(Id3Error::InvalidInput(_))
        ));

        let mut tree = DecisionTree::new(DecisionTreeParams {
            excluded_attributes: vec!["day".into()],
            ..Default::default()
        });
        assert!(matches!(
            tree.train_on_table(&table),
            Err(Id3Error::InvalidInput(_))
        ));
    }

    #[test]
    fn classify_before_training_fails() {
        let table = weather_table();
        let tree = DecisionTree::default();
        assert!(matches!(
            tree.classify(table.instances().first().unwrap()),
            Err(Id3Error::InvalidInput(_))
        ));
    }
}
