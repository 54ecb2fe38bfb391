use crate::classifiers::decision_tree::nodes::Node;
use crate::core::attributes::{AttributeRef, Value};
use crate::core::instances::Instance;
use crate::error::{Id3Error, Result, checked_get};

/// Decision node: one child per value of the decision attribute, in domain
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct InnerNode {
    decision_attribute: AttributeRef,
    children: Vec<Node>,
}

impl InnerNode {
    /// Fails unless `children` has exactly one entry per domain value.
    pub fn new(decision_attribute: AttributeRef, children: Vec<Node>) -> Result<Self> {
        if children.len() != decision_attribute.number_of_values() {
            return Err(Id3Error::invalid_input(format!(
                "attribute '{}' has {} values but {} children were given",
                decision_attribute.name(),
                decision_attribute.number_of_values(),
                children.len()
            )));
        }
        Ok(Self {
            decision_attribute,
            children,
        })
    }

    pub fn decision_attribute(&self) -> &AttributeRef {
        &self.decision_attribute
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Result<&Node> {
        checked_get(&self.children, index)
    }

    pub fn child_for(&self, value: &Value) -> Result<&Node> {
        let index = self.branch_for_label(value.label())?;
        self.child(index)
    }

    /// `(value label, child)` pairs in domain order.
    pub fn branches(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.decision_attribute
            .values()
            .iter()
            .map(String::as_str)
            .zip(self.children.iter())
    }

    pub fn branch_for_instance(&self, instance: &Instance) -> Result<usize> {
        let value = instance.value(&self.decision_attribute)?;
        self.branch_for_label(value.label())
    }

    fn branch_for_label(&self, label: &str) -> Result<usize> {
        self.decision_attribute.index_of_value(label).ok_or_else(|| {
            Id3Error::invalid_input(format!(
                "value '{label}' is not a branch of attribute '{}'",
                self.decision_attribute.name()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::nodes::Leaf;
    use crate::core::attributes::NominalAttribute;

    fn play() -> AttributeRef {
        NominalAttribute::shared("play", ["yes", "no"]).unwrap()
    }

    fn leaf(class: &AttributeRef, label: &str) -> Node {
        Node::Leaf(Leaf::new(Value::from_label(class, label).unwrap()))
    }

    #[test]
    fn requires_one_child_per_domain_value() {
        let class = play();
        let humidity = NominalAttribute::shared("humidity", ["high", "normal"]).unwrap();
        assert!(matches!(
            InnerNode::new(humidity.clone(), vec![leaf(&class, "no")]),
            Err(Id3Error::InvalidInput(_))
        ));
        let node =
            InnerNode::new(humidity, vec![leaf(&class, "no"), leaf(&class, "yes")]).unwrap();
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn routes_instances_by_decision_value() {
        let class = play();
        let humidity = NominalAttribute::shared("humidity", ["high", "normal"]).unwrap();
        let node = InnerNode::new(
            humidity.clone(),
            vec![leaf(&class, "no"), leaf(&class, "yes")],
        )
        .unwrap();

        let inst = Instance::from_labels(&[humidity.clone()], &["normal"]).unwrap();
        assert_eq!(node.branch_for_instance(&inst).unwrap(), 1);

        let normal = Value::from_label(&humidity, "normal").unwrap();
        assert_eq!(node.child_for(&normal).unwrap(), &leaf(&class, "yes"));

        let labels: Vec<&str> = node.branches().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["high", "normal"]);
    }

    #[test]
    fn instance_without_decision_attribute_fails() {
        let class = play();
        let humidity = NominalAttribute::shared("humidity", ["high", "normal"]).unwrap();
        let node =
            InnerNode::new(humidity, vec![leaf(&class, "no"), leaf(&class, "yes")]).unwrap();
        let inst = Instance::from_labels(&[class.clone()], &["yes"]).unwrap();
        assert!(matches!(
            node.branch_for_instance(&inst),
            Err(Id3Error::InvalidInput(_))
        ));
    }

    #[test]
    fn value_outside_the_domain_fails() {
        let class = play();
        let humidity = NominalAttribute::shared("humidity", ["high", "normal"]).unwrap();
        let node =
            InnerNode::new(humidity, vec![leaf(&class, "no"), leaf(&class, "yes")]).unwrap();
        let other = NominalAttribute::shared("humidity", ["dry"]).unwrap();
        let dry = Value::from_label(&other, "dry").unwrap();
        assert!(matches!(node.child_for(&dry), Err(Id3Error::InvalidInput(_))));
    }
}
