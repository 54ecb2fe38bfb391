use id3_tree::Id3Error;
use id3_tree::classifiers::Classifier;
use id3_tree::classifiers::decision_tree::{
    DecisionTree, DecisionTreeParams, InnerNode, Leaf, Node, NodeVisitor, measures,
    train_on_subset, train_on_table,
};
use id3_tree::core::attributes::NominalAttribute;
use id3_tree::core::instances::Instance;
use id3_tree::core::table::Table;
use id3_tree::core::views::{IndexView, TableView};
use std::path::PathBuf;

fn weather_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/weather.nominal.arff")
}

fn weather() -> Table {
    Table::load_arff(weather_path()).unwrap()
}

#[test]
fn loads_the_weather_relation() {
    let table = weather();
    assert_eq!(table.relation_name(), "weather.symbolic");
    assert_eq!(table.attribute_count(), 5);
    assert_eq!(table.instance_count(), 14);
    assert_eq!(table.last_attribute().unwrap().name(), "play");
}

#[test]
fn builds_the_textbook_tree() {
    let table = weather();
    let play = table.last_attribute().unwrap().clone();
    let tree = train_on_table(&table, &play).unwrap();
    assert_eq!(
        tree.to_string(),
        "outlook\n  sunny -> humidity\n    high -> no\n    normal -> yes\n  overcast -> yes\n  rainy -> windy\n    TRUE -> no\n    FALSE -> yes\n"
    );
}

#[test]
fn root_has_strictly_highest_gain() {
    let table = weather();
    let play = table.last_attribute().unwrap().clone();
    let tree = train_on_table(&table, &play).unwrap();
    let Node::Inner(root) = &tree else {
        panic!("expected an inner root");
    };
    let root_gain = measures::information_gain(&table, &play, root.decision_attribute()).unwrap();
    for attribute in table.attributes_except(&[play.as_ref(), root.decision_attribute().as_ref()]) {
        assert!(root_gain > measures::information_gain(&table, &play, &attribute).unwrap());
    }
}

#[test]
fn index_view_scenario() {
    let table = weather();
    let view = IndexView::new(&table, vec![2, 5, 9]).unwrap();
    assert_eq!(view.instance_count(), 3);
    assert!(std::ptr::eq(
        view.instance_at(1).unwrap(),
        table.instance_at(5).unwrap()
    ));
}

#[test]
fn subset_training_matches_view_training() {
    let table = weather();
    let play = table.last_attribute().unwrap().clone();
    let rows = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let tree = train_on_subset(&table, &rows, &play).unwrap();
    for &row in &rows {
        let instance = table.instance_at(row).unwrap();
        assert_eq!(
            tree.classify(instance).unwrap(),
            instance.value(&play).unwrap()
        );
    }
}

#[test]
fn unseen_values_fail_explicitly() {
    let table = weather();
    let mut classifier = DecisionTree::new(DecisionTreeParams::default());
    classifier.train_on_table(&table).unwrap();

    // same names but distinct domains are different attributes
    let mut foreign = Table::new("foreign");
    let outlook = NominalAttribute::shared("outlook", ["foggy"]).unwrap();
    foreign.add_attribute(outlook).unwrap();
    foreign.add_row(&["foggy"]).unwrap();
    assert!(matches!(
        classifier.classify(foreign.instance_at(0).unwrap()),
        Err(Id3Error::InvalidInput(_))
    ));

    // an independently loaded copy carries equal attributes and classifies fine
    let other = weather();
    let copy = other.instance_at(6).unwrap();
    assert_eq!(classifier.classify(copy).unwrap().label(), "yes");
}

#[test]
fn table_display_round_trips_through_arff() {
    let table = weather();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.arff");
    std::fs::write(&path, table.to_string()).unwrap();

    let copy = Table::load_arff(&path).unwrap();
    assert_eq!(copy.to_string(), table.to_string());
    assert_eq!(copy.attributes(), table.attributes());
}

struct LeafLabels(Vec<String>);

impl NodeVisitor for LeafLabels {
    type Output = ();

    fn visit_leaf(&mut self, leaf: &Leaf) {
        self.0.push(leaf.label().to_string());
    }

    fn visit_inner(&mut self, node: &InnerNode) {
        for child in node.children() {
            child.accept(self);
        }
    }
}

#[test]
fn custom_visitors_walk_every_leaf() {
    let table = weather();
    let play = table.last_attribute().unwrap().clone();
    let tree = train_on_table(&table, &play).unwrap();
    let mut labels = LeafLabels(Vec::new());
    tree.accept(&mut labels);
    assert_eq!(labels.0, vec!["no", "yes", "yes", "no", "yes"]);
}

#[test]
fn new_instances_route_to_a_leaf() {
    let table = weather();
    let play = table.last_attribute().unwrap().clone();
    let tree = train_on_table(&table, &play).unwrap();
    let day = Instance::from_labels(
        table.attributes(),
        &["sunny", "cool", "normal", "TRUE", "no"],
    )
    .unwrap();
    let found = tree.filter_instance_to_leaf(&day).unwrap();
    assert_eq!(found.get_node().label(), "yes");
    assert_eq!(found.get_depth(), 2);
    assert_eq!(found.get_parent_branch(), Some(1));
    assert_eq!(
        found.get_parent().unwrap().decision_attribute().name(),
        "humidity"
    );
}
