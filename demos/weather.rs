use anyhow::{Context, Result, bail};
use id3_tree::classifiers::decision_tree::DecisionTreeParams;
use id3_tree::classifiers::{Classifier, DecisionTree};
use id3_tree::core::table::Table;
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/weather.nominal.arff"),
    };
    let params = match args.next() {
        Some(params_path) => {
            let json = fs::read_to_string(&params_path)
                .with_context(|| format!("reading parameters from {params_path}"))?;
            DecisionTreeParams::from_json(&json).context("parsing tree parameters")?
        }
        None => DecisionTreeParams::default(),
    };
    if args.next().is_some() {
        bail!("usage: weather [ARFF_FILE] [PARAMS_JSON]");
    }

    let table =
        Table::load_arff(&path).with_context(|| format!("loading {}", path.display()))?;
    println!("{table}");

    let mut tree = DecisionTree::new(params);
    tree.train_on_table(&table).context("training decision tree")?;
    let rendered = tree.render().context("rendering decision tree")?;
    println!("{rendered}");

    let class_attribute = tree
        .class_attribute()
        .context("trained tree has no class attribute")?;
    let mut correct = 0;
    for instance in table.instances() {
        let predicted = tree.classify(instance)?;
        if &predicted == instance.value(class_attribute)? {
            correct += 1;
        }
    }
    println!(
        "training accuracy: {correct}/{} on '{}'",
        table.instances().len(),
        class_attribute
    );
    Ok(())
}
