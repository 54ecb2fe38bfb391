use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::core::views::TableView;
use crate::error::{Id3Error, Result, checked_get};
use crate::streams::{ArffFileStream, Stream};
use crate::utils::file_parsing::quote_if_needed;
use log::debug;
use std::fmt;
use std::path::Path;

/// Owning table of categorical data: attributes are the columns, instances
/// the rows. Both keep insertion order.
///
/// Attributes must be added before the instances that use them; every
/// instance must carry exactly one value per attribute defined at the time
/// it is inserted.
#[derive(Debug, Default)]
pub struct Table {
    header: InstanceHeader,
    instances: Vec<Instance>,
}

impl Table {
    pub fn new<S: Into<String>>(relation_name: S) -> Table {
        Table {
            header: InstanceHeader::empty(relation_name.into()),
            instances: Vec::new(),
        }
    }

    pub fn with_attributes<S: Into<String>>(
        relation_name: S,
        attributes: Vec<AttributeRef>,
    ) -> Result<Table> {
        Ok(Table {
            header: InstanceHeader::new(relation_name.into(), attributes)?,
            instances: Vec::new(),
        })
    }

    pub fn with_header(header: InstanceHeader) -> Table {
        Table {
            header,
            instances: Vec::new(),
        }
    }

    /// Drains `stream` into a new table sharing the stream's header.
    pub fn from_stream(stream: &mut dyn Stream) -> Result<Table> {
        let mut table = Table::with_header(stream.header().clone());
        while stream.has_more_instances() {
            match stream.next_instance()? {
                Some(instance) => table.add_instance(instance)?,
                None => break,
            }
        }
        debug!(
            "loaded relation '{}': {} attributes, {} instances",
            table.relation_name(),
            table.attribute_count(),
            table.instance_count()
        );
        Ok(table)
    }

    pub fn load_arff<P: AsRef<Path>>(path: P) -> Result<Table> {
        let mut stream = ArffFileStream::new(path)?;
        Table::from_stream(&mut stream)
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn relation_name(&self) -> &str {
        self.header.relation_name()
    }

    pub fn set_relation_name<S: Into<String>>(&mut self, name: S) {
        self.header.set_relation_name(name.into());
    }

    pub fn attributes(&self) -> &[AttributeRef] {
        self.header.attributes()
    }

    pub fn attribute_named(&self, name: &str) -> Option<&AttributeRef> {
        self.header.attribute_named(name)
    }

    /// The last column, conventionally the class attribute.
    pub fn last_attribute(&self) -> Option<&AttributeRef> {
        self.header.attributes().last()
    }

    /// Every attribute except the excluded ones, in column order.
    pub fn attributes_except(&self, exclude: &[&NominalAttribute]) -> Vec<AttributeRef> {
        self.header.attributes_except(exclude)
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn add_attribute(&mut self, attribute: AttributeRef) -> Result<()> {
        self.header.push_attribute(attribute)
    }

    pub fn add_attributes<I>(&mut self, attributes: I) -> Result<()>
    where
        I: IntoIterator<Item = AttributeRef>,
    {
        for attribute in attributes {
            self.add_attribute(attribute)?;
        }
        Ok(())
    }

    pub fn add_instance(&mut self, instance: Instance) -> Result<()> {
        if let Some(missing) = self
            .header
            .attributes()
            .iter()
            .find(|a| !instance.has_attribute(a))
        {
            return Err(Id3Error::invalid_input(format!(
                "instance {} has no value for attribute '{}'",
                self.instances.len(),
                missing.name()
            )));
        }
        if instance.number_of_attributes() != self.header.number_of_attributes() {
            return Err(Id3Error::invalid_input(format!(
                "instance {} has {} values but the table defines {} attributes",
                self.instances.len(),
                instance.number_of_attributes(),
                self.header.number_of_attributes()
            )));
        }
        self.instances.push(instance);
        Ok(())
    }

    pub fn add_instances<I>(&mut self, instances: I) -> Result<()>
    where
        I: IntoIterator<Item = Instance>,
    {
        for instance in instances {
            self.add_instance(instance)?;
        }
        Ok(())
    }

    /// Adds a row given one label per attribute, in column order.
    pub fn add_row<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<()> {
        let instance = Instance::from_labels(self.header.attributes(), labels)?;
        self.add_instance(instance)
    }
}

impl TableView for Table {
    fn attribute_count(&self) -> usize {
        self.header.number_of_attributes()
    }

    fn attribute_at(&self, index: usize) -> Result<&AttributeRef> {
        checked_get(self.header.attributes(), index)
    }

    fn instance_count(&self) -> usize {
        self.instances.len()
    }

    fn instance_at(&self, index: usize) -> Result<&Instance> {
        checked_get(&self.instances, index)
    }
}

/// Renders the table in ARFF form.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@relation {}", quote_if_needed(self.relation_name()))?;
        writeln!(f)?;
        for attribute in self.attributes() {
            writeln!(f, "{}", attribute.arff_representation())?;
        }
        writeln!(f)?;
        writeln!(f, "@data")?;
        for instance in &self.instances {
            writeln!(f, "{instance}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::Value;
    use crate::testing::{VecStream, WEATHER_ROWS, weather_header, weather_table};

    #[test]
    fn exposes_rows_and_columns_in_insertion_order() {
        let table = weather_table();
        assert_eq!(table.attribute_count(), 5);
        assert_eq!(table.instance_count(), 14);
        assert_eq!(table.attribute_at(0).unwrap().name(), "outlook");
        assert_eq!(table.last_attribute().unwrap().name(), "play");
        assert_eq!(
            table.instance_at(13).unwrap().to_string(),
            "rainy,mild,high,TRUE,no"
        );
        assert!(matches!(
            table.instance_at(14),
            Err(Id3Error::Index { index: 14, len: 14 })
        ));
    }

    #[test]
    fn rejects_instances_that_do_not_cover_the_columns() {
        let mut table = weather_table();
        let outlook = table.attribute_named("outlook").unwrap().clone();
        let partial = Instance::new(vec![Value::from_label(&outlook, "sunny").unwrap()]).unwrap();
        assert!(matches!(
            table.add_instance(partial),
            Err(Id3Error::InvalidInput(_))
        ));

        let extra = NominalAttribute::shared("extra", ["x"]).unwrap();
        let mut labels: Vec<&str> = vec!["sunny", "hot", "high", "FALSE", "no"];
        let mut atts = table.attributes().to_vec();
        atts.push(extra);
        labels.push("x");
        let wide = Instance::from_labels(&atts, &labels[..]).unwrap();
        assert!(matches!(
            table.add_instance(wide),
            Err(Id3Error::InvalidInput(_))
        ));
        assert_eq!(table.instance_count(), 14);
    }

    #[test]
    fn out_of_domain_rows_are_format_errors() {
        let mut table = weather_table();
        assert!(matches!(
            table.add_row(&["sunny", "hot", "humid", "FALSE", "no"]),
            Err(Id3Error::Format(_))
        ));
    }

    #[test]
    fn displays_as_arff() {
        let mut table = Table::with_attributes(
            "tiny",
            vec![
                NominalAttribute::shared("a", ["x", "y"]).unwrap(),
                NominalAttribute::shared("class", ["p", "n"]).unwrap(),
            ],
        )
        .unwrap();
        table.add_row(&["y", "p"]).unwrap();
        assert_eq!(
            table.to_string(),
            "@relation tiny\n\n@attribute a {x, y}\n@attribute class {p, n}\n\n@data\ny,p\n"
        );
    }

    #[test]
    fn drains_a_stream_into_rows() {
        let rows = WEATHER_ROWS
            .iter()
            .map(|row| row.iter().map(|label| label.to_string()).collect())
            .collect();
        let mut stream = VecStream::new(weather_header(), rows);
        let table = Table::from_stream(&mut stream).unwrap();
        assert!(!stream.has_more_instances());
        assert_eq!(table.relation_name(), "weather.symbolic");
        assert_eq!(table.instances(), weather_table().instances());
    }

    #[test]
    fn stream_row_errors_abort_the_load() {
        let rows = vec![
            vec!["sunny".to_string(), "hot".into(), "high".into(), "FALSE".into(), "no".into()],
            vec!["sunny".to_string(), "hot".into(), "high".into()],
        ];
        let mut stream = VecStream::new(weather_header(), rows);
        assert!(matches!(
            Table::from_stream(&mut stream),
            Err(Id3Error::Format(_))
        ));
    }
}
