use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::error::{Id3Error, Result};
use crate::streams::Stream;
use crate::utils::file_parsing::{
    parse_nominal_declaration, split_csv_preserving_quotes, split_keyword,
    strip_surrounding_quotes, take_token,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Lines};
use std::path::{Path, PathBuf};

type LineSource = Lines<Box<dyn BufRead>>;

/// Reads a nominal ARFF relation.
///
/// The header (`@relation`, `@attribute name {a, b, ...}`, `@data`) is parsed
/// eagerly; data rows are parsed one at a time as instances are pulled.
/// Blank lines and `%` comments are ignored everywhere.
pub struct ArffFileStream {
    path: Option<PathBuf>,
    header: InstanceHeader,
    lines: LineSource,
    line_number: usize,
    data_start: usize,
    pending: Option<(usize, String)>,
    read_error: Option<Id3Error>,
}

impl ArffFileStream {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<ArffFileStream> {
        let path = path.as_ref().to_path_buf();
        let reader: Box<dyn BufRead> = Box::new(BufReader::new(File::open(&path)?));
        let mut stream = Self::from_reader(reader)?;
        stream.path = Some(path);
        Ok(stream)
    }

    /// Builds a stream over an in-memory or otherwise pre-opened source.
    /// Such streams cannot be restarted.
    pub fn from_reader(reader: Box<dyn BufRead>) -> Result<ArffFileStream> {
        let mut lines = reader.lines();
        let mut line_number = 0;
        let header = read_header(&mut lines, &mut line_number)?;

        let mut stream = ArffFileStream {
            path: None,
            header,
            lines,
            line_number,
            data_start: line_number,
            pending: None,
            read_error: None,
        };
        stream.advance()?;
        Ok(stream)
    }

    pub fn from_contents(contents: &str) -> Result<ArffFileStream> {
        Self::from_reader(Box::new(Cursor::new(contents.to_string())))
    }

    fn advance(&mut self) -> Result<()> {
        self.pending = None;
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }
            self.pending = Some((self.line_number, trimmed.to_string()));
            break;
        }
        Ok(())
    }

    fn parse_row(&self, line_number: usize, line: &str) -> Result<Instance> {
        let fields = split_csv_preserving_quotes(line);
        let labels: Vec<&str> = fields.iter().map(|f| strip_surrounding_quotes(f)).collect();
        Instance::from_labels(self.header.attributes(), &labels[..]).map_err(|e| match e {
            Id3Error::Format(msg) => Id3Error::format(format!("line {line_number}: {msg}")),
            other => other,
        })
    }
}

fn read_header(lines: &mut LineSource, line_number: &mut usize) -> Result<InstanceHeader> {
    let mut header = InstanceHeader::default();
    for line in lines.by_ref() {
        *line_number += 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        let (keyword, body) = split_keyword(trimmed).ok_or_else(|| {
            Id3Error::format(format!(
                "line {line_number}: expected a header declaration, found '{trimmed}'"
            ))
        })?;
        let at_line = |e: Id3Error| match e {
            Id3Error::Format(msg) => Id3Error::format(format!("line {line_number}: {msg}")),
            other => other,
        };

        match keyword.as_str() {
            "relation" => {
                let (name, _) = take_token(body).ok_or_else(|| {
                    Id3Error::format(format!("line {line_number}: @relation without a name"))
                })?;
                header.set_relation_name(name);
            }
            "attribute" => {
                let (name, values) = parse_nominal_declaration(body).map_err(at_line)?;
                let attribute = NominalAttribute::shared(name, values).map_err(at_line)?;
                header.push_attribute(attribute)?;
            }
            "data" => {
                if header.number_of_attributes() == 0 {
                    return Err(Id3Error::format("@data section before any @attribute"));
                }
                return Ok(header);
            }
            other => {
                return Err(Id3Error::format(format!(
                    "line {line_number}: unknown declaration '@{other}'"
                )));
            }
        }
    }
    Err(Id3Error::format("missing @data section"))
}

impl Stream for ArffFileStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.pending.is_some() || self.read_error.is_some()
    }

    /// A failure while reading ahead is reported by the call after the one
    /// that returned the last complete row.
    fn next_instance(&mut self) -> Result<Option<Instance>> {
        if let Some(error) = self.read_error.take() {
            return Err(error);
        }
        let Some((line_number, line)) = self.pending.take() else {
            return Ok(None);
        };
        let row = self.parse_row(line_number, &line);
        if let Err(error) = self.advance() {
            self.read_error = Some(error);
        }
        row.map(Some)
    }

    fn restart(&mut self) -> Result<()> {
        let path = self.path.as_ref().ok_or_else(|| {
            Id3Error::invalid_input("stream was not opened from a file and cannot restart")
        })?;
        let reader: Box<dyn BufRead> = Box::new(BufReader::new(File::open(path)?));
        self.lines = reader.lines();
        self.read_error = None;
        self.line_number = 0;
        for line in self.lines.by_ref().take(self.data_start) {
            line?;
        }
        self.line_number = self.data_start;
        self.advance()
    }
}
