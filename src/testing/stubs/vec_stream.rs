use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::error::Result;
use crate::streams::Stream;

/// In-memory stream yielding one instance per row of labels.
pub struct VecStream {
    pub header: InstanceHeader,
    pub rows: Vec<Vec<String>>,
    idx: usize,
}

impl VecStream {
    pub fn new(header: InstanceHeader, rows: Vec<Vec<String>>) -> Self {
        Self {
            header,
            rows,
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Result<Option<Instance>> {
        if !self.has_more_instances() {
            return Ok(None);
        }

        let row = &self.rows[self.idx];
        self.idx += 1;
        Instance::from_labels(self.header.attributes(), &row[..]).map(Some)
    }

    fn restart(&mut self) -> Result<()> {
        self.idx = 0;
        Ok(())
    }
}
