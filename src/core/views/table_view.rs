use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::instances::Instance;
use crate::error::Result;

/// Read-only access to the columns and rows of a table.
///
/// Implemented by [`Table`](crate::core::table::Table) itself and by the
/// narrowing views ([`IndexView`](super::IndexView),
/// [`PredicateView`](super::PredicateView)). Views borrow their parent and
/// never copy instances, so any view can be stacked on any other.
pub trait TableView {
    fn attribute_count(&self) -> usize;

    /// Fails with [`Id3Error::Index`](crate::error::Id3Error::Index) when
    /// `index >= attribute_count()`.
    fn attribute_at(&self, index: usize) -> Result<&AttributeRef>;

    fn instance_count(&self) -> usize;

    /// Fails with [`Id3Error::Index`](crate::error::Id3Error::Index) when
    /// `index >= instance_count()`.
    fn instance_at(&self, index: usize) -> Result<&Instance>;

    fn is_empty(&self) -> bool {
        self.instance_count() == 0
    }

    fn index_of_attribute(&self, attribute: &NominalAttribute) -> Option<usize> {
        (0..self.attribute_count()).find(|&i| {
            self.attribute_at(i)
                .is_ok_and(|candidate| candidate.as_ref() == attribute)
        })
    }

    fn contains_attribute(&self, attribute: &NominalAttribute) -> bool {
        self.index_of_attribute(attribute).is_some()
    }
}

impl<'v> dyn TableView + 'v {
    /// Visible rows, in view order.
    pub fn instances(&self) -> ViewInstances<'_> {
        ViewInstances {
            view: self,
            next: 0,
        }
    }
}

pub struct ViewInstances<'a> {
    view: &'a dyn TableView,
    next: usize,
}

impl<'a> Iterator for ViewInstances<'a> {
    type Item = &'a Instance;

    fn next(&mut self) -> Option<Self::Item> {
        let instance = self.view.instance_at(self.next).ok()?;
        self.next += 1;
        Some(instance)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.view.instance_count().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ViewInstances<'_> {}
