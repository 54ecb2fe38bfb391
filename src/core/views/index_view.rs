use crate::core::attributes::AttributeRef;
use crate::core::instances::Instance;
use crate::core::views::TableView;
use crate::error::{Id3Error, Result, checked_get};

/// A subset of a parent view selected by explicit row indices.
///
/// `instance_at(i)` resolves to `parent.instance_at(indices[i])`. The
/// indices are checked against the parent once, at construction.
pub struct IndexView<'a> {
    parent: &'a dyn TableView,
    indices: Vec<usize>,
}

impl<'a> IndexView<'a> {
    pub fn new(parent: &'a dyn TableView, indices: Vec<usize>) -> Result<IndexView<'a>> {
        let len = parent.instance_count();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(Id3Error::Index { index, len });
        }
        Ok(IndexView { parent, indices })
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl TableView for IndexView<'_> {
    fn attribute_count(&self) -> usize {
        self.parent.attribute_count()
    }

    fn attribute_at(&self, index: usize) -> Result<&AttributeRef> {
        self.parent.attribute_at(index)
    }

    fn instance_count(&self) -> usize {
        self.indices.len()
    }

    fn instance_at(&self, index: usize) -> Result<&Instance> {
        let row = *checked_get(&self.indices, index)?;
        self.parent.instance_at(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::weather_table;

    #[test]
    fn maps_rows_through_the_parent() {
        let table = weather_table();
        let view = IndexView::new(&table, vec![2, 5, 9]).unwrap();
        assert_eq!(view.instance_count(), 3);
        assert!(std::ptr::eq(
            view.instance_at(1).unwrap(),
            table.instance_at(5).unwrap()
        ));
        assert_eq!(view.attribute_count(), table.attribute_count());
    }

    #[test]
    fn out_of_range_access_is_an_index_error() {
        let table = weather_table();
        let view = IndexView::new(&table, vec![0, 13]).unwrap();
        assert!(matches!(
            view.instance_at(2),
            Err(Id3Error::Index { index: 2, len: 2 })
        ));
        assert!(matches!(
            view.attribute_at(5),
            Err(Id3Error::Index { index: 5, len: 5 })
        ));
        assert!(matches!(
            IndexView::new(&table, vec![14]),
            Err(Id3Error::Index { index: 14, len: 14 })
        ));
    }

    #[test]
    fn views_compose() {
        let table = weather_table();
        let outer = IndexView::new(&table, vec![1, 3, 5, 7]).unwrap();
        let inner = IndexView::new(&outer, vec![3, 0]).unwrap();
        assert!(std::ptr::eq(
            inner.instance_at(0).unwrap(),
            table.instance_at(7).unwrap()
        ));
        assert!(std::ptr::eq(
            inner.instance_at(1).unwrap(),
            table.instance_at(1).unwrap()
        ));
    }

    #[test]
    fn iterates_in_view_order() {
        let table = weather_table();
        let view = IndexView::new(&table, vec![4, 0]).unwrap();
        let dyn_view: &dyn TableView = &view;
        let rows: Vec<String> = dyn_view.instances().map(|i| i.to_string()).collect();
        assert_eq!(
            rows,
            vec!["rainy,cool,normal,FALSE,yes", "sunny,hot,high,FALSE,no"]
        );
        assert_eq!(dyn_view.instances().len(), 2);
    }
}
