mod index_view;
mod predicate_view;
mod table_view;

pub use index_view::IndexView;
pub use predicate_view::PredicateView;
pub use table_view::{TableView, ViewInstances};
