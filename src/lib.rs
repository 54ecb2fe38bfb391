//! ID3 decision tree induction over tables of categorical data.
//!
//! A [`Table`](core::table::Table) owns the attributes and instances; views
//! ([`IndexView`](core::views::IndexView),
//! [`PredicateView`](core::views::PredicateView)) narrow it without copying.
//! [`id3::train_model`](classifiers::decision_tree::id3::train_model) grows a
//! [`Node`](classifiers::decision_tree::Node) tree from any view, and
//! [`TreeStringBuilder`](classifiers::decision_tree::TreeStringBuilder)
//! renders it.

pub mod classifiers;
pub mod core;
pub mod error;
pub mod streams;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::{Id3Error, Result};
