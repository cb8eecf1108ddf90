//! Record post-processing applied after a scan completes.

pub mod sort;

pub use sort::{SortOrder, SortSpec, SortStrategy};
