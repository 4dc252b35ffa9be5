//! Workbench pages

mod mock_index;

pub use mock_index::{MockIndex, MockListItemCard, MockPostList};
