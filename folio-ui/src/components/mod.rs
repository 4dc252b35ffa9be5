//! View components

pub mod list_item_card;
pub mod post_list;

pub use list_item_card::ListItemCard;
pub use post_list::PostListView;
