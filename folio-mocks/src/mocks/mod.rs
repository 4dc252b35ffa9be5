//! Component mocks with interactive controls

pub mod framework;
mod list_item_card;
mod post_list;
pub mod url_state;

pub use list_item_card::ListItemCardMock;
pub use post_list::PostListMock;
