//! folio-ui - Display types and view components for folio
//!
//! Contains the post summary type, the list item card, its stylesheet and
//! the post feed loader. Components are pure views over props.

pub mod components;
pub mod display_types;
pub mod post_feed;
pub mod styles;

pub use components::*;
pub use display_types::*;
pub use post_feed::{parse_post_feed, PostFeedError};
pub use styles::{ListItemCardStyles, LIST_ITEM_CARD_CSS};
