//! Post list - renders a card per post

use crate::components::list_item_card::ListItemCard;
use crate::display_types::PostSummary;
use crate::styles::ListItemCardStyles;
use dioxus::prelude::*;

/// Vertical list of post cards, in the order given
#[component]
pub fn PostListView(posts: Vec<PostSummary>) -> Element {
    rsx! {
        ListItemCardStyles {}
        section { class: "post-list", "data-testid": "post-list",
            if posts.is_empty() {
                p { class: "post-list__empty", "data-testid": "post-list-empty", "No posts yet" }
            } else {
                for (index , post) in posts.iter().enumerate() {
                    ListItemCard { key: "{index}", post: post.clone() }
                }
            }
        }
    }
}
