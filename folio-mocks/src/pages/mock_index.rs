//! Mock pages with URL state persistence

use crate::demo_data::demo_posts;
use crate::mocks::framework::MockPage;
use crate::mocks::{ListItemCardMock, PostListMock};
use crate::ui::LinkCard;
use dioxus::prelude::*;
use folio_ui::{ListItemCard, ListItemCardStyles};

#[component]
pub fn MockIndex() -> Element {
    let specimen = demo_posts().first().cloned();

    rsx! {
        ListItemCardStyles {}
        div { class: "mock-index",
            h1 { "folio mocks" }

            h2 { "Components" }
            div {
                for page in MockPage::ALL.iter().copied() {
                    LinkCard {
                        to: page.to_route(None),
                        title: page.label(),
                        description: page.description(),
                    }
                }
            }

            if let Some(post) = specimen {
                h2 { "Specimen" }
                ListItemCard { post }
            }
        }
    }
}

// ============================================================================
// ListItemCard page wrapper
// ============================================================================

#[component]
pub fn MockListItemCard(state: Option<String>) -> Element {
    rsx! {
        ListItemCardMock { initial_state: state }
    }
}

// ============================================================================
// PostListView page wrapper
// ============================================================================

#[component]
pub fn MockPostList(state: Option<String>) -> Element {
    rsx! {
        PostListMock { initial_state: state }
    }
}
