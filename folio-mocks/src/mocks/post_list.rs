//! PostListView mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use crate::demo_data::{demo_posts, take_demo_posts};
use crate::Route;
use dioxus::prelude::*;
use folio_ui::PostListView;

#[component]
pub fn PostListMock(initial_state: Option<String>) -> Element {
    let fixture_count = demo_posts().len() as i32;

    let registry = ControlRegistryBuilder::new()
        .int_control("posts", "Posts", fixture_count, 0, Some(fixture_count))
        .doc("Number of fixture posts to show")
        .with_presets(vec![
            Preset::new("All posts"),
            Preset::new("Single post").set_int("posts", 1),
            Preset::new("Empty").set_int("posts", 0),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockPostList { state });

    let posts = take_demo_posts(registry.get_int("posts").max(0) as usize);

    rsx! {
        MockPanel { current_mock: MockPage::PostList, registry,
            PostListView { posts }
        }
    }
}
