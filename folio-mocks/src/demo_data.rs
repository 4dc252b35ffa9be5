//! Demo data for the workbench
//!
//! Provides fixture posts for rendering the UI without a backend.

use folio_ui::{parse_post_feed, PostSummary};
use std::sync::OnceLock;
use tracing::error;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/posts.json");

static DEMO_POSTS: OnceLock<Vec<PostSummary>> = OnceLock::new();

/// Parse fixture JSON, falling back to no posts when the fixture is broken
fn load_posts(json: &str) -> Vec<PostSummary> {
    match parse_post_feed(json) {
        Ok(posts) => posts,
        Err(e) => {
            error!("Failed to load demo posts: {}", e);
            Vec::new()
        }
    }
}

/// All fixture posts, parsed once
pub fn demo_posts() -> &'static [PostSummary] {
    DEMO_POSTS.get_or_init(|| load_posts(FIXTURE_JSON))
}

/// The first `count` fixture posts, or all of them if there are fewer
pub fn take_demo_posts(count: usize) -> Vec<PostSummary> {
    demo_posts().iter().take(count).cloned().collect()
}
