//! JSON post feed loading
//!
//! Accepts either a bare array of posts or an object with a `posts` array.
//! Entries that are not valid post summaries are skipped and logged so one
//! bad entry doesn't blank the whole list.

use crate::display_types::PostSummary;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum PostFeedError {
    #[error("invalid post feed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    List(Vec<serde_json::Value>),
    Wrapped { posts: Vec<serde_json::Value> },
}

/// Parse a post feed, keeping every entry that forms a valid `PostSummary`
pub fn parse_post_feed(json: &str) -> Result<Vec<PostSummary>, PostFeedError> {
    let entries = match serde_json::from_str::<FeedDocument>(json)? {
        FeedDocument::List(entries) => entries,
        FeedDocument::Wrapped { posts } => posts,
    };

    let total = entries.len();
    let mut posts = Vec::with_capacity(total);
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<PostSummary>(entry) {
            Ok(post) => posts.push(post),
            Err(e) => warn!("Skipping post feed entry {}: {}", index, e),
        }
    }

    debug!(
        "Loaded {} posts from feed ({} skipped)",
        posts.len(),
        total - posts.len()
    );
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let posts = parse_post_feed(
            r#"[
                {"title": "First", "date": "2020-01-01", "intro": "one"},
                {"title": "Second", "date": "2020-01-02", "intro": "two"}
            ]"#,
        )
        .unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn parses_wrapped_object() {
        let posts = parse_post_feed(r#"{"posts": [{"title": "Only"}]}"#).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title(), "Only");
    }

    #[test]
    fn skips_invalid_entries_and_keeps_order() {
        let posts = parse_post_feed(
            r#"[
                {"title": "Keep 1"},
                {"title": ""},
                {"intro": "missing title"},
                42,
                {"title": "Keep 2"}
            ]"#,
        )
        .unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Keep 1", "Keep 2"]);
    }

    #[test]
    fn empty_array_is_empty_feed() {
        assert!(parse_post_feed("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_post_feed("{not json"),
            Err(PostFeedError::Json(_))
        ));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(parse_post_feed(r#"{"items": []}"#).is_err());
        assert!(parse_post_feed(r#""a string""#).is_err());
    }
}
