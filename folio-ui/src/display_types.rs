//! Display types for UI components
//!
//! These are the values callers hand to view components. They carry only
//! what the views render.

use serde::{Deserialize, Serialize};

/// Why a post summary could not be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostSummaryError {
    #[error("post title must not be empty")]
    EmptyTitle,
}

/// Post summary shown as one card in a list
///
/// The title is guaranteed non-empty, so the card glyph always exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPostSummary")]
pub struct PostSummary {
    title: String,
    date: String,
    intro: String,
}

impl PostSummary {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        intro: impl Into<String>,
    ) -> Result<Self, PostSummaryError> {
        let title = title.into();
        if title.is_empty() {
            return Err(PostSummaryError::EmptyTitle);
        }
        Ok(Self {
            title,
            date: date.into(),
            intro: intro.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Freeform date text, shown as given
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    /// First character of the title, shown as the card watermark
    pub fn glyph(&self) -> char {
        // new() rejects empty titles
        self.title.chars().next().unwrap_or_default()
    }
}

/// Unvalidated wire shape of a post summary
#[derive(Deserialize)]
struct RawPostSummary {
    #[serde(default)]
    title: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    intro: String,
}

impl TryFrom<RawPostSummary> for PostSummary {
    type Error = PostSummaryError;

    fn try_from(raw: RawPostSummary) -> Result<Self, Self::Error> {
        PostSummary::new(raw.title, raw.date, raw.intro)
    }
}
