//! List item card component - pure view over a post summary

use crate::display_types::PostSummary;
use dioxus::prelude::*;

/// Card for one post in a list
///
/// Shows the first character of the title as a faint watermark behind the
/// title, date and intro. Styling comes from `ListItemCardStyles`, which
/// the surrounding page mounts once.
#[component]
pub fn ListItemCard(post: PostSummary) -> Element {
    let glyph = post.glyph();
    let title = post.title();
    let date = post.date();
    let intro = post.intro();

    rsx! {
        article { class: "list-item-card", "data-testid": "list-item-card",
            div {
                class: "list-item-card__glyph",
                "aria-hidden": "true",
                "data-testid": "list-item-card-glyph",
                "{glyph}"
            }
            h2 {
                class: "list-item-card__title",
                "data-testid": "list-item-card-title",
                "{title}"
            }
            p {
                class: "list-item-card__date",
                "data-testid": "list-item-card-date",
                "{date}"
            }
            div {
                class: "list-item-card__intro",
                "data-testid": "list-item-card-intro",
                "{intro}"
            }
        }
    }
}
