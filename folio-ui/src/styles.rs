//! Static stylesheet for the list item card
//!
//! The card renders class names only. This stylesheet is mounted once per
//! document by [`ListItemCardStyles`] rather than per card instance.

use dioxus::prelude::*;

/// Component-scoped rules for `ListItemCard`. Every selector is rooted at
/// `.list-item-card`.
pub const LIST_ITEM_CARD_CSS: &str = r#"
.list-item-card {
    position: relative;
    padding: 3rem 1.2rem;
}
.list-item-card .list-item-card__glyph {
    position: absolute;
    top: 1.9rem;
    left: -2.1rem;
    width: 11rem;
    height: 11rem;
    line-height: 11rem;
    text-align: center;
    color: rgba(0, 0, 0, 0.1);
    font-size: 11rem;
    font-weight: 600;
    cursor: default;
    user-select: none;
    pointer-events: none;
}
.list-item-card .list-item-card__title {
    font-size: 3rem;
    font-weight: bold;
    color: #333;
    margin: 3rem 0 .5rem 0;
}
.list-item-card .list-item-card__date {
    font-size: 0.9rem;
    color: #666;
    margin: 0 0 1rem;
}
.list-item-card .list-item-card__intro {
    font-size: .9rem;
}
.list-item-card::after {
    content: "";
    position: absolute;
    bottom: 0;
    left: 50%;
    width: 4rem;
    height: 1px;
    margin-left: -2rem;
    background: rgba(51, 51, 51, 0.2);
}
"#;

/// Mounts [`LIST_ITEM_CARD_CSS`] into the document head
#[component]
pub fn ListItemCardStyles() -> Element {
    rsx! {
        document::Style { "{LIST_ITEM_CARD_CSS}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> Vec<&'static str> {
        LIST_ITEM_CARD_CSS
            .lines()
            .map(str::trim)
            .filter(|line| line.ends_with('{'))
            .map(|line| line.trim_end_matches('{').trim())
            .collect()
    }

    #[test]
    fn every_rule_is_scoped_to_the_card() {
        let selectors = selectors();
        assert!(!selectors.is_empty());
        for selector in selectors {
            assert!(
                selector.starts_with(".list-item-card"),
                "unscoped selector: {selector}"
            );
        }
    }

    #[test]
    fn styles_cover_every_card_part() {
        let selectors = selectors();
        for part in ["__glyph", "__title", "__date", "__intro"] {
            assert!(
                selectors.iter().any(|s| s.ends_with(part)),
                "missing rule for {part}"
            );
        }
        assert!(selectors.contains(&".list-item-card::after"));
    }

    #[test]
    fn braces_are_balanced() {
        let open = LIST_ITEM_CARD_CSS.matches('{').count();
        let close = LIST_ITEM_CARD_CSS.matches('}').count();
        assert_eq!(open, close);
    }
}
