//! ListItemCard mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use crate::demo_data::demo_posts;
use crate::Route;
use dioxus::prelude::*;
use folio_ui::{ListItemCard, ListItemCardStyles, PostSummary};

const LONG_INTRO: &str = "Compiling eight operators into an intermediate representation, \
    folding runs of increments, matching brackets with a stack and reporting the line and \
    column of the first unbalanced one, then running the result on a tape of bytes while \
    streaming output as it is produced.";

#[component]
pub fn ListItemCardMock(initial_state: Option<String>) -> Element {
    let fixture_count = demo_posts().len() as i32;

    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "source",
            "Source",
            "custom",
            vec![("custom", "Custom"), ("fixture", "Fixture")],
        )
        .string_control("title", "Title", "Hello World")
        .visible_when("source", "custom")
        .string_control("date", "Date", "2020-01-01")
        .doc("Freeform, shown exactly as typed")
        .visible_when("source", "custom")
        .string_control("intro", "Intro", "A short intro.")
        .visible_when("source", "custom")
        .int_control(
            "fixture",
            "Fixture post",
            0,
            0,
            Some((fixture_count - 1).max(0)),
        )
        .visible_when("source", "fixture")
        .bool_control("styles", "Card styles", true)
        .doc("Mount the card stylesheet")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("CJK title")
                .set_string("title", "日本語")
                .set_string("date", "")
                .set_string("intro", ""),
            Preset::new("Empty date and intro")
                .set_string("date", "")
                .set_string("intro", ""),
            Preset::new("Long intro").set_string("intro", LONG_INTRO),
            Preset::new("Empty title").set_string("title", ""),
            Preset::new("Unstyled").set_bool("styles", false),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockListItemCard { state });

    let post = if registry.get_string("source") == "fixture" {
        let index = registry.get_int("fixture").max(0) as usize;
        demo_posts()
            .get(index)
            .cloned()
            .ok_or_else(|| format!("No fixture post at index {}", index))
    } else {
        PostSummary::new(
            registry.get_string("title"),
            registry.get_string("date"),
            registry.get_string("intro"),
        )
        .map_err(|e| e.to_string())
    };
    let styles = registry.get_bool("styles");

    rsx! {
        MockPanel { current_mock: MockPage::ListItemCard, registry,
            if styles {
                ListItemCardStyles {}
            }
            {
                match post {
                    Ok(post) => rsx! {
                        ListItemCard { post }
                    },
                    Err(message) => rsx! {
                        div { class: "mock-error", "data-testid": "mock-error", "Cannot render card: {message}" }
                    },
                }
            }
        }
    }
}
