//! Auto-generated control panel UI

use super::registry::{ControlDef, ControlRegistry, ControlValue};
use crate::Route;
use dioxus::prelude::*;

/// Mock pages listed on the index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockPage {
    ListItemCard,
    PostList,
}

impl MockPage {
    pub const ALL: &'static [MockPage] = &[MockPage::ListItemCard, MockPage::PostList];

    pub fn label(self) -> &'static str {
        match self {
            MockPage::ListItemCard => "ListItemCard",
            MockPage::PostList => "PostListView",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MockPage::ListItemCard => "Single card with editable title, date and intro",
            MockPage::PostList => "List of fixture posts, including the empty state",
        }
    }

    pub fn to_route(self, state: Option<String>) -> Route {
        match self {
            MockPage::ListItemCard => Route::MockListItemCard { state },
            MockPage::PostList => Route::MockPostList { state },
        }
    }
}

/// Main mock panel component that renders controls, presets, and content
#[component]
pub fn MockPanel(current_mock: MockPage, registry: ControlRegistry, children: Element) -> Element {
    let title = current_mock.label();

    rsx! {
        div { class: "mock-panel",
            div { class: "mock-panel__controls",
                div { class: "mock-panel__header",
                    Link { to: Route::MockIndex {}, class: "mock-panel__button", "← Mocks" }
                    h1 { "{title}" }
                }

                if !registry.presets.is_empty() {
                    PresetBar { registry: registry.clone() }
                }

                ControlsRow { registry: registry.clone() }
            }

            div { class: "mock-panel__content", {children} }
        }
    }
}

/// Preset buttons bar
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "mock-panel__row",
            span { class: "mock-panel__label", "Presets:" }
            for preset in registry.presets.iter() {
                button {
                    class: if preset.matches(&registry) { "mock-panel__button mock-panel__button--selected" } else { "mock-panel__button" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Auto-generated controls, one widget per visible control
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let visible: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.is_visible(&registry))
        .cloned()
        .collect();

    rsx! {
        div { class: "mock-panel__row",
            for control in visible {
                ControlWidget { key: "{control.key}", registry: registry.clone(), control: control.clone() }
            }
        }
    }
}

#[component]
fn ControlWidget(registry: ControlRegistry, control: ControlDef) -> Element {
    let key = control.key;
    let label = control.label;
    let doc = control.doc.unwrap_or("");

    match (&control.default, &control.enum_options) {
        (ControlValue::String(_), Some(options)) => {
            let current = registry.get_string(key);
            rsx! {
                span { class: "mock-panel__label", title: doc, "{label}:" }
                for (value , option_label) in options.clone() {
                    button {
                        class: if current == value { "mock-panel__button mock-panel__button--selected" } else { "mock-panel__button" },
                        onclick: {
                            let registry = registry.clone();
                            move |_| registry.set_string(key, value.to_string())
                        },
                        "{option_label}"
                    }
                }
            }
        }
        (ControlValue::String(_), None) => {
            let current = registry.get_string(key);
            rsx! {
                label { class: "mock-panel__field", title: doc,
                    span { class: "mock-panel__label", "{label}" }
                    input {
                        r#type: "text",
                        value: "{current}",
                        oninput: move |e| registry.set_string(key, e.value()),
                    }
                }
            }
        }
        (ControlValue::Int(_), _) => {
            let current = registry.get_int(key);
            rsx! {
                label { class: "mock-panel__field", title: doc,
                    span { class: "mock-panel__label", "{label}" }
                    input {
                        r#type: "number",
                        value: "{current}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse() {
                                registry.set_int(key, value);
                            }
                        },
                    }
                }
            }
        }
        (ControlValue::Bool(_), _) => {
            let current = registry.get_bool(key);
            rsx! {
                label { class: "mock-panel__field", title: doc,
                    span {
                        input {
                            r#type: "checkbox",
                            checked: current,
                            onchange: move |e| registry.set_bool(key, e.checked()),
                        }
                        " {label}"
                    }
                }
            }
        }
    }
}
