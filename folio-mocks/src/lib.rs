//! folio mocks - Component workbench
//!
//! A minimal web app that renders folio-ui components with fixture data
//! and interactive controls whose state lives in the URL.

pub mod demo_data;
pub mod mocks;
pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use pages::{MockIndex, MockListItemCard, MockPostList};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/list-item-card?:state")]
    MockListItemCard { state: Option<String> },
    #[route("/post-list?:state")]
    MockPostList { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "mock-app", Router::<Route> {} }
    }
}
