// Title bar above the summary cards
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn Header(title: String) -> Element {
    rsx! {
        header {
            class: "header",
            h1 { "{title}" }
        }
    }
}
