// Loading / error placeholder shown instead of the dashboard body
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
}

#[component]
pub fn StatusBanner(kind: StatusKind, message: String) -> Element {
    let class = match kind {
        StatusKind::Loading => "status",
        StatusKind::Error => "status error",
    };
    let role = match kind {
        StatusKind::Loading => "status",
        StatusKind::Error => "alert",
    };

    rsx! {
        div {
            class: class,
            "role": role,
            p { "{message}" }
            if kind == StatusKind::Loading {
                progress {}
            }
        }
    }
}
