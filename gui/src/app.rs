#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{Header, StatusBanner, StatusKind, SummaryCards, TransactionTable};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::api_client::ApiClient;
use crate::state::dashboard_state::{fetch_dashboard, DashboardState, ViewLifetime};

const LOADING_MESSAGE: &str = "Carregando transações...";

#[component]
pub fn App() -> Element {
    // Provided by the launcher in main.rs
    let config = use_context::<AppConfig>();
    let stylesheet = ThemePalette::for_theme(config.app.theme).stylesheet();

    rsx! {
        style { "{stylesheet}" }
        Header { title: config.app.title.clone() }
        Dashboard {}
    }
}

#[component]
fn Dashboard() -> Element {
    let config = use_context::<AppConfig>();
    let mut state = use_signal(DashboardState::default);

    // Dropped together with this scope, which cancels the in-flight fetch.
    let lifetime = use_hook(|| Rc::new(ViewLifetime::new()));

    // Runs once, on mount.
    use_hook(move || {
        let token = lifetime.token();
        let settings = config.api.clone();

        spawn(async move {
            let result = match ApiClient::new(&settings) {
                Ok(client) => fetch_dashboard(&client, &token).await,
                Err(e) => Err(e),
            };

            if let Some(next) = DashboardState::resolve(&token, result) {
                state.set(next);
            }
        });
    });

    rsx! {
        main {
            class: "container",
            {match &*state.read() {
                DashboardState::Loading => rsx! {
                    StatusBanner { kind: StatusKind::Loading, message: LOADING_MESSAGE.to_string() }
                },
                DashboardState::Failed { message } => rsx! {
                    StatusBanner { kind: StatusKind::Error, message: message.clone() }
                },
                DashboardState::Ready(view) => rsx! {
                    SummaryCards { balance: view.balance.clone() }
                    TransactionTable {
                        transactions: view.transactions.clone(),
                        skipped: view.skipped.len(),
                    }
                },
            }}
        }
    }
}
