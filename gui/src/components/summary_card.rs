// Balance summary cards (Entradas / Saídas / Total)
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::{DisplayBalance, FormatError};

/// Shown in place of a balance figure the API sent in an unusable form.
pub const UNAVAILABLE_AMOUNT: &str = "Valor indisponível";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Income,
    Outcome,
    Total,
}

impl CardKind {
    pub fn label(self) -> &'static str {
        match self {
            CardKind::Income => "Entradas",
            CardKind::Outcome => "Saídas",
            CardKind::Total => "Total",
        }
    }

    pub fn test_id(self) -> &'static str {
        match self {
            CardKind::Income => "balance-income",
            CardKind::Outcome => "balance-outcome",
            CardKind::Total => "balance-total",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            CardKind::Income => "↑",
            CardKind::Outcome => "↓",
            CardKind::Total => "$",
        }
    }

    fn alt(self) -> &'static str {
        match self {
            CardKind::Income => "Income",
            CardKind::Outcome => "Outcome",
            CardKind::Total => "Total",
        }
    }

    fn class(self) -> &'static str {
        match self {
            CardKind::Total => "card total",
            _ => "card",
        }
    }
}

// Text for the card body plus, for unusable amounts, the reason as a tooltip.
pub fn card_amount_text(amount: &Result<String, FormatError>) -> (String, Option<String>) {
    match amount {
        Ok(text) => (text.clone(), None),
        Err(e) => (UNAVAILABLE_AMOUNT.to_string(), Some(e.to_string())),
    }
}

#[component]
pub fn SummaryCard(kind: CardKind, amount: Result<String, FormatError>) -> Element {
    let (text, reason) = card_amount_text(&amount);
    let label = kind.label();
    let icon = kind.icon();
    let amount_class = if reason.is_some() { "unavailable" } else { "" };
    let tooltip = reason.unwrap_or_default();

    rsx! {
        div {
            class: kind.class(),
            header {
                p { "{label}" }
                span { class: "icon", title: kind.alt(), "{icon}" }
            }
            h1 {
                class: amount_class,
                title: "{tooltip}",
                "data-testid": kind.test_id(),
                "{text}"
            }
        }
    }
}

#[component]
pub fn SummaryCards(balance: DisplayBalance) -> Element {
    rsx! {
        section {
            class: "card-container",
            SummaryCard { kind: CardKind::Income, amount: balance.income.clone() }
            SummaryCard { kind: CardKind::Outcome, amount: balance.outcome.clone() }
            SummaryCard { kind: CardKind::Total, amount: balance.total.clone() }
        }
    }
}
