// Transaction table: one row per formatted transaction, in API order
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::DisplayTransaction;

pub const COLUMN_HEADERS: [&str; 4] = ["Título", "Preço", "Categoria", "Data"];

pub fn skipped_notice(skipped: usize) -> Option<String> {
    match skipped {
        0 => None,
        1 => Some("1 transação não pôde ser exibida.".to_string()),
        n => Some(format!("{} transações não puderam ser exibidas.", n)),
    }
}

#[component]
fn TransactionRow(transaction: DisplayTransaction) -> Element {
    // Matches the .income / .outcome rules in the theme stylesheet.
    let value_class = transaction.transaction_type.as_str();

    rsx! {
        tr {
            td { class: "title", "{transaction.title}" }
            td { class: value_class, "{transaction.formatted_value}" }
            td { "{transaction.category_title}" }
            td { "{transaction.formatted_date}" }
        }
    }
}

#[component]
pub fn TransactionTable(transactions: Vec<DisplayTransaction>, skipped: usize) -> Element {
    let notice = skipped_notice(skipped);

    rsx! {
        section {
            class: "table-container",
            table {
                thead {
                    tr {
                        for header in COLUMN_HEADERS {
                            th { "{header}" }
                        }
                    }
                }
                tbody {
                    for transaction in transactions {
                        TransactionRow { key: "{transaction.id}", transaction: transaction.clone() }
                    }
                }
            }
            {notice.map(|notice| rsx! {
                p { class: "skipped-notice", "{notice}" }
            })}
        }
    }
}
