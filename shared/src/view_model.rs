//! Transaction-data transformation pipeline.
//!
//! Turns a `TransactionsResponse` into display-ready strings: the three balance
//! figures and one `DisplayTransaction` per valid record. Everything here is a
//! pure function of its input; the GUI owns the resulting `DashboardView`.

use serde_json::Value;

use crate::error::FormatError;
use crate::models::{RawAmount, RawBalance, Transaction, TransactionType, TransactionsResponse};
use crate::utils::brazilian_format;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTransaction {
    pub id: String,
    pub title: String,
    pub transaction_type: TransactionType,
    pub category_title: String,
    pub value: f64,
    pub created_at: String,
    pub formatted_value: String,
    pub formatted_date: String,
}

/// Formatted balance figures. A field that could not be formatted keeps the
/// reason so the card can say so instead of printing garbage.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBalance {
    pub income: Result<String, FormatError>,
    pub outcome: Result<String, FormatError>,
    pub total: Result<String, FormatError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position in the response's `transactions` array.
    pub index: usize,
    pub id: Option<String>,
    pub reason: FormatError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub balance: DisplayBalance,
    pub transactions: Vec<DisplayTransaction>,
    pub skipped: Vec<SkippedRecord>,
}

impl DashboardView {
    pub fn from_response(response: &TransactionsResponse) -> Self {
        let balance = format_balance(&response.balance);
        let (transactions, skipped) = format_transactions(&response.transactions);

        tracing::info!(
            currency = brazilian_format::CURRENCY_CODE,
            rows = transactions.len(),
            skipped = skipped.len(),
            "Built dashboard view."
        );

        DashboardView {
            balance,
            transactions,
            skipped,
        }
    }
}

pub fn format_balance(balance: &RawBalance) -> DisplayBalance {
    DisplayBalance {
        income: format_balance_field("income", &balance.income),
        outcome: format_balance_field("outcome", &balance.outcome),
        total: format_balance_field("total", &balance.total),
    }
}

fn format_balance_field(field: &str, amount: &RawAmount) -> Result<String, FormatError> {
    let result = amount.to_f64().and_then(brazilian_format::format_currency);
    if let Err(e) = &result {
        tracing::warn!(field, error = %e, "Balance field could not be formatted.");
    }
    result
}

pub fn format_transaction(transaction: &Transaction) -> Result<DisplayTransaction, FormatError> {
    let formatted_date = brazilian_format::format_date(&transaction.created_at)?;
    let formatted_value = brazilian_format::format_signed_currency(
        transaction.value,
        transaction.transaction_type.sign(),
    )?;

    Ok(DisplayTransaction {
        id: transaction.id.clone(),
        title: transaction.title.clone(),
        transaction_type: transaction.transaction_type,
        category_title: transaction.category.title.clone(),
        value: transaction.value,
        created_at: transaction.created_at.clone(),
        formatted_value,
        formatted_date,
    })
}

// Validates and formats every record, keeping input order. Bad records are
// skipped and reported; they never abort the batch.
pub fn format_transactions(records: &[Value]) -> (Vec<DisplayTransaction>, Vec<SkippedRecord>) {
    let mut rows = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match Transaction::from_value(record).and_then(|tx| format_transaction(&tx)) {
            Ok(row) => rows.push(row),
            Err(reason) => {
                let id = record.get("id").and_then(Value::as_str).map(str::to_string);
                tracing::warn!(
                    index,
                    id = id.as_deref().unwrap_or("<none>"),
                    error = %reason,
                    "Skipping malformed transaction record."
                );
                skipped.push(SkippedRecord { index, id, reason });
            }
        }
    }

    (rows, skipped)
}
