use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormatError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    /// Multiplier applied to the (always non-negative) stored value before formatting.
    pub fn sign(self) -> f64 {
        match self {
            TransactionType::Income => 1.0,
            TransactionType::Outcome => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: Category,
    pub created_at: String,
}

impl Transaction {
    // Records are validated one at a time so a single bad row does not take
    // down the whole response.
    pub fn from_value(value: &Value) -> Result<Self, FormatError> {
        let transaction = Transaction::deserialize(value)
            .map_err(|e| FormatError::MalformedRecord(e.to_string()))?;

        if !transaction.value.is_finite() {
            return Err(FormatError::NonFiniteAmount);
        }
        if transaction.value < 0.0 {
            return Err(FormatError::NegativeValue(transaction.value));
        }
        Ok(transaction)
    }
}

/// A balance figure as the API sends it: either a JSON number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    pub fn to_f64(&self) -> Result<f64, FormatError> {
        let parsed = match self {
            RawAmount::Number(n) => *n,
            RawAmount::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(FormatError::NonNumericAmount(s.clone()));
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| FormatError::NonNumericAmount(s.clone()))?
            }
        };

        if parsed.is_finite() {
            Ok(parsed)
        } else {
            Err(FormatError::NonFiniteAmount)
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawBalance {
    pub income: RawAmount,
    pub outcome: RawAmount,
    pub total: RawAmount,
}

// Body of `GET transactions`. Transactions stay as raw JSON until each record
// is validated by `Transaction::from_value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionsResponse {
    pub balance: RawBalance,
    pub transactions: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> Value {
        json!({
            "id": "a1",
            "title": "Salário",
            "value": 4000,
            "type": "income",
            "category": { "title": "Trabalho" },
            "created_at": "2020-05-10T12:00:00Z"
        })
    }

    #[test]
    fn test_transaction_from_value_valid() {
        let tx = Transaction::from_value(&sample_record()).unwrap();
        assert_eq!(tx.id, "a1");
        assert_eq!(tx.value, 4000.0);
        assert_eq!(tx.transaction_type, TransactionType::Income);
        assert_eq!(tx.category.title, "Trabalho");
    }

    #[test]
    fn test_transaction_from_value_unknown_type() {
        let mut record = sample_record();
        record["type"] = json!("transfer");
        let err = Transaction::from_value(&record).unwrap_err();
        assert!(matches!(err, FormatError::MalformedRecord(_)));
    }

    #[test]
    fn test_transaction_from_value_missing_category() {
        let mut record = sample_record();
        record.as_object_mut().unwrap().remove("category");
        assert!(matches!(
            Transaction::from_value(&record),
            Err(FormatError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_transaction_from_value_negative_value() {
        let mut record = sample_record();
        record["value"] = json!(-10);
        assert_eq!(
            Transaction::from_value(&record).unwrap_err(),
            FormatError::NegativeValue(-10.0)
        );
    }

    #[test]
    fn test_raw_amount_accepts_numbers_and_strings() {
        let balance: RawBalance =
            serde_json::from_value(json!({ "income": "100.50", "outcome": 40, "total": " 60 " })).unwrap();
        assert_eq!(balance.income.to_f64().unwrap(), 100.5);
        assert_eq!(balance.outcome.to_f64().unwrap(), 40.0);
        assert_eq!(balance.total.to_f64().unwrap(), 60.0);
    }

    #[test]
    fn test_raw_amount_rejects_garbage() {
        assert_eq!(
            RawAmount::Text("abc".to_string()).to_f64().unwrap_err(),
            FormatError::NonNumericAmount("abc".to_string())
        );
        assert!(RawAmount::Text(String::new()).to_f64().is_err());
        assert_eq!(
            RawAmount::Text("NaN".to_string()).to_f64().unwrap_err(),
            FormatError::NonFiniteAmount
        );
    }

    #[test]
    fn test_response_requires_balance() {
        let result: Result<TransactionsResponse, _> =
            serde_json::from_value(json!({ "transactions": [] }));
        assert!(result.is_err());
    }
}
