use thiserror::Error;

// Errors raised while turning API data into display strings.
// None of these are fatal to the dashboard: a bad balance field renders a
// placeholder and a bad transaction record is skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Non-numeric amount '{0}'")]
    NonNumericAmount(String),

    #[error("Amount is not a finite number")]
    NonFiniteAmount,

    #[error("Negative transaction value {0}")]
    NegativeValue(f64),

    #[error("Unparseable date '{0}'")]
    InvalidDate(String),

    #[error("Malformed transaction record: {0}")]
    MalformedRecord(String),
}
