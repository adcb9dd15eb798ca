// GUI components module
pub mod header;
pub mod status_banner;
pub mod summary_card;
pub mod transaction_table;

// Re-export components for easier access from app.rs
pub use header::Header;
pub use status_banner::{StatusBanner, StatusKind};
pub use summary_card::SummaryCards;
pub use transaction_table::TransactionTable;
