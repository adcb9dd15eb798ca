// Data models and formatting shared by the dashboard GUI.
// Nothing in here touches the network or the UI, so it is tested in isolation.

pub mod error;
pub mod models;
pub mod utils;
pub mod view_model;

pub use error::FormatError;
pub use view_model::{DashboardView, DisplayBalance, DisplayTransaction, SkippedRecord};
