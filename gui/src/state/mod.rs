// Application state for the GUI
pub mod dashboard_state;
