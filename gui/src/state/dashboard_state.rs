// View state for the dashboard screen.
// Owned by the Dashboard component (inside a signal) and handed to the render
// layer by reference. Built exactly once per fetch cycle.

use shared::models::TransactionsResponse;
use shared::DashboardView;
use tokio_util::sync::CancellationToken;

use crate::error::DashboardError;
use crate::services::api_client::ApiClient;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(DashboardView),
    Failed { message: String },
}

impl DashboardState {
    pub fn from_fetch(result: Result<TransactionsResponse, DashboardError>) -> Self {
        match result {
            Ok(response) => DashboardState::Ready(DashboardView::from_response(&response)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load transactions.");
                DashboardState::Failed {
                    message: e.user_message().to_string(),
                }
            }
        }
    }

    /// Next state for a finished fetch, or `None` when the owning view is gone.
    /// Callers must not touch view state when this returns `None`.
    pub fn resolve(
        token: &CancellationToken,
        result: Result<TransactionsResponse, DashboardError>,
    ) -> Option<Self> {
        if token.is_cancelled() {
            tracing::debug!("View dropped before the fetch finished; discarding result.");
            return None;
        }
        Some(Self::from_fetch(result))
    }
}

/// Cancels its token when dropped. The Dashboard keeps one alive for as long
/// as it is mounted.
#[derive(Debug, Default)]
pub struct ViewLifetime {
    token: CancellationToken,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Drop for ViewLifetime {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

// Races the request against the view's lifetime.
pub async fn fetch_dashboard(
    client: &ApiClient,
    token: &CancellationToken,
) -> Result<TransactionsResponse, DashboardError> {
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(DashboardError::Cancelled),
        result = client.fetch_transactions() => result,
    }
}
