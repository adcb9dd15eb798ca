// HTTP client for the transactions API.
// One read-only endpoint: `GET {base_url}/{transactions_path}`.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Url;
use shared::models::TransactionsResponse;

use crate::config::ApiSettings;
use crate::error::DashboardError;

pub struct ApiClient {
    client: reqwest::Client,
    transactions_url: Url,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, DashboardError> {
        let transactions_url = build_transactions_url(&settings.base_url, &settings.transactions_path)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            transactions_url,
        })
    }

    pub async fn fetch_transactions(&self) -> Result<TransactionsResponse, DashboardError> {
        tracing::info!(url = %self.transactions_url, "Fetching transactions.");

        let response = self
            .client
            .get(self.transactions_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::UnexpectedStatus(status));
        }

        // Read the body first so a bad payload is reported as a shape error,
        // not as a transport error.
        let body = response.bytes().await?;
        let parsed: TransactionsResponse = serde_json::from_slice(&body)?;

        tracing::info!(
            records = parsed.transactions.len(),
            "Transactions response received."
        );
        Ok(parsed)
    }
}

// Joins base URL and path without losing a path prefix on the base
// ("http://host/api" + "transactions" -> "http://host/api/transactions").
fn build_transactions_url(base_url: &str, path: &str) -> Result<Url, DashboardError> {
    let invalid = |reason: String| DashboardError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    let base = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
    base.join(path.trim().trim_start_matches('/'))
        .map_err(|e| invalid(e.to_string()))
}
