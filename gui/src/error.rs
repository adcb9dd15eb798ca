use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP transport error: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    #[error("API responded with status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Malformed API response: {source}")]
    MalformedResponse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Request cancelled before completion")]
    Cancelled,
}

impl DashboardError {
    // Text shown to the user in place of the dashboard. Details go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            DashboardError::ConfigError(_) | DashboardError::InvalidUrl { .. } => {
                "Configuração inválida: não foi possível carregar as transações."
            }
            DashboardError::MalformedResponse { .. } => {
                "Resposta inesperada do servidor: não foi possível carregar as transações."
            }
            DashboardError::HttpError { .. }
            | DashboardError::UnexpectedStatus(_)
            | DashboardError::Cancelled => "Não foi possível carregar as transações.",
        }
    }
}
