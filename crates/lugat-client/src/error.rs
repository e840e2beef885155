use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
