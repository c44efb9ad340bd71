use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to parse submission: {0}")]
    ParseError(String),

    #[error("Failed to access Telegram API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for ReportError {
    fn from(error: reqwest::Error) -> Self {
        ReportError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::ParseError(error.to_string())
    }
}
