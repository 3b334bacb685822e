use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service error {code}: {message}")]
    Service { code: String, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
