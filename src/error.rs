use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuricleError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend Error: {0}")]
    Backend(String),

    #[error("Input Error: {0}")]
    Input(String),
}

pub type AuResult<T> = Result<T, AuricleError>;
