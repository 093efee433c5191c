use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Failed to build execution client: {0}")]
    Client(String),

    #[error("Execution request failed: {0}")]
    Request(String),

    #[error("Execution API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Execution API returned an unparsable response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ExecutorError {
    fn from(e: reqwest::Error) -> Self {
        ExecutorError::Request(e.to_string())
    }
}
