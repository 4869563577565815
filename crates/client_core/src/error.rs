use thiserror::Error;

/// The only failure a collection fetch can produce.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid request url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response body is not a valid collection: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NetworkError {
    pub fn is_decode(&self) -> bool {
        matches!(self, NetworkError::Decode(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, NetworkError::Transport(_))
    }
}
