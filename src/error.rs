use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("invalid source: {0}")]
    Validation(String),

    #[error("error while requesting artifacthub: {0}")]
    Network(#[from] reqwest::Error),

    #[error("artifacthub request to {url} returned status code {status}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("could not decode artifacthub response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// The HTTP status carried by an [`ResourceError::HttpStatus`], if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
