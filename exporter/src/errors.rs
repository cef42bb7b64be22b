use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status} {reason}")]
    UpstreamUnavailable { status: u16, reason: String },

    #[error("upstream response malformed: {0}")]
    UpstreamMalformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
