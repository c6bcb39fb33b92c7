//! Error types for display-tuner
//!
//! Since we handle numerous types of error cases,
//! this will probably be expanded as-needed.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("platform query failed: {0}")]
    PlatformQuery(String),

    #[error("configuration rejected by platform: {0}")]
    PlatformSet(String),

    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error("no display source with id {0}")]
    UnknownSourceId(u32),

    #[error("Underlying I/O error")]
    IOError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
