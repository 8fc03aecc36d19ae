//! Error types for uncurl

use thiserror::Error;

/// Failures raised while parsing a curl command.
///
/// Parsing is all-or-nothing: either a complete descriptor comes back or
/// exactly one of these variants does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Command does not start with \"curl\"")]
    InvalidBegin,

    #[error("No URL found in command")]
    NoUrl,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unknown option: {0}")]
    NoSuchOption(String),

    #[error("Missing or malformed parameter for {0}")]
    InvalidParameter(String),
}

/// Failures raised while building, sending, or decoding a request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Response has no data")]
    NoData,

    #[error("Response is not valid JSON: {0}")]
    InvalidFormat(#[from] serde_json::Error),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
pub type FetchResult<T> = std::result::Result<T, FetchError>;
