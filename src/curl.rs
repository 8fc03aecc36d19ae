//! The public entry point.
//!
//! [`Curl`] parses a command eagerly and can then inspect, build, or
//! send it. Sending uses a shared lazily-built client unless the caller
//! supplies their own.

use std::str::FromStr;

use once_cell::sync::Lazy;
use reqwest::Client;
use tracing::debug;

use crate::descriptor::RequestDescriptor;
use crate::errors::{FetchResult, ParseError, ParseResult};
use crate::parser;
use crate::request;
use crate::response::CurlResponse;

static SHARED_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// A parsed curl command, ready to be sent.
///
/// # Example
///
/// ```no_run
/// use uncurl::Curl;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let curl = Curl::new(r#"curl -H "Accept: application/json" https://httpbin.org/json"#)?;
/// let response = curl.send().await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Curl {
    descriptor: RequestDescriptor,
}

impl Curl {
    /// Parse a curl command, failing eagerly on any syntax problem.
    pub fn new(command: &str) -> ParseResult<Self> {
        let descriptor = parser::parse(command)?;
        Ok(Curl { descriptor })
    }

    /// The compiled descriptor.
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }

    /// Build the transport request without sending it.
    pub fn to_request(&self) -> FetchResult<reqwest::Request> {
        request::build(&self.descriptor)
    }

    /// Send on the shared client and read the full response.
    pub async fn send(&self) -> FetchResult<CurlResponse> {
        self.send_with(&SHARED_CLIENT).await
    }

    /// Send on a caller-supplied client.
    ///
    /// Resolves exactly once, with either the fully-read response or the
    /// first error hit along the way.
    pub async fn send_with(&self, client: &Client) -> FetchResult<CurlResponse> {
        let request = self.to_request()?;
        debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = client.execute(request).await?;
        CurlResponse::read(response).await
    }
}

impl FromStr for Curl {
    type Err = ParseError;

    fn from_str(command: &str) -> ParseResult<Self> {
        Curl::new(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_eagerly() {
        assert!(Curl::new("curl https://example.com").is_ok());
        assert_eq!(Curl::new("curl").unwrap_err(), ParseError::NoUrl);
    }

    #[test]
    fn test_from_str() {
        let curl: Curl = "curl -X POST https://example.com".parse().unwrap();
        assert_eq!(curl.descriptor().method(), "POST");

        let error = "not curl".parse::<Curl>().unwrap_err();
        assert_eq!(error, ParseError::InvalidBegin);
    }

    #[test]
    fn test_to_request_without_sending() {
        let curl = Curl::new("curl -H \"Accept: text/plain\" https://example.com").unwrap();
        let request = curl.to_request().unwrap();
        assert_eq!(request.url().as_str(), "https://example.com/");
    }
}
