//! Terminal response representation.
//!
//! Captures a completed exchange with its body fully read, and decodes
//! the body on demand.

use std::borrow::Cow;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::errors::{FetchError, FetchResult};

/// A completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct CurlResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl CurlResponse {
    /// Drain a transport response into a finished value.
    pub(crate) async fn read(response: reqwest::Response) -> FetchResult<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(CurlResponse { status, headers, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as arbitrary JSON.
    ///
    /// An empty body is reported as [`FetchError::NoData`] rather than a
    /// syntax error.
    pub fn json_value(&self) -> FetchResult<JsonValue> {
        if self.body.is_empty() {
            return Err(FetchError::NoData);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decode the body into a typed value.
    pub fn json_as<T: DeserializeOwned>(&self) -> FetchResult<T> {
        if self.body.is_empty() {
            return Err(FetchError::NoData);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}
