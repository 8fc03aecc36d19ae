//! Transport request construction.
//!
//! Lowers a compiled descriptor onto a `reqwest::Request`: method, URL,
//! headers, encoded body, and the basic-auth header.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request};

use super::multipart;
use crate::descriptor::{BodyKind, Credentials, RequestDescriptor};
use crate::errors::{FetchError, FetchResult};

/// Build a transport request from a descriptor.
///
/// Fails only when a header or the method cannot be represented at the
/// transport level; the descriptor itself is already validated.
pub fn build(descriptor: &RequestDescriptor) -> FetchResult<Request> {
    let method = Method::from_bytes(descriptor.method().as_bytes())
        .map_err(|_| FetchError::InvalidMethod(descriptor.method().to_string()))?;
    let mut request = Request::new(method, descriptor.url().clone());

    *request.headers_mut() = header_map(descriptor)?;

    match descriptor.body_kind() {
        BodyKind::Raw => {
            if let Some(body) = descriptor.raw_body() {
                *request.body_mut() = Some(body.to_string().into());
            }
        }
        BodyKind::Multipart => {
            let encoded = multipart::encode(descriptor.form_fields(), descriptor.file_refs());
            let content_type = HeaderValue::from_str(&encoded.content_type())
                .map_err(|_| FetchError::InvalidHeader(CONTENT_TYPE.as_str().to_string()))?;
            request.headers_mut().insert(CONTENT_TYPE, content_type);
            *request.body_mut() = Some(encoded.bytes.into());
        }
        BodyKind::UrlEncoded => {
            let has_content_type = descriptor
                .headers()
                .keys()
                .any(|name| name.eq_ignore_ascii_case("content-type"));
            if !has_content_type {
                request.headers_mut().insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
            }
            *request.body_mut() = Some(urlencoded_body(descriptor).into());
        }
        BodyKind::None => {}
    }

    if let Some(credentials) = descriptor.credentials() {
        request
            .headers_mut()
            .insert(AUTHORIZATION, basic_auth_value(credentials)?);
    }

    Ok(request)
}

fn header_map(descriptor: &RequestDescriptor) -> FetchResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in descriptor.headers() {
        let header_name = HeaderName::try_from(name.as_str())
            .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
        let header_value = HeaderValue::try_from(value.as_str())
            .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// `Authorization: Basic` value per RFC 7617; a missing password encodes
/// as `user:`.
fn basic_auth_value(credentials: &Credentials) -> FetchResult<HeaderValue> {
    let pair = format!(
        "{}:{}",
        credentials.user,
        credentials.password.as_deref().unwrap_or("")
    );
    let value = format!("Basic {}", STANDARD.encode(pair.as_bytes()));
    HeaderValue::from_str(&value)
        .map_err(|_| FetchError::InvalidHeader(AUTHORIZATION.as_str().to_string()))
}

/// Percent-encode form fields and join them as `key=value&...`.
fn urlencoded_body(descriptor: &RequestDescriptor) -> String {
    descriptor
        .form_fields()
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, NON_ALPHANUMERIC),
                utf8_percent_encode(value, NON_ALPHANUMERIC)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
