//! Run copy-pasted curl commands as native HTTP requests.
//!
//! `uncurl` parses a curl-style command line into an immutable
//! [`RequestDescriptor`] and can execute it over HTTP. Shell-like
//! quoting, line continuations, flag aliases, and curl's option
//! precedence rules are honored, so a command copied from API
//! documentation works as-is.
//!
//! ```
//! use uncurl::Curl;
//!
//! let curl = Curl::new("curl -u user:secret -F file=@photo.png https://example.com/upload")?;
//! assert_eq!(curl.descriptor().method(), "POST");
//! # Ok::<(), uncurl::ParseError>(())
//! ```

pub mod curl;
pub mod descriptor;
pub mod errors;
pub mod parser;
pub mod request;
pub mod response;

pub use curl::Curl;
pub use descriptor::{BodyKind, Credentials, RequestDescriptor};
pub use errors::{FetchError, ParseError};
pub use response::CurlResponse;
