//! Curl command parsing.
//!
//! Turns a curl-style command line into a [`RequestDescriptor`] in four
//! stages: slicing the raw text into shell-like words, classifying the
//! words into tokens, resolving tokens into validated options, and
//! compiling the options into the final descriptor.

pub mod compiler;
pub mod options;
pub mod slicer;
pub mod tokens;

use tracing::debug;

use crate::descriptor::RequestDescriptor;
use crate::errors::ParseResult;

/// Parse a full curl command into a request descriptor.
///
/// Fails on the first problem found; a descriptor is only returned for a
/// command that is valid end to end.
pub fn parse(command: &str) -> ParseResult<RequestDescriptor> {
    let words = slicer::slice(command);
    let tokens = tokens::tokenize(&words);
    let options = options::resolve(&tokens)?;
    let descriptor = compiler::compile(&options)?;
    debug!(url = %descriptor.url(), method = descriptor.method(), "compiled curl command");
    Ok(descriptor)
}
