//! Multipart/form-data encoding.
//!
//! Encodes form fields and file attachments into a framed body with a
//! freshly generated boundary, without touching the network.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::warn;
use uuid::Uuid;

/// An encoded multipart body and the boundary used to frame it.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    pub boundary: String,
    pub bytes: Vec<u8>,
}

impl MultipartBody {
    /// The Content-Type header value matching this body.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

/// Encode form fields and file references into a multipart body.
///
/// Fields come first, files after, both in descriptor order. A file that
/// cannot be read contributes a placeholder payload instead of failing
/// the whole request.
pub fn encode(
    form_fields: &IndexMap<String, String>,
    file_refs: &IndexMap<String, PathBuf>,
) -> MultipartBody {
    let boundary = Uuid::new_v4().simple().to_string();
    let mut bytes = Vec::new();

    for (name, value) in form_fields {
        bytes.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        bytes.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        bytes.extend_from_slice(value.as_bytes());
        bytes.extend_from_slice(b"\r\n");
    }

    for (name, path) in file_refs {
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %path.display(), %error, "unreadable upload, sending placeholder");
                format!("<unreadable file: {}>", path.display()).into_bytes()
            }
        };
        bytes.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        bytes.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name,
                file_name(path)
            )
            .as_bytes(),
        );
        bytes.extend_from_slice(
            format!("Content-Type: {}\r\n\r\n", content_type_for(path)).as_bytes(),
        );
        bytes.extend_from_slice(&content);
        bytes.extend_from_slice(b"\r\n");
    }

    bytes.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    MultipartBody { boundary, bytes }
}

/// The filename reported for an attachment, falling back to `file`.
fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("file")
        .to_string()
}

/// Content type for an attachment, by file extension.
fn content_type_for(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "txt" => "text/plain",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}
