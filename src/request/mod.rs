//! Descriptor-to-transport lowering.
//!
//! Turns a compiled descriptor into a ready-to-send `reqwest::Request`,
//! including body encoding and the basic-auth header.

pub mod builder;
pub mod multipart;

pub use builder::build;
pub use multipart::MultipartBody;
