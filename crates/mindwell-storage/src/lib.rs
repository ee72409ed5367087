//! mindwell-storage
//!
//! Document-store collaborator. Collections are S3 key prefixes and each
//! document is one JSON object, via a thin wrapper around the AWS S3 SDK.

pub mod client;
pub mod documents;
pub mod error;
pub mod objects;
