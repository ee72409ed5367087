//! mindwell-core
//!
//! Pure domain types, validation, collection naming, and default seed data.
//! No storage or HTTP dependency; this is the shared vocabulary of the
//! Mindwell service.

pub mod collections;
pub mod email;
pub mod error;
pub mod models;
pub mod seed;
