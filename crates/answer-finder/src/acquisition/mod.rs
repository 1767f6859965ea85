//! HTTP-based acquisition layers.
//!
//! Fetches quiz pages and pulls question data out of raw HTML: embedded
//! application state first, schema.org markup second. No JavaScript is
//! executed.

pub mod embedded;
pub mod http_client;
pub mod schema_org;
