//! HTTP module
//!
//! Shared HTTP plumbing for talking to the datasource.
//!
//! # Features
//!
//! - **Client Construction**: Pooled `reqwest` client with an overall timeout
//! - **Status Classification**: Maps non-success statuses onto typed errors
//! - **Retry Hints**: Parses `Retry-After` in both seconds and HTTP-date form

mod client;
mod status;

pub use client::{HttpClientConfig, HttpClientConfigBuilder};
pub use status::{classify_status, parse_retry_after};
