// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # PagerDuty Adapter
//!
//! A paginated `GetPage` adapter for the PagerDuty REST API.
//!
//! ## Features
//!
//! - **Request Validation**: Rejects unsupported requests before any network call
//! - **Offset Pagination**: Maps `limit`/`offset`/`more` onto an opaque cursor
//! - **Typed Errors**: Every failure carries a message and an error code
//! - **Normalization**: Converts raw records into typed attribute maps
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagerduty_adapter::adapter::{Adapter, PageRequest};
//! use pagerduty_adapter::datasource::Datasource;
//!
//! #[tokio::main]
//! async fn main() -> pagerduty_adapter::Result<()> {
//!     let adapter = Adapter::new(Datasource::new(30)?);
//!
//!     let mut request: PageRequest = load_request();
//!     loop {
//!         let page = adapter.get_page(&request).await?;
//!         // Process page.objects
//!         if page.next_cursor.is_empty() {
//!             break;
//!         }
//!         request.cursor = page.next_cursor;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │          Transport: HTTP server (serve) / CLI (get-page)      │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ PageRequest
//! ┌──────────────┬───────────────┴──────┬───────────┬────────────┐
//! │  Validate    │  Datasource          │  Classify │  Normalize │
//! ├──────────────┼──────────────────────┼───────────┼────────────┤
//! │ Config       │ GET /{entity}        │ 429       │ Attributes │
//! │ Token        │ limit/offset         │ 5xx       │ JSON paths │
//! │ Entity kind  │ 5s deadline          │ 401/403   │ Date-times │
//! │ Page size    │ next cursor          │           │            │
//! └──────────────┴──────────────────────┴───────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the adapter
pub mod error;

/// Common types and type aliases
pub mod types;

/// Datasource config and process settings
pub mod config;

/// HTTP client construction and status classification
pub mod http;

/// Datasource client and pagination
pub mod datasource;

/// Record normalization
pub mod normalize;

/// The GetPage operation
pub mod adapter;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorCode, Result};
pub use types::*;

pub use adapter::{Adapter, Page, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
