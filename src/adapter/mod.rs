//! Adapter module
//!
//! The `GetPage` operation: validates an incoming page request, fetches one
//! page from the datasource, classifies datasource-signalled failures and
//! normalizes the returned records.
//!
//! # Flow
//!
//! ```text
//! PageRequest ──► validate ──► Client::get_page ──► classify_status ──► normalize ──► Page
//!                    │                │                    │                 │
//!                    └────────────────┴──── Error ─────────┴─────────────────┘
//! ```

mod service;
mod types;
mod validation;

pub use service::{normalize_address, Adapter};
pub use types::{AuthCredentials, EntityConfig, Page, PageRequest};
pub use validation::{validate_get_page_request, ValidatedRequest, MAX_PAGE_SIZE};
