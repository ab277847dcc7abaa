//! Datasource module
//!
//! The page fetcher: turns one validated paging request into exactly one
//! HTTP GET against the PagerDuty REST API and converts the response
//! envelope into raw records plus an opaque next-page cursor.
//!
//! # Overview
//!
//! PagerDuty paginates with `limit`/`offset` query parameters and a `more`
//! flag in the response body. The cursor handed back to callers is the next
//! offset, rendered as a decimal string, and is derived from the current
//! response alone.

mod client;
mod entity;
mod response;

pub use client::{Client, Datasource, Request, Response, ACCEPT_MEDIA_TYPE, REQUEST_DEADLINE};
pub use entity::EntityKind;
pub use response::{next_cursor, parse_response};
