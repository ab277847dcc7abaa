//! HTTP status classification
//!
//! Turns a datasource status code plus its `Retry-After` header into a typed
//! error. The datasource client reports both values verbatim and leaves the
//! interpretation to this module.

use crate::error::Error;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Classify a datasource response status.
///
/// Returns `None` for any 2xx status.
pub fn classify_status(status: u16, retry_after_header: &str) -> Option<Error> {
    if (200..300).contains(&status) {
        return None;
    }

    let retry_after = parse_retry_after(retry_after_header);

    let err = match status {
        429 => Error::RateLimited {
            message: format!("Datasource rate limit exceeded (HTTP {status})."),
            retry_after,
        },
        408 | 502 | 503 | 504 => Error::Unavailable {
            message: format!("Datasource is temporarily unavailable (HTTP {status})."),
            retry_after,
        },
        401 | 403 => Error::Unauthorized {
            message: format!("Datasource rejected the provided credentials (HTTP {status})."),
        },
        _ => Error::datasource_failed(format!("Datasource responded with HTTP {status}.")),
    };

    Some(err)
}

/// Parse a `Retry-After` header value.
///
/// Accepts delta-seconds (`"120"`) or an HTTP-date
/// (`"Wed, 21 Oct 2015 07:28:00 GMT"`). Dates in the past yield zero.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    parse_retry_after_at(value, Utc::now())
}

fn parse_retry_after_at(value: &str, now: DateTime<Utc>) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let at = DateTime::parse_from_rfc2822(value).ok()?.with_timezone(&Utc);
    Some((at - now).to_std().unwrap_or(Duration::ZERO))
}
