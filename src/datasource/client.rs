//! Datasource client
//!
//! Issues the single GET behind every page request. Non-200 statuses are
//! returned as plain data (status code plus `Retry-After`) so the caller can
//! classify them; only transport, read and decode failures become errors here.

use super::entity::EntityKind;
use super::response::parse_response;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::JsonObject;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use url::Url;

/// Versioned media type requested from the datasource
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.pagerduty+json;version=2";

/// Upper bound on a single datasource call
pub const REQUEST_DEADLINE: Duration = Duration::from_secs(5);

/// A validated request for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Datasource root, already forced onto https
    pub base_url: String,
    /// Value sent verbatim in the Authorization header
    pub token: String,
    /// Maximum number of records to return
    pub page_size: i64,
    /// Entity kind to list
    pub entity: EntityKind,
    /// Opaque cursor from the previous page, empty for the first page
    pub cursor: String,
    /// Caller's own deadline for this call, if any
    pub timeout: Option<Duration>,
}

impl Request {
    /// Target URL for this page.
    ///
    /// The cursor is inserted as the offset verbatim, so the first page
    /// carries an empty `offset=` parameter.
    pub fn url(&self) -> String {
        format!(
            "{}/{}?limit={}&offset={}",
            self.base_url,
            self.entity.external_id(),
            self.page_size,
            self.cursor
        )
    }
}

/// Raw outcome of a page request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// HTTP status code returned by the datasource
    pub status_code: u16,
    /// `Retry-After` header, verbatim (empty when absent)
    pub retry_after_header: String,
    /// Records as returned by the datasource
    pub objects: Vec<JsonObject>,
    /// Cursor for the next page, empty when there are no more pages
    pub next_cursor: String,
}

/// Fetches pages from the datasource
#[async_trait]
pub trait Client: Send + Sync {
    /// Perform exactly one request for the given page
    async fn get_page(&self, request: &Request) -> Result<Response>;
}

/// PagerDuty REST client backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct Datasource {
    client: reqwest::Client,
    request_deadline: Duration,
}

impl Datasource {
    /// Create a datasource client with the given overall timeout (seconds)
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Self::with_config(&HttpClientConfig::builder().timeout_secs(timeout_secs).build())
    }

    /// Create a datasource client from an HTTP client config
    pub fn with_config(config: &HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: config.build_client()?,
            request_deadline: REQUEST_DEADLINE,
        })
    }

    /// Shorten the per-call deadline. Values above [`REQUEST_DEADLINE`] are clamped.
    #[must_use]
    pub fn with_request_deadline(mut self, deadline: Duration) -> Self {
        self.request_deadline = deadline.min(REQUEST_DEADLINE);
        self
    }

    /// Effective deadline: the per-call ceiling, shortened by the caller's timeout
    fn deadline_for(&self, request: &Request) -> Duration {
        request
            .timeout
            .map_or(self.request_deadline, |timeout| {
                timeout.min(self.request_deadline)
            })
    }
}

#[async_trait]
impl Client for Datasource {
    async fn get_page(&self, request: &Request) -> Result<Response> {
        let url = Url::parse(&request.url()).map_err(|_| request_build_error())?;

        let req = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, request.token.as_str())
            .build()
            .map_err(|_| request_build_error())?;

        let deadline = self.deadline_for(request);
        let expires_at = Instant::now() + deadline;

        let res = match timeout_at(expires_at, self.client.execute(req)).await {
            Ok(Ok(res)) => res,
            Ok(Err(e)) => {
                return Err(Error::internal(format!(
                    "Failed to send request to datasource: {e}."
                )))
            }
            Err(_) => {
                return Err(Error::internal(format!(
                    "Failed to send request to datasource: no response within {}ms.",
                    deadline.as_millis()
                )))
            }
        };

        let mut response = Response {
            status_code: res.status().as_u16(),
            retry_after_header: res
                .headers()
                .get(RETRY_AFTER)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .unwrap_or_default(),
            ..Response::default()
        };

        if res.status() != StatusCode::OK {
            return Ok(response);
        }

        let body = match timeout_at(expires_at, res.bytes()).await {
            Ok(Ok(body)) => body,
            Ok(Err(_)) | Err(_) => {
                return Err(Error::datasource_failed("Failed to read response body."))
            }
        };

        let (objects, next_cursor) = parse_response(&body, request.entity)?;
        response.objects = objects;
        response.next_cursor = next_cursor;

        Ok(response)
    }
}

fn request_build_error() -> Error {
    Error::internal("Failed to create HTTP request to datasource.")
}
