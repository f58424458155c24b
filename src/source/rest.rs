//! Blocking HTTP reader for the hosted relational backend.
//!
//! Tables are exposed PostgREST-style under `/rest/v1/<table>`, filtered
//! with `column=op.value` query parameters.

use super::types::ApiError;
use super::RoundSource;
use crate::model::{HoleStat, Round, Snapshot};
use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::DataFetchError;
use log::{debug, info};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{CONTENT_RANGE, RANGE};
use serde::de::DeserializeOwned;

/// Round ids per `in.(...)` filter, keeps request URLs a sane length
const ROUND_ID_CHUNK: usize = 100;

/// Rows asked for per request; servers may cap pages lower
const PAGE_SIZE: usize = 1000;

/// What to do after a page of rows came back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageStep {
    Done,
    Next(usize),
}

/// REST client for the `rounds` and `hole_stats` tables
pub struct RestSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestSource {
    /// Create a new REST source
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, DataFetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_FETCH_TIMEOUT)
            .build()
            .map_err(DataFetchError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&base_url.into()),
            api_key: api_key.into(),
        })
    }

    fn table(&self, name: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/rest/v1/{}", self.base_url, name))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Request for every round owned by `user_id`, oldest first
    pub fn rounds_request(&self, user_id: &str) -> RequestBuilder {
        self.table("rounds").query(&[
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", user_id)),
            ("order", "played_at.asc".to_string()),
        ])
    }

    /// Request for the holes of the given rounds
    pub fn holes_request(&self, round_ids: &[&str]) -> RequestBuilder {
        self.table("hole_stats").query(&[
            ("select", "*".to_string()),
            ("round_id", format!("in.({})", round_ids.join(","))),
            ("order", "hole_number.asc".to_string()),
        ])
    }

    /// Fetch every row of a query, one `Range` page at a time
    fn fetch_rows<T: DeserializeOwned>(
        &self,
        request: impl Fn() -> RequestBuilder,
    ) -> Result<Vec<T>, DataFetchError> {
        let mut rows: Vec<T> = Vec::new();
        let mut offset = 0;

        loop {
            let response = page_request(request(), offset)
                .send()
                .map_err(DataFetchError::RequestFailed)?;
            let response = check_status(response)?;
            let total = response
                .headers()
                .get(CONTENT_RANGE)
                .and_then(|v| v.to_str().ok())
                .and_then(content_range_total);

            let mut page: Vec<T> = response.json().map_err(DataFetchError::RequestFailed)?;
            let received = page.len();
            rows.append(&mut page);

            match next_page(rows.len(), received, total)? {
                PageStep::Done => return Ok(rows),
                PageStep::Next(next) => {
                    debug!("Fetched {} of {:?} rows, continuing", next, total);
                    offset = next;
                }
            }
        }
    }
}

impl RoundSource for RestSource {
    fn fetch_snapshot(&self, user_id: &str) -> Result<Snapshot, DataFetchError> {
        info!("Fetching rounds for user {} from {}", user_id, self.base_url);

        let rounds: Vec<Round> = self.fetch_rows(|| self.rounds_request(user_id))?;
        debug!("Fetched {} rounds", rounds.len());

        let ids: Vec<&str> = rounds.iter().map(|r| r.id.as_str()).collect();
        let mut holes: Vec<HoleStat> = Vec::new();
        for chunk in ids.chunks(ROUND_ID_CHUNK) {
            let mut rows: Vec<HoleStat> = self.fetch_rows(|| self.holes_request(chunk))?;
            holes.append(&mut rows);
        }
        debug!("Fetched {} holes", holes.len());

        Ok(Snapshot { rounds, holes })
    }
}

/// Turn a non-2xx response into `DataFetchError::Rejected`
fn check_status(response: Response) -> Result<Response, DataFetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|e| e.describe())
        .unwrap_or(body);

    Err(DataFetchError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// Ask for rows `offset..offset + PAGE_SIZE` along with an exact total count
fn page_request(request: RequestBuilder, offset: usize) -> RequestBuilder {
    request
        .header("Range-Unit", "items")
        .header(RANGE, format!("{}-{}", offset, offset + PAGE_SIZE - 1))
        .header("Prefer", "count=exact")
}

/// Total row count from a `Content-Range` header (`0-999/1800`, `*/0`).
/// `None` when the server did not count (`0-999/*`) or the header is malformed.
fn content_range_total(header: &str) -> Option<usize> {
    let (_, total) = header.trim().split_once('/')?;
    total.parse().ok()
}

/// Decide whether another page is needed
///
/// With a known total, keep going until every row is in and fail if the
/// server stops short. Without one, a page shorter than `PAGE_SIZE` ends
/// the query.
fn next_page(collected: usize, received: usize, total: Option<usize>) -> Result<PageStep, DataFetchError> {
    match total {
        Some(total) if collected > total => Err(DataFetchError::InvalidResponse(format!(
            "received {} rows but the server reported {}",
            collected, total
        ))),
        Some(total) if collected == total => Ok(PageStep::Done),
        Some(total) if received == 0 => Err(DataFetchError::InvalidResponse(format!(
            "server stopped after {} of {} rows",
            collected, total
        ))),
        Some(_) => Ok(PageStep::Next(collected)),
        None if received < PAGE_SIZE => Ok(PageStep::Done),
        None => Ok(PageStep::Next(collected)),
    }
}

/// Strip trailing slashes so paths join cleanly
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
