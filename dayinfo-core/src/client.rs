use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt::Debug;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::ErrorKind,
    model::{DayInfoQuery, DayInfoResponse},
};

/// Anything that can resolve a day-info query. Implemented by the HTTP
/// client; test drivers substitute a stub.
#[async_trait]
pub trait DayInfoSource: Send + Sync + Debug {
    async fn fetch(&self, query: &DayInfoQuery) -> Result<DayInfoResponse, ErrorKind>;
}

/// HTTP client for the day-info service.
///
/// One outbound GET per `fetch`: no retries, no caching, no deduplication of
/// identical queries. No timeout is configured, so a hung transport holds the
/// single request slot until reqwest itself fails or resolves.
#[derive(Debug, Clone)]
pub struct DayInfoClient {
    base_url: String,
    http: Client,
}

impl DayInfoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resolve_api_base())
    }

    /// Liveness probe against the service's `/health` endpoint.
    pub async fn health(&self) -> Result<(), ErrorKind> {
        let url = format!("{}/health", self.base_url);

        let res = self.http.get(&url).send().await.map_err(|err| {
            warn!(error = %err, "health probe failed to reach the day-info service");
            ErrorKind::Network(err)
        })?;

        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!(%status, "health probe answered with a non-success status");
            Err(classify_status(status))
        }
    }
}

#[async_trait]
impl DayInfoSource for DayInfoClient {
    async fn fetch(&self, query: &DayInfoQuery) -> Result<DayInfoResponse, ErrorKind> {
        let url = format!("{}/day-info", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "failed to reach the day-info service");
                ErrorKind::Network(err)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            warn!(%status, error = %err, "failed to read day-info response body");
            ErrorKind::Network(err)
        })?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "day-info request failed");
            return Err(classify_status(status));
        }

        let parsed: DayInfoResponse = serde_json::from_str(&body).map_err(|err| {
            warn!(error = %err, body = %truncate_body(&body), "day-info body did not parse");
            ErrorKind::Parse(err)
        })?;

        debug!(date = %query.date, city = %query.city, "day-info fetch succeeded");
        Ok(parsed)
    }
}

/// 400 means the server agrees the query was malformed; everything else
/// non-2xx is a generic API failure.
fn classify_status(status: StatusCode) -> ErrorKind {
    if status == StatusCode::BAD_REQUEST {
        ErrorKind::ValidationRejected
    } else {
        ErrorKind::Api(status.as_u16())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    match body.char_indices().nth(MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
