//! Asynchronous retrieval of chart specifications from the plot source.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::chart::ChartSpec;

/// Failure modes for a single panel fetch.
///
/// All four are local to the panel that triggered the fetch; none of them
/// propagate to sibling panels or the gallery as a whole.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed at all.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(StatusCode),

    /// Success status but no usable payload in the body.
    #[error("No data received from server")]
    EmptyResponse,

    /// The payload was present but is not a valid chart specification.
    #[error("invalid chart specification: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Tri-state outcome of a panel fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchResult<T> {
    /// The fetch has been issued and has not resolved yet.
    Pending,
    Success(T),
    Failure(String),
}

impl<T> FetchResult<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchResult::Pending)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        match self {
            FetchResult::Pending => FetchResult::Pending,
            FetchResult::Success(value) => FetchResult::Success(f(value)),
            FetchResult::Failure(reason) => FetchResult::Failure(reason),
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchResult<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchResult::Success(value),
            Err(err) => FetchResult::Failure(err.to_string()),
        }
    }
}

/// Retrieves serialized chart specifications via `GET /plots/{plot_type_id}`.
///
/// Single-shot: every call issues one fresh request, nothing is cached and
/// nothing is retried. A failed attempt is terminal until the caller asks
/// again.
#[derive(Clone, Debug)]
pub struct PlotFetcher {
    client: Client,
    base_url: String,
}

impl PlotFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn fetch(&self, plot_type_id: &str) -> Result<ChartSpec, FetchError> {
        let url = format!("{}/plots/{}", self.base_url, plot_type_id);
        debug!(%url, "fetching chart specification");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        decode_wire(&body)
    }
}

/// Decodes the plot source's double-encoded wire format.
///
/// The body is a JSON value that is itself a JSON string whose contents are
/// the text of `{ data, layout, config }`. The outer value must be decoded,
/// then its string contents parsed a second time. A body that is missing,
/// `null`, or an empty string carries no payload.
pub(crate) fn decode_wire(body: &str) -> Result<ChartSpec, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyResponse);
    }

    let outer: Value = serde_json::from_str(body)?;
    match outer {
        Value::Null => Err(FetchError::EmptyResponse),
        Value::String(inner) if inner.trim().is_empty() => Err(FetchError::EmptyResponse),
        Value::String(inner) => Ok(serde_json::from_str(&inner)?),
        // The source always wraps the specification text in a string; any
        // other shape is a malformed payload.
        other => match serde_json::from_value::<String>(other) {
            Ok(inner) => Ok(serde_json::from_str(&inner)?),
            Err(err) => Err(FetchError::Decode(err)),
        },
    }
}
