//! The client for the backend API that owns the transactions.
//!
//! The dashboard only ever reads from the backend: one `GET /transactions`
//! per page load, no caching and no retries. Failures are sorted into
//! [Error::NetworkError] and [Error::MalformedResponseError] so that the
//! dashboard can tell the user what went wrong.

use std::time::Duration;

use reqwest::{Client, Url, header::ACCEPT};

use crate::{Error, transaction::TransactionsResponse};

/// The path of the backend route that lists the transactions and the balance.
pub const TRANSACTIONS_PATH: &str = "/transactions";

/// The default time allowed for a request to the transactions API, including
/// reading the response body.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A client for the transactions API.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct TransactionsApi {
    http: Client,
    transactions_url: String,
}

impl TransactionsApi {
    /// Create a client for the API hosted at `base_url`.
    ///
    /// `base_url` may include a path prefix, e.g. "http://localhost:3333/api".
    /// Requests that take longer than `timeout` fail with [Error::NetworkError].
    ///
    /// # Errors
    /// Returns [Error::HttpClientError] if the underlying HTTP client cannot be
    /// initialised, e.g. if the TLS backend fails to load.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(timeout)
            .build()
            .map_err(|error| Error::HttpClientError(error.to_string()))?;

        let transactions_url = format!(
            "{}{TRANSACTIONS_PATH}",
            base_url.as_str().trim_end_matches('/')
        );

        Ok(Self {
            http,
            transactions_url,
        })
    }

    /// The full URL that [TransactionsApi::fetch_transactions] requests.
    pub fn transactions_url(&self) -> &str {
        &self.transactions_url
    }

    /// Get every transaction and the aggregate balance.
    ///
    /// # Errors
    /// - [Error::NetworkError] if the API cannot be reached, the request times
    ///   out, or the API responds with a non-success status code.
    /// - [Error::MalformedResponseError] if the body is not valid JSON or does
    ///   not match [TransactionsResponse].
    pub async fn fetch_transactions(&self) -> Result<TransactionsResponse, Error> {
        tracing::debug!("Requesting transactions from {}", self.transactions_url);

        let response = self
            .http
            .get(&self.transactions_url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::NetworkError(format!(
                "the transactions API responded with HTTP {status}"
            )));
        }

        let body = response.bytes().await.map_err(network_error)?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::debug!(
                "Could not parse transactions response: {error}\nbody: {:?}",
                String::from_utf8_lossy(&body)
            );
            Error::MalformedResponseError(error.to_string())
        })
    }
}

fn network_error(error: reqwest::Error) -> Error {
    let description = if error.is_timeout() {
        format!("the request timed out: {error}")
    } else if error.is_connect() {
        format!("could not connect: {error}")
    } else {
        error.to_string()
    };

    Error::NetworkError(description)
}
