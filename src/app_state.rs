//! Implements a struct that holds the state of the dashboard server.

use crate::{Error, api::TransactionsApi, timezone::is_valid_timezone};

/// The state of the dashboard server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the backend API that owns the transactions.
    pub transactions_api: TransactionsApi,

    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    ///
    /// Transaction dates are displayed as calendar dates in this timezone.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "America/Sao_Paulo".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(transactions_api: TransactionsApi, local_timezone: &str) -> Result<Self, Error> {
        if !is_valid_timezone(local_timezone) {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            transactions_api,
            local_timezone: local_timezone.to_owned(),
        })
    }
}
