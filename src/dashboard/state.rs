//! The states the data-dependent part of the dashboard can be in.

use crate::{Error, transaction::TransactionsResponse};

use super::transaction::{
    FormattedBalance, FormattedTransaction, format_balance, format_transactions,
};

/// Everything the dashboard shows once the transactions API has answered.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDashboard {
    /// The formatted balance.
    pub balance: FormattedBalance,
    /// The formatted transactions, in the order the API returned them.
    pub transactions: Vec<FormattedTransaction>,
}

impl LoadedDashboard {
    /// Format a response from the transactions API for display.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn format(response: TransactionsResponse, local_timezone: &str) -> Result<Self, Error> {
        Ok(Self {
            balance: format_balance(&response.balance),
            transactions: format_transactions(response.transactions, local_timezone)?,
        })
    }
}

/// The view state of the dashboard.
///
/// The balance and the transactions are only ever shown together: they are
/// loaded by the same request and stored in the same variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardViewState {
    /// The transactions API has not answered yet.
    #[default]
    Loading,
    /// The transactions API answered with data that could be formatted.
    Loaded(LoadedDashboard),
    /// The load failed. The dashboard shows the error and offers a reload.
    ///
    /// Holds the [Error::NetworkError] or [Error::MalformedResponseError]
    /// returned by the fetch. Configuration errors such as an invalid timezone
    /// are not load failures and never end up here.
    Failed(Error),
}

impl DashboardViewState {
    /// The state before the transactions API has answered.
    pub fn new() -> Self {
        Self::Loading
    }

    /// Replace the current state with the outcome of a load.
    ///
    /// The previous state is discarded entirely, nothing is merged.
    pub fn update(&mut self, outcome: Result<LoadedDashboard, Error>) {
        *self = match outcome {
            Ok(dashboard) => Self::Loaded(dashboard),
            Err(error) => Self::Failed(error),
        };
    }
}
