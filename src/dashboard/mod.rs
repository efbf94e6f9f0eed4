//! Dashboard module
//!
//! Provides the overview page: summary cards for the balance and a table of
//! every transaction, loaded from the transactions API.

mod cards;
mod handlers;
mod state;
mod tables;
mod transaction;

pub use handlers::{get_dashboard_content, get_dashboard_page};
pub use state::{DashboardViewState, LoadedDashboard};
pub use transaction::{
    FormattedBalance, FormattedTransaction, format_balance, format_transaction,
    format_transactions,
};

/// Shown in place of the cards and the table until the data has loaded.
const LOADING_TEXT: &str = "Carregando...";
