//! Display-ready copies of the transactions and balance.
//!
//! The amounts and dates are formatted once, straight from the raw values sent
//! by the transactions API, and the results are kept alongside the original
//! fields so that the views never format anything themselves.

use time::OffsetDateTime;

use crate::{
    Error,
    html::{format_currency, format_date},
    timezone::local_date,
    transaction::{Balance, Category, Transaction, TransactionType},
};

/// A transaction with its value and date formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTransaction {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// Short description of the transaction.
    pub title: String,
    /// The raw amount of the transaction.
    pub value: f64,
    /// Whether the transaction is income or outcome.
    pub kind: TransactionType,
    /// The category of the transaction.
    pub category: Category,
    /// When the transaction was recorded.
    pub created_at: OffsetDateTime,
    /// `value` as currency, e.g. "R$ 500,00".
    pub formatted_value: String,
    /// The local date of `created_at`, e.g. "01/05/2020".
    pub formatted_date: String,
}

/// The balance with each amount formatted as currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBalance {
    /// Sum of all income.
    pub income: String,
    /// Sum of all outcome.
    pub outcome: String,
    /// Income minus outcome.
    pub total: String,
}

/// Format the value and date of `transaction`.
///
/// The date is the calendar date of `created_at` in `local_timezone`, a
/// canonical timezone name such as "America/Sao_Paulo".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
pub fn format_transaction(
    transaction: Transaction,
    local_timezone: &str,
) -> Result<FormattedTransaction, Error> {
    let date = local_date(local_timezone, transaction.created_at)
        .ok_or_else(|| Error::InvalidTimezoneError(local_timezone.to_owned()))?;

    Ok(FormattedTransaction {
        formatted_value: format_currency(transaction.value),
        formatted_date: format_date(date),
        id: transaction.id,
        title: transaction.title,
        value: transaction.value,
        kind: transaction.kind,
        category: transaction.category,
        created_at: transaction.created_at,
    })
}

/// Format every transaction, keeping their order.
pub fn format_transactions(
    transactions: Vec<Transaction>,
    local_timezone: &str,
) -> Result<Vec<FormattedTransaction>, Error> {
    transactions
        .into_iter()
        .map(|transaction| format_transaction(transaction, local_timezone))
        .collect()
}

/// Format each amount of `balance` as currency.
pub fn format_balance(balance: &Balance) -> FormattedBalance {
    FormattedBalance {
        income: format_currency(balance.income),
        outcome: format_currency(balance.outcome),
        total: format_currency(balance.total),
    }
}
