//! The transaction and balance data returned by the transactions API.
//!
//! These types mirror the JSON body of `GET /transactions`:
//!
//! ```json
//! {
//!   "transactions": [
//!     { "id": "…", "title": "…", "value": 500, "type": "income",
//!       "category": { "title": "…" }, "created_at": "2020-05-01T00:00:00Z" }
//!   ],
//!   "balance": { "income": 500, "outcome": 0, "total": 500 }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::{
        BorrowedFormatItem,
        well_known::{Iso8601, Rfc3339},
    },
    macros::format_description,
};

const DATE_ONLY_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Whether a transaction adds money (income) or takes it away (outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Outcome,
}

impl TransactionType {
    /// The lowercase name used on the wire, also used as a CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

/// The category a transaction was filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The display name of the category.
    pub title: String,
}

/// A single recorded financial movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// Short description of the transaction.
    pub title: String,
    /// The amount of the transaction.
    pub value: f64,
    /// Whether the transaction is income or outcome.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The category of the transaction.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(
        deserialize_with = "deserialize_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    pub created_at: OffsetDateTime,
}

/// Totals over all transactions.
///
/// The backend is expected to keep `total == income - outcome`, this is not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Sum of all income.
    pub income: f64,
    /// Sum of all outcome.
    pub outcome: f64,
    /// Income minus outcome.
    pub total: f64,
}

/// The body of a successful `GET /transactions` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction, in the order the backend returned them.
    pub transactions: Vec<Transaction>,
    /// The aggregate balance.
    pub balance: Balance,
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 date-times, other ISO-8601 date-times (those without an
/// offset are taken to be UTC) and plain dates, which are read as midnight UTC.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(text, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(text, &Iso8601::DEFAULT))
        .or_else(|_| PrimitiveDateTime::parse(text, &Iso8601::DEFAULT).map(|dt| dt.assume_utc()))
        .or_else(|error| {
            Date::parse(text, DATE_ONLY_FORMAT)
                .map(|date| date.midnight().assume_utc())
                .map_err(|_| error)
        })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    parse_timestamp(&text)
        .map_err(|error| de::Error::custom(format!("invalid timestamp \"{text}\": {error}")))
}

fn serialize_timestamp<S>(timestamp: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = timestamp
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?;

    serializer.serialize_str(&text)
}
