//! Table view for the transaction list.

use maud::{Markup, html};

use crate::{html::PLACEHOLDER_STYLE, transaction::TransactionType};

use super::{LOADING_TEXT, transaction::FormattedTransaction};

const TABLE_CONTAINER_STYLE: &str = "table-container";
const TABLE_TITLE_CELL_STYLE: &str = "title";

/// Prefix for the value of outcome transactions, the value itself is unsigned.
const OUTCOME_PREFIX: &str = " - ";

/// Renders a table with one row per transaction.
///
/// The header row is always rendered, an empty list gives an empty body.
pub(super) fn transactions_table_view(transactions: &[FormattedTransaction]) -> Markup {
    html! {
        section class=(TABLE_CONTAINER_STYLE) data-region="transactions"
        {
            table
            {
                thead
                {
                    tr
                    {
                        th { "Título" }
                        th { "Preço" }
                        th { "Categoria" }
                        th { "Data" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        tr data-transaction-id=(transaction.id)
                        {
                            td class=(TABLE_TITLE_CELL_STYLE) { (transaction.title) }
                            td class=(transaction.kind.as_str())
                            {
                                @if transaction.kind == TransactionType::Outcome {
                                    (OUTCOME_PREFIX)
                                }
                                (transaction.formatted_value)
                            }
                            td { (transaction.category.title) }
                            td { (transaction.formatted_date) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the table region while the transactions are still loading.
pub(super) fn transactions_table_placeholder() -> Markup {
    html! {
        section class=(TABLE_CONTAINER_STYLE) data-region="transactions"
        {
            p class=(PLACEHOLDER_STYLE) { (LOADING_TEXT) }
        }
    }
}
