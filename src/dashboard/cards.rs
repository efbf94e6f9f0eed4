//! Summary cards for the balance.
//!
//! Provides three cards:
//! - Income ("Entradas")
//! - Outcome ("Saídas")
//! - Net total ("Total")
//!
//! Each displayed amount carries a `data-testid` so it can be looked up
//! without depending on the card layout.

use maud::{Markup, html};

use crate::html::PLACEHOLDER_STYLE;

use super::{LOADING_TEXT, transaction::FormattedBalance};

const CARD_CONTAINER_STYLE: &str = "card-grid";
const CARD_STYLE: &str = "card";
const CARD_TOTAL_STYLE: &str = "card card--total";

/// Renders the income, outcome and total cards.
pub(super) fn balance_cards_view(balance: &FormattedBalance) -> Markup {
    html! {
        section class=(CARD_CONTAINER_STYLE) data-region="balance"
        {
            (card("Entradas", "↑", "balance-income", &balance.income, CARD_STYLE))
            (card("Saídas", "↓", "balance-outcome", &balance.outcome, CARD_STYLE))
            (card("Total", "$", "balance-total", &balance.total, CARD_TOTAL_STYLE))
        }
    }
}

/// Renders the card region while the balance is still loading.
pub(super) fn balance_cards_placeholder() -> Markup {
    html! {
        section class=(CARD_CONTAINER_STYLE) data-region="balance"
        {
            p class=(PLACEHOLDER_STYLE) { (LOADING_TEXT) }
        }
    }
}

fn card(label: &str, icon: &str, test_id: &str, amount: &str, style: &str) -> Markup {
    html! {
        div class=(style)
        {
            header
            {
                p { (label) }
                span class="card__icon" aria-hidden="true" { (icon) }
            }

            h1 data-testid=(test_id) { (amount) }
        }
    }
}
