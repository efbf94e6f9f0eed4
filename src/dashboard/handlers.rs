//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for the dashboard page and its data-dependent content
//! - HTML view functions for rendering each [DashboardViewState]
//!
//! The page is served in the loading state. Once it is in the browser, htmx
//! requests [endpoints::DASHBOARD_CONTENT], which loads the transactions and
//! answers with the loaded or failed content that replaces the placeholders.

use axum::{
    extract::{FromRef, State},
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::TransactionsApi,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base, loading_spinner},
};

use super::{
    cards::{balance_cards_placeholder, balance_cards_view},
    state::{DashboardViewState, LoadedDashboard},
    tables::{transactions_table_placeholder, transactions_table_view},
};

/// The id of the element that is swapped out when the content loads.
const CONTENT_ID: &str = "dashboard-content";

/// The state needed for displaying the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for fetching transactions and the balance.
    pub transactions_api: TransactionsApi,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions_api: state.transactions_api.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the dashboard page with placeholders where the data will go.
pub async fn get_dashboard_page() -> Response {
    dashboard_view(&DashboardViewState::new()).into_response()
}

/// Load the transactions and balance and display them.
///
/// Requests made by htmx get just the content region. Other requests, e.g.
/// from a browser with JavaScript disabled, get the whole page.
pub async fn get_dashboard_content(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
) -> Result<Response, Error> {
    let view_state = load_dashboard(&state).await?;

    let markup = if is_htmx_request {
        dashboard_content_view(&view_state)
    } else {
        dashboard_view(&view_state)
    };

    Ok(([(CACHE_CONTROL, "no-store")], markup).into_response())
}

/// Fetch from the transactions API and build the resulting view state.
///
/// Load failures become [DashboardViewState::Failed].
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if the configured timezone is invalid.
async fn load_dashboard(state: &DashboardState) -> Result<DashboardViewState, Error> {
    let mut view_state = DashboardViewState::new();

    let pending = PendingLoad::start();
    let fetched = state.transactions_api.fetch_transactions().await;
    pending.finish();

    let outcome = match fetched {
        Ok(response) => Ok(LoadedDashboard::format(response, &state.local_timezone)?),
        Err(error) => {
            tracing::warn!("Could not load the dashboard: {error}");
            Err(error)
        }
    };

    view_state.update(outcome);

    Ok(view_state)
}

/// Logs when a load is abandoned before the transactions API answers.
///
/// Axum drops the handler future when the client disconnects, which drops the
/// in-flight request along with this guard.
struct PendingLoad {
    finished: bool,
}

impl PendingLoad {
    fn start() -> Self {
        Self { finished: false }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("Dashboard load cancelled before the transactions API answered");
        }
    }
}

/// Renders the full dashboard page.
fn dashboard_view(view_state: &DashboardViewState) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            (dashboard_content_view(view_state))
        }
    );

    base("Dashboard", &content)
}

/// Renders the part of the dashboard that depends on the loaded data.
fn dashboard_content_view(view_state: &DashboardViewState) -> Markup {
    match view_state {
        DashboardViewState::Loading => html! {
            div
                id=(CONTENT_ID)
                hx-get=(endpoints::DASHBOARD_CONTENT)
                hx-trigger="load"
                hx-swap="outerHTML"
            {
                (balance_cards_placeholder())
                (transactions_table_placeholder())
            }
        },
        DashboardViewState::Loaded(dashboard) => html! {
            div id=(CONTENT_ID)
            {
                (balance_cards_view(&dashboard.balance))
                (transactions_table_view(&dashboard.transactions))
            }
        },
        DashboardViewState::Failed(error) => html! {
            div id=(CONTENT_ID)
            {
                (load_error_view(error))
            }
        },
    }
}

/// Renders the error message and a control to try loading again.
fn load_error_view(error: &Error) -> Markup {
    let (kind, message, details) = match error {
        Error::NetworkError(_) => (
            "network",
            "Não foi possível conectar ao servidor.",
            "Verifique sua conexão e tente novamente.",
        ),
        Error::MalformedResponseError(_) => (
            "malformed-response",
            "O servidor enviou uma resposta inesperada.",
            "Os dados recebidos não puderam ser lidos. Tente novamente mais tarde.",
        ),
        // Only fetch errors are stored as `Failed`, this covers any other error
        // should that change.
        _ => (
            "unexpected",
            "Algo deu errado.",
            "Verifique os logs do servidor para mais detalhes.",
        ),
    };

    html! {
        section class="load-error" role="alert" data-error-kind=(kind)
        {
            h2 class="load-error__message" { (message) }
            p class="load-error__details" { (details) }

            a
                href=(endpoints::DASHBOARD_CONTENT)
                hx-get=(endpoints::DASHBOARD_CONTENT)
                hx-target={"#" (CONTENT_ID)}
                hx-swap="outerHTML"
                class=(BUTTON_PRIMARY_STYLE)
            {
                (loading_spinner())
                "Tentar novamente"
            }
        }
    }
}
