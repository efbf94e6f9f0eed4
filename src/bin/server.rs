use std::{net::SocketAddr, process::ExitCode, time::Duration};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use reqwest::Url;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use finance_dashboard::{AppState, TransactionsApi, build_router, graceful_shutdown};

/// The web server for the finance dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the transactions API, e.g. "http://localhost:3333".
    #[arg(long)]
    api_url: Url,

    /// The port to serve the dashboard from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Canonical name of the timezone transaction dates are displayed in.
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// How long to wait for the transactions API before giving up.
    #[arg(long, default_value_t = 10)]
    request_timeout_secs: u64,

    /// Directory the stylesheet and other static files are served from.
    #[arg(long, default_value = "static")]
    static_dir: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let transactions_api = match TransactionsApi::new(
        &args.api_url,
        Duration::from_secs(args.request_timeout_secs),
    ) {
        Ok(api) => api,
        Err(error) => {
            tracing::error!("Could not create the transactions API client: {error}");
            return ExitCode::FAILURE;
        }
    };

    let app_state = match AppState::new(transactions_api, &args.timezone) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Invalid configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(app_state, &args.static_dir));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!(
        "HTTP server listening on {addr}, loading transactions from {}",
        args.api_url
    );
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Log to stdout, filtered by `RUST_LOG` if it is set.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("finance_dashboard=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are handled, so 5xx responses are not logged again here.
        .on_failure(());

    router.layer(tracing_layer)
}
