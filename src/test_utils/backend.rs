//! A stand-in for the transactions API, served from a local port.

use axum::{Json, Router, routing::get};
use reqwest::Url;
use time::macros::datetime;
use tokio::{io::AsyncReadExt, net::TcpListener, sync::oneshot};

use crate::{
    api::TRANSACTIONS_PATH,
    transaction::{Balance, Category, Transaction, TransactionType, TransactionsResponse},
};

/// Serve `router` on an ephemeral local port and return its base URL.
///
/// The server runs until the test's runtime shuts down.
pub(crate) async fn spawn_backend(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test backend");
    let address = listener
        .local_addr()
        .expect("Could not get test backend address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test backend stopped unexpectedly");
    });

    Url::parse(&format!("http://{address}")).expect("Invalid test backend URL")
}

/// A base URL that nothing is listening on.
pub(crate) async fn unused_local_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind listener");
    let address = listener.local_addr().expect("Could not get address");
    drop(listener);

    Url::parse(&format!("http://{address}")).expect("Invalid URL")
}

/// A backend that reads one request and never answers it.
///
/// Returns the base URL, a receiver that fires once the request has been
/// read, and a receiver that fires once the client closes the connection.
pub(crate) async fn spawn_unresponsive_backend()
-> (Url, oneshot::Receiver<()>, oneshot::Receiver<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test backend");
    let address = listener
        .local_addr()
        .expect("Could not get test backend address");
    let (received_tx, received_rx) = oneshot::channel();
    let (closed_tx, closed_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener
            .accept()
            .await
            .expect("Could not accept connection");
        let mut request = Vec::new();
        let mut buffer = [0; 1024];

        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            match stream.read(&mut buffer).await {
                Ok(0) | Err(_) => break,
                Ok(read) => request.extend_from_slice(&buffer[..read]),
            }
        }
        let _ = received_tx.send(());

        // The request is never answered, so the connection stays open until
        // the client gives up on it.
        loop {
            match stream.read(&mut buffer).await {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
        }
        let _ = closed_tx.send(());
    });

    let url = Url::parse(&format!("http://{address}")).expect("Invalid test backend URL");

    (url, received_rx, closed_rx)
}

/// A backend whose transactions route always answers with `response`.
pub(crate) fn transactions_backend(response: TransactionsResponse) -> Router {
    Router::new().route(
        TRANSACTIONS_PATH,
        get(move || {
            let response = response.clone();
            async move { Json(response) }
        }),
    )
}

pub(crate) fn sample_transaction(
    id: &str,
    title: &str,
    value: f64,
    kind: TransactionType,
    category: &str,
) -> Transaction {
    Transaction {
        id: id.to_owned(),
        title: title.to_owned(),
        value,
        kind,
        category: Category {
            title: category.to_owned(),
        },
        created_at: datetime!(2020-05-01 00:00:00 UTC),
    }
}

/// One income and one outcome with a matching balance.
pub(crate) fn sample_response() -> TransactionsResponse {
    TransactionsResponse {
        transactions: vec![
            sample_transaction("1", "Website Hosting", 500.0, TransactionType::Income, "Sales"),
            sample_transaction("2", "Loan", 1500.0, TransactionType::Outcome, "Others"),
        ],
        balance: Balance {
            income: 500.0,
            outcome: 1500.0,
            total: -1000.0,
        },
    }
}
