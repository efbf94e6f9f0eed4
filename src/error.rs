//! Defines the app level error type and its conversion to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::{internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transactions API could not be reached, timed out, or answered with
    /// a non-success status code.
    ///
    /// Callers should pass in a description of the underlying failure for
    /// logging.
    #[error("could not reach the transactions API: {0}")]
    NetworkError(String),

    /// The transactions API answered, but the body did not match the
    /// expected schema.
    #[error("the transactions API sent a malformed response: {0}")]
    MalformedResponseError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The HTTP client for the transactions API could not be created.
    #[error("could not create the HTTP client: {0}")]
    HttpClientError(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => {
                tracing::error!("Could not resolve the display timezone \"{timezone}\"");

                InternalServerError {
                    description: "Fuso horário inválido",
                    fix: &format!(
                        "Não foi possível usar o fuso horário \"{timezone}\". Verifique a \
                        configuração do servidor e use um nome canônico, por exemplo \
                        \"America/Sao_Paulo\"."
                    ),
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
