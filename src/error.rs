//! Defines the app level error type and its conversion to JSON responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A mutation endpoint was called while its feature flag is switched off.
    ///
    /// The string is the message shown to the client.
    #[error("{0}")]
    FeatureDisabled(&'static str),

    /// The request body could not be parsed as a transaction.
    #[error("Invalid transaction request")]
    InvalidTransactionRequest,

    /// The transaction ID in the path is not an integer.
    #[error("Invalid ID")]
    InvalidTransactionId,

    /// The transaction ID in the path is zero.
    #[error("ID is required")]
    MissingTransactionId,

    /// The spender ID in the path is not an integer.
    #[error("Invalid spender ID")]
    InvalidSpenderId,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("transaction not found")]
    NotFound,

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// An unhandled/unexpected SQL error.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The blocking task running a query panicked or was cancelled.
    #[error("database task failed: {0}")]
    BackgroundTask(String),

    /// The request was dropped before its query started, so the query was
    /// skipped.
    #[error("the query was cancelled")]
    QueryCancelled,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::FeatureDisabled(_) => StatusCode::FORBIDDEN,
            Error::InvalidTransactionRequest
            | Error::InvalidTransactionId
            | Error::MissingTransactionId
            | Error::InvalidSpenderId => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::UpdateMissingTransaction => StatusCode::NOT_FOUND,
            Error::SqlError(_)
            | Error::DatabaseLockError
            | Error::BackgroundTask(_)
            | Error::QueryCancelled => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
