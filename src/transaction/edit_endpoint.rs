use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::MutateTransactionState,
    stores::TransactionStore,
    transaction::{TransactionRequest, path_id::parse_transaction_id},
};

/// A route handler for replacing every field of an existing transaction.
///
/// The row to replace is the one named by the path, the body holds its new
/// contents. Responds with 200 and the transaction as stored.
pub async fn update_transaction_endpoint<T>(
    State(state): State<MutateTransactionState<T>>,
    Path(transaction_id): Path<String>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> Response
where
    T: TransactionStore,
{
    if !state.feature_flags.enable_update_transaction {
        return Error::FeatureDisabled("update transaction feature is disabled").into_response();
    }

    let transaction_id = match parse_transaction_id(&transaction_id) {
        Ok(id) => id,
        Err(error) => return error.into_response(),
    };

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Could not parse transaction request: {rejection}");
            return Error::InvalidTransactionRequest.into_response();
        }
    };

    match state
        .transaction_store
        .update(transaction_id, request.clone())
        .await
    {
        Ok(id) => {
            tracing::info!(id, "Updated transaction");
            (StatusCode::OK, Json(request.into_transaction(id))).into_response()
        }
        Err(Error::UpdateMissingTransaction) => {
            tracing::debug!("Tried to update missing transaction {transaction_id}");
            Error::UpdateMissingTransaction.into_response()
        }
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}
