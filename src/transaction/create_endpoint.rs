use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error, app_state::MutateTransactionState, stores::TransactionStore,
    transaction::TransactionRequest,
};

/// A route handler for recording a new transaction.
///
/// Responds with 201 and the stored transaction. The feature flag is checked
/// before the body is read, so a disabled endpoint answers 403 even for a
/// malformed body.
pub async fn create_transaction_endpoint<T>(
    State(state): State<MutateTransactionState<T>>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> Response
where
    T: TransactionStore,
{
    if !state.feature_flags.enable_create_transaction {
        return Error::FeatureDisabled("create new transaction feature is disabled")
            .into_response();
    }

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Could not parse transaction request: {rejection}");
            return Error::InvalidTransactionRequest.into_response();
        }
    };

    match state.transaction_store.create(request.clone()).await {
        Ok(id) => {
            tracing::info!(id, spender_id = request.spender_id, "Created transaction");
            (StatusCode::CREATED, Json(request.into_transaction(id))).into_response()
        }
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod create_transaction_endpoint_tests {
    use axum::{Json, extract::State, http::StatusCode};
    use serde_json::json;

    use crate::{
        app_state::MutateTransactionState,
        config::FeatureFlags,
        test_utils::{
            FakeTransactionStore, StoreCall, assert_status, parse_json_body, store_error,
            transaction_request,
        },
    };

    use super::create_transaction_endpoint;

    fn state(
        store: FakeTransactionStore,
        feature_flags: FeatureFlags,
    ) -> MutateTransactionState<FakeTransactionStore> {
        MutateTransactionState {
            feature_flags,
            transaction_store: store,
        }
    }

    #[tokio::test]
    async fn creates_transaction() {
        let store = FakeTransactionStore::new().with_next_id(12);
        let request = transaction_request(3);

        let response = create_transaction_endpoint(
            State(state(store.clone(), FeatureFlags::all_enabled())),
            Ok(Json(request.clone())),
        )
        .await;

        assert_status(&response, StatusCode::CREATED);
        assert_eq!(store.calls(), vec![StoreCall::Create(request)]);
        let body = parse_json_body(response).await;
        assert_eq!(
            body,
            json!({
                "id": 12,
                "date": "2024-03-01T12:30:00Z",
                "amount": 500.0,
                "category": "Salary",
                "transaction_type": "income",
                "note": "March pay",
                "image_url": null,
                "spender_id": 3,
            })
        );
    }

    #[tokio::test]
    async fn disabled_flag_returns_forbidden_without_touching_store() {
        let store = FakeTransactionStore::new();
        let flags = FeatureFlags {
            enable_create_transaction: false,
            enable_update_transaction: true,
        };

        let response =
            create_transaction_endpoint(State(state(store.clone(), flags)), Ok(Json(transaction_request(1))))
                .await;

        assert_status(&response, StatusCode::FORBIDDEN);
        assert!(store.calls().is_empty());
        assert_eq!(
            parse_json_body(response).await,
            json!({"error": "create new transaction feature is disabled"})
        );
    }

    #[tokio::test]
    async fn store_failure_returns_internal_server_error() {
        let store = FakeTransactionStore::new().failing();

        let response = create_transaction_endpoint(
            State(state(store, FeatureFlags::all_enabled())),
            Ok(Json(transaction_request(1))),
        )
        .await;

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            parse_json_body(response).await,
            json!({"error": store_error().to_string()})
        );
    }
}
