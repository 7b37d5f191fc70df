use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    app_state::TransactionState,
    stores::TransactionStore,
    transaction::{TransactionList, path_id::parse_spender_id},
};

/// A route handler for listing every stored transaction.
pub async fn get_transactions_endpoint<T>(State(state): State<TransactionState<T>>) -> Response
where
    T: TransactionStore,
{
    match state.transaction_store.get_all().await {
        Ok(transactions) => Json(TransactionList { transactions }).into_response(),
        Err(error) => {
            tracing::error!("Could not get transactions: {error}");
            error.into_response()
        }
    }
}

/// A route handler for listing the transactions of one spender.
///
/// An unknown spender gets an empty list, not a 404.
pub async fn get_spender_transactions_endpoint<T>(
    State(state): State<TransactionState<T>>,
    Path(spender_id): Path<String>,
) -> Response
where
    T: TransactionStore,
{
    let spender_id = match parse_spender_id(&spender_id) {
        Ok(id) => id,
        Err(error) => return error.into_response(),
    };

    match state.transaction_store.get_by_spender(spender_id).await {
        Ok(transactions) => Json(TransactionList { transactions }).into_response(),
        Err(error) => {
            tracing::error!("Could not get transactions for spender {spender_id}: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod list_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use serde_json::json;

    use crate::{
        app_state::TransactionState,
        test_utils::{
            FakeTransactionStore, StoreCall, assert_status, parse_json_body, store_error,
            transaction,
        },
    };

    use super::{get_spender_transactions_endpoint, get_transactions_endpoint};

    fn state(store: FakeTransactionStore) -> TransactionState<FakeTransactionStore> {
        TransactionState {
            transaction_store: store,
        }
    }

    #[tokio::test]
    async fn lists_all_transactions() {
        let store = FakeTransactionStore::new()
            .with_transactions(vec![transaction(1, 1), transaction(2, 2)]);

        let response = get_transactions_endpoint(State(state(store.clone()))).await;

        assert_status(&response, StatusCode::OK);
        assert_eq!(store.calls(), vec![StoreCall::GetAll]);
        let body = parse_json_body(response).await;
        let ids: Vec<_> = body["transactions"]
            .as_array()
            .expect("transactions should be an array")
            .iter()
            .map(|transaction| transaction["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!(1), json!(2)]);
    }

    #[tokio::test]
    async fn empty_store_lists_empty_array() {
        let response = get_transactions_endpoint(State(state(FakeTransactionStore::new()))).await;

        assert_status(&response, StatusCode::OK);
        assert_eq!(parse_json_body(response).await, json!({"transactions": []}));
    }

    #[tokio::test]
    async fn list_store_failure_returns_internal_server_error() {
        let response =
            get_transactions_endpoint(State(state(FakeTransactionStore::new().failing()))).await;

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            parse_json_body(response).await,
            json!({"error": store_error().to_string()})
        );
    }

    #[tokio::test]
    async fn lists_only_transactions_of_spender() {
        let store = FakeTransactionStore::new().with_transactions(vec![
            transaction(1, 1),
            transaction(2, 2),
            transaction(3, 1),
        ]);

        let response =
            get_spender_transactions_endpoint(State(state(store.clone())), Path("1".to_owned()))
                .await;

        assert_status(&response, StatusCode::OK);
        assert_eq!(store.calls(), vec![StoreCall::GetBySpender(1)]);
        let body = parse_json_body(response).await;
        let transactions = body["transactions"]
            .as_array()
            .expect("transactions should be an array");
        assert_eq!(transactions.len(), 2);
        assert!(
            transactions
                .iter()
                .all(|transaction| transaction["spender_id"] == json!(1))
        );
    }

    #[tokio::test]
    async fn unknown_spender_lists_empty_array() {
        let store = FakeTransactionStore::new().with_transactions(vec![transaction(1, 1)]);

        let response =
            get_spender_transactions_endpoint(State(state(store)), Path("999".to_owned())).await;

        assert_status(&response, StatusCode::OK);
        assert_eq!(parse_json_body(response).await, json!({"transactions": []}));
    }

    #[tokio::test]
    async fn non_numeric_spender_returns_bad_request() {
        let store = FakeTransactionStore::new();

        let response =
            get_spender_transactions_endpoint(State(state(store.clone())), Path("abc".to_owned()))
                .await;

        assert_status(&response, StatusCode::BAD_REQUEST);
        assert!(store.calls().is_empty());
        assert_eq!(
            parse_json_body(response).await,
            json!({"error": "Invalid spender ID"})
        );
    }

    #[tokio::test]
    async fn spender_store_failure_returns_internal_server_error() {
        let store = FakeTransactionStore::new().failing();

        let response =
            get_spender_transactions_endpoint(State(state(store.clone())), Path("1".to_owned()))
                .await;

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.calls(), vec![StoreCall::GetBySpender(1)]);
        assert_eq!(
            parse_json_body(response).await,
            json!({"error": store_error().to_string()})
        );
    }
}
