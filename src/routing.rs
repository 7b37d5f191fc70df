//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{
    AppState,
    endpoints::{API_V1, SPENDER_SUMMARY, SPENDER_TRANSACTIONS, TRANSACTION, TRANSACTIONS},
    not_found::get_404_not_found,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, get_spender_summary_endpoint,
        get_spender_transactions_endpoint, get_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every route is nested under [API_V1]. Unknown paths get a JSON 404.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore,
{
    let api_routes = Router::new()
        .route(
            TRANSACTIONS,
            post(create_transaction_endpoint::<T>).get(get_transactions_endpoint::<T>),
        )
        .route(TRANSACTION, put(update_transaction_endpoint::<T>))
        .route(
            SPENDER_TRANSACTIONS,
            get(get_spender_transactions_endpoint::<T>),
        )
        .route(SPENDER_SUMMARY, get(get_spender_summary_endpoint::<T>));

    Router::new()
        .nest(API_V1, api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}
