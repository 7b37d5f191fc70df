use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::TransactionState,
    stores::TransactionStore,
    transaction::{SummaryResponse, calculate_summary, path_id::parse_spender_id},
};

/// A route handler for the income, expenses and balance of one spender.
///
/// A spender with no transactions at all gets a 404.
pub async fn get_spender_summary_endpoint<T>(
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

    let totals = match state.transaction_store.sum_by_type(spender_id).await {
        Ok(totals) => totals,
        Err(error) => {
            tracing::error!("Could not sum transactions for spender {spender_id}: {error}");
            return error.into_response();
        }
    };

    if totals.is_empty() {
        return Error::NotFound.into_response();
    }

    Json(SummaryResponse {
        summary: calculate_summary(&totals),
    })
    .into_response()
}
