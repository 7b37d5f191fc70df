//! The API endpoint URIs.
//!
//! The routes below are nested under [API_V1] by the router.

/// The versioned prefix for every API route.
pub const API_V1: &str = "/api/v1";

/// The route to list or create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to replace a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to list the transactions of one spender.
pub const SPENDER_TRANSACTIONS: &str = "/spenders/{spender_id}/transactions";
/// The route to get the income, expenses and balance of one spender.
pub const SPENDER_SUMMARY: &str = "/spenders/{spender_id}/transactions/summary";

/// Prefix `endpoint` with [API_V1], e.g. for building request URIs in tests
/// and clients.
///
/// ```
/// use spender_ledger::endpoints::{TRANSACTIONS, versioned};
///
/// assert_eq!(versioned(TRANSACTIONS), "/api/v1/transactions");
/// ```
pub fn versioned(endpoint: &str) -> String {
    format!("{API_V1}{endpoint}")
}
