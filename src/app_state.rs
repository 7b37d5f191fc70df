//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{config::FeatureFlags, stores::TransactionStore};

/// The state of the REST server.
///
/// Built once at startup and cloned into each request handler.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore,
{
    /// The switches that gate the mutation endpoints.
    pub feature_flags: FeatureFlags,
    /// The store for managing [transactions](crate::transaction::Transaction).
    pub transaction_store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore,
{
    /// Create a new [AppState].
    pub fn new(feature_flags: FeatureFlags, transaction_store: T) -> Self {
        Self {
            feature_flags,
            transaction_store,
        }
    }
}

/// The state needed to create or update a transaction.
#[derive(Debug, Clone)]
pub struct MutateTransactionState<T>
where
    T: TransactionStore,
{
    /// The switches that gate the mutation endpoints.
    pub feature_flags: FeatureFlags,
    /// The store for managing transactions.
    pub transaction_store: T,
}

impl<T> FromRef<AppState<T>> for MutateTransactionState<T>
where
    T: TransactionStore,
{
    fn from_ref(state: &AppState<T>) -> Self {
        Self {
            feature_flags: state.feature_flags,
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The state needed to read transactions and summaries.
#[derive(Debug, Clone)]
pub struct TransactionState<T>
where
    T: TransactionStore,
{
    /// The store for managing transactions.
    pub transaction_store: T,
}

impl<T> FromRef<AppState<T>> for TransactionState<T>
where
    T: TransactionStore,
{
    fn from_ref(state: &AppState<T>) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}
