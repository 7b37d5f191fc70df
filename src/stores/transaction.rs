//! Defines the transaction store trait.

use std::future::Future;

use crate::{
    Error,
    database_id::{SpenderId, TransactionId},
    transaction::{Transaction, TransactionRequest, TypeTotal},
};

/// Handles the creation, update and retrieval of transactions.
///
/// Every call is scoped to the request that made it: dropping the returned
/// future before it completes should abort the underlying query.
pub trait TransactionStore: Clone + Send + Sync + 'static {
    /// Insert a new transaction and return the ID the store assigned to it.
    fn create(
        &self,
        request: TransactionRequest,
    ) -> impl Future<Output = Result<TransactionId, Error>> + Send;

    /// Overwrite every field of the transaction `id` and return its ID.
    ///
    /// # Errors
    /// Implementers should return [Error::UpdateMissingTransaction] if `id`
    /// does not refer to a stored transaction.
    fn update(
        &self,
        id: TransactionId,
        request: TransactionRequest,
    ) -> impl Future<Output = Result<TransactionId, Error>> + Send;

    /// Retrieve every transaction, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Transaction>, Error>> + Send;

    /// Retrieve the transactions owned by `spender_id`, in no particular order.
    fn get_by_spender(
        &self,
        spender_id: SpenderId,
    ) -> impl Future<Output = Result<Vec<Transaction>, Error>> + Send;

    /// Sum the amounts of `spender_id`'s transactions per transaction type.
    ///
    /// Returns one entry per distinct type, or an empty vector if the spender
    /// has no transactions.
    fn sum_by_type(
        &self,
        spender_id: SpenderId,
    ) -> impl Future<Output = Result<Vec<TypeTotal>, Error>> + Send;
}
