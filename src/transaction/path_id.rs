//! Parsing of the numeric IDs embedded in request paths.

use crate::{
    Error,
    database_id::{SpenderId, TransactionId},
};

/// Parse the `{transaction_id}` path segment.
///
/// # Errors
///
/// Returns [Error::InvalidTransactionId] if `raw` is not an integer and
/// [Error::MissingTransactionId] if it is zero.
pub(crate) fn parse_transaction_id(raw: &str) -> Result<TransactionId, Error> {
    match raw.parse::<TransactionId>() {
        Ok(0) => Err(Error::MissingTransactionId),
        Ok(id) => Ok(id),
        Err(_) => Err(Error::InvalidTransactionId),
    }
}

/// Parse the `{spender_id}` path segment.
///
/// # Errors
///
/// Returns [Error::InvalidSpenderId] if `raw` is not an integer.
pub(crate) fn parse_spender_id(raw: &str) -> Result<SpenderId, Error> {
    raw.parse::<SpenderId>()
        .map_err(|_| Error::InvalidSpenderId)
}
