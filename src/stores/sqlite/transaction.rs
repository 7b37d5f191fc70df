//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, params};

use crate::{
    Error,
    database_id::{SpenderId, TransactionId},
    stores::{TransactionStore, sqlite::run_query},
    transaction::{
        Transaction, TransactionRequest, TypeTotal, map_transaction_row, map_type_total_row,
    },
};

const INSERT_TRANSACTION: &str = "INSERT INTO \"transaction\" \
    (date, amount, category, transaction_type, note, image_url, spender_id) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
    RETURNING id";

const UPDATE_TRANSACTION: &str = "UPDATE \"transaction\" \
    SET date = ?1, amount = ?2, category = ?3, transaction_type = ?4, note = ?5, \
        image_url = ?6, spender_id = ?7 \
    WHERE id = ?8 \
    RETURNING id";

const SELECT_ALL_TRANSACTIONS: &str = "SELECT id, date, amount, category, transaction_type, \
    note, image_url, spender_id FROM \"transaction\"";

const SELECT_SPENDER_TRANSACTIONS: &str = "SELECT id, date, amount, category, \
    transaction_type, note, image_url, spender_id FROM \"transaction\" \
    WHERE spender_id = ?1";

const SUM_BY_TYPE: &str = "SELECT SUM(amount) AS total_amount, transaction_type \
    FROM \"transaction\" \
    WHERE spender_id = ?1 \
    GROUP BY spender_id, transaction_type";

/// Stores transactions in a SQLite database.
///
/// The table must exist before the store is used, see [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Insert a new transaction into the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if the insert is rejected.
    async fn create(&self, request: TransactionRequest) -> Result<TransactionId, Error> {
        run_query(&self.connection, move |connection| {
            let id = connection.prepare(INSERT_TRANSACTION)?.query_row(
                params![
                    request.date,
                    request.amount,
                    request.category,
                    request.transaction_type,
                    request.note,
                    request.image_url,
                    request.spender_id,
                ],
                |row| row.get::<_, TransactionId>(0),
            )?;

            Ok(id)
        })
        .await
    }

    /// Overwrite the transaction `id` in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    async fn update(
        &self,
        id: TransactionId,
        request: TransactionRequest,
    ) -> Result<TransactionId, Error> {
        run_query(&self.connection, move |connection| {
            connection
                .prepare(UPDATE_TRANSACTION)?
                .query_row(
                    params![
                        request.date,
                        request.amount,
                        request.category,
                        request.transaction_type,
                        request.note,
                        request.image_url,
                        request.spender_id,
                        id,
                    ],
                    |row| row.get::<_, TransactionId>(0),
                )
                .map_err(|error| match error {
                    rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingTransaction,
                    error => error.into(),
                })
        })
        .await
    }

    /// Retrieve every transaction in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if the query or any row fails.
    async fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        run_query(&self.connection, |connection| {
            let mut statement = connection.prepare(SELECT_ALL_TRANSACTIONS)?;
            let transactions = statement
                .query_map([], map_transaction_row)?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(transactions)
        })
        .await
    }

    /// Retrieve the transactions belonging to `spender_id`.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if the query or any row fails.
    async fn get_by_spender(&self, spender_id: SpenderId) -> Result<Vec<Transaction>, Error> {
        run_query(&self.connection, move |connection| {
            let mut statement = connection.prepare(SELECT_SPENDER_TRANSACTIONS)?;
            let transactions = statement
                .query_map(params![spender_id], map_transaction_row)?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(transactions)
        })
        .await
    }

    /// Sum `spender_id`'s transaction amounts per transaction type.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if the query or any row fails.
    async fn sum_by_type(&self, spender_id: SpenderId) -> Result<Vec<TypeTotal>, Error> {
        run_query(&self.connection, move |connection| {
            let mut statement = connection.prepare(SUM_BY_TYPE)?;
            let totals = statement
                .query_map(params![spender_id], map_type_total_row)?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(totals)
        })
        .await
    }
}
