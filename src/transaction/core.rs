//! Defines the core data models and table schema for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::{SpenderId, TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income recorded against a spender.
///
/// Whether money came in or went out is carried by `transaction_type`, not by
/// the sign of `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A free-text label such as "Food" or "Transport".
    pub category: String,
    /// Either "income" or "expense". Other values are stored as-is but are
    /// left out of summaries.
    pub transaction_type: String,
    /// A text description of what the transaction was for.
    pub note: String,
    /// A link to a receipt or slip image.
    pub image_url: Option<String>,
    /// The spender that owns this transaction.
    pub spender_id: SpenderId,
}

/// The JSON body for creating or replacing a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A free-text label such as "Food" or "Transport".
    pub category: String,
    /// Either "income" or "expense".
    pub transaction_type: String,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub note: String,
    /// A link to a receipt or slip image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// The spender that owns this transaction. Not checked against the
    /// spender table.
    pub spender_id: SpenderId,
}

impl TransactionRequest {
    /// Combine the request with the ID the store assigned to it.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            transaction_type: self.transaction_type,
            note: self.note,
            image_url: self.image_url,
            spender_id: self.spender_id,
        }
    }
}

/// The summed amount for one transaction type of one spender.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeTotal {
    /// The transaction type the amounts were grouped by.
    pub transaction_type: String,
    /// The sum of all amounts with that type.
    pub total_amount: f64,
}

/// The response body for endpoints that return many transactions.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionList {
    /// The matching transactions, in no particular order.
    pub transactions: Vec<Transaction>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                transaction_type TEXT NOT NULL,
                note TEXT NOT NULL,
                image_url TEXT,
                spender_id INTEGER NOT NULL
                )",
        (),
    )?;

    // Used by the per-spender listing and the summary aggregation.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_spender_type \
        ON \"transaction\"(spender_id, transaction_type);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns in the order
/// `id, date, amount, category, transaction_type, note, image_url, spender_id`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let transaction_type = row.get(4)?;
    let note = row.get(5)?;
    let image_url = row.get(6)?;
    let spender_id = row.get(7)?;

    Ok(Transaction {
        id,
        date,
        amount,
        category,
        transaction_type,
        note,
        image_url,
        spender_id,
    })
}

/// Map an aggregation row of `SUM(amount), transaction_type` to a [TypeTotal].
pub fn map_type_total_row(row: &Row) -> Result<TypeTotal, rusqlite::Error> {
    let total_amount = row.get(0)?;
    let transaction_type = row.get(1)?;

    Ok(TypeTotal {
        transaction_type,
        total_amount,
    })
}
