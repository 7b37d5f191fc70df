//! Contains the SQLite backed stores and the plumbing for running their
//! queries off the async runtime.

pub mod transaction;

pub use transaction::SQLiteTransactionStore;

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use rusqlite::Connection;

use crate::{AppState, Error, config::FeatureFlags, db::initialize};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteTransactionStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(
    db_connection: Connection,
    feature_flags: FeatureFlags,
) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let transaction_store = SQLiteTransactionStore::new(connection);

    Ok(AppState::new(feature_flags, transaction_store))
}

/// How many SQLite virtual machine instructions run between cancellation checks.
const PROGRESS_HANDLER_STEPS: i32 = 1000;

/// Sets the shared flag when dropped.
///
/// The awaiting future owns this guard, so the flag flips when the request
/// is dropped before its query finishes.
struct CancelOnDrop(Arc<AtomicBool>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Run `query` against the shared connection on the blocking thread pool.
///
/// If the returned future is dropped before the query finishes, the query is
/// skipped if it has not started yet, or interrupted by SQLite if it has.
pub(crate) async fn run_query<T, F>(
    connection: &Arc<Mutex<Connection>>,
    query: F,
) -> Result<T, Error>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> Result<T, Error> + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let _guard = CancelOnDrop(cancelled.clone());
    let connection = connection.clone();

    tokio::task::spawn_blocking(move || run_blocking(&connection, cancelled, query))
        .await
        .map_err(|error| {
            tracing::error!("database task did not complete: {error}");
            Error::BackgroundTask(error.to_string())
        })?
}

fn run_blocking<T, F>(
    connection: &Mutex<Connection>,
    cancelled: Arc<AtomicBool>,
    query: F,
) -> Result<T, Error>
where
    F: FnOnce(&Connection) -> Result<T, Error>,
{
    let connection = connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    if cancelled.load(Ordering::Relaxed) {
        tracing::debug!("request was dropped before its query started");
        return Err(Error::QueryCancelled);
    }

    let flag = cancelled.clone();
    connection.progress_handler(
        PROGRESS_HANDLER_STEPS,
        Some(move || flag.load(Ordering::Relaxed)),
    )?;

    let result = query(&connection);

    // The flag is set once this call's future is dropped, so a handler left
    // installed would interrupt every later query on the connection.
    if let Err(error) = connection.progress_handler(0, None::<fn() -> bool>) {
        tracing::error!("could not remove the query progress handler: {error}");
        return Err(Error::SqlError(error));
    }

    if cancelled.load(Ordering::Relaxed) {
        tracing::debug!("request was dropped while its query was running");
    }

    result
}
