//! Transactions: the model, the summary calculation and the JSON route
//! handlers.

mod core;
mod create_endpoint;
mod edit_endpoint;
mod list_endpoint;
mod path_id;
mod summary;
mod summary_endpoint;

pub use core::{
    Transaction, TransactionList, TransactionRequest, TypeTotal, create_transaction_table,
    map_transaction_row, map_type_total_row,
};
pub use create_endpoint::create_transaction_endpoint;
pub use edit_endpoint::update_transaction_endpoint;
pub use list_endpoint::{get_spender_transactions_endpoint, get_transactions_endpoint};
pub use summary::{EXPENSE, INCOME, Summary, SummaryResponse, calculate_summary};
pub use summary_endpoint::get_spender_summary_endpoint;
