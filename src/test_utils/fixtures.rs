use time::macros::datetime;

use crate::{
    database_id::{SpenderId, TransactionId},
    transaction::{Transaction, TransactionRequest},
};

pub(crate) fn transaction_request(spender_id: SpenderId) -> TransactionRequest {
    TransactionRequest {
        date: datetime!(2024-03-01 12:30 UTC),
        amount: 500.0,
        category: "Salary".to_owned(),
        transaction_type: "income".to_owned(),
        note: "March pay".to_owned(),
        image_url: None,
        spender_id,
    }
}

pub(crate) fn transaction(id: TransactionId, spender_id: SpenderId) -> Transaction {
    transaction_request(spender_id).into_transaction(id)
}
