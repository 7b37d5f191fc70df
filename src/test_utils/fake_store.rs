use std::sync::{Arc, Mutex};

use crate::{
    Error,
    database_id::{SpenderId, TransactionId},
    stores::TransactionStore,
    transaction::{Transaction, TransactionRequest, TypeTotal},
};

/// A call made to [FakeTransactionStore], in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StoreCall {
    Create(TransactionRequest),
    Update(TransactionId, TransactionRequest),
    GetAll,
    GetBySpender(SpenderId),
    SumByType(SpenderId),
}

/// An in-memory store that records every call and returns canned data.
#[derive(Debug, Clone)]
pub(crate) struct FakeTransactionStore {
    calls: Arc<Mutex<Vec<StoreCall>>>,
    transactions: Vec<Transaction>,
    totals: Vec<TypeTotal>,
    next_id: TransactionId,
    failing: bool,
}

impl FakeTransactionStore {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            transactions: Vec::new(),
            totals: Vec::new(),
            next_id: 1,
            failing: false,
        }
    }

    pub(crate) fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub(crate) fn with_totals(mut self, totals: Vec<TypeTotal>) -> Self {
        self.totals = totals;
        self
    }

    pub(crate) fn with_next_id(mut self, next_id: TransactionId) -> Self {
        self.next_id = next_id;
        self
    }

    /// Every call fails with [store_error].
    pub(crate) fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().expect("could not lock calls").clone()
    }

    fn record(&self, call: StoreCall) -> Result<(), Error> {
        self.calls.lock().expect("could not lock calls").push(call);

        if self.failing {
            Err(store_error())
        } else {
            Ok(())
        }
    }
}

/// The error returned by a failing [FakeTransactionStore].
pub(crate) fn store_error() -> Error {
    Error::SqlError(rusqlite::Error::InvalidColumnName("amount".to_owned()))
}

impl TransactionStore for FakeTransactionStore {
    async fn create(&self, request: TransactionRequest) -> Result<TransactionId, Error> {
        self.record(StoreCall::Create(request))?;

        Ok(self.next_id)
    }

    async fn update(
        &self,
        id: TransactionId,
        request: TransactionRequest,
    ) -> Result<TransactionId, Error> {
        self.record(StoreCall::Update(id, request))?;

        if self.transactions.iter().any(|transaction| transaction.id == id) {
            Ok(id)
        } else {
            Err(Error::UpdateMissingTransaction)
        }
    }

    async fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.record(StoreCall::GetAll)?;

        Ok(self.transactions.clone())
    }

    async fn get_by_spender(&self, spender_id: SpenderId) -> Result<Vec<Transaction>, Error> {
        self.record(StoreCall::GetBySpender(spender_id))?;

        Ok(self
            .transactions
            .iter()
            .filter(|transaction| transaction.spender_id == spender_id)
            .cloned()
            .collect())
    }

    async fn sum_by_type(&self, spender_id: SpenderId) -> Result<Vec<TypeTotal>, Error> {
        self.record(StoreCall::SumByType(spender_id))?;

        Ok(self.totals.clone())
    }
}
