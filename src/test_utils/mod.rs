#![allow(missing_docs)]

pub(crate) mod fake_store;
pub(crate) mod fixtures;
pub(crate) mod http;

pub(crate) use fake_store::{FakeTransactionStore, StoreCall, store_error};
pub(crate) use fixtures::{transaction, transaction_request};
pub(crate) use http::{assert_status, parse_json_body};
