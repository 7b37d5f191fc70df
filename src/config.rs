//! Runtime switches supplied when the server starts.

/// Boolean switches that gate the mutation endpoints.
///
/// When a flag is off the corresponding endpoint responds with
/// `403 Forbidden` and never touches the store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Allow `POST /transactions`.
    pub enable_create_transaction: bool,
    /// Allow `PUT /transactions/{transaction_id}`.
    pub enable_update_transaction: bool,
}

impl FeatureFlags {
    /// Flags with every mutation enabled.
    pub fn all_enabled() -> Self {
        Self {
            enable_create_transaction: true,
            enable_update_transaction: true,
        }
    }
}
