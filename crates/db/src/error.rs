use disthub_core::error::CoreError;

/// Error returned by [`crate::store::EntityRepository`] backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The PostgreSQL backend failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A domain-level failure, e.g. deactivating an unknown id.
    #[error(transparent)]
    Core(#[from] CoreError),
}
