//! Persistence layer: the document store behind the recorder.
//!
//! [`RecordStore`] is the seam between the service and storage. Two
//! implementations exist: [`postgres::PostgresRecordStore`] keeps documents
//! as JSONB rows, and [`memory::MemoryRecordStore`] keeps them in process
//! (used when persistence is disabled, and in tests).

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{NormalizedEvent, RecordId, StoredRecord};
use crate::error::HookError;

pub use memory::MemoryRecordStore;
pub use postgres::PostgresRecordStore;

/// Insert-one / find-all document store.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Short name of the backend, reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Persists `event` and returns the identity assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Persistence`] when the store rejects the write.
    async fn insert(&self, event: &NormalizedEvent) -> Result<RecordId, HookError>;

    /// Returns every stored record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Persistence`] when the store cannot be read.
    async fn find_all(&self) -> Result<Vec<StoredRecord>, HookError>;
}
