//! In-process record store.
//!
//! Records live in a `Vec` behind a [`tokio::sync::RwLock`], so the
//! listing is always in insertion order and reads never block each other.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::RecordStore;
use crate::domain::{NormalizedEvent, RecordId, StoredRecord};
use crate::error::HookError;

/// Volatile record store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<StoredRecord>>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw document, bypassing normalization.
    ///
    /// Lets callers seed documents that no longer match the current schema.
    pub async fn insert_document(&self, document: serde_json::Value) -> RecordId {
        let id = RecordId::generate();
        self.records.write().await.push(StoredRecord {
            id,
            document,
            received_at: Utc::now(),
        });
        id
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns `true` if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, event: &NormalizedEvent) -> Result<RecordId, HookError> {
        let document =
            serde_json::to_value(event).map_err(|e| HookError::Internal(e.to_string()))?;
        Ok(self.insert_document(document).await)
    }

    async fn find_all(&self) -> Result<Vec<StoredRecord>, HookError> {
        Ok(self.records.read().await.clone())
    }
}
