//! Records as read back from the store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::RecordId;
use super::format::format_document;

/// A persisted document together with its store-assigned identity.
///
/// `document` is kept as raw JSON so that records written by older
/// versions still render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredRecord {
    /// Store-assigned identity.
    pub id: RecordId,
    /// The normalized event document.
    pub document: serde_json::Value,
    /// When the record was inserted.
    pub received_at: DateTime<Utc>,
}

impl StoredRecord {
    /// Renders this record for display.
    #[must_use]
    pub fn formatted(&self) -> FormattedRecord {
        FormattedRecord {
            id: self.id,
            formatted_doc: format_document(&self.document),
        }
    }
}

/// One line of the activity listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormattedRecord {
    /// Record identity.
    pub id: RecordId,
    /// Human-readable description of the event.
    pub formatted_doc: String,
}
