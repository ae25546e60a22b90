//! Identity of a stored webhook record.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// UUID v4 assigned by the record store when a document is inserted.
///
/// Encodes as the bare UUID both in JSON and in the `records.id` column,
/// so stores bind and decode it directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RecordId(uuid::Uuid);

impl RecordId {
    /// Mints the identity for a record about to be inserted.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<uuid::Uuid> for RecordId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}
