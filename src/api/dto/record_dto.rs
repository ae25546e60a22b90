//! Listing DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::FormattedRecord;

/// Response body for `GET /webhook/records`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordListResponse {
    /// Every stored record, in store order.
    pub data: Vec<FormattedRecord>,
    /// Number of records returned.
    pub total: usize,
}

impl From<Vec<FormattedRecord>> for RecordListResponse {
    fn from(data: Vec<FormattedRecord>) -> Self {
        Self {
            total: data.len(),
            data,
        }
    }
}
