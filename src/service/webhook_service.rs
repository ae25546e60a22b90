//! Webhook service: classifies inbound payloads and reads back the feed.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{
    FormattedRecord, GithubEvent, NormalizedEvent, RecordId, format_event, normalize,
};
use crate::error::HookError;
use crate::persistence::RecordStore;

/// Result of a successful ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    /// Identity assigned by the store.
    pub id: RecordId,
    /// The event as classified.
    pub event: GithubEvent,
    /// The line the feed will show for this event.
    pub summary: String,
}

/// Orchestration layer between the HTTP handlers and the record store.
///
/// Stateless apart from the injected store handle.
#[derive(Debug, Clone)]
pub struct WebhookService {
    store: Arc<dyn RecordStore>,
}

impl WebhookService {
    /// Creates a new `WebhookService` over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Classifies `payload`, normalizes it and stores the result.
    ///
    /// Nothing is written when classification fails.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::UnsupportedEvent`] for unknown payload shapes
    /// and [`HookError::Persistence`] when the insert fails.
    pub async fn ingest(&self, payload: &Value) -> Result<Ingested, HookError> {
        let event = normalize(payload)?;
        let document = NormalizedEvent::from(event.clone());
        let id = self.store.insert(&document).await?;

        let summary = format_event(&event);
        tracing::info!(%id, event_type = %event.kind(), %summary, "record inserted");
        Ok(Ingested { id, event, summary })
    }

    /// Reads every stored record and renders it, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Persistence`] when the store cannot be read.
    pub async fn list_formatted(&self) -> Result<Vec<FormattedRecord>, HookError> {
        let records = self.store.find_all().await?;
        Ok(records.iter().map(|r| r.formatted()).collect())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::EventKind;
    use crate::persistence::MemoryRecordStore;
    use serde_json::json;

    fn make_service() -> (WebhookService, Arc<MemoryRecordStore>) {
        let store = Arc::new(MemoryRecordStore::new());
        let service = WebhookService::new(Arc::clone(&store) as Arc<dyn RecordStore>);
        (service, store)
    }

    #[tokio::test]
    async fn ingest_push_then_list() {
        let (service, _) = make_service();
        let payload = json!({
            "ref": "refs/heads/main",
            "pusher": { "name": "alice" },
            "commits": [{ "timestamp": "2024-01-01T00:00:00Z" }]
        });

        let Ok(ingested) = service.ingest(&payload).await else {
            panic!("ingest failed");
        };
        assert_eq!(ingested.event.kind(), EventKind::Push);
        assert_eq!(
            ingested.summary,
            r#""alice" pushed to "main" on 2024-01-01T00:00:00Z"#
        );

        let Ok(listing) = service.list_formatted().await else {
            panic!("listing failed");
        };
        assert_eq!(
            listing,
            vec![FormattedRecord {
                id: ingested.id,
                formatted_doc: r#""alice" pushed to "main" on 2024-01-01T00:00:00Z"#.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn summary_matches_feed_line() {
        let (service, _) = make_service();
        let payload = json!({
            "action": "closed",
            "pull_request": {
                "merged": true,
                "user": { "login": "bob" },
                "head": { "ref": "feature" },
                "base": { "ref": "main" },
                "merged_at": "T2"
            }
        });

        let Ok(ingested) = service.ingest(&payload).await else {
            panic!("ingest failed");
        };
        let Ok(listing) = service.list_formatted().await else {
            panic!("listing failed");
        };
        let Some(line) = listing.first() else {
            panic!("record missing");
        };
        assert_eq!(line.formatted_doc, ingested.summary);
        assert_eq!(ingested.summary, r#""bob" merged branch "feature" to "main" on T2"#);
    }

    #[tokio::test]
    async fn unsupported_payload_is_not_stored() {
        let (service, store) = make_service();
        let result = service.ingest(&json!({})).await;
        assert!(matches!(result, Err(HookError::UnsupportedEvent(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn legacy_documents_still_render() {
        let (service, store) = make_service();
        let _ = store.insert_document(json!({ "event_type": "deploy" })).await;
        let _ = store
            .insert_document(json!({ "event_type": "pull_request", "author": "bob" }))
            .await;

        let Ok(listing) = service.list_formatted().await else {
            panic!("listing failed");
        };
        let lines: Vec<_> = listing.iter().map(|r| r.formatted_doc.as_str()).collect();
        assert_eq!(
            lines,
            [
                "Unsupported event type",
                r#""bob" submitted a pull request from "N/A" to "N/A" on Unknown Time"#,
            ]
        );
    }
}
