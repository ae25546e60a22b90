//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::RecordStore;
use crate::service::WebhookService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Webhook service for ingestion and listing.
    pub webhook_service: Arc<WebhookService>,
}

impl AppState {
    /// Builds the state around an already constructed record store.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            webhook_service: Arc::new(WebhookService::new(store)),
        }
    }
}
