//! Service layer: business logic orchestration.
//!
//! [`WebhookService`] runs the classifier over inbound payloads, hands the
//! normalized documents to the [`crate::persistence::RecordStore`] and
//! renders stored records for the listing.

pub mod webhook_service;

pub use webhook_service::{Ingested, WebhookService};
