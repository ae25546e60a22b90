//! # webhook-recorder
//!
//! Receives GitHub webhook deliveries (push, pull request and merge),
//! keeps a small normalized document for each one and serves the stored
//! history as a human-readable activity feed.
//!
//! ## Architecture
//!
//! ```text
//! GitHub ──POST /webhook/receiver──┐        Browser ──GET /webhook/──┐
//!                                  │                                 │
//!     ├── HTTP handlers (api/)     ◄─────────────────────────────────┘
//!     │
//!     ├── WebhookService (service/)
//!     ├── classify / format (domain/)
//!     │
//!     └── RecordStore (persistence/): PostgreSQL JSONB or in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
pub mod views;
