//! Domain layer: event types, classification and formatting.
//!
//! This module contains the recorder's model of a GitHub webhook: the
//! classifier that turns an arbitrary JSON payload into a
//! [`GithubEvent`], the flat [`NormalizedEvent`] document that gets
//! stored, and the formatter that turns stored documents back into text.

pub mod classify;
pub mod event;
pub mod format;
pub mod record;
pub mod record_id;

pub use classify::{classify, normalize};
pub use event::{EventKind, GithubEvent, NormalizedEvent};
pub use format::{format_document, format_event};
pub use record::{FormattedRecord, StoredRecord};
pub use record_id::RecordId;
