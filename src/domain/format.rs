//! Human-readable rendering of recorded events.
//!
//! Fields are substituted verbatim; HTML escaping is the view's job.

use serde_json::Value;

use super::event::{
    EventKind, GithubEvent, NOT_APPLICABLE, UNKNOWN_AUTHOR, UNKNOWN_BRANCH, UNKNOWN_TIME,
};

/// Shown for stored documents whose `event_type` is missing or unknown.
pub const UNSUPPORTED_EVENT_TYPE: &str = "Unsupported event type";

/// Formats a classified event.
#[must_use]
pub fn format_event(event: &GithubEvent) -> String {
    match event {
        GithubEvent::Push {
            author,
            branch,
            timestamp,
        } => push_line(author, branch, timestamp),
        GithubEvent::PullRequest {
            author,
            from_branch,
            to_branch,
            timestamp,
        } => pull_request_line(author, from_branch, to_branch, timestamp),
        GithubEvent::Merge {
            author,
            from_branch,
            to_branch,
            timestamp,
        } => merge_line(author, from_branch, to_branch, timestamp),
    }
}

/// Formats a document as read back from the record store.
///
/// Stored documents are not trusted to match the current schema: each
/// missing field falls back to a placeholder, and a document without a
/// recognised `event_type` yields [`UNSUPPORTED_EVENT_TYPE`].
#[must_use]
pub fn format_document(document: &Value) -> String {
    let kind = document
        .get("event_type")
        .cloned()
        .and_then(|v| serde_json::from_value::<EventKind>(v).ok());

    let Some(kind) = kind else {
        return UNSUPPORTED_EVENT_TYPE.to_string();
    };

    let author = field(document, "author", UNKNOWN_AUTHOR);
    let timestamp = field(document, "timestamp", UNKNOWN_TIME);
    let to_branch = field(document, "to_branch", NOT_APPLICABLE);

    match kind {
        EventKind::Push => push_line(
            author,
            field(document, "from_branch", UNKNOWN_BRANCH),
            timestamp,
        ),
        EventKind::PullRequest => pull_request_line(
            author,
            field(document, "from_branch", NOT_APPLICABLE),
            to_branch,
            timestamp,
        ),
        EventKind::Merge => merge_line(
            author,
            field(document, "from_branch", NOT_APPLICABLE),
            to_branch,
            timestamp,
        ),
    }
}

fn field<'a>(document: &'a Value, key: &str, fallback: &'a str) -> &'a str {
    document.get(key).and_then(Value::as_str).unwrap_or(fallback)
}

fn push_line(author: &str, branch: &str, timestamp: &str) -> String {
    format!("\"{author}\" pushed to \"{branch}\" on {timestamp}")
}

fn pull_request_line(author: &str, from: &str, to: &str, timestamp: &str) -> String {
    format!("\"{author}\" submitted a pull request from \"{from}\" to \"{to}\" on {timestamp}")
}

fn merge_line(author: &str, from: &str, to: &str, timestamp: &str) -> String {
    format!("\"{author}\" merged branch \"{from}\" to \"{to}\" on {timestamp}")
}
