//! Webhook payload classification and normalization.
//!
//! GitHub does not put the event name in the body, so the shape of the
//! payload decides: a `ref` key means a push, a `pull_request` key means a
//! pull request (or a merge when the request was closed with `merged`
//! set). Anything else is rejected before it reaches the store.

use serde_json::{Map, Value};

use super::event::{
    EventKind, GithubEvent, NOT_APPLICABLE, UNKNOWN_AUTHOR, UNKNOWN_BRANCH, UNKNOWN_TIME,
};
use crate::error::HookError;

/// Determines which known event shape `payload` matches.
///
/// First match wins: `ref` → push, then `pull_request` → merge or pull
/// request.
///
/// # Errors
///
/// Returns [`HookError::UnsupportedEvent`] when the payload is not an
/// object or contains neither `ref` nor `pull_request`.
pub fn classify(payload: &Value) -> Result<EventKind, HookError> {
    let obj = as_object(payload)?;

    let kind = if obj.contains_key("ref") {
        EventKind::Push
    } else if let Some(pr) = obj.get("pull_request") {
        let closed = obj.get("action").and_then(Value::as_str) == Some("closed");
        let merged = pr.get("merged").is_some_and(is_truthy);
        if closed && merged {
            EventKind::Merge
        } else {
            EventKind::PullRequest
        }
    } else {
        return Err(HookError::UnsupportedEvent(
            "payload has neither `ref` nor `pull_request`".to_string(),
        ));
    };

    tracing::debug!(event_type = %kind, "event type detected");
    Ok(kind)
}

/// Classifies `payload` and extracts the fields recorded for its kind.
///
/// Missing or non-string fields are replaced by placeholders rather than
/// failing the whole webhook.
///
/// # Errors
///
/// Returns [`HookError::UnsupportedEvent`] when [`classify`] does.
pub fn normalize(payload: &Value) -> Result<GithubEvent, HookError> {
    let kind = classify(payload)?;

    let event = match kind {
        EventKind::Push => GithubEvent::Push {
            author: text_at(payload, &["pusher", "name"], UNKNOWN_AUTHOR),
            branch: payload
                .get("ref")
                .and_then(Value::as_str)
                .and_then(|r| r.rsplit('/').next())
                .unwrap_or(UNKNOWN_BRANCH)
                .to_string(),
            timestamp: first_commit_timestamp(payload),
        },
        EventKind::PullRequest => GithubEvent::PullRequest {
            author: text_at(payload, &["pull_request", "user", "login"], UNKNOWN_AUTHOR),
            from_branch: text_at(payload, &["pull_request", "head", "ref"], UNKNOWN_BRANCH),
            to_branch: text_at(payload, &["pull_request", "base", "ref"], UNKNOWN_BRANCH),
            timestamp: text_at(payload, &["pull_request", "created_at"], UNKNOWN_TIME),
        },
        EventKind::Merge => GithubEvent::Merge {
            author: text_at(payload, &["pull_request", "user", "login"], UNKNOWN_AUTHOR),
            from_branch: text_at(payload, &["pull_request", "head", "ref"], UNKNOWN_BRANCH),
            to_branch: text_at(payload, &["pull_request", "base", "ref"], UNKNOWN_BRANCH),
            timestamp: text_at(payload, &["pull_request", "merged_at"], UNKNOWN_TIME),
        },
    };

    Ok(event)
}

/// Loose JSON truthiness: empty containers, empty strings, zero, `false`
/// and `null` are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, HookError> {
    payload.as_object().ok_or_else(|| {
        HookError::UnsupportedEvent("payload is not a JSON object".to_string())
    })
}

fn text_at(payload: &Value, path: &[&str], fallback: &str) -> String {
    path.iter()
        .try_fold(payload, |node, key| node.get(key))
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn first_commit_timestamp(payload: &Value) -> String {
    match payload.get("commits").and_then(Value::as_array).and_then(|c| c.first()) {
        Some(commit) => commit
            .get("timestamp")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_TIME)
            .to_string(),
        None => NOT_APPLICABLE.to_string(),
    }
}
