//! Normalized GitHub events.
//!
//! [`GithubEvent`] is the in-process representation produced by the
//! classifier: one variant per supported event shape, each carrying only
//! the fields relevant to it. [`NormalizedEvent`] is the flat document
//! written to the record store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder used when the author cannot be read.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Placeholder used when a branch name cannot be read.
pub const UNKNOWN_BRANCH: &str = "Unknown Branch";
/// Placeholder used when a timestamp cannot be read.
pub const UNKNOWN_TIME: &str = "Unknown Time";
/// Sentinel for fields that do not apply to an event type.
pub const NOT_APPLICABLE: &str = "N/A";

/// The three GitHub activity kinds the recorder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Commits pushed to a branch.
    Push,
    /// A pull request was opened or updated.
    PullRequest,
    /// A pull request was closed with its branch merged.
    Merge,
}

impl EventKind {
    /// Returns the event type as stored in documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Merge => "merge",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified GitHub event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GithubEvent {
    /// Push to `branch`.
    Push {
        /// Name of the pusher.
        author: String,
        /// Short branch name (last segment of the ref).
        branch: String,
        /// Timestamp of the first pushed commit, or `"N/A"`.
        timestamp: String,
    },
    /// Pull request from `from_branch` into `to_branch`.
    PullRequest {
        /// Login of the pull request author.
        author: String,
        /// Head branch.
        from_branch: String,
        /// Base branch.
        to_branch: String,
        /// Pull request creation time.
        timestamp: String,
    },
    /// Merged pull request.
    Merge {
        /// Login of the pull request author.
        author: String,
        /// Head branch.
        from_branch: String,
        /// Base branch.
        to_branch: String,
        /// Merge time.
        timestamp: String,
    },
}

impl GithubEvent {
    /// Returns the kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Push { .. } => EventKind::Push,
            Self::PullRequest { .. } => EventKind::PullRequest,
            Self::Merge { .. } => EventKind::Merge,
        }
    }

    /// Returns the author of this event.
    #[must_use]
    pub fn author(&self) -> &str {
        match self {
            Self::Push { author, .. }
            | Self::PullRequest { author, .. }
            | Self::Merge { author, .. } => author,
        }
    }
}

/// Flat document persisted for every recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedEvent {
    /// Event kind.
    pub event_type: EventKind,
    /// Pusher name or pull request author login.
    pub author: String,
    /// Source branch.
    pub from_branch: String,
    /// Target branch, `"N/A"` for pushes.
    pub to_branch: String,
    /// Origin-provided timestamp, kept verbatim.
    pub timestamp: String,
}

impl From<GithubEvent> for NormalizedEvent {
    fn from(event: GithubEvent) -> Self {
        match event {
            GithubEvent::Push {
                author,
                branch,
                timestamp,
            } => Self {
                event_type: EventKind::Push,
                author,
                from_branch: branch,
                to_branch: NOT_APPLICABLE.to_string(),
                timestamp,
            },
            GithubEvent::PullRequest {
                author,
                from_branch,
                to_branch,
                timestamp,
            } => Self {
                event_type: EventKind::PullRequest,
                author,
                from_branch,
                to_branch,
                timestamp,
            },
            GithubEvent::Merge {
                author,
                from_branch,
                to_branch,
                timestamp,
            } => Self {
                event_type: EventKind::Merge,
                author,
                from_branch,
                to_branch,
                timestamp,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_document_has_no_target_branch() {
        let doc = NormalizedEvent::from(GithubEvent::Push {
            author: "alice".to_string(),
            branch: "main".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        });
        assert_eq!(doc.event_type, EventKind::Push);
        assert_eq!(doc.from_branch, "main");
        assert_eq!(doc.to_branch, NOT_APPLICABLE);
    }

    #[test]
    fn document_serializes_snake_case_kind() {
        let doc = NormalizedEvent::from(GithubEvent::PullRequest {
            author: "bob".to_string(),
            from_branch: "feature".to_string(),
            to_branch: "main".to_string(),
            timestamp: "T1".to_string(),
        });
        let json = serde_json::to_value(&doc).unwrap_or_default();
        assert_eq!(json["event_type"], "pull_request");
        assert_eq!(json["to_branch"], "main");
    }

    #[test]
    fn kind_and_author_accessors() {
        let event = GithubEvent::Merge {
            author: "carol".to_string(),
            from_branch: "fix".to_string(),
            to_branch: "main".to_string(),
            timestamp: "T2".to_string(),
        };
        assert_eq!(event.kind(), EventKind::Merge);
        assert_eq!(event.author(), "carol");
        assert_eq!(event.kind().to_string(), "merge");
    }
}
