//! The event map: every supported `X-GitHub-Event` value and what it is bound to.
//!
//! Each [`EventKind`] has exactly one schema ([`EventKind::decode`]), one
//! formatter ([`ParsedPayload::render`]) and one delivery category
//! ([`EventKind::category`]). All three are exhaustive matches, so adding a
//! kind without binding all of them does not compile.

use std::fmt;

use serde::de::DeserializeOwned;

use super::payload::{
    CheckRunPayload, IssueCommentPayload, IssuesPayload, PullRequestPayload,
    PullRequestReviewPayload, PushPayload, ReleasePayload,
};
use crate::delivery::Category;
use crate::error::SchemaError;
use crate::format;

/// Supported GitHub webhook event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Push,
    PullRequest,
    PullRequestReview,
    Issues,
    IssueComment,
    CheckRun,
    Release,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Push,
        EventKind::PullRequest,
        EventKind::PullRequestReview,
        EventKind::Issues,
        EventKind::IssueComment,
        EventKind::CheckRun,
        EventKind::Release,
    ];

    /// Look up an event by its `X-GitHub-Event` header value.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Push => "push",
            EventKind::PullRequest => "pull_request",
            EventKind::PullRequestReview => "pull_request_review",
            EventKind::Issues => "issues",
            EventKind::IssueComment => "issue_comment",
            EventKind::CheckRun => "check_run",
            EventKind::Release => "release",
        }
    }

    /// Destination category. Reviews and comments are PR-scoped and share the PR topic.
    pub fn category(&self) -> Category {
        match self {
            EventKind::Push => Category::Pushes,
            EventKind::PullRequest | EventKind::PullRequestReview | EventKind::IssueComment => {
                Category::PullRequests
            }
            EventKind::Issues => Category::Issues,
            EventKind::CheckRun => Category::CiCd,
            EventKind::Release => Category::Releases,
        }
    }

    /// Decode a raw JSON body with the schema bound to this event.
    pub fn decode(&self, raw: &[u8]) -> Result<ParsedPayload, SchemaError> {
        let payload = match self {
            EventKind::Push => ParsedPayload::Push(self.decode_as(raw)?),
            EventKind::PullRequest => ParsedPayload::PullRequest(self.decode_as(raw)?),
            EventKind::PullRequestReview => ParsedPayload::PullRequestReview(self.decode_as(raw)?),
            EventKind::Issues => ParsedPayload::Issue(self.decode_as(raw)?),
            EventKind::IssueComment => ParsedPayload::IssueComment(self.decode_as(raw)?),
            EventKind::CheckRun => ParsedPayload::CheckRun(self.decode_as(raw)?),
            EventKind::Release => ParsedPayload::Release(self.decode_as(raw)?),
        };

        Ok(payload)
    }

    fn decode_as<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<T, SchemaError> {
        serde_json::from_slice(raw).map_err(|source| SchemaError {
            event: self.as_str(),
            source,
        })
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded webhook body. The variant always matches the event kind it was decoded for.
#[derive(Debug, Clone)]
pub enum ParsedPayload {
    Push(PushPayload),
    PullRequest(PullRequestPayload),
    PullRequestReview(PullRequestReviewPayload),
    Issue(IssuesPayload),
    IssueComment(IssueCommentPayload),
    CheckRun(CheckRunPayload),
    Release(ReleasePayload),
}

impl ParsedPayload {
    /// Run the formatter bound to this payload's event kind.
    ///
    /// `None` means the action/state combination is deliberately not announced.
    pub fn render(&self) -> Option<String> {
        match self {
            ParsedPayload::Push(p) => format::push::format_push(p),
            ParsedPayload::PullRequest(p) => format::pull_request::format_pull_request(p),
            ParsedPayload::PullRequestReview(p) => format::pull_request::format_review(p),
            ParsedPayload::Issue(p) => format::issues::format_issue(p),
            ParsedPayload::IssueComment(p) => format::issues::format_issue_comment(p),
            ParsedPayload::CheckRun(p) => format::check_run::format_check_run(p),
            ParsedPayload::Release(p) => format::release::format_release(p),
        }
    }
}
