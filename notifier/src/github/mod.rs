//! GitHub webhook event model.
//!
//! ## Processing Flow
//!
//! ```text
//! X-GitHub-Event → EventKind → decode() → ParsedPayload → render() → Option<String>
//! ```

pub mod event;
pub mod payload;

pub use event::{EventKind, ParsedPayload};
pub use payload::{
    CheckRun, CheckRunPayload, Comment, Commit, GitHubUser, Issue, IssueCommentPayload,
    IssuesPayload, PullRequest, PullRequestPayload, PullRequestReviewPayload, PushPayload,
    Release, ReleasePayload, Repository, Review,
};
