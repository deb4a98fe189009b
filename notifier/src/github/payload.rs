//! GitHub webhook payload schemas.
//!
//! Only the fields the formatters read are modelled. Unknown fields are
//! ignored by serde, so GitHub adding keys never breaks decoding; a missing
//! required field or a type mismatch does.

use serde::de::IgnoredAny;
use serde::Deserialize;

// =============================================================================
// Shared Objects
// =============================================================================

/// A GitHub account (author, reviewer, pusher).
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub html_url: String,
}

/// Repository the event happened in.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// e.g. "octo-org/octo-repo"
    pub full_name: String,
    pub html_url: String,
}

// =============================================================================
// Pull Requests
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub html_url: String,
    pub title: String,
    /// Description, absent or null when empty
    #[serde(default)]
    pub body: Option<String>,
    pub user: GitHubUser,
    /// Distinguishes a merged PR from one closed without merging
    #[serde(default)]
    pub merged: bool,
}

/// `pull_request` event.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    /// opened, closed, reopened, edited, labeled, synchronize, ...
    pub action: String,
    pub pull_request: PullRequest,
    pub repository: Repository,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    /// approved, changes_requested, commented, dismissed
    pub state: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    pub user: GitHubUser,
}

/// `pull_request_review` event.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestReviewPayload {
    pub action: String,
    pub review: Review,
    pub pull_request: PullRequest,
    pub repository: Repository,
}

// =============================================================================
// Pushes
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    /// Full commit SHA
    pub id: String,
    pub message: String,
}

/// `push` event.
#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    /// Full ref, e.g. "refs/heads/main"
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
    pub repository: Repository,
    pub sender: GitHubUser,
    #[serde(default)]
    pub commits: Vec<Commit>,
}

// =============================================================================
// Issues
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    pub user: GitHubUser,
    /// Present when the issue is actually a pull request
    #[serde(default)]
    pub pull_request: Option<IgnoredAny>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// `issues` event.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuesPayload {
    pub action: String,
    pub issue: Issue,
    pub repository: Repository,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    pub user: GitHubUser,
}

/// `issue_comment` event. Fires for comments on both issues and pull requests.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueCommentPayload {
    /// created, edited, deleted
    pub action: String,
    pub issue: Issue,
    pub comment: Comment,
    pub repository: Repository,
}

// =============================================================================
// CI
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CheckRun {
    pub name: String,
    /// queued, in_progress, completed
    pub status: String,
    /// Only set once the run has completed
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// `check_run` event.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRunPayload {
    pub action: String,
    pub check_run: CheckRun,
    pub repository: Repository,
}

// =============================================================================
// Releases
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub draft: bool,
}

/// `release` event.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleasePayload {
    pub action: String,
    pub release: Release,
    pub repository: Repository,
}
