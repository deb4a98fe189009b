//! Push messages.

use std::fmt::Write;

use tracing::debug;

use super::{escape_html, non_empty, repo_link, short_sha, truncate, user_link, DIVIDER};
use crate::github::PushPayload;

/// Commits listed before collapsing the rest into a "+N more" note.
const MAX_LISTED_COMMITS: usize = 5;
const COMMIT_SUBJECT_LIMIT: usize = 60;

/// Branch or tag name from a full ref ("refs/heads/feature/x" -> "feature/x").
fn ref_name(git_ref: &str) -> &str {
    git_ref
        .strip_prefix("refs/heads/")
        .or_else(|| git_ref.strip_prefix("refs/tags/"))
        .unwrap_or(git_ref)
}

/// Format a `push` event. Pushes without commits (branch deletion, tag-only) are suppressed.
pub fn format_push(payload: &PushPayload) -> Option<String> {
    let commits = &payload.commits;

    if commits.is_empty() {
        debug!(git_ref = %payload.git_ref, "push_without_commits_ignored");
        return None;
    }

    let mut text = format!(
        "📦 <b>Push</b>\n\
         {DIVIDER}\n\
         🏷 <b>Repository:</b> {}\n\
         🌿 <b>Branch:</b> <code>{}</code>\n\
         👤 <b>Pusher:</b> {}\n\
         📊 <b>Commits:</b> {}\n\n",
        repo_link(&payload.repository),
        escape_html(ref_name(&payload.git_ref)),
        user_link(&payload.sender),
        commits.len(),
    );

    for (i, commit) in commits.iter().take(MAX_LISTED_COMMITS).enumerate() {
        let subject = commit.message.lines().next().unwrap_or_default();
        let _ = writeln!(
            text,
            "{}. <code>{}</code> {}",
            i + 1,
            short_sha(&commit.id),
            escape_html(&truncate(subject, COMMIT_SUBJECT_LIMIT)),
        );
    }

    if commits.len() > MAX_LISTED_COMMITS {
        let _ = writeln!(
            text,
            "\n<i>+{} more</i>",
            commits.len() - MAX_LISTED_COMMITS
        );
    }

    if let (Some(before), Some(after)) = (non_empty(&payload.before), non_empty(&payload.after)) {
        let _ = write!(
            text,
            "\n🔗 <a href='{}/compare/{}...{}'>Compare changes</a>",
            payload.repository.html_url,
            short_sha(before),
            short_sha(after),
        );
    }

    Some(text)
}
