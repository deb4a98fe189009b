//! Rendering of GitHub events as Telegram HTML messages.
//!
//! Every formatter is a pure function from a typed payload to
//! `Option<String>`. `None` means the event is suppressed for that
//! action/state; nothing is sent.

pub mod check_run;
pub mod issues;
pub mod pull_request;
pub mod push;
pub mod release;

use crate::github::{GitHubUser, Repository};

/// Horizontal rule under each message heading.
pub(crate) const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━";

/// Escape the characters that would break Telegram's HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Cap `text` at `max_chars` characters, appending `...` when anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Prepare a free-text field for embedding: capped, then escaped.
///
/// Capping before escaping keeps an entity like `&lt;` from being cut in half.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    escape_html(&truncate(text, max_chars))
}

/// First `n` characters of a commit SHA.
pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(7) {
        Some((byte_idx, _)) => &sha[..byte_idx],
        None => sha,
    }
}

pub(crate) fn repo_link(repo: &Repository) -> String {
    format!(
        "<a href='{}'>{}</a>",
        repo.html_url,
        escape_html(&repo.full_name)
    )
}

pub(crate) fn user_link(user: &GitHubUser) -> String {
    format!("<a href='{}'>@{}</a>", user.html_url, escape_html(&user.login))
}

/// Non-empty free text, if any.
pub(crate) fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.trim().is_empty())
}
