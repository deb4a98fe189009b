//! Issue and issue comment messages.

use std::fmt::Write;

use tracing::debug;

use super::{escape_html, excerpt, non_empty, repo_link, user_link, DIVIDER};
use crate::github::{IssueCommentPayload, IssuesPayload};

const ISSUE_BODY_LIMIT: usize = 200;
const COMMENT_BODY_LIMIT: usize = 150;

/// Format an `issues` event. Only opened, closed and reopened are announced.
pub fn format_issue(payload: &IssuesPayload) -> Option<String> {
    let issue = &payload.issue;

    let (emoji, status) = match payload.action.as_str() {
        "opened" => ("🐛", "New issue"),
        "closed" => ("✅", "Issue closed"),
        "reopened" => ("🔄", "Issue reopened"),
        other => {
            debug!(action = other, "issue_action_ignored");
            return None;
        }
    };

    let mut text = format!(
        "{emoji} <b>{status} #{}</b>\n\
         {DIVIDER}\n\
         📦 <b>Repository:</b> {}\n\
         📝 <b>Title:</b> {}\n\
         👤 <b>Author:</b> {}\n",
        issue.number,
        repo_link(&payload.repository),
        escape_html(&issue.title),
        user_link(&issue.user),
    );

    if let Some(body) = non_empty(&issue.body) {
        let _ = write!(text, "\n💬 <i>{}</i>\n", excerpt(body, ISSUE_BODY_LIMIT));
    }

    let _ = write!(text, "\n🔗 <a href='{}'>Open issue</a>", issue.html_url);

    Some(text)
}

/// Format an `issue_comment` event. Only newly created comments are announced.
pub fn format_issue_comment(payload: &IssueCommentPayload) -> Option<String> {
    if payload.action != "created" {
        debug!(action = %payload.action, "issue_comment_action_ignored");
        return None;
    }

    let issue = &payload.issue;
    let comment = &payload.comment;
    let target = if issue.is_pull_request() {
        "pull request"
    } else {
        "issue"
    };

    let mut text = format!(
        "💬 <b>New comment on {target} #{}</b>\n\
         {DIVIDER}\n\
         📦 <b>Repository:</b> {}\n\
         📝 <b>Title:</b> <a href='{}'>{}</a>\n\
         👤 <b>Author:</b> {}\n",
        issue.number,
        repo_link(&payload.repository),
        issue.html_url,
        escape_html(&issue.title),
        user_link(&comment.user),
    );

    if let Some(body) = non_empty(&comment.body) {
        let _ = write!(text, "\n💭 <i>{}</i>\n", excerpt(body, COMMENT_BODY_LIMIT));
    }

    let _ = write!(text, "\n🔗 <a href='{}'>View comment</a>", comment.html_url);

    Some(text)
}
