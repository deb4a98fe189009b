//! Pull request and pull request review messages.

use std::fmt::Write;

use tracing::debug;

use super::{escape_html, excerpt, non_empty, repo_link, user_link, DIVIDER};
use crate::github::{PullRequestPayload, PullRequestReviewPayload};

const PR_BODY_LIMIT: usize = 200;
const REVIEW_BODY_LIMIT: usize = 150;

/// Format a `pull_request` event. Only opened, closed and reopened are announced.
pub fn format_pull_request(payload: &PullRequestPayload) -> Option<String> {
    let pr = &payload.pull_request;

    let (emoji, status) = match payload.action.as_str() {
        "opened" => ("🟢", "New pull request"),
        "closed" if pr.merged => ("🟣", "Pull request merged"),
        "closed" => ("🔴", "Pull request closed without merging"),
        "reopened" => ("🔄", "Pull request reopened"),
        other => {
            debug!(action = other, "pull_request_action_ignored");
            return None;
        }
    };

    let mut text = format!(
        "{emoji} <b>{status}</b>\n\
         {DIVIDER}\n\
         📦 <b>Repository:</b> {}\n\
         📝 <b>Title:</b> {}\n\
         👤 <b>Author:</b> {}\n",
        repo_link(&payload.repository),
        escape_html(&pr.title),
        user_link(&pr.user),
    );

    if let Some(body) = non_empty(&pr.body) {
        let _ = write!(text, "\n💬 <i>{}</i>\n", excerpt(body, PR_BODY_LIMIT));
    }

    let _ = write!(text, "\n🔗 <a href='{}'>Open pull request</a>", pr.html_url);

    Some(text)
}

/// Format a `pull_request_review` event. Only submitted reviews with a known state are announced.
pub fn format_review(payload: &PullRequestReviewPayload) -> Option<String> {
    if payload.action != "submitted" {
        debug!(action = %payload.action, "review_action_ignored");
        return None;
    }

    let review = &payload.review;
    let pr = &payload.pull_request;

    let (emoji, status) = match review.state.to_lowercase().as_str() {
        "approved" => ("✅", "Approved"),
        "changes_requested" => ("🔴", "Changes requested"),
        "commented" => ("💬", "Review comment"),
        other => {
            debug!(state = other, "review_state_ignored");
            return None;
        }
    };

    let mut text = format!(
        "{emoji} <b>{status}</b>\n\
         {DIVIDER}\n\
         📦 <b>PR:</b> <a href='{}'>{}</a>\n\
         🏷 <b>Repository:</b> {}\n\
         👤 <b>Reviewer:</b> {}\n",
        pr.html_url,
        escape_html(&pr.title),
        repo_link(&payload.repository),
        user_link(&review.user),
    );

    if let Some(body) = non_empty(&review.body) {
        let _ = write!(text, "\n💭 <i>{}</i>\n", excerpt(body, REVIEW_BODY_LIMIT));
    }

    let _ = write!(text, "\n🔗 <a href='{}'>View review</a>", review.html_url);

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::{repository, user};
    use serde_json::{json, Value};

    fn pull_request(body: Value, merged: bool) -> Value {
        json!({
            "html_url": "https://github.com/octo/repo/pull/12",
            "title": "Add <feature>",
            "state": "open",
            "body": body,
            "user": user("alice"),
            "merged": merged
        })
    }

    fn pr_payload(action: &str, merged: bool) -> PullRequestPayload {
        serde_json::from_value(json!({
            "action": action,
            "pull_request": pull_request(json!("Implements the thing"), merged),
            "repository": repository()
        }))
        .unwrap()
    }

    fn review_payload(action: &str, state: &str, body: Value) -> PullRequestReviewPayload {
        serde_json::from_value(json!({
            "action": action,
            "review": {
                "state": state,
                "body": body,
                "html_url": "https://github.com/octo/repo/pull/12#pullrequestreview-1",
                "user": user("bob")
            },
            "pull_request": pull_request(Value::Null, false),
            "repository": repository()
        }))
        .unwrap()
    }

    #[test]
    fn test_opened() {
        let text = format_pull_request(&pr_payload("opened", false)).unwrap();

        assert!(text.contains("New pull request"));
        assert!(text.contains("@alice"));
        assert!(text.contains("Implements the thing"));
        assert!(text.contains("https://github.com/octo/repo/pull/12"));
    }

    #[test]
    fn test_title_is_escaped() {
        let text = format_pull_request(&pr_payload("opened", false)).unwrap();

        assert!(text.contains("Add &lt;feature&gt;"));
        assert!(!text.contains("<feature>"));
    }

    #[test]
    fn test_closed_merged_differs_from_rejected() {
        let merged = format_pull_request(&pr_payload("closed", true)).unwrap();
        let rejected = format_pull_request(&pr_payload("closed", false)).unwrap();

        assert!(merged.contains("merged"));
        assert!(!rejected.contains("merged"));
        assert!(rejected.contains("closed without merging"));
        assert_ne!(merged, rejected);
    }

    #[test]
    fn test_reopened() {
        let text = format_pull_request(&pr_payload("reopened", false)).unwrap();
        assert!(text.contains("reopened"));
    }

    #[test]
    fn test_other_actions_suppressed() {
        for action in ["edited", "labeled", "synchronize", "assigned"] {
            assert!(format_pull_request(&pr_payload(action, false)).is_none(), "{action}");
        }
    }

    #[test]
    fn test_long_body_truncated_at_200() {
        let mut payload = pr_payload("opened", false);
        payload.pull_request.body = Some("x".repeat(250));

        let text = format_pull_request(&payload).unwrap();

        assert!(text.contains(&format!("{}...", "x".repeat(200))));
        assert!(!text.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_empty_body_omitted() {
        let mut payload = pr_payload("opened", false);
        payload.pull_request.body = None;

        let text = format_pull_request(&payload).unwrap();

        assert!(!text.contains("💬"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let payload = pr_payload("opened", false);
        assert_eq!(format_pull_request(&payload), format_pull_request(&payload));
    }

    #[test]
    fn test_review_states() {
        let approved = format_review(&review_payload("submitted", "approved", Value::Null)).unwrap();
        let changes =
            format_review(&review_payload("submitted", "changes_requested", Value::Null)).unwrap();
        let commented =
            format_review(&review_payload("submitted", "COMMENTED", json!("nit"))).unwrap();

        assert!(approved.contains("Approved"));
        assert!(changes.contains("Changes requested"));
        assert!(commented.contains("Review comment"));
        assert!(commented.contains("nit"));
        assert!(approved.contains("@bob"));
    }

    #[test]
    fn test_review_not_submitted_suppressed() {
        assert!(format_review(&review_payload("edited", "approved", Value::Null)).is_none());
        assert!(format_review(&review_payload("dismissed", "approved", Value::Null)).is_none());
    }

    #[test]
    fn test_review_unknown_state_suppressed() {
        assert!(format_review(&review_payload("submitted", "dismissed", Value::Null)).is_none());
    }

    #[test]
    fn test_review_body_escaped_and_truncated_at_150() {
        let body = format!("<script>{}", "y".repeat(200));
        let text = format_review(&review_payload("submitted", "commented", json!(body))).unwrap();

        assert!(text.contains("&lt;script&gt;"));
        assert!(text.contains(&format!("{}...", "y".repeat(142))));
        assert!(!text.contains(&"y".repeat(143)));
    }
}
