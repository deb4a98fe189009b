//! CI check run messages.

use std::fmt::Write;

use tracing::debug;

use super::{escape_html, repo_link, DIVIDER};
use crate::github::CheckRunPayload;

/// Emoji and label for a check run conclusion.
fn conclusion_label(conclusion: Option<&str>) -> (&'static str, String) {
    match conclusion {
        Some("success") => ("✅", "Checks passed".to_string()),
        Some("failure") => ("❌", "Checks failed".to_string()),
        Some("cancelled") => ("⚠️", "Checks cancelled".to_string()),
        Some("skipped") => ("⏭", "Checks skipped".to_string()),
        other => (
            "🔵",
            format!("Check finished: {}", escape_html(other.unwrap_or("unknown"))),
        ),
    }
}

/// Format a `check_run` event. Only runs that have actually completed are announced.
pub fn format_check_run(payload: &CheckRunPayload) -> Option<String> {
    let check = &payload.check_run;

    if payload.action != "completed" || check.status != "completed" {
        debug!(
            action = %payload.action,
            status = %check.status,
            "check_run_not_completed_ignored"
        );
        return None;
    }

    let (emoji, status) = conclusion_label(check.conclusion.as_deref());

    let mut text = format!(
        "{emoji} <b>{status}</b>\n\
         {DIVIDER}\n\
         📦 <b>Repository:</b> {}\n\
         🔧 <b>Check:</b> {}\n",
        repo_link(&payload.repository),
        escape_html(&check.name),
    );

    if let Some(url) = &check.html_url {
        let _ = write!(text, "\n🔗 <a href='{url}'>View details</a>");
    }

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::repository;
    use serde_json::{json, Value};

    fn check_payload(action: &str, status: &str, conclusion: Value) -> CheckRunPayload {
        serde_json::from_value(json!({
            "action": action,
            "check_run": {
                "name": "build (ubuntu-latest)",
                "status": status,
                "conclusion": conclusion,
                "html_url": "https://github.com/octo/repo/runs/1"
            },
            "repository": repository()
        }))
        .unwrap()
    }

    #[test]
    fn test_conclusion_labels() {
        let cases = [
            ("success", "Checks passed"),
            ("failure", "Checks failed"),
            ("cancelled", "Checks cancelled"),
            ("skipped", "Checks skipped"),
            ("timed_out", "Check finished: timed_out"),
        ];

        for (conclusion, label) in cases {
            let text = format_check_run(&check_payload("completed", "completed", json!(conclusion)))
                .unwrap();
            assert!(text.contains(label), "{conclusion}");
        }
    }

    #[test]
    fn test_missing_conclusion_uses_fallback() {
        let text = format_check_run(&check_payload("completed", "completed", Value::Null)).unwrap();

        assert!(text.contains("Check finished: unknown"));
    }

    #[test]
    fn test_in_progress_suppressed_regardless_of_conclusion() {
        for conclusion in [json!("success"), json!("failure"), Value::Null] {
            assert!(format_check_run(&check_payload("completed", "in_progress", conclusion)).is_none());
        }
    }

    #[test]
    fn test_non_completed_action_suppressed() {
        assert!(format_check_run(&check_payload("created", "completed", json!("success"))).is_none());
        assert!(
            format_check_run(&check_payload("rerequested", "completed", json!("success"))).is_none()
        );
    }

    #[test]
    fn test_details_link() {
        let text =
            format_check_run(&check_payload("completed", "completed", json!("success"))).unwrap();

        assert!(text.contains("build (ubuntu-latest)"));
        assert!(text.contains("https://github.com/octo/repo/runs/1"));
    }
}
