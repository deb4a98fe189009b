//! Release messages.

use std::fmt::Write;

use tracing::debug;

use super::{escape_html, excerpt, non_empty, repo_link, DIVIDER};
use crate::github::{Release, ReleasePayload};

const RELEASE_NOTES_LIMIT: usize = 300;

/// Pre-release wins over draft; anything else is a regular release.
fn release_label(release: &Release) -> (&'static str, &'static str) {
    if release.prerelease {
        ("🧪", "Pre-release published")
    } else if release.draft {
        ("📝", "Draft release")
    } else {
        ("🚀", "New release")
    }
}

/// Format a `release` event. Only `published` is announced.
pub fn format_release(payload: &ReleasePayload) -> Option<String> {
    if payload.action != "published" {
        debug!(action = %payload.action, "release_action_ignored");
        return None;
    }

    let release = &payload.release;
    let (emoji, status) = release_label(release);

    let mut text = format!(
        "{emoji} <b>{status}</b>\n\
         {DIVIDER}\n\
         📦 <b>Repository:</b> {}\n\
         🏷 <b>Version:</b> <code>{}</code>\n",
        repo_link(&payload.repository),
        escape_html(&release.tag_name),
    );

    if let Some(name) = non_empty(&release.name) {
        let _ = writeln!(text, "📝 <b>Name:</b> {}", escape_html(name));
    }

    if let Some(notes) = non_empty(&release.body) {
        let _ = write!(
            text,
            "\n📜 <b>Changelog:</b>\n<i>{}</i>\n",
            excerpt(notes, RELEASE_NOTES_LIMIT)
        );
    }

    let _ = write!(text, "\n🔗 <a href='{}'>View release</a>", release.html_url);

    Some(text)
}
