// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown in place of an empty title.
pub const UNTITLED: &str = "(Untitled)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "super::iso_millis")]
    pub created: DateTime<Utc>,
    #[serde(with = "super::iso_millis")]
    pub updated: DateTime<Utc>,
}

impl Note {
    /// A blank note with a fresh id, stamped at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Self::generate_id(),
            title: String::new(),
            content: String::new(),
            created: now,
            updated: now,
        }
    }

    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// True when both title and content are empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Copy with surrounding whitespace stripped from title and content.
    pub fn trimmed(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().to_string();
        self
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// First `max_chars` characters of the content, with `…` appended when cut.
    pub fn snippet(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}…", head)
        } else {
            head
        }
    }

    /// Leading characters of the id, for compact listings.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}
