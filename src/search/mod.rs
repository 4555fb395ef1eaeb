//! Case-insensitive substring filtering over note title and content.

use crate::entity::Note;

/// Notes whose title or content contains `query`, ignoring case.
///
/// A query that is empty after trimming returns `notes` unchanged. Relative
/// order is preserved.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|n| matches(n, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle) || note.content.to_lowercase().contains(needle)
}
