//! Pure state transitions over the note sequence. No I/O, the clock is an argument.

use chrono::{DateTime, Utc};

use crate::entity::Note;

/// Apply a save of `draft` to `notes`.
///
/// An id already present keeps its position and `created`, taking the
/// trimmed title/content and `updated = now`. Otherwise the draft is
/// prepended with both timestamps set to `now`. Blank drafts must be
/// rejected before this is called.
pub fn apply_save(notes: &[Note], draft: Note, now: DateTime<Utc>) -> Vec<Note> {
    let draft = draft.trimmed();

    if notes.iter().any(|n| n.id == draft.id) {
        return notes
            .iter()
            .map(|n| {
                if n.id == draft.id {
                    Note {
                        id: n.id.clone(),
                        title: draft.title.clone(),
                        content: draft.content.clone(),
                        created: n.created,
                        updated: now.max(n.created),
                    }
                } else {
                    n.clone()
                }
            })
            .collect();
    }

    let mut next = Vec::with_capacity(notes.len() + 1);
    next.push(Note {
        created: now,
        updated: now,
        ..draft
    });
    next.extend_from_slice(notes);
    next
}

/// Remove the note with `id`; an absent id leaves the sequence unchanged.
pub fn apply_delete(notes: &[Note], id: &str) -> Vec<Note> {
    notes.iter().filter(|n| n.id != id).cloned().collect()
}
