//! The note store: the authoritative note sequence and its persisted mirror.
//!
//! Every mutation rewrites the whole slot. Reads fail soft to an empty
//! collection; writes that fail are logged and queued as [`Warning`]s, and the
//! in-memory sequence keeps the change.

mod transitions;

pub use transitions::{apply_delete, apply_save};

use crate::clock::{Clock, SystemClock};
use crate::entity::Note;
use crate::error::{JotterError, Result};
use crate::search::filter_notes;
use crate::storage::{decode, encode, DurableSlot};
use crate::warnings::Warning;

pub struct NoteStore<S, C = SystemClock> {
    slot: S,
    clock: C,
    notes: Vec<Note>,
    warnings: Vec<Warning>,
}

impl<S: DurableSlot> NoteStore<S, SystemClock> {
    /// Open a store over `slot`, rehydrating from whatever it holds.
    pub fn open(slot: S) -> Self {
        Self::with_clock(slot, SystemClock)
    }
}

impl<S: DurableSlot, C: Clock> NoteStore<S, C> {
    pub fn with_clock(slot: S, clock: C) -> Self {
        let notes = Self::load(&slot);
        Self {
            slot,
            clock,
            notes,
            warnings: Vec::new(),
        }
    }

    /// Read the persisted collection. Absent, corrupt or unreadable slots give
    /// an empty collection.
    pub fn load(slot: &S) -> Vec<Note> {
        match slot.read() {
            Ok(Some(raw)) => {
                let notes = decode(&raw);
                tracing::debug!(slot = slot.key(), count = notes.len(), "loaded notes");
                notes
            }
            Ok(None) => {
                tracing::debug!(slot = slot.key(), "slot is empty");
                Vec::new()
            }
            Err(e) => {
                tracing::debug!(slot = slot.key(), error = %e, "slot is unreadable, starting empty");
                Vec::new()
            }
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// A fresh unsaved note. The collection is untouched.
    pub fn create_draft(&self) -> Note {
        Note::new(self.clock.now())
    }

    /// Insert or update `draft` and persist.
    ///
    /// Blank drafts are rejected with [`JotterError::EmptyNote`] and change nothing.
    pub fn save(&mut self, mut draft: Note) -> Result<&[Note]> {
        if draft.is_blank() {
            return Err(JotterError::EmptyNote);
        }
        if draft.id.trim().is_empty() {
            draft.id = Note::generate_id();
        }

        let existing = self.contains(&draft.id);
        let id = draft.id.clone();
        self.notes = apply_save(&self.notes, draft, self.clock.now());
        tracing::debug!(id = %id, existing, count = self.notes.len(), "saved note");

        self.persist();
        Ok(&self.notes)
    }

    /// Remove the note with `id` if present, then persist.
    pub fn delete(&mut self, id: &str) -> &[Note] {
        let before = self.notes.len();
        self.notes = apply_delete(&self.notes, id);
        tracing::debug!(id = %id, removed = before - self.notes.len(), "deleted note");

        self.persist();
        &self.notes
    }

    pub fn filter(&self, query: &str) -> Vec<Note> {
        filter_notes(&self.notes, query)
    }

    /// Drain warnings produced since the last call.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    fn persist(&mut self) {
        let result = encode(&self.notes).and_then(|raw| self.slot.write(&raw));
        if let Err(e) = result {
            tracing::warn!(slot = self.slot.key(), error = %e, "failed to persist notes");
            self.warnings.push(Warning::PersistFailed {
                slot: self.slot.key().to_string(),
                reason: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::StepClock;
    use crate::storage::MemorySlot;

    fn store() -> NoteStore<MemorySlot, StepClock> {
        NoteStore::with_clock(MemorySlot::new(), StepClock::new())
    }

    fn draft_with(store: &NoteStore<MemorySlot, StepClock>, title: &str, content: &str) -> Note {
        let mut draft = store.create_draft();
        draft.title = title.to_string();
        draft.content = content.to_string();
        draft
    }

    fn persisted(store: &NoteStore<MemorySlot, StepClock>) -> Vec<Note> {
        decode(store.slot().contents().unwrap())
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        assert!(NoteStore::<MemorySlot, StepClock>::load(&MemorySlot::new()).is_empty());
    }

    #[test]
    fn test_load_corrupt_slot_is_empty() {
        let slot = MemorySlot::with_contents("<html>oops</html>");
        assert!(NoteStore::<MemorySlot, StepClock>::load(&slot).is_empty());
    }

    #[test]
    fn test_load_unreadable_slot_is_empty() {
        let slot = MemorySlot::with_contents("[]").fail_reads(true);
        let store = NoteStore::with_clock(slot, StepClock::new());
        assert!(store.notes().is_empty());
    }

    #[test]
    fn test_create_draft_does_not_touch_collection() {
        let store = store();
        let draft = store.create_draft();
        assert!(draft.is_blank());
        assert_eq!(draft.created, draft.updated);
        assert!(store.notes().is_empty());
        assert_eq!(store.slot().writes(), 0);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut store = store();

        let draft = draft_with(&store, "A", "x");
        let id = draft.id.clone();
        store.save(draft).unwrap();
        assert_eq!(store.notes().len(), 1);
        let note = &store.notes()[0];
        assert_eq!(note.title, "A");
        assert_eq!(note.content, "x");
        assert_eq!(note.created, note.updated);

        let mut edit = store.get(&id).unwrap().clone();
        edit.content = "y".to_string();
        store.save(edit).unwrap();
        assert_eq!(store.notes().len(), 1);
        let note = &store.notes()[0];
        assert_eq!(note.content, "y");
        assert!(note.updated > note.created);

        store.delete(&id);
        assert!(store.notes().is_empty());
        assert!(persisted(&store).is_empty());
    }

    #[test]
    fn test_new_note_goes_to_front() {
        let mut store = store();
        let first = draft_with(&store, "first", "");
        store.save(first).unwrap();
        let second = draft_with(&store, "second", "");
        let second_id = second.id.clone();

        let notes = store.save(second).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, second_id);
    }

    #[test]
    fn test_edit_keeps_size_position_and_created() {
        let mut store = store();
        let older = draft_with(&store, "older", "");
        let older_id = older.id.clone();
        store.save(older).unwrap();
        let newer = draft_with(&store, "newer", "");
        store.save(newer).unwrap();

        let before = store.get(&older_id).unwrap().clone();
        let mut edit = before.clone();
        edit.title = "older, edited".to_string();
        store.save(edit).unwrap();

        assert_eq!(store.notes().len(), 2);
        let after = &store.notes()[1];
        assert_eq!(after.id, older_id);
        assert_eq!(after.title, "older, edited");
        assert_eq!(after.created, before.created);
        assert!(after.updated > before.updated);
    }

    #[test]
    fn test_blank_save_is_rejected_without_mutation() {
        let mut store = store();
        let kept = draft_with(&store, "kept", "");
        store.save(kept).unwrap();
        let writes = store.slot().writes();
        let snapshot = store.notes().to_vec();

        let blank = draft_with(&store, "   ", "\n");
        assert!(matches!(store.save(blank), Err(JotterError::EmptyNote)));

        let mut blanked = snapshot[0].clone();
        blanked.title = String::new();
        assert!(matches!(store.save(blanked), Err(JotterError::EmptyNote)));

        assert_eq!(store.notes(), snapshot.as_slice());
        assert_eq!(store.slot().writes(), writes);
    }

    #[test]
    fn test_blank_id_gets_fresh_id() {
        let mut store = store();
        let mut draft = draft_with(&store, "A", "");
        draft.id = "  ".to_string();
        store.save(draft).unwrap();
        assert!(!store.notes()[0].id.trim().is_empty());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut store = store();
        let draft = draft_with(&store, "A", "");
        store.save(draft).unwrap();
        let snapshot = store.notes().to_vec();

        let notes = store.delete("does-not-exist");
        assert_eq!(notes, snapshot.as_slice());
        assert!(store.take_warnings().is_empty());
    }

    #[test]
    fn test_every_mutation_round_trips_through_slot() {
        let mut store = store();
        let mut ids = Vec::new();
        for i in 0..4 {
            let draft = draft_with(&store, &format!("note {}", i), "body");
            ids.push(draft.id.clone());
            store.save(draft).unwrap();
            assert_eq!(persisted(&store), store.notes());
        }

        let mut edit = store.get(&ids[1]).unwrap().clone();
        edit.content = "changed".to_string();
        store.save(edit).unwrap();
        assert_eq!(persisted(&store), store.notes());

        store.delete(&ids[2]);
        assert_eq!(persisted(&store), store.notes());
        store.delete("missing");
        assert_eq!(persisted(&store), store.notes());
    }

    #[test]
    fn test_reopen_rehydrates_from_slot() {
        let mut store = store();
        let draft = draft_with(&store, "Persist me", "");
        store.save(draft).unwrap();

        let slot = store.slot().clone();
        let reopened = NoteStore::with_clock(slot, StepClock::new());
        assert_eq!(reopened.notes(), store.notes());
    }

    #[test]
    fn test_sub_millisecond_slot_round_trips_after_mutation() {
        let slot = MemorySlot::with_contents(
            r#"[
                {"id":"a","title":"kept","created":"2024-05-01T10:00:00.123456Z","updated":"2024-05-01T10:00:01.999999Z"},
                {"id":"b","title":"dropped","created":"2024-05-01T10:00:00.5Z"}
            ]"#,
        );
        let mut store = NoteStore::with_clock(slot, StepClock::new());

        store.delete("b");

        assert_eq!(store.notes().len(), 1);
        assert_eq!(persisted(&store), store.notes());
        let reopened = NoteStore::with_clock(store.slot().clone(), StepClock::new());
        assert_eq!(reopened.notes(), store.notes());
    }

    #[test]
    fn test_write_failure_is_a_warning_not_an_error() {
        let mut store = store();
        store.slot_mut().set_fail_writes(true);

        let draft = draft_with(&store, "A", "x");
        let notes = store.save(draft).unwrap();
        assert_eq!(notes.len(), 1);

        let warnings = store.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(&warnings[0], Warning::PersistFailed { slot, .. } if slot == "notes-v1"));
        assert!(store.take_warnings().is_empty());
        assert!(store.slot().contents().is_none());
    }

    #[test]
    fn test_store_filter_uses_collection() {
        let mut store = store();
        let shopping = draft_with(&store, "Shopping", "");
        store.save(shopping).unwrap();
        let work = draft_with(&store, "Work", "");
        store.save(work).unwrap();

        let visible = store.filter("shop");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Shopping");
    }
}
