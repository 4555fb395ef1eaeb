//! Transient editing state layered over a [`NoteStore`].
//!
//! Holds what the user is looking at: the selected note, the open editor
//! draft and the filter string. None of it is persisted. The read-only viewer
//! is open only while a note is selected and no draft is being edited.

use crate::clock::{Clock, SystemClock};
use crate::entity::Note;
use crate::error::{JotterError, Result};
use crate::storage::DurableSlot;
use crate::store::NoteStore;
use crate::warnings::Warning;

/// Asked before a note is deleted.
pub trait Confirm {
    fn confirm_delete(&mut self, note: &Note) -> bool;
}

impl<F: FnMut(&Note) -> bool> Confirm for F {
    fn confirm_delete(&mut self, note: &Note) -> bool {
        self(note)
    }
}

/// Whether the open draft creates a note or edits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    New,
    Existing,
}

pub struct Session<S, C = SystemClock> {
    store: NoteStore<S, C>,
    selected: Option<String>,
    draft: Option<Note>,
    filter: String,
}

impl<S: DurableSlot, C: Clock> Session<S, C> {
    pub fn new(store: NoteStore<S, C>) -> Self {
        Self {
            store,
            selected: None,
            draft: None,
            filter: String::new(),
        }
    }

    pub fn store(&self) -> &NoteStore<S, C> {
        &self.store
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    /// Open the editor on a fresh draft.
    pub fn begin_create(&mut self) -> &mut Note {
        self.draft.insert(self.store.create_draft())
    }

    /// Open the editor on a copy of an existing note.
    pub fn begin_edit(&mut self, id: &str) -> Result<&mut Note> {
        let note = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| JotterError::NotFound(id.to_string()))?;
        Ok(self.draft.insert(note))
    }

    pub fn draft(&self) -> Option<&Note> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Note> {
        self.draft.as_mut()
    }

    pub fn draft_kind(&self) -> Option<DraftKind> {
        self.draft.as_ref().map(|d| {
            if self.store.contains(&d.id) {
                DraftKind::Existing
            } else {
                DraftKind::New
            }
        })
    }

    /// Save the open draft, close the editor and select the saved note.
    ///
    /// A blank draft is refused with [`JotterError::EmptyNote`]; it stays open
    /// and the collection is untouched.
    pub fn commit_draft(&mut self) -> Result<Note> {
        let draft = self.draft.as_ref().ok_or(JotterError::NoDraft)?;
        if draft.is_blank() {
            return Err(JotterError::EmptyNote);
        }

        let draft = self.draft.take().ok_or(JotterError::NoDraft)?;
        let id = draft.id.clone();
        let saved = self
            .store
            .save(draft)?
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| JotterError::NotFound(id.clone()))?;

        self.selected = Some(saved.id.clone());
        Ok(saved)
    }

    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    /// Select a note for viewing; closes any open editor.
    pub fn select(&mut self, id: &str) -> Result<&Note> {
        if !self.store.contains(id) {
            return Err(JotterError::NotFound(id.to_string()));
        }
        self.draft = None;
        self.selected = Some(id.to_string());
        self.store
            .get(id)
            .ok_or_else(|| JotterError::NotFound(id.to_string()))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn viewer_open(&self) -> bool {
        self.draft.is_none() && self.selected_note().is_some()
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The notes matching the current filter.
    pub fn visible(&self) -> Vec<Note> {
        self.store.filter(&self.filter)
    }

    /// Delete `id` after asking `confirm`.
    ///
    /// Returns whether a note was removed: `Ok(false)` when the user declines
    /// or when the id is not in the collection. Neither case is an error.
    pub fn delete(&mut self, id: &str, confirm: &mut dyn Confirm) -> Result<bool> {
        let present = match self.store.get(id) {
            Some(note) => {
                if !confirm.confirm_delete(note) {
                    tracing::debug!(id = %id, "delete cancelled");
                    return Ok(false);
                }
                true
            }
            None => false,
        };

        self.store.delete(id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Ok(present)
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        self.store.take_warnings()
    }
}
