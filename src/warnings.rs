//! Non-fatal problems surfaced to the caller after a note operation.

/// A problem that did not stop the operation but that the user should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Writing the collection to the slot failed; the change lives only in memory.
    PersistFailed { slot: String, reason: String },
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::PersistFailed { slot, reason } => {
            format!(
                "Warning: could not save notes to '{}' ({}) - changes are not persisted",
                slot, reason
            )
        }
    }
}
