//! The durable slot holding the serialized note collection.

mod codec;
mod file_slot;
mod memory_slot;

pub use codec::{decode, encode};
pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;

use crate::error::Result;

/// Default slot key, shared with documents written by earlier versions.
pub const DEFAULT_SLOT_KEY: &str = "notes-v1";

/// A single named key-value slot.
///
/// `read` returns `Ok(None)` when nothing has been written yet. Both calls
/// move the whole document; there is no partial access.
pub trait DurableSlot {
    /// Name of the slot, used in diagnostics.
    fn key(&self) -> &str;

    fn read(&self) -> Result<Option<String>>;

    fn write(&mut self, contents: &str) -> Result<()>;
}
