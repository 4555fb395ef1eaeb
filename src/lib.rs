pub mod cli;
pub mod clock;
pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod search;
pub mod session;
pub mod storage;
pub mod store;
pub mod warnings;

pub use config::JotterConfig;
pub use entity::Note;
pub use error::{JotterError, Result};
pub use session::{Confirm, DraftKind, Session};
pub use storage::{DurableSlot, FileSlot, MemorySlot};
pub use store::NoteStore;
