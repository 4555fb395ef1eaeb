use crate::error::{JotterError, Result};

use super::{DurableSlot, DEFAULT_SLOT_KEY};

/// In-memory slot, with switches to simulate an unavailable medium.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    contents: Option<String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with a raw document.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    pub fn fail_reads(mut self, fail: bool) -> Self {
        self.fail_reads = fail;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DurableSlot for MemorySlot {
    fn key(&self) -> &str {
        DEFAULT_SLOT_KEY
    }

    fn read(&self) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(JotterError::Storage("slot is unavailable".to_string()));
        }
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.fail_writes {
            return Err(JotterError::Storage("quota exceeded".to_string()));
        }
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
