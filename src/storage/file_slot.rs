use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::DurableSlot;

/// A slot stored as `<dir>/<key>.json`.
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: &Path, key: &str) -> Self {
        Self {
            key: key.to_string(),
            path: dir.join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DurableSlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "wrote slot");
        Ok(())
    }
}
