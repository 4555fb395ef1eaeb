use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JotterError, Result};
use crate::storage::DEFAULT_SLOT_KEY;

pub const JOTTER_DIR: &str = ".jotter";
pub const CONFIG_FILE: &str = "config.yaml";
pub const DIR_ENV: &str = "JOTTER_DIR";

/// Settings read from `.jotter/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JotterConfig {
    /// Name of the slot the notes are stored under.
    pub slot_key: String,
    /// Default log filter when `JOTTER_LOG` is unset.
    pub log_level: String,
    /// Characters of content shown in listings.
    pub snippet_length: usize,
}

impl Default for JotterConfig {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            log_level: "warn".to_string(),
            snippet_length: 40,
        }
    }
}

impl JotterConfig {
    /// Load the config in `data_dir`. A missing file gives the defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let mut config: Self = serde_yaml::from_str(&raw)
            .map_err(|e| JotterError::Config(format!("{}: {}", path.display(), e)))?;
        config.slot_key = config.slot_key.trim().to_string();
        config.validate()?;
        Ok(config)
    }

    /// Write this config to `data_dir`.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)?;
        fs::write(data_dir.join(CONFIG_FILE), serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let key = self.slot_key.as_str();
        if key.is_empty() {
            return Err(JotterError::Config("slot_key cannot be empty".to_string()));
        }
        if key.contains(['/', '\\']) {
            return Err(JotterError::Config(format!(
                "slot_key '{}' must not contain path separators",
                key
            )));
        }
        Ok(())
    }
}

/// Resolve the data directory: `$JOTTER_DIR`, else `.jotter/` under the
/// nearest ancestor holding `.jotter/` or `.git/`, else under the current dir.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = env::var_os(DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_project_root(&cwd).join(JOTTER_DIR)
}

fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(JOTTER_DIR).exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}
