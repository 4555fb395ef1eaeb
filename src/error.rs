use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Already initialized. Remove .jotter/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Ambiguous note id '{0}'. Use more characters.")]
    AmbiguousId(String),

    #[error("A note needs a title or some content")]
    EmptyNote,

    #[error("No draft is open")]
    NoDraft,

    #[error("Use --force to delete in non-interactive mode")]
    ConfirmationRequired,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, JotterError>;
