use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodescapeError {
    #[error("parser not initialized, call initialize() first")]
    NotInitialized,

    #[error("failed to parse source code")]
    ParseFailure,

    #[error("failed to load Java grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CodescapeError>;

impl From<CodescapeError> for io::Error {
    fn from(err: CodescapeError) -> Self {
        match err {
            CodescapeError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
