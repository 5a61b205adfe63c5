use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid config")]
    Toml(#[from] toml::de::Error),

    #[error("unknown engine {0:?} (expected random, easy, medium or hard)")]
    UnknownEngine(String),
}

pub type ArenaResult<T> = Result<T, ArenaError>;

pub(crate) fn read(path: &std::path::Path) -> ArenaResult<String> {
    std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write(path: &std::path::Path, contents: &str) -> ArenaResult<()> {
    std::fs::write(path, contents).map_err(|source| ArenaError::Io {
        path: path.to_path_buf(),
        source,
    })
}
