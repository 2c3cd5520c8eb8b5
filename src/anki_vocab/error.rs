use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("File '{}' not found!", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Package(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VocabError>;
