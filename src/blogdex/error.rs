use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogdexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Document error: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, BlogdexError>;
