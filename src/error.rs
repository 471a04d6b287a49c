use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReelmatchError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("{kind} not found in workspace: {id}")]
    EntityNotFound { kind: &'static str, id: String },

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReelmatchError>;
