use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid locale: {0}")]
    InvalidLocale(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
