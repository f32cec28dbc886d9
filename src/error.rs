//! Error types. Only startup failures ever reach `main`; everything else is
//! logged where it happens and play continues.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, SnakeError>;

impl From<SnakeError> for ggez::GameError {
    fn from(err: SnakeError) -> Self {
        ggez::GameError::CustomError(err.to_string())
    }
}
