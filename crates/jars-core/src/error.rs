use thiserror::Error;

use crate::validation::ValidationFailed;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),
    #[error(transparent)]
    Validation(#[from] ValidationFailed),
}
