use thiserror::Error;

use healthvoice_core::ExtractError;
use healthvoice_store::StorageError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ExtractError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
