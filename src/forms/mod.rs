//! Form definitions backing the garage routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod planning;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid dossier id")]
    InvalidDossierId,

    #[error("invalid date, expected YYYY-MM-DD")]
    InvalidDate,
}
