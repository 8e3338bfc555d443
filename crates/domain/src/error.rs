//! Domain error types.

use common::PatientId;
use patient_store::StoreError;
use thiserror::Error;

use crate::patient::ValidationError;

/// Errors that can occur during patient operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No patient is stored under the identifier.
    #[error("Patient {0} not found")]
    NotFound(PatientId),

    /// A patient is already stored under the identifier.
    #[error("Patient {0} already exists")]
    AlreadyExists(PatientId),

    /// The requested sort field is not one of the supported fields.
    #[error("Invalid sort field '{0}'. Enter from 'name', 'age', 'bmi', 'height'")]
    InvalidSortField(String),

    /// The requested sort order is neither `asc` nor `desc`.
    #[error("Invalid sort order '{0}'. Enter from 'asc', 'desc'")]
    InvalidSortOrder(String),

    /// A patient record failed attribute validation.
    #[error("Invalid patient: {0}")]
    Validation(#[from] ValidationError),

    /// An error occurred in the patient store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
