//! Domain layer for the patient records service.
//!
//! This crate provides:
//! - BMI derivation and the verdict classification
//! - Validated create and partial-update inputs
//! - Sorting of the collection by stored or derived attributes
//! - `PatientService`, which runs each request's read-modify-write cycle

pub mod error;
pub mod patient;

pub use error::DomainError;
pub use patient::{
    NewPatient, PatientService, PatientUpdate, PatientView, SortField, SortOrder,
    ValidationError, Verdict, bmi, sort_patients,
};
