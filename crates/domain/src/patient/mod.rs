//! Patient records and related types.

mod input;
mod service;
mod sort;
mod view;
mod vitals;

pub use input::{NewPatient, PatientUpdate};
pub use service::PatientService;
pub use sort::{SortField, SortOrder, sort_patients};
pub use view::PatientView;
pub use vitals::{Verdict, bmi};

use thiserror::Error;

/// Attribute rules a patient record must satisfy before it is stored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The identifier is empty or whitespace.
    #[error("Patient ID is required")]
    BlankId,

    /// Height must be a finite, positive number of meters.
    #[error("Invalid height: {0} (must be greater than 0)")]
    InvalidHeight(f64),

    /// Weight must be a finite, positive number of kilograms.
    #[error("Invalid weight: {0} (must be greater than 0)")]
    InvalidWeight(f64),

    /// Height and weight are individually valid but their BMI is not a
    /// finite number.
    #[error("Invalid measurements: height {height} and weight {weight} give no finite BMI")]
    NonFiniteBmi { height: f64, weight: f64 },

    /// Age cannot be negative.
    #[error("Invalid age: {0} (must not be negative)")]
    NegativeAge(i64),
}
