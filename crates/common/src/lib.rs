//! Shared types for the patient records service.
//!
//! - [`PatientId`]: case-normalized patient identifier
//! - [`PatientRecord`]: the attributes persisted for each patient
//! - [`PatientCollection`]: insertion-ordered map of identifier to record

mod collection;
mod types;

pub use collection::PatientCollection;
pub use types::{PatientId, PatientRecord};
