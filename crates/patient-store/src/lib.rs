//! Storage for the patient collection.
//!
//! The whole collection is loaded and saved as a unit. Two implementations:
//! - [`JsonFileStore`]: a single JSON file on disk
//! - [`InMemoryPatientStore`]: for tests and benchmarks

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use common::{PatientCollection, PatientId, PatientRecord};
pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use memory::InMemoryPatientStore;
pub use store::PatientStore;
