use async_trait::async_trait;

use crate::{PatientCollection, Result};

/// Load/save contract for the patient collection.
///
/// Implementations hand out and accept the complete collection; there are no
/// partial reads or writes. Callers that modify the collection are
/// responsible for serializing their read-modify-write cycles.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Loads the entire collection.
    async fn load(&self) -> Result<PatientCollection>;

    /// Replaces the stored collection with `collection`.
    async fn save(&self, collection: &PatientCollection) -> Result<()>;
}
