use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{PatientCollection, Result, store::PatientStore};

/// In-memory patient store for testing.
///
/// Clones share the same underlying collection.
#[derive(Clone, Default)]
pub struct InMemoryPatientStore {
    collection: Arc<RwLock<PatientCollection>>,
}

impl InMemoryPatientStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `collection`.
    pub fn with_collection(collection: PatientCollection) -> Self {
        Self {
            collection: Arc::new(RwLock::new(collection)),
        }
    }

    /// Returns the number of stored records.
    pub async fn patient_count(&self) -> usize {
        self.collection.read().await.len()
    }
}

#[async_trait]
impl PatientStore for InMemoryPatientStore {
    async fn load(&self) -> Result<PatientCollection> {
        Ok(self.collection.read().await.clone())
    }

    async fn save(&self, collection: &PatientCollection) -> Result<()> {
        *self.collection.write().await = collection.clone();
        Ok(())
    }
}
