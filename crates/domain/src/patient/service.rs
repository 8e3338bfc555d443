//! Patient service providing the record operations behind the HTTP API.

use common::{PatientCollection, PatientId, PatientRecord};
use patient_store::PatientStore;
use tokio::sync::Mutex;

use super::{NewPatient, PatientUpdate, SortField, SortOrder, sort_patients};
use crate::error::DomainError;

/// Service for managing patient records.
///
/// Every operation loads the full collection from the store. Mutating
/// operations hold a write lock across their load-modify-save cycle, so two
/// concurrent writes through the same service cannot lose each other's
/// changes. Reads never take the lock.
pub struct PatientService<S: PatientStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: PatientStore> PatientService<S> {
    /// Creates a new patient service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns every stored patient.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<PatientCollection, DomainError> {
        Ok(self.store.load().await?)
    }

    /// Returns the patient stored under `id`.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: &PatientId) -> Result<PatientRecord, DomainError> {
        let mut collection = self.store.load().await?;
        collection
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(id.clone()))
    }

    /// Returns all patients ordered by `field`.
    #[tracing::instrument(skip(self))]
    pub async fn sorted(
        &self,
        field: SortField,
        order: SortOrder,
    ) -> Result<Vec<(PatientId, PatientRecord)>, DomainError> {
        let collection = self.store.load().await?;
        Ok(sort_patients(collection, field, order))
    }

    /// Stores a new patient and returns its normalized identifier.
    #[tracing::instrument(skip(self, patient), fields(patient_id = %patient.id))]
    pub async fn create(&self, patient: NewPatient) -> Result<PatientId, DomainError> {
        let (id, record) = patient.into_validated()?;

        let _guard = self.write_lock.lock().await;
        let mut collection = self.store.load().await?;
        if collection.contains(&id) {
            return Err(DomainError::AlreadyExists(id));
        }
        collection.insert(id.clone(), record);
        self.store.save(&collection).await?;

        metrics::counter!("patients_created_total").increment(1);
        tracing::info!(%id, patients = collection.len(), "patient created");
        Ok(id)
    }

    /// Applies a partial update to the patient stored under `id` and returns
    /// the stored result.
    #[tracing::instrument(skip(self, update))]
    pub async fn update(
        &self,
        id: &PatientId,
        update: PatientUpdate,
    ) -> Result<PatientRecord, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.store.load().await?;
        let existing = collection
            .get(id)
            .ok_or_else(|| DomainError::NotFound(id.clone()))?;

        let merged = update.apply(id, existing)?;
        collection.insert(id.clone(), merged.clone());
        self.store.save(&collection).await?;

        metrics::counter!("patients_updated_total").increment(1);
        tracing::info!(%id, "patient updated");
        Ok(merged)
    }

    /// Removes the patient stored under `id`.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &PatientId) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.store.load().await?;
        if collection.remove(id).is_none() {
            return Err(DomainError::NotFound(id.clone()));
        }
        self.store.save(&collection).await?;

        metrics::counter!("patients_deleted_total").increment(1);
        tracing::info!(%id, patients = collection.len(), "patient deleted");
        Ok(())
    }
}
