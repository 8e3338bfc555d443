use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{PatientCollection, Result, StoreError, store::PatientStore};

/// Patient store backed by a single JSON file.
///
/// The file holds one JSON object keyed by patient identifier. Every load
/// reads the whole file and every save rewrites it. Saves go through a
/// temporary sibling file that is renamed over the target, so an interrupted
/// write leaves the previous contents in place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the file at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty collection if the backing file does not exist yet.
    ///
    /// Returns true if a new file was created.
    pub async fn create_if_missing(&self) -> Result<bool> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        if exists {
            return Ok(false);
        }

        self.save(&PatientCollection::new()).await?;
        tracing::info!(path = %self.path.display(), "created empty patient store");
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl PatientStore for JsonFileStore {
    async fn load(&self) -> Result<PatientCollection> {
        let start = std::time::Instant::now();

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        let collection: PatientCollection =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        metrics::histogram!("patient_store_load_duration_seconds")
            .record(start.elapsed().as_secs_f64());
        tracing::debug!(
            path = %self.path.display(),
            patients = collection.len(),
            "loaded patient store"
        );
        Ok(collection)
    }

    async fn save(&self, collection: &PatientCollection) -> Result<()> {
        let start = std::time::Instant::now();

        let bytes = serde_json::to_vec_pretty(collection)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        metrics::histogram!("patient_store_save_duration_seconds")
            .record(start.elapsed().as_secs_f64());
        tracing::debug!(
            path = %self.path.display(),
            patients = collection.len(),
            "saved patient store"
        );
        Ok(())
    }
}
