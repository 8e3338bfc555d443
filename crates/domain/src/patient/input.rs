//! Request payloads for creating and updating patients.

use common::{PatientId, PatientRecord};
use serde::Deserialize;

use super::{ValidationError, bmi};

/// A complete patient record as submitted for creation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
    pub id: String,
    pub name: String,
    pub city: String,
    pub age: i64,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
}

impl NewPatient {
    /// Validates the attributes and splits the payload into its normalized
    /// identifier and the record to store under it.
    pub fn into_validated(self) -> Result<(PatientId, PatientRecord), ValidationError> {
        let id = PatientId::new(&self.id);
        let record = PatientRecord {
            name: self.name,
            city: self.city,
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
        };
        validate(&id, &record)?;
        Ok((id, record))
    }
}

/// A partial patient record. Only the attributes present are applied.
///
/// An `id` in the payload is accepted but never changes the identifier the
/// record is stored under. `null` is treated the same as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatientUpdate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl PatientUpdate {
    /// Merges the supplied attributes onto `existing` and validates the
    /// result as a full record stored under `id`.
    pub fn apply(
        self,
        id: &PatientId,
        existing: &PatientRecord,
    ) -> Result<PatientRecord, ValidationError> {
        let merged = PatientRecord {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            city: self.city.unwrap_or_else(|| existing.city.clone()),
            age: self.age.unwrap_or(existing.age),
            gender: self.gender.unwrap_or_else(|| existing.gender.clone()),
            height: self.height.unwrap_or(existing.height),
            weight: self.weight.unwrap_or(existing.weight),
        };
        validate(id, &merged)?;
        Ok(merged)
    }
}

/// Rules shared by create and update.
fn validate(id: &PatientId, record: &PatientRecord) -> Result<(), ValidationError> {
    if id.is_blank() {
        return Err(ValidationError::BlankId);
    }
    if !(record.height.is_finite() && record.height > 0.0) {
        return Err(ValidationError::InvalidHeight(record.height));
    }
    if !(record.weight.is_finite() && record.weight > 0.0) {
        return Err(ValidationError::InvalidWeight(record.weight));
    }
    if !bmi(record.height, record.weight).is_finite() {
        return Err(ValidationError::NonFiniteBmi {
            height: record.height,
            weight: record.weight,
        });
    }
    if record.age < 0 {
        return Err(ValidationError::NegativeAge(record.age));
    }
    Ok(())
}
