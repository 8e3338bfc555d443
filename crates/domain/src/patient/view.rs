use common::PatientRecord;
use serde::Serialize;

use super::{Verdict, bmi};

/// A stored patient record together with its derived values, as returned to
/// callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientView {
    pub name: String,
    pub city: String,
    pub age: i64,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub verdict: Verdict,
}

impl From<PatientRecord> for PatientView {
    fn from(record: PatientRecord) -> Self {
        let bmi = bmi(record.height, record.weight);
        Self {
            name: record.name,
            city: record.city,
            age: record.age,
            gender: record.gender,
            height: record.height,
            weight: record.weight,
            bmi,
            verdict: Verdict::from_bmi(bmi),
        }
    }
}
