use serde::{Deserialize, Serialize};

/// Caller-supplied identifier for a patient record.
///
/// Identifiers are normalized to uppercase on construction, so `"p1"` and
/// `"P1"` name the same patient wherever they enter the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PatientId(String);

impl PatientId {
    /// Creates a patient ID, upper-casing the raw value.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_uppercase())
    }

    /// Returns the normalized identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PatientId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PatientId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PatientId> for String {
    fn from(id: PatientId) -> Self {
        id.0
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Attributes stored for one patient.
///
/// The identifier is not part of the record; it is the key the record is
/// stored under. Derived values such as BMI are never persisted. Unknown keys
/// in stored JSON are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub city: String,
    pub age: i64,
    pub gender: String,
    /// Height in meters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
}
