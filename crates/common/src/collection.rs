use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{PatientId, PatientRecord};

/// Patient records keyed by identifier, in insertion order.
///
/// Serializes as a single JSON object. Key order is preserved across a
/// load/save cycle and new identifiers are appended at the end, which gives
/// sorting a stable tie-break. A key repeated verbatim in the source JSON
/// keeps its first position and its last value. Two distinct keys that
/// normalize to the same identifier (`"p1"` and `"P1"`) fail deserialization
/// rather than dropping one of the records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientCollection {
    entries: Vec<(PatientId, PatientRecord)>,
}

impl PatientCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &PatientId) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == id)
    }

    pub fn contains(&self, id: &PatientId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &PatientId) -> Option<&PatientRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, record)| record)
    }

    /// Inserts or replaces a record.
    ///
    /// Replacing keeps the entry's position. Returns the previous record, if any.
    pub fn insert(&mut self, id: PatientId, record: PatientRecord) -> Option<PatientRecord> {
        match self.position(&id) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, record)),
            None => {
                self.entries.push((id, record));
                None
            }
        }
    }

    /// Removes a record, keeping the order of the remaining entries.
    pub fn remove(&mut self, id: &PatientId) -> Option<PatientRecord> {
        self.position(id)
            .map(|index| self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PatientId, &PatientRecord)> {
        self.entries.iter().map(|(id, record)| (id, record))
    }

    pub fn ids(&self) -> impl Iterator<Item = &PatientId> {
        self.entries.iter().map(|(id, _)| id)
    }
}

impl IntoIterator for PatientCollection {
    type Item = (PatientId, PatientRecord);
    type IntoIter = std::vec::IntoIter<(PatientId, PatientRecord)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(PatientId, PatientRecord)> for PatientCollection {
    fn from_iter<I: IntoIterator<Item = (PatientId, PatientRecord)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (id, record) in iter {
            collection.insert(id, record);
        }
        collection
    }
}

impl Serialize for PatientCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(id, record)| (id.as_str(), record)))
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = PatientCollection;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object of patient records keyed by identifier")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut collection = PatientCollection::new();
        let mut raw_keys: HashMap<PatientId, String> = HashMap::new();
        while let Some((raw, record)) = map.next_entry::<String, PatientRecord>()? {
            let id = PatientId::new(&raw);
            match raw_keys.get(&id) {
                Some(seen) if *seen != raw => {
                    return Err(de::Error::custom(format!(
                        "identifiers '{seen}' and '{raw}' both normalize to '{id}'"
                    )));
                }
                Some(_) => {}
                None => {
                    raw_keys.insert(id.clone(), raw);
                }
            }
            collection.insert(id, record);
        }
        Ok(collection)
    }
}

impl<'de> Deserialize<'de> for PatientCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}
