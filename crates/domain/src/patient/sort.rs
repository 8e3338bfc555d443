//! Ordering of the patient collection.

use std::cmp::Ordering;
use std::str::FromStr;

use common::{PatientCollection, PatientId, PatientRecord};

use super::bmi;
use crate::error::DomainError;

/// Attribute a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Age,
    /// Derived from height and weight for each record before comparing.
    Bmi,
    Height,
}

impl SortField {
    fn compare(self, a: &PatientRecord, b: &PatientRecord) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Height => a.height.total_cmp(&b.height),
            SortField::Bmi => bmi(a.height, a.weight).total_cmp(&bmi(b.height, b.weight)),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            "bmi" => Ok(SortField::Bmi),
            "height" => Ok(SortField::Height),
            other => Err(DomainError::InvalidSortField(other.to_string())),
        }
    }
}

/// Direction of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DomainError::InvalidSortOrder(other.to_string())),
        }
    }
}

/// Returns the collection's entries ordered by `field`.
///
/// The sort is stable in both directions: records that compare equal keep
/// their collection order.
pub fn sort_patients(
    collection: PatientCollection,
    field: SortField,
    order: SortOrder,
) -> Vec<(PatientId, PatientRecord)> {
    let mut entries: Vec<_> = collection.into_iter().collect();
    entries.sort_by(|(_, a), (_, b)| {
        let ordering = field.compare(a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    entries
}
