//! Records stored in JSON collection files and the replace-or-append rules
//! shared by every collection kind.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// An entity stored in a collection file and addressed by `id`.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human readable kind used in log lines and error messages.
    const KIND: &'static str;

    /// The record identifier, unique within its collection.
    fn id(&self) -> &str;
}

/// What a save did to its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No record with the id existed; the record was appended.
    Inserted { index: usize },
    /// A record with the id was overwritten in place.
    Replaced { index: usize },
}

/// Replaces the record with a matching id in place, or appends it.
pub fn upsert<R: Record>(records: &mut Vec<R>, record: R) -> Upsert {
    match records.iter().position(|r| r.id() == record.id()) {
        Some(index) => {
            records[index] = record;
            Upsert::Replaced { index }
        }
        None => {
            records.push(record);
            Upsert::Inserted {
                index: records.len() - 1,
            }
        }
    }
}

/// Removes every record with the given id. Returns how many were removed.
pub fn remove<R: Record>(records: &mut Vec<R>, id: &str) -> usize {
    let before = records.len();
    records.retain(|r| r.id() != id);
    before - records.len()
}

/// Linear search by id.
pub fn find<'a, R: Record>(records: &'a [R], id: &str) -> Option<&'a R> {
    records.iter().find(|r| r.id() == id)
}

/// Ids that appear more than once, in order of their second occurrence.
pub fn duplicate_ids<R: Record>(records: &[R]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for record in records {
        if !seen.insert(record.id()) && !duplicates.iter().any(|d| d == record.id()) {
            duplicates.push(record.id().to_string());
        }
    }
    duplicates
}
