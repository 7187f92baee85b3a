use std::collections::BTreeMap;

use desk_core::entities::RawRecord;
use desk_core::enums::Collection;

/// Raw records of every collection fetched in one cycle.
///
/// A collection that failed to fetch is present as an empty list and is
/// listed in [`failed`](Self::failed). A collection that was never inserted
/// also reads as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceSnapshot {
    records: BTreeMap<Collection, Vec<RawRecord>>,
    failures: Vec<Collection>,
}

impl SourceSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of one collection, empty when missing or failed.
    #[must_use]
    pub fn records(&self, collection: Collection) -> &[RawRecord] {
        self.records.get(&collection).map_or(&[], Vec::as_slice)
    }

    pub fn insert(&mut self, collection: Collection, records: Vec<RawRecord>) {
        self.records.insert(collection, records);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, collection: Collection, records: Vec<RawRecord>) -> Self {
        self.insert(collection, records);
        self
    }

    /// Record that `collection` could not be fetched. Its records are cleared.
    pub fn mark_failed(&mut self, collection: Collection) {
        self.records.insert(collection, Vec::new());
        if !self.failures.contains(&collection) {
            self.failures.push(collection);
            self.failures.sort();
        }
    }

    #[must_use]
    pub fn is_failed(&self, collection: Collection) -> bool {
        self.failures.contains(&collection)
    }

    /// Failed collections, in declaration order.
    #[must_use]
    pub fn failed(&self) -> &[Collection] {
        &self.failures
    }

    /// Total records across all collections.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_collection_reads_as_empty() {
        let snapshot = SourceSnapshot::new();
        assert!(snapshot.records(Collection::Rooms).is_empty());
        assert!(!snapshot.is_failed(Collection::Rooms));
    }

    #[test]
    fn mark_failed_clears_and_records_once() {
        let mut snapshot =
            SourceSnapshot::new().with(Collection::Feedback, vec![RawRecord::new()]);
        snapshot.mark_failed(Collection::Feedback);
        snapshot.mark_failed(Collection::Rooms);
        snapshot.mark_failed(Collection::Feedback);

        assert!(snapshot.records(Collection::Feedback).is_empty());
        assert_eq!(
            snapshot.failed(),
            &[Collection::Rooms, Collection::Feedback]
        );
        assert_eq!(snapshot.total_records(), 0);
    }
}
