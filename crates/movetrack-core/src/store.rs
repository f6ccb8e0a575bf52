use movetrack_types::{ImportRow, MovementId, MovementRecord, RawMovement};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use crate::identity::Assigner;
use crate::validation::ValidationPolicy;
use crate::{Error, ListenerError, Result};

// NOTE: Snapshot replacement
//
// Every ingestion builds a complete new list next to the current one:
//   1. check the validation policy for every incoming row
//   2. enrich (id, executionDate, executedBy)
//   3. reject ids already present in the store
//   4. hand the candidate snapshot to every listener
//   5. swap the store's snapshot pointer
// Any failure before step 5 returns an error and the old snapshot remains current.
// Snapshots are shared read-only (`Arc<[MovementRecord]>`); nothing mutates them in place.

/// Full ordered list of movement records at one point in time, newest first
#[derive(Debug, Clone)]
pub struct Snapshot(Arc<[MovementRecord]>);

impl Snapshot {
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    pub fn records(&self) -> &[MovementRecord] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovementRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&MovementRecord> {
        self.0.first()
    }

    /// True when both handles point at the very same snapshot
    pub fn same_as(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<MovementRecord>> for Snapshot {
    fn from(records: Vec<MovementRecord>) -> Self {
        Self(Arc::from(records))
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other) || self.records() == other.records()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records().serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a MovementRecord;
    type IntoIter = std::slice::Iter<'a, MovementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Display collaborator seam: receives every new snapshot before it becomes current.
pub trait SnapshotListener {
    fn on_snapshot(&self, snapshot: &Snapshot) -> std::result::Result<(), ListenerError>;
}

impl<F> SnapshotListener for F
where
    F: Fn(&Snapshot) -> std::result::Result<(), ListenerError>,
{
    fn on_snapshot(&self, snapshot: &Snapshot) -> std::result::Result<(), ListenerError> {
        self(snapshot)
    }
}

/// Owns the movement list for one session.
pub struct MovementStore {
    assigner: Assigner,
    policy: ValidationPolicy,
    snapshot: Snapshot,
    ids: HashSet<MovementId>,
    listeners: Vec<Box<dyn SnapshotListener>>,
}

impl MovementStore {
    /// Store with no movements
    pub fn new(assigner: Assigner) -> Self {
        Self {
            assigner,
            policy: ValidationPolicy::default(),
            snapshot: Snapshot::empty(),
            ids: HashSet::new(),
            listeners: Vec::new(),
        }
    }

    /// Store seeded with caller-supplied records (kept in the given order).
    ///
    /// Fails if the records contain the same id twice.
    pub fn with_records(assigner: Assigner, records: Vec<MovementRecord>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(records.len());
        for record in &records {
            if !ids.insert(record.id.clone()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            ids,
            snapshot: Snapshot::from(records),
            ..Self::new(assigner)
        })
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Register a display collaborator
    pub fn subscribe(&mut self, listener: impl SnapshotListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current snapshot; repeated calls without an add return the same snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Add one movement submitted by `actor` and prepend it
    pub fn add_one(&mut self, raw: RawMovement, actor: &str) -> Result<Snapshot> {
        self.policy.check(&raw, None)?;

        let record = self.assigner.enrich_one(raw, actor);
        debug!(id = %record.id, plate = %record.license_plate(), "movement added");

        self.commit(vec![record])
    }

    /// Add a batch (e.g. one CSV file) and prepend it as a block in input order.
    ///
    /// Every row is checked before any row is enriched; one bad row rejects the batch.
    pub fn add_many(&mut self, rows: Vec<ImportRow>) -> Result<Snapshot> {
        if rows.is_empty() {
            return Ok(self.snapshot());
        }

        for (index, row) in rows.iter().enumerate() {
            self.policy.check(&row.movement, Some(index + 1))?;
        }

        let batch: Vec<MovementRecord> = rows
            .into_iter()
            .map(|row| self.assigner.enrich_row(row))
            .collect();

        let count = batch.len();
        let snapshot = self.commit(batch)?;
        info!(count, total = snapshot.len(), "movements imported");

        Ok(snapshot)
    }

    fn commit(&mut self, batch: Vec<MovementRecord>) -> Result<Snapshot> {
        let mut fresh = HashSet::with_capacity(batch.len());
        for record in &batch {
            if self.ids.contains(&record.id) || !fresh.insert(record.id.clone()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }

        let mut records = Vec::with_capacity(batch.len() + self.snapshot.len());
        records.extend(batch);
        records.extend(self.snapshot.iter().cloned());
        let next = Snapshot::from(records);

        for listener in &self.listeners {
            listener.on_snapshot(&next)?;
        }

        self.ids.extend(fresh);
        self.snapshot = next.clone();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{FixedClock, IdSource, SequentialIdSource, SystemClock};
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;

    type ListenResult = std::result::Result<(), ListenerError>;

    fn store() -> MovementStore {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 4, 12, 8, 0, 0).unwrap());
        MovementStore::new(Assigner::new(SequentialIdSource::new("m"), clock))
    }

    fn plate(plate: &str) -> RawMovement {
        RawMovement {
            license_plate: plate.to_string(),
            ..Default::default()
        }
    }

    struct RepeatingIds;

    impl IdSource for RepeatingIds {
        fn next_id(&self) -> MovementId {
            MovementId::new("same")
        }
    }

    #[test]
    fn test_add_one_prepends() {
        let mut store = store();
        store.add_one(plate("OLD"), "a").unwrap();
        let snapshot = store.add_one(plate("NEW"), "a").unwrap();

        let plates: Vec<_> = snapshot.iter().map(|r| r.license_plate()).collect();
        assert_eq!(plates, vec!["NEW", "OLD"]);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut store = store();
        store.add_one(plate("A"), "a").unwrap();
        let before = store.snapshot();

        let after = store.add_many(Vec::new()).unwrap();
        assert!(after.same_as(&before));
    }

    #[test]
    fn test_listener_sees_each_snapshot_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = store();
        store.subscribe(move |snapshot: &Snapshot| -> ListenResult {
            sink.borrow_mut().push(snapshot.len());
            Ok(())
        });

        store.add_one(plate("A"), "a").unwrap();
        store
            .add_many(vec![plate("B").into(), plate("C").into()])
            .unwrap();

        assert_eq!(*seen.borrow(), vec![1, 3]);
    }

    #[test]
    fn test_listener_failure_keeps_previous_snapshot() {
        let mut store = store();
        store.add_one(plate("A"), "a").unwrap();
        let before = store.snapshot();

        store.subscribe(|_: &Snapshot| -> ListenResult {
            Err(ListenerError::new("renderer offline"))
        });
        let err = store.add_one(plate("B"), "a").unwrap_err();

        assert!(matches!(err, Error::Listener(_)));
        assert!(store.snapshot().same_as(&before));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = MovementStore::new(Assigner::new(RepeatingIds, SystemClock));
        store.add_one(plate("A"), "a").unwrap();

        let err = store.add_one(plate("B"), "a").unwrap_err();
        assert!(matches!(err, Error::DuplicateId(ref id) if id.as_str() == "same"));
        assert_eq!(store.len(), 1);

        let err = store.add_many(vec![plate("C").into()]).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_records_rejects_duplicate_seed_ids() {
        let mut seed_store = store();
        let snapshot = seed_store.add_one(plate("A"), "a").unwrap();
        let record = snapshot.first().unwrap().clone();

        let result = MovementStore::with_records(Assigner::default(), vec![record.clone(), record]);
        assert!(matches!(result, Err(Error::DuplicateId(_))));
    }

    #[test]
    fn test_seeded_ids_are_reserved() {
        let mut seed_store = store();
        let seeded = seed_store.add_one(plate("A"), "a").unwrap().records().to_vec();

        // Same prefix: the next generated id ("m1") collides with the seed.
        let mut store = MovementStore::with_records(
            Assigner::new(SequentialIdSource::new("m"), SystemClock),
            seeded,
        )
        .unwrap();
        assert!(matches!(
            store.add_one(plate("B"), "a"),
            Err(Error::DuplicateId(_))
        ));
    }
}
