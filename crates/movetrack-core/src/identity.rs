use chrono::{DateTime, SubsecRound, Utc};
use movetrack_types::{ImportRow, MovementId, MovementRecord, RawMovement};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// `executedBy` for imported rows that do not name an actor
pub const DEFAULT_IMPORT_ACTOR: &str = "CSV Import";

/// Source of fresh movement ids.
///
/// Implementations must never hand out the same id twice within one process,
/// including for calls made within the same millisecond.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> MovementId;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> MovementId {
        MovementId::from(Uuid::new_v4())
    }
}

/// Shared by every `TimestampIdSource` in the process
static TIMESTAMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Time-ordered ids: `<unix millis>-<sequence in base36>`.
///
/// The sequence is one process-wide counter, so ids stay unique within a millisecond and across
/// instances.
pub struct TimestampIdSource {
    clock: Box<dyn Clock>,
}

impl Default for TimestampIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampIdSource {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }
}

impl IdSource for TimestampIdSource {
    fn next_id(&self) -> MovementId {
        let seq = TIMESTAMP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        MovementId::new(format!(
            "{}-{}",
            self.clock.now().timestamp_millis(),
            to_base36(seq)
        ))
    }
}

/// Deterministic `<prefix><n>` ids starting at 1
#[derive(Debug)]
pub struct SequentialIdSource {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> MovementId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        MovementId::new(format!("{}{}", self.prefix, n))
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

/// Wall-clock capability
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Turns raw movements into complete records: id, execution date and actor.
pub struct Assigner {
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    import_actor: String,
}

impl Default for Assigner {
    fn default() -> Self {
        Self::new(UuidIdSource, SystemClock)
    }
}

impl Assigner {
    pub fn new(ids: impl IdSource + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            clock: Box::new(clock),
            import_actor: DEFAULT_IMPORT_ACTOR.to_string(),
        }
    }

    /// Override the `executedBy` sentinel used for imported rows
    pub fn with_import_actor(mut self, actor: impl Into<String>) -> Self {
        self.import_actor = actor.into();
        self
    }

    pub fn import_actor(&self) -> &str {
        &self.import_actor
    }

    /// Execution timestamps carry millisecond precision, the same as their wire format
    fn stamp(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(3)
    }

    /// Enrich a form submission. `actor` is the session identity of the caller.
    pub fn enrich_one(&self, raw: RawMovement, actor: &str) -> MovementRecord {
        MovementRecord {
            id: self.ids.next_id(),
            movement: raw,
            execution_date: self.stamp(),
            executed_by: actor.to_string(),
        }
    }

    /// Enrich one imported row. An explicit, non-blank `executedBy` on the row is kept.
    pub fn enrich_row(&self, row: ImportRow) -> MovementRecord {
        let executed_by = row
            .executed_by
            .filter(|actor| !actor.trim().is_empty())
            .unwrap_or_else(|| self.import_actor.clone());

        MovementRecord {
            id: self.ids.next_id(),
            movement: row.movement,
            execution_date: self.stamp(),
            executed_by,
        }
    }
}
