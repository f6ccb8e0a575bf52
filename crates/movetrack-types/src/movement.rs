use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

use crate::{Error, Result};

// NOTE: Record lifecycle
//
// RawMovement (form / CSV row) --enrich--> MovementRecord --prepend--> snapshot
//
// - id, executionDate and executedBy are never taken from the form; they are assigned at
//   ingestion time by the store's assigner.
// - A record is immutable once it is part of a snapshot. There is no update or delete path.
// - Required-field checks are an opt-in policy of the store; the types accept empty values.

/// Unique movement identifier (unique within one store)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementId(String);

impl MovementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MovementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MovementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MovementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Uuid> for MovementId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for MovementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Movement action.
///
/// `Create` and `Update` are what the dashboard form offers; CSV imports may carry any
/// other label, which is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Create,
    Update,
    Other(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::Create => "Create",
            Action::Update => "Update",
            Action::Other(label) => label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Other(String::new())
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Create" => Action::Create,
            "Update" => Action::Update,
            _ => Action::Other(s),
        }
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        Action::from(s.to_string())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied part of a movement (form submit or one CSV row).
///
/// Missing required fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMovement {
    pub license_plate: String,
    pub vin: String,
    pub contract_number: String,

    /// Origin logistics stage (e.g. "Inspection")
    pub source_stage: String,

    /// Destination logistics stage (e.g. "Maintenance")
    pub target_stage: String,

    /// Date of the physical movement, as entered (e.g. "2025-04-10")
    pub date_of_movement: String,

    pub action: Action,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl RawMovement {
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// One row of a bulk import.
///
/// `executed_by`, when present, wins over the import sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRow {
    #[serde(flatten)]
    pub movement: RawMovement,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_by: Option<String>,
}

impl ImportRow {
    pub fn new(movement: RawMovement) -> Self {
        Self {
            movement,
            executed_by: None,
        }
    }

    pub fn executed_by(mut self, actor: impl Into<String>) -> Self {
        self.executed_by = Some(actor.into());
        self
    }
}

impl From<RawMovement> for ImportRow {
    fn from(movement: RawMovement) -> Self {
        Self::new(movement)
    }
}

/// A complete, enriched movement record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    pub id: MovementId,

    #[serde(flatten)]
    pub movement: RawMovement,

    /// Ingestion time (UTC), never user-supplied
    #[serde(with = "iso8601")]
    pub execution_date: DateTime<Utc>,

    /// Actor identity: session user for single adds, sentinel or row value for imports
    pub executed_by: String,
}

impl MovementRecord {
    pub fn license_plate(&self) -> &str {
        &self.movement.license_plate
    }

    pub fn vin(&self) -> &str {
        &self.movement.vin
    }

    pub fn action(&self) -> &Action {
        &self.movement.action
    }

    /// `executionDate` in the wire format (millisecond precision, `Z` suffix)
    pub fn execution_date_iso(&self) -> String {
        format_timestamp(&self.execution_date)
    }
}

/// Format a timestamp as ISO-8601 with millisecond precision (`2025-04-10T10:30:00.000Z`)
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse any RFC 3339 timestamp into UTC
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

mod iso8601 {
    use super::*;

    pub fn serialize<S: Serializer>(
        ts: &DateTime<Utc>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
