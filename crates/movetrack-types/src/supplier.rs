use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// One of the four upstream supplier feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierSlot {
    Supplier1,
    Supplier2,
    Supplier3,
    Supplier4,
}

impl SupplierSlot {
    pub const ALL: [SupplierSlot; 4] = [
        SupplierSlot::Supplier1,
        SupplierSlot::Supplier2,
        SupplierSlot::Supplier3,
        SupplierSlot::Supplier4,
    ];

    /// Key used in supplier data documents
    pub fn key(self) -> &'static str {
        match self {
            SupplierSlot::Supplier1 => "supplier1",
            SupplierSlot::Supplier2 => "supplier2",
            SupplierSlot::Supplier3 => "supplier3",
            SupplierSlot::Supplier4 => "supplier4",
        }
    }

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            SupplierSlot::Supplier1 => "Supplier 1",
            SupplierSlot::Supplier2 => "Supplier 2",
            SupplierSlot::Supplier3 => "Supplier 3",
            SupplierSlot::Supplier4 => "Supplier 4",
        }
    }
}

impl fmt::Display for SupplierSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SupplierSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SupplierSlot::ALL
            .into_iter()
            .find(|slot| slot.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSupplier(s.to_string()))
    }
}

/// Display value of a supplier field: text or number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// Empty text carries no information and is treated like an absent field
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

/// Flat field-name → value mapping published by one supplier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierProfile(BTreeMap<String, FieldValue>);

impl SupplierProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Field value, with blank text reported as absent
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field).filter(|value| !value.is_blank())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read-only supplier data for one vehicle, keyed by supplier slot.
///
/// An absent slot means that supplier has nothing to show for the vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier1: Option<SupplierProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier2: Option<SupplierProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier3: Option<SupplierProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier4: Option<SupplierProfile>,
}

impl SupplierData {
    /// Parse a JSON document. `null` means the vehicle has no supplier data and yields `None`.
    pub fn from_json_str(input: &str) -> Result<Option<Self>> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn with(mut self, slot: SupplierSlot, profile: SupplierProfile) -> Self {
        *self.slot_mut(slot) = Some(profile);
        self
    }

    pub fn get(&self, slot: SupplierSlot) -> Option<&SupplierProfile> {
        match slot {
            SupplierSlot::Supplier1 => self.supplier1.as_ref(),
            SupplierSlot::Supplier2 => self.supplier2.as_ref(),
            SupplierSlot::Supplier3 => self.supplier3.as_ref(),
            SupplierSlot::Supplier4 => self.supplier4.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: SupplierSlot) -> &mut Option<SupplierProfile> {
        match slot {
            SupplierSlot::Supplier1 => &mut self.supplier1,
            SupplierSlot::Supplier2 => &mut self.supplier2,
            SupplierSlot::Supplier3 => &mut self.supplier3,
            SupplierSlot::Supplier4 => &mut self.supplier4,
        }
    }

    /// Slots that carry a profile, in slot order
    pub fn present_slots(&self) -> Vec<SupplierSlot> {
        SupplierSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_slots().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_from_str() {
        assert_eq!("supplier3".parse::<SupplierSlot>().unwrap(), SupplierSlot::Supplier3);
        assert_eq!("Supplier1".parse::<SupplierSlot>().unwrap(), SupplierSlot::Supplier1);
        assert!(matches!(
            "supplier9".parse::<SupplierSlot>(),
            Err(Error::UnknownSupplier(_))
        ));
    }

    #[test]
    fn test_null_document_is_no_data() {
        assert_eq!(SupplierData::from_json_str("null").unwrap(), None);
        assert_eq!(
            SupplierData::from_json_str("{}").unwrap(),
            Some(SupplierData::default())
        );
        assert!(matches!(
            SupplierData::from_json_str("[1, 2]"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_blank_text_is_absent() {
        let profile = SupplierProfile::new().with("make", "").with("model", "Corolla");
        assert!(!profile.contains("make"));
        assert!(profile.contains("model"));
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn test_present_slots_keep_slot_order() {
        let data = SupplierData::default()
            .with(SupplierSlot::Supplier4, SupplierProfile::new().with("version", "1.0"))
            .with(SupplierSlot::Supplier2, SupplierProfile::new().with("make", "Toyota"));
        assert_eq!(
            data.present_slots(),
            vec![SupplierSlot::Supplier2, SupplierSlot::Supplier4]
        );
        assert!(SupplierData::default().is_empty());
    }

    #[test]
    fn test_numbers_and_text_deserialize() {
        let data = SupplierData::from_json_str(r#"{"supplier2": {"make": "Toyota", "km": 15000}}"#)
            .unwrap()
            .unwrap();
        let profile = data.get(SupplierSlot::Supplier2).unwrap();
        assert_eq!(profile.get("km"), Some(&FieldValue::from(15000u64)));
        assert_eq!(profile.get("make").unwrap().to_string(), "Toyota");
        assert!(data.supplier1.is_none());
    }
}
