use movetrack_types::RawMovement;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Fields a movement needs before it is meaningful on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    LicensePlate,
    Vin,
    ContractNumber,
    SourceStage,
    TargetStage,
    DateOfMovement,
    Action,
}

impl RequiredField {
    pub const ALL: [RequiredField; 7] = [
        RequiredField::LicensePlate,
        RequiredField::Vin,
        RequiredField::ContractNumber,
        RequiredField::SourceStage,
        RequiredField::TargetStage,
        RequiredField::DateOfMovement,
        RequiredField::Action,
    ];

    /// Wire name (camelCase), also the CSV header
    pub fn name(self) -> &'static str {
        match self {
            RequiredField::LicensePlate => "licensePlate",
            RequiredField::Vin => "vin",
            RequiredField::ContractNumber => "contractNumber",
            RequiredField::SourceStage => "sourceStage",
            RequiredField::TargetStage => "targetStage",
            RequiredField::DateOfMovement => "dateOfMovement",
            RequiredField::Action => "action",
        }
    }

    fn value(self, raw: &RawMovement) -> &str {
        match self {
            RequiredField::LicensePlate => &raw.license_plate,
            RequiredField::Vin => &raw.vin,
            RequiredField::ContractNumber => &raw.contract_number,
            RequiredField::SourceStage => &raw.source_stage,
            RequiredField::TargetStage => &raw.target_stage,
            RequiredField::DateOfMovement => &raw.date_of_movement,
            RequiredField::Action => raw.action.as_str(),
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Required fields that are empty or whitespace-only, in declaration order
pub fn missing_fields(raw: &RawMovement) -> Vec<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| field.value(raw).trim().is_empty())
        .collect()
}

/// Whether the store rejects movements with missing required fields.
///
/// `Permissive` accepts rows as given and leaves checking to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    #[default]
    Permissive,
    RequireFields,
}

impl ValidationPolicy {
    /// `row` is the 1-based batch position, used only for the error message
    pub fn check(self, raw: &RawMovement, row: Option<usize>) -> Result<()> {
        if self == ValidationPolicy::Permissive {
            return Ok(());
        }

        let missing = missing_fields(raw);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation { row, missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movetrack_types::Action;

    fn complete() -> RawMovement {
        RawMovement {
            license_plate: "ABC123".to_string(),
            vin: "1HGCM82633A123456".to_string(),
            contract_number: "CONT-001".to_string(),
            source_stage: "Inspection".to_string(),
            target_stage: "Maintenance".to_string(),
            date_of_movement: "2025-04-10".to_string(),
            action: Action::Create,
            comment: None,
        }
    }

    #[test]
    fn test_complete_movement_has_no_missing_fields() {
        assert!(missing_fields(&complete()).is_empty());
    }

    #[test]
    fn test_blank_fields_are_missing() {
        let raw = RawMovement {
            vin: "  ".to_string(),
            action: Action::default(),
            ..complete()
        };
        assert_eq!(
            missing_fields(&raw),
            vec![RequiredField::Vin, RequiredField::Action]
        );
    }

    #[test]
    fn test_comment_is_not_required() {
        let raw = complete();
        assert!(raw.comment.is_none());
        assert!(ValidationPolicy::RequireFields.check(&raw, None).is_ok());
    }

    #[test]
    fn test_permissive_accepts_anything() {
        assert!(
            ValidationPolicy::Permissive
                .check(&RawMovement::default(), Some(1))
                .is_ok()
        );
    }

    #[test]
    fn test_require_fields_reports_row() {
        let raw = RawMovement {
            license_plate: String::new(),
            ..complete()
        };
        let err = ValidationPolicy::RequireFields
            .check(&raw, Some(3))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 3: missing required fields: licensePlate"
        );
    }
}
