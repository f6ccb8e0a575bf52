//! Sample data. Nothing here is ever loaded by the CLI on its own; tests place it explicitly.

use chrono::{TimeZone, Utc};
use movetrack_types::{Action, MovementRecord, RawMovement};

/// Two complete rows; the second carries its own executedBy
pub const SAMPLE_CSV: &str = "\
licensePlate,vin,contractNumber,sourceStage,targetStage,dateOfMovement,action,comment,executedBy
ABC123,1HGCM82633A123456,CONT-001,Inspection,Maintenance,2025-04-10,Create,Initial inspection complete,
XYZ789,5YJSA1E63MF123456,CONT-002,Maintenance,Ready for Sale,2025-04-11,Update,,fleet@example.com
";

/// Row 2 has no VIN and no contract number
pub const INCOMPLETE_CSV: &str = "\
licensePlate,vin,contractNumber,sourceStage,targetStage,dateOfMovement,action
DEF456,JH4KA7561PC008269,CONT-003,Ready for Sale,Sold,2025-04-12,Update
GHI012,,,Sold,Delivered,2025-04-13,Update
";

pub const SUPPLIER_JSON: &str = r#"{
  "supplier1": {
    "firstRegistrationDate": "2023-01-15",
    "startDate": "2023-02-01",
    "parkingLocation": "Lot A",
    "parkingPlace": "Spot 42"
  },
  "supplier2": {
    "make": "Toyota",
    "model": "Corolla",
    "km": 45000,
    "gateIn": "2024-03-01"
  },
  "supplier4": {
    "inspectionStatus": "Passed",
    "inspectionMileage": 12000,
    "parkingSpace": "Garage 5"
  }
}
"#;

pub fn inspection_movement() -> RawMovement {
    RawMovement {
        license_plate: "ABC123".to_string(),
        vin: "1HGCM82633A123456".to_string(),
        contract_number: "CONT-001".to_string(),
        source_stage: "Inspection".to_string(),
        target_stage: "Maintenance".to_string(),
        date_of_movement: "2025-04-10".to_string(),
        action: Action::Create,
        comment: Some("Initial inspection complete".to_string()),
    }
}

/// Two stored records, newest first
pub fn sample_records() -> Vec<MovementRecord> {
    vec![
        MovementRecord {
            id: "2".into(),
            movement: RawMovement {
                license_plate: "XYZ789".to_string(),
                vin: "5YJSA1E63MF123456".to_string(),
                contract_number: "CONT-002".to_string(),
                source_stage: "Maintenance".to_string(),
                target_stage: "Ready for Sale".to_string(),
                date_of_movement: "2025-04-11".to_string(),
                action: Action::Update,
                comment: Some("Maintenance completed".to_string()),
            },
            execution_date: Utc.with_ymd_and_hms(2025, 4, 11, 14, 20, 0).unwrap(),
            executed_by: "jane.smith@example.com".to_string(),
        },
        MovementRecord {
            id: "1".into(),
            movement: inspection_movement(),
            execution_date: Utc.with_ymd_and_hms(2025, 4, 10, 10, 30, 0).unwrap(),
            executed_by: "john.doe@example.com".to_string(),
        },
    ]
}

/// `sample_records()` as the JSON a snapshot file holds
pub fn sample_snapshot_json() -> String {
    serde_json::to_string_pretty(&sample_records()).expect("sample records serialize")
}
