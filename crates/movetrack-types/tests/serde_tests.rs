use movetrack_types::{
    Action, FieldValue, ImportRow, MovementRecord, RawMovement, SupplierData, SupplierSlot,
};

#[test]
fn test_record_deserializes_dashboard_json() {
    let json = r#"{
        "id": "2",
        "licensePlate": "XYZ789",
        "vin": "5YJSA1E63MF123456",
        "contractNumber": "CONT-002",
        "sourceStage": "Maintenance",
        "targetStage": "Ready for Sale",
        "dateOfMovement": "2025-04-11",
        "action": "Update",
        "comment": "Maintenance completed",
        "executionDate": "2025-04-11T14:20:00Z",
        "executedBy": "jane.smith@example.com"
    }"#;

    let record: MovementRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id.as_str(), "2");
    assert_eq!(record.license_plate(), "XYZ789");
    assert_eq!(record.movement.target_stage, "Ready for Sale");
    assert_eq!(record.action(), &Action::Update);
    assert_eq!(record.movement.comment.as_deref(), Some("Maintenance completed"));
    assert_eq!(record.execution_date_iso(), "2025-04-11T14:20:00.000Z");
    assert_eq!(record.executed_by, "jane.smith@example.com");

    let back = serde_json::to_value(&record).unwrap();
    let again: MovementRecord = serde_json::from_value(back).unwrap();
    assert_eq!(again, record);
}

#[test]
fn test_raw_movement_tolerates_missing_fields() {
    let raw: RawMovement = serde_json::from_str(r#"{"licensePlate": "A"}"#).unwrap();
    assert_eq!(raw.license_plate, "A");
    assert!(raw.vin.is_empty());
    assert!(raw.action.is_empty());
    assert!(raw.comment.is_none());
}

#[test]
fn test_import_row_carries_optional_actor() {
    let row: ImportRow =
        serde_json::from_str(r#"{"licensePlate": "B", "action": "Move", "executedBy": "ops"}"#)
            .unwrap();
    assert_eq!(row.movement.license_plate, "B");
    assert_eq!(row.movement.action, Action::Other("Move".to_string()));
    assert_eq!(row.executed_by.as_deref(), Some("ops"));

    let row: ImportRow = serde_json::from_str(r#"{"licensePlate": "C"}"#).unwrap();
    assert!(row.executed_by.is_none());
}

#[test]
fn test_supplier_data_from_toml() {
    let input = r#"
[supplier1]
parkingLocation = "Lot A"
parkingPlace = "Spot 42"

[supplier4]
inspectionMileage = 12000
inspectionStatus = "Passed"
"#;

    let data: SupplierData = toml::from_str(input).unwrap();
    assert_eq!(
        data.present_slots(),
        vec![SupplierSlot::Supplier1, SupplierSlot::Supplier4]
    );
    let inspection = data.get(SupplierSlot::Supplier4).unwrap();
    assert_eq!(inspection.get("inspectionMileage"), Some(&FieldValue::from(12000i64)));
    assert_eq!(
        inspection.get("inspectionStatus"),
        Some(&FieldValue::from("Passed"))
    );
}
