//! End-to-end tests for `suppliers`.

use movetrack_testing::{TestWorld, fixtures};

fn tab_labels(json: &serde_json::Value) -> Vec<String> {
    json["content"]["view"]["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tab| tab["label"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_only_present_suppliers_get_tabs() {
    let world = TestWorld::new();
    let file = world
        .write_file("supplier.json", fixtures::SUPPLIER_JSON)
        .unwrap();

    let json = world
        .run_json(&["suppliers", file.to_str().unwrap()])
        .unwrap();

    assert_eq!(json["content"]["view"]["state"], "tabs");
    assert_eq!(
        tab_labels(&json),
        vec!["Supplier 1", "Supplier 2", "Supplier 4"]
    );
    assert_eq!(json["content"]["view"]["selected"], 0);
}

#[test]
fn test_tab_selection_by_supplier() {
    let world = TestWorld::new();
    let file = world
        .write_file("supplier.json", fixtures::SUPPLIER_JSON)
        .unwrap();

    let json = world
        .run_json(&["suppliers", file.to_str().unwrap(), "--tab", "supplier4"])
        .unwrap();
    assert_eq!(json["content"]["view"]["selected"], 2);

    let sections = &json["content"]["view"]["tabs"][2]["sections"];
    assert_eq!(sections[0]["title"], "Inspection Details");
    assert_eq!(sections[1]["title"], "Inspection Information");
    assert_eq!(sections[1]["rows"][1]["label"], "Mileage");
    assert_eq!(sections[1]["rows"][1]["value"], "12000 km");
}

#[test]
fn test_tab_name_is_case_insensitive() {
    let world = TestWorld::new();
    let file = world
        .write_file("supplier.json", fixtures::SUPPLIER_JSON)
        .unwrap();

    let json = world
        .run_json(&["suppliers", file.to_str().unwrap(), "--tab", "Supplier2"])
        .unwrap();
    assert_eq!(json["content"]["view"]["selected"], 1);
    assert_eq!(json["content"]["view"]["tabs"][1]["slot"], "supplier2");
}

#[test]
fn test_missing_supplier_tab_keeps_default() {
    let world = TestWorld::new();
    let file = world
        .write_file("supplier.json", fixtures::SUPPLIER_JSON)
        .unwrap();

    let json = world
        .run_json(&["suppliers", file.to_str().unwrap(), "--tab", "supplier3"])
        .unwrap();
    assert_eq!(json["content"]["view"]["selected"], 0);
}

#[test]
fn test_plain_output_shows_selected_tab() {
    let world = TestWorld::new();
    let file = world
        .write_file("supplier.json", fixtures::SUPPLIER_JSON)
        .unwrap();

    let result = world.run(&["suppliers", file.to_str().unwrap()]).unwrap();
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("[Supplier 1] | Supplier 2 | Supplier 4"));
    assert!(stdout.contains("Administrative Data"));
    assert!(stdout.contains("Parking Information"));
    assert!(stdout.contains("Spot 42"));
    assert!(!stdout.contains("Toyota"));
}

#[test]
fn test_plain_output_all_tabs() {
    let world = TestWorld::new();
    let file = world
        .write_file("supplier.json", fixtures::SUPPLIER_JSON)
        .unwrap();

    let result = world
        .run(&["suppliers", file.to_str().unwrap(), "--all"])
        .unwrap();
    let stdout = result.stdout();
    assert!(stdout.contains("== Supplier 2 =="));
    assert!(stdout.contains("Toyota"));
    assert!(stdout.contains("Garage 5"));
}

#[test]
fn test_no_supplier_data() {
    let world = TestWorld::new();
    let null_file = world.write_file("null.json", "null").unwrap();
    let empty_file = world.write_file("empty.json", "{}").unwrap();

    for file in [null_file, empty_file] {
        let json = world
            .run_json(&["suppliers", file.to_str().unwrap()])
            .unwrap();
        assert_eq!(json["content"]["view"]["state"], "no_data");
        assert_eq!(json["badge"]["label"], "No supplier data available");
    }

    let result = world
        .run(&["suppliers", world.temp_dir().join("empty.json").to_str().unwrap()])
        .unwrap();
    assert!(result.stdout().contains("No supplier data available for this vehicle."));
}

#[test]
fn test_toml_supplier_file() {
    let world = TestWorld::new();
    let file = world
        .write_file(
            "supplier.toml",
            "[supplier3]\nstatus = \"In Transit\"\nloadingTime = \"08:00\"\n",
        )
        .unwrap();

    let json = world
        .run_json(&["suppliers", file.to_str().unwrap()])
        .unwrap();
    assert_eq!(tab_labels(&json), vec!["Supplier 3"]);

    let sections = json["content"]["view"]["tabs"][0]["sections"]
        .as_array()
        .unwrap();
    let titles: Vec<_> = sections.iter().map(|s| s["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["Transport Information", "Transport Status", "Timing Information"]
    );
}
