use stowage_lib::{
    describe_container, Container, ContainerKind, ContainerSpec, ContainerSummary, KindTag,
    SerialAllocator, Ship, ShipManifest,
};

fn spec(tare_kg: f64, capacity_kg: f64) -> ContainerSpec {
    ContainerSpec {
        height_cm: 200.0,
        tare_kg,
        depth_cm: 100.0,
        capacity_kg,
    }
}

fn loaded_tank(serials: &SerialAllocator) -> Container {
    let mut container = Container::new(
        serials,
        spec(500.0, 2000.0),
        ContainerKind::Liquid { hazardous: false },
    )
    .expect("valid spec");
    container.load(1500.0, "Milk").expect("within limit");
    container
}

#[test]
fn manifest_reports_totals_in_tons() {
    let serials = SerialAllocator::new();
    let mut ship = Ship::new("Albatross", 20.0, 10, 50.0).expect("valid ship");
    ship.add_container(loaded_tank(&serials)).expect("boarded");
    ship.add_container(loaded_tank(&serials)).expect("boarded");

    let manifest = ShipManifest::from_ship(&ship);
    assert_eq!(manifest.total_weight_tons, 4.0);
    assert_eq!(manifest.container_count, 2);

    let text = manifest.render();
    assert!(text.contains("Ship Albatross - speed: 20 knots"));
    assert!(text.contains("Current load: 2 containers, total weight: 4 tons"));
    assert!(text.contains("Container KON-L-1"));
    assert!(text.contains("product: Milk"));
}

#[test]
fn describe_container_reports_missing_serials_textually() {
    let serials = SerialAllocator::new();
    let ship = Ship::new("Albatross", 20.0, 10, 50.0).expect("valid ship");
    let ghost = serials.allocate(KindTag::Gas);

    let line = describe_container(&ship, &ghost);
    assert!(line.contains("No container with serial KON-G-1"));
}

#[test]
fn describe_container_renders_the_summary_line() {
    let serials = SerialAllocator::new();
    let mut ship = Ship::new("Albatross", 20.0, 10, 50.0).expect("valid ship");
    ship.add_container(loaded_tank(&serials)).expect("boarded");
    let serial = ship.containers()[0].serial().clone();

    let line = describe_container(&ship, &serial);
    assert_eq!(
        line,
        "Container KON-L-1: liquid, product: Milk, cargo: 1500kg, total weight: 2000kg"
    );
}

#[test]
fn display_matches_the_summary_rendering() {
    let serials = SerialAllocator::new();
    let container = loaded_tank(&serials);
    assert_eq!(
        container.to_string(),
        ContainerSummary::from_container(&container).render_line()
    );
}

#[test]
fn container_summary_serializes_cleanly() {
    let serials = SerialAllocator::new();
    let summary = ContainerSummary::from_container(&loaded_tank(&serials));

    let value = serde_json::to_value(&summary).expect("serializable");
    assert_eq!(value["serial"], "KON-L-1");
    assert_eq!(value["kind"], "liquid");
    assert_eq!(value["product"], "Milk");
    assert_eq!(value["cargo_kg"], 1500.0);
}

#[test]
fn unloaded_container_summary_omits_the_product() {
    let serials = SerialAllocator::new();
    let container = Container::new(
        &serials,
        spec(500.0, 2000.0),
        ContainerKind::Liquid { hazardous: false },
    )
    .expect("valid spec");

    let value =
        serde_json::to_value(ContainerSummary::from_container(&container)).expect("serializable");
    assert!(value.get("product").is_none());
    assert!(value["serial"].as_str().expect("string").starts_with("KON-L-"));
}

#[test]
fn manifest_serializes_with_container_entries() {
    let serials = SerialAllocator::new();
    let mut ship = Ship::new("Albatross", 20.0, 10, 50.0).expect("valid ship");
    ship.add_container(loaded_tank(&serials)).expect("boarded");

    let value = serde_json::to_value(ShipManifest::from_ship(&ship)).expect("serializable");
    assert_eq!(value["ship"], "Albatross");
    assert_eq!(value["containers"].as_array().map(Vec::len), Some(1));
}
