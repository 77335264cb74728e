use std::collections::HashSet;

use rigmap::catalog::{workstation_diagram, workstation_overrides};
use rigmap::layout::workstation_layout;
use rigmap::model::DeviceCategory;

#[test]
fn device_ids_are_unique() {
    let diagram = workstation_diagram();
    let mut seen = HashSet::new();
    for dev in &diagram.devices {
        assert!(seen.insert(dev.id.as_str()), "duplicate id {}", dev.id);
    }
}

#[test]
fn every_connection_target_resolves() {
    let diagram = workstation_diagram();
    let ids: HashSet<&str> = diagram.devices.iter().map(|d| d.id.as_str()).collect();
    diagram.walk_connections(|dev, conn| {
        assert!(
            ids.contains(conn.target_id.as_str()),
            "{} -> {} dangles",
            dev.id,
            conn.target_id
        );
    });
}

#[test]
fn every_device_has_an_authored_position() {
    let diagram = workstation_diagram();
    let layout = workstation_layout();
    for dev in &diagram.devices {
        assert!(layout.contains(&dev.id), "{} missing from layout", dev.id);
    }
}

#[test]
fn override_pairs_reference_catalog_devices() {
    let diagram = workstation_diagram();
    let overrides = workstation_overrides();
    // All three pinned pairs correspond to declared connections
    let mut pinned = 0;
    diagram.walk_connections(|dev, conn| {
        if overrides.get(&dev.id, &conn.target_id).is_some() {
            pinned += 1;
        }
    });
    assert_eq!(pinned, overrides.len());
}

#[test]
fn laptop_is_the_wiring_hub() {
    let diagram = workstation_diagram();
    let laptop = diagram.device_by_id("personal-laptop").unwrap();
    assert_eq!(laptop.category, DeviceCategory::Infrastructure);
    assert_eq!(laptop.connections.len(), 4);
}

#[test]
fn peripherals_are_leaves() {
    let diagram = workstation_diagram();
    for dev in &diagram.devices {
        if dev.category == DeviceCategory::Peripheral {
            assert!(
                dev.connections.is_empty(),
                "{} is a peripheral with outgoing connections",
                dev.id
            );
        }
    }
}
