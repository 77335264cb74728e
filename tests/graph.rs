use rigmap::catalog::{workstation_diagram, workstation_overrides};
use rigmap::graph::{
    ValidationIssue, build_edges, build_graph, build_nodes, edge_id, validate,
};
use rigmap::layout::{DEFAULT_POSITION, LayoutTable, workstation_layout};
use rigmap::model::{Connection, Device, DeviceCategory, Diagram};
use rigmap::routing::{Handle, HandleOverrides};

fn two_device_diagram() -> Diagram {
    Diagram {
        title: "Test".into(),
        date: "Jan 1, 2024".into(),
        devices: vec![
            Device {
                id: "A".into(),
                name: "Device A".into(),
                category: DeviceCategory::Infrastructure,
                device_type: "laptop".into(),
                connections: vec![Connection {
                    target_id: "B".into(),
                    link_type: "HDMI".into(),
                }],
            },
            Device {
                id: "B".into(),
                name: "Device B".into(),
                category: DeviceCategory::Peripheral,
                device_type: "monitor".into(),
                connections: vec![],
            },
        ],
    }
}

#[test]
fn end_to_end_single_edge() {
    let diagram = two_device_diagram();
    let mut layout = LayoutTable::new();
    layout.insert("A", 50.0, 50.0);
    layout.insert("B", 400.0, 50.0);

    let graph = build_graph(&diagram, &layout, &HandleOverrides::new());
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);

    let edge = &graph.edges[0];
    assert_eq!(edge.id, "A-B");
    assert_eq!(edge.source, "A");
    assert_eq!(edge.target, "B");
    assert_eq!(edge.source_handle, Handle::Right);
    assert_eq!(edge.target_handle, Handle::Left);
    assert_eq!(edge.label, "HDMI");
}

#[test]
fn nodes_carry_the_full_device_record() {
    let diagram = workstation_diagram();
    let layout = workstation_layout();
    let nodes = build_nodes(&diagram, &layout);
    assert_eq!(nodes.len(), diagram.devices.len());
    for (node, dev) in nodes.iter().zip(&diagram.devices) {
        assert_eq!(node.id, dev.id);
        assert_eq!(node.device.name, dev.name);
        assert_eq!(node.position, layout.position_of(&dev.id));
    }
}

#[test]
fn missing_position_falls_back_silently() {
    let diagram = two_device_diagram();
    let layout = LayoutTable::new();
    let nodes = build_nodes(&diagram, &layout);
    assert_eq!(nodes[0].position, DEFAULT_POSITION);
    assert_eq!(nodes[1].position, DEFAULT_POSITION);
}

#[test]
fn rebuilding_is_deterministic() {
    let diagram = workstation_diagram();
    let layout = workstation_layout();
    let overrides = workstation_overrides();

    let first = build_graph(&diagram, &layout, &overrides);
    let second = build_graph(&diagram, &layout, &overrides);

    assert_eq!(first.nodes.len(), second.nodes.len());
    for (a, b) in first.nodes.iter().zip(&second.nodes) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.position, b.position);
    }
    assert_eq!(first.edges.len(), second.edges.len());
    for (a, b) in first.edges.iter().zip(&second.edges) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.source_handle, b.source_handle);
        assert_eq!(a.target_handle, b.target_handle);
        assert_eq!(a.label, b.label);
    }
}

#[test]
fn one_edge_per_declared_connection() {
    let diagram = workstation_diagram();
    let edges = build_edges(
        &diagram,
        &workstation_layout(),
        &workstation_overrides(),
    );
    assert_eq!(edges.len(), diagram.connection_count());
    // Pinned pairs keep their pinned handles in the built output
    let pinned = edges.iter().find(|e| e.id == "ugreen-switcher-aoc-monitor").unwrap();
    assert_eq!(pinned.source_handle, Handle::Bottom);
    assert_eq!(pinned.target_handle, Handle::Top);
}

#[test]
fn edge_id_scheme() {
    assert_eq!(edge_id("a", "b"), "a-b");
    assert_eq!(edge_id("personal-laptop", "baseus-hub"), "personal-laptop-baseus-hub");
}

#[test]
fn workstation_data_validates_clean() {
    let issues = validate(&workstation_diagram(), &workstation_layout());
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn validate_reports_dangling_connection() {
    let mut diagram = two_device_diagram();
    diagram.devices[0].connections.push(Connection {
        target_id: "ghost".into(),
        link_type: "USB".into(),
    });
    let mut layout = LayoutTable::new();
    layout.insert("A", 0.0, 0.0);
    layout.insert("B", 100.0, 0.0);

    let issues = validate(&diagram, &layout);
    assert_eq!(
        issues,
        vec![ValidationIssue::DanglingConnection {
            source: "A".into(),
            target: "ghost".into(),
        }]
    );
}

#[test]
fn validate_reports_missing_position() {
    let diagram = two_device_diagram();
    let mut layout = LayoutTable::new();
    layout.insert("A", 0.0, 0.0);

    let issues = validate(&diagram, &layout);
    assert_eq!(
        issues,
        vec![ValidationIssue::MissingPosition { id: "B".into() }]
    );
}

#[test]
fn validate_reports_duplicate_ordered_pair() {
    let mut diagram = two_device_diagram();
    diagram.devices[0].connections.push(Connection {
        target_id: "B".into(),
        link_type: "USB".into(),
    });
    let mut layout = LayoutTable::new();
    layout.insert("A", 0.0, 0.0);
    layout.insert("B", 100.0, 0.0);

    let issues = validate(&diagram, &layout);
    assert_eq!(
        issues,
        vec![ValidationIssue::DuplicateEdgeId { id: "A-B".into() }]
    );
}

#[test]
fn issue_display_names_the_problem() {
    let issue = ValidationIssue::DanglingConnection {
        source: "a".into(),
        target: "b".into(),
    };
    assert_eq!(issue.to_string(), "dangling connection: a -> b (no such device)");
}
