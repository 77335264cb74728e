use rigmap::layout::{DEFAULT_POSITION, LayoutTable, Point, workstation_layout};

#[test]
fn authored_positions_match_reference_arrangement() {
    let t = workstation_layout();
    assert_eq!(t.position_of("personal-laptop"), Point::new(50.0, 310.0));
    assert_eq!(t.position_of("samsung-monitor"), Point::new(400.0, 310.0));
    assert_eq!(t.position_of("aoc-monitor"), Point::new(775.0, 310.0));
    // The monitor's children are offset sideways in the bottom row
    assert_eq!(t.position_of("ergodox-ez"), Point::new(320.0, 570.0));
    assert_eq!(t.position_of("yeti-mic"), Point::new(480.0, 570.0));
}

#[test]
fn unknown_id_falls_back_to_default() {
    let t = workstation_layout();
    assert_eq!(t.position_of("not-a-device"), DEFAULT_POSITION);
    assert_eq!(DEFAULT_POSITION, Point::new(100.0, 100.0));
}

#[test]
fn empty_table_always_falls_back() {
    let t = LayoutTable::new();
    assert!(t.is_empty());
    assert_eq!(t.position_of("anything"), DEFAULT_POSITION);
}

#[test]
fn insert_overwrites_existing_entry() {
    let mut t = workstation_layout();
    let before = t.len();
    t.insert("personal-laptop", 0.0, 0.0);
    assert_eq!(t.len(), before);
    assert_eq!(t.position_of("personal-laptop"), Point::new(0.0, 0.0));
}

#[test]
fn three_columns_as_authored() {
    let t = workstation_layout();
    let left: Vec<_> = t.iter().filter(|(_, p)| p.x == 50.0).collect();
    assert_eq!(left.len(), 4);
    let right: Vec<_> = t.iter().filter(|(_, p)| p.x >= 700.0).collect();
    assert_eq!(right.len(), 4);
}
