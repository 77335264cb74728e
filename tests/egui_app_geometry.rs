#![cfg(feature = "egui")]

use rigmap::egui_app::{
    HANDLE_STUB, NODE_HEIGHT, NODE_WIDTH, edge_path, handle_anchor_pos, nearest_handle, node_rect,
};
use rigmap::layout::Point;
use rigmap::routing::Handle;

#[test]
fn node_rect_from_layout_position() {
    let r = node_rect(Point::new(50.0, 310.0));
    assert_eq!(r.left(), 50.0);
    assert_eq!(r.top(), 310.0);
    assert_eq!(r.width(), NODE_WIDTH);
    assert_eq!(r.height(), NODE_HEIGHT);
}

#[test]
fn handle_anchors_sit_on_side_midpoints() {
    let r = node_rect(Point::new(0.0, 0.0));
    let top = handle_anchor_pos(r, Handle::Top);
    assert_eq!((top.x, top.y), (NODE_WIDTH / 2.0, 0.0));
    let right = handle_anchor_pos(r, Handle::Right);
    assert_eq!((right.x, right.y), (NODE_WIDTH, NODE_HEIGHT / 2.0));
    let bottom = handle_anchor_pos(r, Handle::Bottom);
    assert_eq!((bottom.x, bottom.y), (NODE_WIDTH / 2.0, NODE_HEIGHT));
}

#[test]
fn edge_path_starts_and_ends_at_the_anchors() {
    let src = node_rect(Point::new(0.0, 0.0));
    let dst = node_rect(Point::new(400.0, 0.0));
    let path = edge_path(src, dst, Handle::Right, Handle::Left);

    assert_eq!(path.first().copied(), Some(handle_anchor_pos(src, Handle::Right)));
    assert_eq!(path.last().copied(), Some(handle_anchor_pos(dst, Handle::Left)));
}

#[test]
fn edge_path_is_orthogonal() {
    let src = node_rect(Point::new(0.0, 0.0));
    let dst = node_rect(Point::new(400.0, 300.0));
    for (sh, th) in [
        (Handle::Right, Handle::Left),
        (Handle::Bottom, Handle::Top),
        (Handle::Right, Handle::Top),
        (Handle::Bottom, Handle::Right),
    ] {
        let path = edge_path(src, dst, sh, th);
        for pair in path.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(
                dx < f32::EPSILON || dy < f32::EPSILON,
                "diagonal segment in {:?} -> {:?} path",
                sh,
                th
            );
        }
    }
}

#[test]
fn edge_path_leaves_through_the_stub() {
    let src = node_rect(Point::new(0.0, 0.0));
    let dst = node_rect(Point::new(0.0, 300.0));
    let path = edge_path(src, dst, Handle::Bottom, Handle::Top);
    // Second point is the stub end below the source
    let start = handle_anchor_pos(src, Handle::Bottom);
    assert_eq!(path[1].y, start.y + HANDLE_STUB);
    assert_eq!(path[1].x, start.x);
}

#[test]
fn straight_aligned_path_collapses_duplicate_points() {
    // Vertically aligned nodes, bottom -> top: the whole path is one
    // straight line; collapsed duplicates keep it minimal
    let src = node_rect(Point::new(100.0, 0.0));
    let dst = node_rect(Point::new(100.0, 300.0));
    let path = edge_path(src, dst, Handle::Bottom, Handle::Top);
    for pair in path.windows(2) {
        assert!(pair[0] != pair[1], "duplicate consecutive point");
    }
}

#[test]
fn nearest_handle_picks_the_closest_side() {
    let r = node_rect(Point::new(0.0, 0.0));
    let above = eframe::egui::pos2(NODE_WIDTH / 2.0, -30.0);
    assert_eq!(nearest_handle(r, above).0, Handle::Top);
    let right_of = eframe::egui::pos2(NODE_WIDTH + 20.0, NODE_HEIGHT / 2.0);
    assert_eq!(nearest_handle(r, right_of).0, Handle::Right);
}
