//! Egui-based interactive viewer for device wiring diagrams (feature = "egui").
//!
//! Split into submodules: immutable view state and the app shell in `state`,
//! theming in `theme`, pure node/edge geometry in `geometry`, painters in
//! `render`, and the per-frame UI in `ui`.

#![cfg(feature = "egui")]

mod geometry;
mod render;
mod state;
mod theme;
mod ui;

pub use geometry::{
    CONNECT_SNAP_DISTANCE, HANDLE_STUB, NODE_HEIGHT, NODE_WIDTH, edge_path, handle_anchor_pos,
    handle_outward, nearest_handle, node_rect,
};
pub use render::{contrast_color, luminance, rgb_to_color32};
pub use state::{DiagramApp, DragMode, ViewState};
pub use theme::{Palette, Theme};
