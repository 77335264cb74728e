//! Viewer state.
//!
//! [`DiagramApp`] owns the immutable diagram inputs (catalog, layout table,
//! override table), the derived node/edge arrays, and a small [`ViewState`]
//! value holding the display preferences. Rendering reads the view state;
//! interactions build a replacement value which is swapped in at the end of
//! the frame — the view state itself is never mutated in place.

#![cfg(feature = "egui")]

use eframe::egui::{self, Pos2, Vec2};

use crate::catalog::{workstation_diagram, workstation_overrides};
use crate::graph::{self, Edge, EdgeStyle, Node, edge_id};
use crate::layout::{LayoutTable, workstation_layout};
use crate::model::Diagram;
use crate::routing::{Handle, HandleOverrides};

use super::theme::Theme;

// ────────────────────────────────────────────────────────────────────────────
// View state
// ────────────────────────────────────────────────────────────────────────────

/// Display preferences for the current session.
///
/// A plain value: interactions produce a modified copy via the `with_…`
/// builders and the app replaces its copy wholesale once per frame. Nothing
/// here is persisted; a reset restores the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub theme: Theme,
    pub show_grid: bool,
    pub show_legend: bool,
    pub zoom: f32,
    pub pan: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            show_grid: true,
            show_legend: false,
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewState {
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn with_grid(self, show_grid: bool) -> Self {
        Self { show_grid, ..self }
    }

    pub fn with_legend(self, show_legend: bool) -> Self {
        Self { show_legend, ..self }
    }

    pub fn with_viewport(self, zoom: f32, pan: Vec2) -> Self {
        Self { zoom, pan, ..self }
    }

    /// Zoom and pan back to the authored framing.
    pub fn reset_viewport(self) -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            ..self
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drag state
// ────────────────────────────────────────────────────────────────────────────

/// What the user is currently dragging.
#[derive(Debug, Clone)]
pub enum DragMode {
    /// Not dragging anything.
    None,
    /// Moving a node (index into the node array).
    Node { index: usize },
    /// Drawing a new connection from a handle. `current` is the pointer
    /// position in diagram coordinates.
    Connection {
        source: String,
        source_handle: Handle,
        current: Pos2,
    },
    /// Panning the canvas.
    Pan,
}

impl Default for DragMode {
    fn default() -> Self {
        Self::None
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DiagramApp
// ────────────────────────────────────────────────────────────────────────────

/// Interactive egui application displaying one device wiring diagram.
///
/// The catalog, layout table, and override table are fixed for the lifetime
/// of the app. The node/edge arrays are the renderer's local, session-only
/// state: node drags and interactively drawn edges land there and are
/// discarded by [`DiagramApp::reset`] or any rebuild.
pub struct DiagramApp {
    pub diagram: Diagram,
    pub layout: LayoutTable,
    pub overrides: HandleOverrides,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub view: ViewState,
    pub drag: DragMode,
    /// Recompute the fit-to-view framing on the next frame.
    pub reset_view: bool,
}

impl DiagramApp {
    /// Create an app for the given diagram inputs.
    pub fn new(diagram: Diagram, layout: LayoutTable, overrides: HandleOverrides) -> Self {
        let built = graph::build_graph(&diagram, &layout, &overrides);
        Self {
            diagram,
            layout,
            overrides,
            nodes: built.nodes,
            edges: built.edges,
            view: ViewState::default(),
            drag: DragMode::None,
            reset_view: true,
        }
    }

    /// Convenience: the embedded workstation diagram.
    pub fn workstation() -> Self {
        Self::new(
            workstation_diagram(),
            workstation_layout(),
            workstation_overrides(),
        )
    }

    /// Re-run the graph builder from scratch, discarding dragged positions
    /// and interactively drawn edges.
    pub fn rebuild(&mut self) {
        let built = graph::build_graph(&self.diagram, &self.layout, &self.overrides);
        self.nodes = built.nodes;
        self.edges = built.edges;
        self.drag = DragMode::None;
    }

    /// Switch themes. Always rebuilds so no render-pass state tied to the
    /// previous theme survives.
    pub fn set_theme(&mut self, theme: Theme) {
        self.view = self.view.with_theme(theme);
        self.rebuild();
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.view.theme.toggled());
    }

    pub fn toggle_grid(&mut self) {
        self.view = self.view.with_grid(!self.view.show_grid);
    }

    pub fn toggle_legend(&mut self) {
        self.view = self.view.with_legend(!self.view.show_legend);
    }

    /// Reset everything transient: rebuilt nodes/edges, default viewport.
    /// The in-process equivalent of a full reload.
    pub fn reset(&mut self) {
        self.rebuild();
        self.view = self.view.reset_viewport();
        self.reset_view = true;
    }

    /// Index of the node with the given id in the node array.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Move a node by a delta in diagram coordinates. Affects only the local
    /// node array; the layout table is untouched.
    pub fn move_node(&mut self, index: usize, dx: f32, dy: f32) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.position.x += dx;
            node.position.y += dy;
        }
    }

    /// Add an interactively drawn edge between two handles.
    ///
    /// Returns false (and adds nothing) for self-loops and for pairs whose
    /// synthesized id already exists — the local edge array stays
    /// collision-free.
    pub fn connect(
        &mut self,
        source: &str,
        source_handle: Handle,
        target: &str,
        target_handle: Handle,
    ) -> bool {
        if source == target {
            return false;
        }
        let id = edge_id(source, target);
        if self.edges.iter().any(|e| e.id == id) {
            return false;
        }
        self.edges.push(Edge {
            id,
            source: source.to_string(),
            target: target.to_string(),
            source_handle,
            target_handle,
            label: String::new(),
            style: EdgeStyle::default(),
        });
        true
    }
}

impl eframe::App for DiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    #[test]
    fn test_workstation_builds() {
        let app = DiagramApp::workstation();
        assert_eq!(app.nodes.len(), 12);
        assert_eq!(app.edges.len(), 11);
        assert!(app.reset_view);
    }

    #[test]
    fn test_theme_toggle_round_trip_is_stable() {
        let mut app = DiagramApp::workstation();
        let positions: Vec<Point> = app.nodes.iter().map(|n| n.position).collect();
        let handles: Vec<(Handle, Handle)> = app
            .edges
            .iter()
            .map(|e| (e.source_handle, e.target_handle))
            .collect();

        app.toggle_theme();
        app.toggle_theme();

        assert_eq!(app.view.theme, Theme::Dark);
        let positions_after: Vec<Point> = app.nodes.iter().map(|n| n.position).collect();
        let handles_after: Vec<(Handle, Handle)> = app
            .edges
            .iter()
            .map(|e| (e.source_handle, e.target_handle))
            .collect();
        assert_eq!(positions, positions_after);
        assert_eq!(handles, handles_after);
    }

    #[test]
    fn test_move_node_then_reset_restores_authored_position() {
        let mut app = DiagramApp::workstation();
        let idx = app.node_index("personal-laptop").unwrap();
        let authored = app.nodes[idx].position;

        app.move_node(idx, 40.0, -25.0);
        assert_ne!(app.nodes[idx].position, authored);

        app.reset();
        let idx = app.node_index("personal-laptop").unwrap();
        assert_eq!(app.nodes[idx].position, authored);
        assert_eq!(app.view.zoom, 1.0);
    }

    #[test]
    fn test_connect_adds_edge_once() {
        let mut app = DiagramApp::workstation();
        let before = app.edges.len();

        assert!(app.connect("yeti-mic", Handle::Right, "aoc-monitor", Handle::Left));
        assert_eq!(app.edges.len(), before + 1);
        assert_eq!(app.edges.last().unwrap().id, "yeti-mic-aoc-monitor");

        // Duplicate ordered pair is refused
        assert!(!app.connect("yeti-mic", Handle::Right, "aoc-monitor", Handle::Left));
        assert_eq!(app.edges.len(), before + 1);

        // Self-loops are refused
        assert!(!app.connect("yeti-mic", Handle::Top, "yeti-mic", Handle::Bottom));
    }

    #[test]
    fn test_connect_refuses_existing_catalog_edge() {
        let mut app = DiagramApp::workstation();
        // This pair is already declared in the catalog
        assert!(!app.connect("ugreen-switcher", Handle::Bottom, "aoc-monitor", Handle::Top));
    }

    #[test]
    fn test_view_state_replacement() {
        let mut app = DiagramApp::workstation();
        assert!(app.view.show_grid);
        app.toggle_grid();
        assert!(!app.view.show_grid);
        app.toggle_legend();
        assert!(app.view.show_legend);

        let zoomed = app.view.with_viewport(2.5, Vec2::new(10.0, -4.0));
        app.view = zoomed;
        assert_eq!(app.view.zoom, 2.5);
        assert_eq!(app.view.reset_viewport().zoom, 1.0);
        // Non-viewport preferences survive a viewport reset
        assert!(app.view.reset_viewport().show_legend);
    }
}
