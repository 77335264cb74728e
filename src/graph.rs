//! Renderable node/edge construction.
//!
//! The graph builder composes the device catalog, the layout table, and the
//! handle selector into the node and edge arrays the canvas renderer
//! consumes. Building is deterministic: the same inputs always produce the
//! same arrays, and the viewer re-runs the builder from scratch whenever the
//! active theme changes so no view-local state survives a render pass.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutTable, Point};
use crate::model::{Device, Diagram};
use crate::routing::{Handle, HandleOverrides, select_handles};

// ────────────────────────────────────────────────────────────────────────────
// Nodes and edges
// ────────────────────────────────────────────────────────────────────────────

/// A renderable node: one per device, carrying the full device record as
/// payload for display inside the node and in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Point,
    pub device: Device,
}

/// Fixed visual style for connection edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    /// Stroke color as RGB.
    pub color: (u8, u8, u8),
    pub width: f32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        // Violet, matching the reference rendering
        Self {
            color: (168, 85, 247),
            width: 2.5,
        }
    }
}

/// A renderable edge: one per declared connection.
///
/// The id is synthesized as `"<source>-<target>"`. Uniqueness is assumed,
/// not enforced; two connections between the same ordered pair collide (see
/// [`ValidationIssue::DuplicateEdgeId`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "sourceHandle")]
    pub source_handle: Handle,
    #[serde(rename = "targetHandle")]
    pub target_handle: Handle,
    /// Display label: the connection's medium type (e.g. "HDMI").
    pub label: String,
    pub style: EdgeStyle,
}

/// Synthesize the edge id for an ordered device pair.
pub fn edge_id(source_id: &str, target_id: &str) -> String {
    format!("{}-{}", source_id, target_id)
}

/// The built graph, ready for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

/// One node per device, positioned by the layout table (falling back to the
/// shared default coordinate for missing entries).
pub fn build_nodes(diagram: &Diagram, layout: &LayoutTable) -> Vec<Node> {
    diagram
        .devices
        .iter()
        .map(|dev| Node {
            id: dev.id.clone(),
            position: layout.position_of(&dev.id),
            device: dev.clone(),
        })
        .collect()
}

/// One edge per declared connection, with handles chosen by the selector.
pub fn build_edges(
    diagram: &Diagram,
    layout: &LayoutTable,
    overrides: &HandleOverrides,
) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(diagram.connection_count());
    diagram.walk_connections(|dev, conn| {
        let (source_handle, target_handle) =
            select_handles(&dev.id, &conn.target_id, layout, overrides);
        edges.push(Edge {
            id: edge_id(&dev.id, &conn.target_id),
            source: dev.id.clone(),
            target: conn.target_id.clone(),
            source_handle,
            target_handle,
            label: conn.link_type.clone(),
            style: EdgeStyle::default(),
        });
    });
    edges
}

/// Build the complete renderable graph.
pub fn build_graph(
    diagram: &Diagram,
    layout: &LayoutTable,
    overrides: &HandleOverrides,
) -> Graph {
    Graph {
        nodes: build_nodes(diagram, layout),
        edges: build_edges(diagram, layout, overrides),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// A data-integrity problem in the authored catalog or layout.
///
/// None of these are fatal at render time: dangling references skip the
/// edge, missing coordinates fall back to the default position, and
/// duplicate edge ids collide in the renderer's indexing. This pass exists
/// so authors can find all of them up front instead of reading them off a
/// visually wrong diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// A connection's `targetId` does not resolve to any device.
    DanglingConnection { source: String, target: String },
    /// A device id has no authored layout entry and will render at the
    /// shared default coordinate.
    MissingPosition { id: String },
    /// Two connections share the same ordered (source, target) pair, so
    /// their synthesized edge ids collide.
    DuplicateEdgeId { id: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DanglingConnection { source, target } => {
                write!(f, "dangling connection: {} -> {} (no such device)", source, target)
            }
            ValidationIssue::MissingPosition { id } => {
                write!(f, "missing layout position for {} (renders at default)", id)
            }
            ValidationIssue::DuplicateEdgeId { id } => {
                write!(f, "duplicate edge id {} (connections collide)", id)
            }
        }
    }
}

/// Check the catalog and layout for authoring problems.
///
/// Returns every issue found, in catalog order. An empty result means the
/// diagram will render exactly as authored.
pub fn validate(diagram: &Diagram, layout: &LayoutTable) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let ids: HashSet<&str> = diagram.devices.iter().map(|d| d.id.as_str()).collect();

    let mut seen_edges: HashSet<String> = HashSet::new();
    diagram.walk_connections(|dev, conn| {
        if !ids.contains(conn.target_id.as_str()) {
            issues.push(ValidationIssue::DanglingConnection {
                source: dev.id.clone(),
                target: conn.target_id.clone(),
            });
        }
        let id = edge_id(&dev.id, &conn.target_id);
        if !seen_edges.insert(id.clone()) {
            issues.push(ValidationIssue::DuplicateEdgeId { id });
        }
    });

    for dev in &diagram.devices {
        if !layout.contains(&dev.id) {
            issues.push(ValidationIssue::MissingPosition {
                id: dev.id.clone(),
            });
        }
    }

    issues
}
