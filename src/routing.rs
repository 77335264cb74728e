//! Connection-point (handle) selection.
//!
//! For a connection from a source device to a target device, decide which of
//! the four cardinal attachment points each end uses so the rendered line
//! approaches both nodes from a sensible direction. A declarative override
//! table is consulted first; for every other pair a relative-position
//! heuristic decides: horizontal separation wins when `|dx| > |dy|`, ties go
//! vertical. Missing layout entries transparently use the default fallback
//! coordinate, which may pick a geometrically odd side but never fails.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::layout::LayoutTable;

/// One of the four cardinal attachment points on a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Top,
    Bottom,
    Left,
    Right,
}

impl Handle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::Top => "top",
            Handle::Bottom => "bottom",
            Handle::Left => "left",
            Handle::Right => "right",
        }
    }

    /// The handle on the opposite side.
    pub fn opposite(&self) -> Handle {
        match self {
            Handle::Top => Handle::Bottom,
            Handle::Bottom => Handle::Top,
            Handle::Left => Handle::Right,
            Handle::Right => Handle::Left,
        }
    }
}

/// Declarative lookup of fixed handle pairs for specific (source, target)
/// device pairs.
///
/// The generic heuristic produces a visually awkward route for a few pairs in
/// the reference layout; those pairs get pinned here instead of special-casing
/// the algorithm. Kept ordered so dumps are stable.
#[derive(Debug, Clone, Default)]
pub struct HandleOverrides {
    map: IndexMap<(String, String), (Handle, Handle)>,
}

impl HandleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the handle pair for the ordered pair (source, target).
    pub fn insert(
        &mut self,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        source_handle: Handle,
        target_handle: Handle,
    ) {
        self.map.insert(
            (source_id.into(), target_id.into()),
            (source_handle, target_handle),
        );
    }

    /// Fixed handle pair for (source, target), if one is pinned.
    pub fn get(&self, source_id: &str, target_id: &str) -> Option<(Handle, Handle)> {
        self.map
            .get(&(source_id.to_string(), target_id.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Choose the (source, target) handle pair for a connection.
///
/// Pure function of the two ids, the layout table, and the override table.
pub fn select_handles(
    source_id: &str,
    target_id: &str,
    layout: &LayoutTable,
    overrides: &HandleOverrides,
) -> (Handle, Handle) {
    if let Some(pair) = overrides.get(source_id, target_id) {
        return pair;
    }

    let src = layout.position_of(source_id);
    let dst = layout.position_of(target_id);
    let dx = dst.x - src.x;
    let dy = dst.y - src.y;

    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            (Handle::Right, Handle::Left)
        } else {
            (Handle::Left, Handle::Right)
        }
    } else if dy > 0.0 {
        (Handle::Bottom, Handle::Top)
    } else {
        (Handle::Top, Handle::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_as_str() {
        assert_eq!(Handle::Top.as_str(), "top");
        assert_eq!(Handle::Right.as_str(), "right");
    }

    #[test]
    fn test_handle_opposite() {
        assert_eq!(Handle::Top.opposite(), Handle::Bottom);
        assert_eq!(Handle::Left.opposite(), Handle::Right);
    }

    #[test]
    fn test_override_lookup() {
        let mut ov = HandleOverrides::new();
        ov.insert("a", "b", Handle::Bottom, Handle::Top);
        assert_eq!(ov.get("a", "b"), Some((Handle::Bottom, Handle::Top)));
        // Ordered pair: the reverse direction is not pinned
        assert_eq!(ov.get("b", "a"), None);
    }
}
