//! Fixed device placement.
//!
//! The layout table maps device ids to manually authored 2D coordinates that
//! reproduce the reference arrangement: three visual columns, with a few rows
//! offset sideways so sibling nodes do not overlap. Unknown ids fall back to
//! a shared default coordinate rather than erroring; if more than one device
//! is missing an entry the fallbacks overlap visually, which is the documented
//! degenerate case, not a failure.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A 2D coordinate in diagram space (the node's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Coordinate used for any device id without an authored entry.
pub const DEFAULT_POSITION: Point = Point { x: 100.0, y: 100.0 };

/// Ordered map from device id to authored coordinate.
///
/// Insertion order mirrors the authored column-by-column arrangement, which
/// keeps JSON dumps readable and diffable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutTable {
    positions: IndexMap<String, Point>,
}

impl LayoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the authored coordinate for `id`.
    pub fn insert(&mut self, id: impl Into<String>, x: f32, y: f32) {
        self.positions.insert(id.into(), Point::new(x, y));
    }

    /// Authored coordinate for `id`, or [`DEFAULT_POSITION`] if none exists.
    /// Never errors; the silent fallback is deliberate.
    pub fn position_of(&self, id: &str) -> Point {
        self.positions.get(id).copied().unwrap_or(DEFAULT_POSITION)
    }

    /// Whether `id` has an authored entry (as opposed to the fallback).
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate authored entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// The authored layout for the workstation diagram (see [`crate::catalog`]).
pub fn workstation_layout() -> LayoutTable {
    let mut t = LayoutTable::new();

    // Column 1 (left), x = 50
    t.insert("doio-16-keys", 50.0, 50.0);
    t.insert("baseus-hub", 50.0, 180.0);
    t.insert("personal-laptop", 50.0, 310.0);
    t.insert("magic-trackpad", 50.0, 570.0);

    // Column 2 (center), x = 400; the two bottom children are pulled
    // sideways so they don't overlap under the monitor
    t.insert("logitech-brio", 400.0, 50.0);
    t.insert("samsung-monitor", 400.0, 310.0);
    t.insert("ergodox-ez", 320.0, 570.0);
    t.insert("yeti-mic", 480.0, 570.0);

    // Column 3 (right), split into two sub-columns at the top
    t.insert("nintendo-switch", 700.0, 50.0);
    t.insert("chromecast", 850.0, 50.0);
    t.insert("ugreen-switcher", 775.0, 180.0);
    t.insert("aoc-monitor", 775.0, 310.0);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of_fallback() {
        let t = workstation_layout();
        assert_eq!(t.position_of("no-such-device"), DEFAULT_POSITION);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let t = workstation_layout();
        let first = t.iter().next().unwrap();
        assert_eq!(first.0, "doio-16-keys");
    }
}
