use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Diagram
// ────────────────────────────────────────────────────────────────────────────

/// A complete device wiring diagram: title, authoring date, and the devices
/// with their outgoing connections.
///
/// The diagram is constructed once at startup (see [`crate::catalog`]) and is
/// never mutated afterwards. Renderable node/edge arrays are derived from it
/// by [`crate::graph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    pub title: String,
    pub date: String,
    pub devices: Vec<Device>,
}

// ────────────────────────────────────────────────────────────────────────────
// Device
// ────────────────────────────────────────────────────────────────────────────

/// Coarse device grouping, used only to pick a display color in the sidebar
/// and legend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Infrastructure,
    Peripheral,
}

/// One physical device in the diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Unique stable identifier, e.g. `"baseus-hub"`.
    pub id: String,
    /// Human-readable label shown on the node and in the sidebar.
    pub name: String,
    pub category: DeviceCategory,
    /// Free-form classification (e.g. "laptop", "usb-hub"). Mapped to a
    /// display color/icon by the device type registry and formatted into the
    /// node subtitle.
    #[serde(rename = "type")]
    pub device_type: String,
    /// Outgoing connections, declared once from source to target.
    pub connections: Vec<Connection>,
}

impl Device {
    /// Node subtitle derived from the free-form type string,
    /// e.g. `"usb-hub"` → `"Usb Hub"`.
    pub fn subtitle(&self) -> String {
        format_type_label(&self.device_type)
    }
}

/// A directed, typed link from one device to another. Rendered as a plain
/// line without arrowheads; direction only matters for authoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Id of the device this connection points to. Must reference an existing
    /// device; dangling references are an authoring bug (see
    /// [`crate::graph::validate`]).
    #[serde(rename = "targetId")]
    pub target_id: String,
    /// Label for the physical medium, e.g. "USB-C", "HDMI", "Bluetooth".
    /// Display-only; not validated against a fixed set.
    #[serde(rename = "type")]
    pub link_type: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

impl Diagram {
    /// Look up a device by id.
    pub fn device_by_id(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Total number of declared connections across all devices.
    pub fn connection_count(&self) -> usize {
        self.devices.iter().map(|d| d.connections.len()).sum()
    }

    /// Walk all connections, calling `cb` with the source device and the
    /// connection record.
    pub fn walk_connections<F>(&self, mut cb: F)
    where
        F: FnMut(&Device, &Connection),
    {
        for dev in &self.devices {
            for conn in &dev.connections {
                cb(dev, conn);
            }
        }
    }
}

/// Format a kebab/snake-case type string as a title-cased label:
/// `"numeric-keypad"` → `"Numeric Keypad"`.
pub fn format_type_label(raw: &str) -> String {
    raw.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_type_label() {
        assert_eq!(format_type_label("usb-hub"), "Usb Hub");
        assert_eq!(format_type_label("numeric-keypad"), "Numeric Keypad");
        assert_eq!(format_type_label("laptop"), "Laptop");
        assert_eq!(format_type_label(""), "");
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&DeviceCategory::Infrastructure).unwrap();
        assert_eq!(json, "\"infrastructure\"");
        let cat: DeviceCategory = serde_json::from_str("\"peripheral\"").unwrap();
        assert_eq!(cat, DeviceCategory::Peripheral);
    }

    #[test]
    fn test_connection_field_names() {
        let conn = Connection {
            target_id: "aoc-monitor".into(),
            link_type: "HDMI".into(),
        };
        let json = serde_json::to_string(&conn).unwrap();
        assert!(json.contains("\"targetId\""));
        assert!(json.contains("\"type\""));
    }
}
