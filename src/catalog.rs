//! The embedded workstation dataset.
//!
//! There is no data ingestion pipeline: the diagram is authored directly in
//! code and compiled into the binary. The handle-override table for the
//! pairs that the geometric heuristic routes awkwardly lives here too, next
//! to the data it describes.

use crate::model::{Connection, Device, DeviceCategory, Diagram};
use crate::routing::{Handle, HandleOverrides};

/// Helper to author a device concisely.
fn device(
    id: &str,
    name: &str,
    category: DeviceCategory,
    device_type: &str,
    connections: &[(&str, &str)],
) -> Device {
    Device {
        id: id.to_string(),
        name: name.to_string(),
        category,
        device_type: device_type.to_string(),
        connections: connections
            .iter()
            .map(|(target, link)| Connection {
                target_id: target.to_string(),
                link_type: link.to_string(),
            })
            .collect(),
    }
}

/// The workstation diagram: 12 devices in three categories, with the laptop
/// as the hub of the wiring.
pub fn workstation_diagram() -> Diagram {
    use DeviceCategory::{Infrastructure, Peripheral};

    Diagram {
        title: "My Workstation".to_string(),
        date: "Nov 12, 2024".to_string(),
        devices: vec![
            // Hubs, switchers and monitors that other devices hang off
            device(
                "baseus-hub",
                "Baseus Lite Series Hub",
                Infrastructure,
                "usb-hub",
                &[
                    ("logitech-brio", "USB 3.0"),
                    ("doio-16-keys", "USB 3.0"),
                ],
            ),
            device(
                "ugreen-switcher",
                "UGREEN HDMI Switcher 3-1",
                Infrastructure,
                "switcher",
                &[
                    ("aoc-monitor", "HDMI"),
                    ("chromecast", "HDMI"),
                    ("nintendo-switch", "HDMI"),
                ],
            ),
            device(
                "samsung-monitor",
                "Samsung ViewFinity S65UC",
                Infrastructure,
                "monitor",
                &[("ergodox-ez", "USB"), ("yeti-mic", "USB")],
            ),
            // The main computing device; categorized as infrastructure so it
            // shares the hub color in the sidebar
            device(
                "personal-laptop",
                "Personal Laptop",
                Infrastructure,
                "laptop",
                &[
                    ("baseus-hub", "USB-C"),
                    ("samsung-monitor", "DisplayPort"),
                    ("magic-trackpad", "Bluetooth"),
                    ("ugreen-switcher", "HDMI"),
                ],
            ),
            // Peripherals (leaf devices, no outgoing connections)
            device("logitech-brio", "Logitech Brio", Peripheral, "webcam", &[]),
            device("doio-16-keys", "DOIO 16 keys", Peripheral, "numeric-keypad", &[]),
            device("aoc-monitor", "AOC Q27E3UMF 27\"", Peripheral, "monitor", &[]),
            device("chromecast", "Google Chromecast 4K", Peripheral, "chromecast", &[]),
            device("nintendo-switch", "Nintendo Switch", Peripheral, "controller", &[]),
            device("magic-trackpad", "Magic Trackpad 2", Peripheral, "mouse", &[]),
            device("ergodox-ez", "Ergodox EZ", Peripheral, "keyboard", &[]),
            device("yeti-mic", "Yeti X WOW Edition", Peripheral, "microphone", &[]),
        ],
    }
}

/// Pinned handle pairs for the workstation layout.
///
/// The switcher sits between its monitor (below) and the two streaming
/// devices (above); the |dx| vs |dy| heuristic routes all three sideways,
/// which crosses the column. Pinning them vertical matches the reference
/// arrangement.
pub fn workstation_overrides() -> HandleOverrides {
    let mut ov = HandleOverrides::new();
    ov.insert("ugreen-switcher", "aoc-monitor", Handle::Bottom, Handle::Top);
    ov.insert("ugreen-switcher", "nintendo-switch", Handle::Top, Handle::Bottom);
    ov.insert("ugreen-switcher", "chromecast", Handle::Top, Handle::Bottom);
    ov
}
