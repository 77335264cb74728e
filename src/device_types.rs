//! Centralized device-type-specific configuration and registry (egui feature).
//!
//! This module provides a global, mutable registry of device type
//! configurations that control node visuals in the egui viewer. The free-form
//! `type` string on a device selects its fill color and icon; unknown types
//! fall back to the computing palette, matching the reference rendering.
//! Users can modify the registry at runtime to customize specific types.

#![cfg(feature = "egui")]

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::OnceCell;

use crate::model::DeviceCategory;

/// Simple RGB color independent of egui types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Palette anchors shared by the registry, sidebar, and legend.
pub const COMPUTING: Rgb = Rgb(58, 83, 155);
pub const INFRASTRUCTURE: Rgb = Rgb(45, 122, 122);
pub const PERIPHERAL: Rgb = Rgb(212, 165, 116);

/// Configuration for a specific device type.
#[derive(Clone, Debug)]
pub struct DeviceTypeConfig {
    /// Fill color for the node body in dark theme. `None` falls back to
    /// [`COMPUTING`].
    pub fill: Option<Rgb>,
    /// Optional UTF-8 glyph rendered next to the node title.
    pub icon: Option<&'static str>,
}

impl Default for DeviceTypeConfig {
    fn default() -> Self {
        Self {
            fill: None,
            icon: None,
        }
    }
}

fn cfg(fill: Rgb, icon: &'static str) -> DeviceTypeConfig {
    DeviceTypeConfig {
        fill: Some(fill),
        icon: Some(icon),
    }
}

fn default_registry() -> HashMap<String, DeviceTypeConfig> {
    let mut m = HashMap::new();

    // Computing devices
    m.insert("laptop".to_string(), cfg(COMPUTING, "💻"));
    m.insert("desktop".to_string(), cfg(COMPUTING, "🖥"));
    m.insert("pc".to_string(), cfg(COMPUTING, "🖥"));
    m.insert("macbook".to_string(), cfg(COMPUTING, "💻"));

    // Infrastructure: hubs, docks, switchers, monitors
    m.insert("usb-hub".to_string(), cfg(INFRASTRUCTURE, "🔌"));
    m.insert("dock".to_string(), cfg(INFRASTRUCTURE, "🔌"));
    m.insert("switcher".to_string(), cfg(INFRASTRUCTURE, "🔀"));
    m.insert("monitor".to_string(), cfg(INFRASTRUCTURE, "🖥"));
    m.insert("dac".to_string(), cfg(INFRASTRUCTURE, "🎚"));
    m.insert("power-adapter".to_string(), cfg(INFRASTRUCTURE, "🔌"));

    // Peripherals
    m.insert("keyboard".to_string(), cfg(PERIPHERAL, "⌨"));
    m.insert("numeric-keypad".to_string(), cfg(PERIPHERAL, "⌨"));
    m.insert("mouse".to_string(), cfg(PERIPHERAL, "🖱"));
    m.insert("trackpad".to_string(), cfg(PERIPHERAL, "🖱"));
    m.insert("camera".to_string(), cfg(PERIPHERAL, "📷"));
    m.insert("webcam".to_string(), cfg(PERIPHERAL, "📷"));
    m.insert("microphone".to_string(), cfg(PERIPHERAL, "🎤"));
    m.insert("speaker".to_string(), cfg(PERIPHERAL, "🔊"));
    m.insert("headset".to_string(), cfg(PERIPHERAL, "🎧"));
    m.insert("storage".to_string(), cfg(PERIPHERAL, "💾"));
    m.insert("ssd".to_string(), cfg(PERIPHERAL, "💾"));
    m.insert("stream-deck".to_string(), cfg(PERIPHERAL, "🎛"));
    m.insert("controller".to_string(), cfg(PERIPHERAL, "🎮"));
    m.insert("chromecast".to_string(), cfg(PERIPHERAL, "📺"));

    m
}

static REGISTRY: OnceCell<RwLock<HashMap<String, DeviceTypeConfig>>> = OnceCell::new();

/// Get a handle to the global device type configuration map.
///
/// The returned [`RwLock`] guards a [`HashMap<String, DeviceTypeConfig>`].
/// Callers may acquire a read lock to inspect existing configuration or a
/// write lock to add/modify entries at runtime.
pub fn get_device_type_config_map() -> &'static RwLock<HashMap<String, DeviceTypeConfig>> {
    REGISTRY.get_or_init(|| RwLock::new(default_registry()))
}

/// Look up the configuration for a device type, with the documented fallback.
pub fn get_device_type_cfg(device_type: &str) -> DeviceTypeConfig {
    let map = get_device_type_config_map();
    if let Ok(g) = map.read() {
        g.get(device_type).cloned().unwrap_or_default()
    } else {
        DeviceTypeConfig::default()
    }
}

/// Replace or insert a configuration for a device type.
pub fn set_device_type_config<T: Into<String>>(device_type: T, cfg: DeviceTypeConfig) {
    let map = get_device_type_config_map();
    if let Ok(mut w) = map.write() {
        w.insert(device_type.into(), cfg);
    }
}

/// Update an existing configuration in-place, creating a default if missing.
pub fn update_device_type_config<F>(device_type: &str, f: F)
where
    F: FnOnce(&mut DeviceTypeConfig),
{
    let map = get_device_type_config_map();
    if let Ok(mut w) = map.write() {
        let entry = w
            .entry(device_type.to_string())
            .or_insert_with(DeviceTypeConfig::default);
        f(entry);
    }
}

/// Category accent color for the sidebar strip and legend swatches.
pub fn category_color(category: DeviceCategory) -> Rgb {
    match category {
        DeviceCategory::Infrastructure => INFRASTRUCTURE,
        DeviceCategory::Peripheral => PERIPHERAL,
    }
}
