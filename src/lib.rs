//! Workstation device wiring diagram visualizer.
//!
//! This crate renders a fixed, embedded graph of physical devices and their
//! cable/wireless connections as an interactive node-link diagram. The data
//! model, layout table, handle selection, and graph builder are plain library
//! code; the interactive viewer lives behind the `egui` feature.
//!
//! The binary `rigmap` dumps the embedded diagram (or the built graph) as
//! JSON and can validate the authored data.

pub mod catalog;
pub mod graph;
pub mod label_place;
pub mod layout;
pub mod model;
pub mod routing;

// Optional GUI/egui functionality lives behind the `egui` feature flag.
// These modules provide the interactive viewer used by demos/viewer.rs.
#[cfg(feature = "egui")]
pub mod device_types;
#[cfg(feature = "egui")]
pub mod egui_app;
