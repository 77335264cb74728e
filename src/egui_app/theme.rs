//! Light/dark palettes for the viewer.
//!
//! One palette instance per theme, applied to every panel and painter call.
//! Values follow the reference rendering's slate/violet scheme.

#![cfg(feature = "egui")]

use eframe::egui::Color32;

use serde::{Deserialize, Serialize};

/// The active visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Complete palette with all colors the viewer needs.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Base surfaces
    pub canvas_bg: Color32,
    pub panel_bg: Color32,
    pub panel_border: Color32,

    // Text
    pub text_primary: Color32,
    pub text_secondary: Color32,

    // Nodes
    /// Node body in light theme (dark theme uses the type registry fill).
    pub node_body: Color32,
    pub node_border: Color32,

    // Canvas furniture
    pub grid_dot: Color32,
    pub edge: Color32,
    pub edge_label_bg: Color32,
    pub edge_label_text: Color32,

    // Controls
    pub accent: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Dark theme (default): slate surfaces, violet edges.
    pub fn dark() -> Self {
        Self {
            canvas_bg: Color32::from_rgb(15, 23, 42),
            panel_bg: Color32::from_rgb(2, 6, 23),
            panel_border: Color32::from_rgb(51, 65, 85),
            text_primary: Color32::from_rgb(241, 245, 249),
            text_secondary: Color32::from_rgb(148, 163, 184),
            node_body: Color32::from_rgb(30, 41, 59),
            node_border: Color32::WHITE,
            grid_dot: Color32::from_rgba_unmultiplied(255, 255, 255, 0x22),
            edge: Color32::from_rgba_unmultiplied(168, 85, 247, 128),
            edge_label_bg: Color32::from_rgb(168, 85, 247),
            edge_label_text: Color32::WHITE,
            accent: Color32::from_rgb(96, 165, 250),
        }
    }

    /// Light theme: white surfaces, deeper violet edges.
    pub fn light() -> Self {
        Self {
            canvas_bg: Color32::WHITE,
            panel_bg: Color32::from_rgb(241, 245, 249),
            panel_border: Color32::from_rgb(226, 232, 240),
            text_primary: Color32::from_rgb(15, 23, 42),
            text_secondary: Color32::from_rgb(100, 116, 139),
            node_body: Color32::WHITE,
            node_border: Color32::from_rgb(226, 232, 240),
            grid_dot: Color32::from_rgba_unmultiplied(0, 0, 0, 0x11),
            edge: Color32::from_rgba_unmultiplied(147, 51, 234, 153),
            edge_label_bg: Color32::from_rgb(147, 51, 234),
            edge_label_text: Color32::WHITE,
            accent: Color32::from_rgb(37, 99, 235),
        }
    }
}
