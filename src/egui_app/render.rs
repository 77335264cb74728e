//! Painters for nodes, edges, labels, and the grid layer.

#![cfg(feature = "egui")]

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::device_types::{Rgb, get_device_type_cfg};
use crate::graph::{Edge, Node};

use super::theme::Palette;

pub fn rgb_to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

/// Relative luminance of a color (sRGB).
pub fn luminance(c: Color32) -> f32 {
    fn to_lin(u: u8) -> f32 {
        let s = (u as f32) / 255.0;
        if s <= 0.04045 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * to_lin(c.r()) + 0.7152 * to_lin(c.g()) + 0.0722 * to_lin(c.b())
}

/// Dark text on light backgrounds, light text on dark backgrounds.
pub fn contrast_color(bg: Color32) -> Color32 {
    if luminance(bg) > 0.6 {
        Color32::from_rgb(25, 35, 45)
    } else {
        Color32::from_rgb(235, 245, 245)
    }
}

/// Fill color for a node body.
///
/// Dark theme uses the type registry's color; light theme renders all nodes
/// on the plain body color with a light border, matching the reference.
pub fn node_fill_color(node: &Node, palette: &Palette, dark: bool) -> Color32 {
    if dark {
        let cfg = get_device_type_cfg(&node.device.device_type);
        rgb_to_color32(cfg.fill.unwrap_or(crate::device_types::COMPUTING))
    } else {
        palette.node_body
    }
}

/// Draw one device node: rounded body, icon + name line, type subtitle.
pub fn render_device_node(
    painter: &egui::Painter,
    node: &Node,
    rect: Rect,
    palette: &Palette,
    dark: bool,
    font_scale: f32,
) {
    let fill = node_fill_color(node, palette, dark);
    painter.rect_filled(rect, 6.0, fill);
    painter.rect_stroke(
        rect,
        6.0,
        Stroke::new(1.5, palette.node_border),
        egui::StrokeKind::Outside,
    );

    let title_color = if dark {
        contrast_color(fill)
    } else {
        palette.text_primary
    };
    let subtitle_color = if dark { title_color } else { palette.text_secondary };

    let cfg = get_device_type_cfg(&node.device.device_type);
    let title = match cfg.icon {
        Some(glyph) => format!("{} {}", glyph, node.device.name),
        None => node.device.name.clone(),
    };

    let title_font = FontId::proportional(12.0 * font_scale);
    let subtitle_font = FontId::proportional(9.0 * font_scale);
    let cx = rect.center().x;
    painter.text(
        Pos2::new(cx, rect.center().y - 7.0 * font_scale),
        Align2::CENTER_CENTER,
        title,
        title_font,
        title_color,
    );
    painter.text(
        Pos2::new(cx, rect.center().y + 9.0 * font_scale),
        Align2::CENTER_CENTER,
        node.device.subtitle(),
        subtitle_font,
        subtitle_color,
    );
}

/// Draw an edge's polyline with its fixed stroke style.
pub fn render_edge_path(
    painter: &egui::Painter,
    path: &[Pos2],
    edge: &Edge,
    palette: &Palette,
    scale: f32,
) {
    let (r, g, b) = edge.style.color;
    // Keep the palette's per-theme opacity, take the hue from the edge style
    let color = Color32::from_rgba_unmultiplied(r, g, b, palette.edge.a());
    let stroke = Stroke::new((edge.style.width * scale).max(1.0), color);
    for pair in path.windows(2) {
        painter.line_segment([pair[0], pair[1]], stroke);
    }
}

/// Draw a connection-medium label pill at `rect`.
pub fn render_edge_label(
    painter: &egui::Painter,
    rect: Rect,
    text: &str,
    palette: &Palette,
    font_scale: f32,
) {
    painter.rect_filled(rect, 4.0, palette.edge_label_bg);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(9.0 * font_scale),
        palette.edge_label_text,
    );
}

/// Dotted background layer, aligned to diagram space so dots pan and zoom
/// with the content. `spacing` is in diagram units.
pub fn render_grid(
    painter: &egui::Painter,
    viewport: Rect,
    to_screen_scale: f32,
    to_screen_offset: egui::Vec2,
    spacing: f32,
    color: Color32,
) {
    let step = spacing * to_screen_scale;
    if step < 4.0 {
        // Dots would blur into a wash when zoomed far out
        return;
    }
    let first_x = ((viewport.left() - to_screen_offset.x) / step).floor() * step + to_screen_offset.x;
    let first_y = ((viewport.top() - to_screen_offset.y) / step).floor() * step + to_screen_offset.y;
    let radius = 1.0;
    let mut y = first_y;
    while y <= viewport.bottom() {
        let mut x = first_x;
        while x <= viewport.right() {
            painter.circle_filled(Pos2::new(x, y), radius, color);
            x += step;
        }
        y += step;
    }
}
