//! Viewer UI — per-frame rendering and interaction.
//!
//! Layout: a fixed sidebar (title, collapsible legend, scrollable device
//! list) next to the canvas. The canvas fits the diagram to the available
//! space, then applies user zoom/pan on top. Interactions: drag nodes, drag
//! from handle to handle to draw a new connection, drag the background to
//! pan, scroll to zoom at the cursor. Display preferences are read from the
//! app's [`ViewState`] and a staged copy is swapped in at the end of the
//! frame.

#![cfg(feature = "egui")]

use std::collections::HashMap;

use eframe::egui::{self, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, pos2, vec2};

use crate::device_types::{COMPUTING, INFRASTRUCTURE, PERIPHERAL, category_color};
use crate::label_place::{self, Measurer, RectF, Vec2f};
use crate::routing::Handle;

use super::geometry::{
    CONNECT_SNAP_DISTANCE, edge_path, handle_anchor_pos, nearest_handle, node_rect,
};
use super::render::{
    render_device_node, render_edge_label, render_edge_path, render_grid, rgb_to_color32,
};
use super::state::{DiagramApp, DragMode, ViewState};
use super::theme::Palette;

const SIDEBAR_WIDTH: f32 = 300.0;
const CANVAS_MARGIN: f32 = 20.0;
const GRID_SPACING: f32 = 20.0;

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn update(app: &mut DiagramApp, ctx: &egui::Context) {
    let palette = Palette::for_theme(app.view.theme);
    ctx.set_visuals(if app.view.theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    // Staged copy of the view state; replaced wholesale at the end of the
    // frame so rendering never observes a half-applied preference change.
    let mut staged = app.view;
    let mut do_reset = false;
    let mut do_toggle_theme = false;

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .frame(egui::Frame::side_top_panel(&ctx.style()).fill(palette.panel_bg))
        .show(ctx, |ui| {
            sidebar(app, ui, &palette, &mut staged);
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(palette.canvas_bg))
        .show(ctx, |ui| {
            canvas(
                app,
                ui,
                &palette,
                &mut staged,
                &mut do_reset,
                &mut do_toggle_theme,
            );
        });

    app.view = staged;
    if do_toggle_theme {
        app.toggle_theme();
    }
    if do_reset {
        app.reset();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sidebar
// ────────────────────────────────────────────────────────────────────────────

fn sidebar(app: &DiagramApp, ui: &mut egui::Ui, palette: &Palette, staged: &mut ViewState) {
    ui.add_space(8.0);
    ui.label(
        RichText::new(&app.diagram.title)
            .strong()
            .size(17.0)
            .color(palette.text_primary),
    );
    ui.label(
        RichText::new(&app.diagram.date)
            .size(11.0)
            .color(palette.text_secondary),
    );
    ui.add_space(6.0);
    ui.separator();

    // Collapsible legend
    let legend_icon = if staged.show_legend { "⏷" } else { "⏵" };
    if ui
        .button(RichText::new(format!("{legend_icon} Legend")).size(12.0))
        .clicked()
    {
        *staged = staged.with_legend(!staged.show_legend);
    }
    if staged.show_legend {
        let rows = [
            (COMPUTING, "Computing", "Laptops, Desktops, PCs"),
            (INFRASTRUCTURE, "Infrastructure", "Hubs, Switchers, Monitors"),
            (PERIPHERAL, "Peripherals", "Input, Output, Accessories"),
        ];
        for (color, name, desc) in rows {
            ui.horizontal(|ui| {
                let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                ui.painter().rect_filled(swatch, 3.0, rgb_to_color32(color));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(name)
                            .strong()
                            .size(11.0)
                            .color(palette.text_primary),
                    );
                    ui.label(RichText::new(desc).size(9.0).color(palette.text_secondary));
                });
            });
        }
    }
    ui.separator();

    // Device list
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("DEVICES")
                .strong()
                .size(11.0)
                .color(palette.text_secondary),
        );
        ui.label(
            RichText::new(app.diagram.devices.len().to_string())
                .strong()
                .size(11.0)
                .color(palette.accent),
        );
    });
    egui::ScrollArea::vertical().show(ui, |ui| {
        for device in &app.diagram.devices {
            ui.horizontal(|ui| {
                let (strip, _) = ui.allocate_exact_size(vec2(4.0, 30.0), Sense::hover());
                ui.painter()
                    .rect_filled(strip, 2.0, rgb_to_color32(category_color(device.category)));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&device.name)
                            .strong()
                            .size(12.0)
                            .color(palette.text_primary),
                    );
                    ui.label(
                        RichText::new(device.subtitle())
                            .size(10.0)
                            .color(palette.text_secondary),
                    );
                });
                if !device.connections.is_empty() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(device.connections.len().to_string())
                                .size(10.0)
                                .color(palette.text_secondary),
                        );
                    });
                }
            });
            ui.add_space(2.0);
        }
    });

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(4.0);
        ui.label(
            RichText::new("Interactive device diagram")
                .size(9.0)
                .color(palette.text_secondary),
        );
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Canvas
// ────────────────────────────────────────────────────────────────────────────

/// Backs the label placer with egui text measurement.
struct GalleyMeasurer<'a> {
    painter: &'a egui::Painter,
    font: FontId,
}

impl Measurer for GalleyMeasurer<'_> {
    fn measure(&self, text: &str) -> (f32, f32) {
        let galley =
            self.painter
                .layout_no_wrap(text.to_string(), self.font.clone(), Color32::WHITE);
        (galley.size().x, galley.size().y)
    }
}

fn rectf_to_rect(r: RectF) -> Rect {
    Rect::from_min_max(pos2(r.min.x, r.min.y), pos2(r.max.x, r.max.y))
}

fn canvas(
    app: &mut DiagramApp,
    ui: &mut egui::Ui,
    palette: &Palette,
    staged: &mut ViewState,
    do_reset: &mut bool,
    do_toggle_theme: &mut bool,
) {
    // Snapshots for rendering; interactions mutate `app` directly below.
    let nodes = app.nodes.clone();
    let edges = app.edges.clone();

    if nodes.is_empty() {
        ui.colored_label(Color32::YELLOW, "No devices to render");
        return;
    }

    // Fit-to-view base scale over the node bounding box
    let mut bb = node_rect(nodes[0].position);
    for n in &nodes[1..] {
        bb = bb.union(node_rect(n.position));
    }
    let avail = ui.available_rect_before_wrap();
    let sx = (avail.width() - 2.0 * CANVAS_MARGIN) / bb.width().max(1.0);
    let sy = (avail.height() - 2.0 * CANVAS_MARGIN) / bb.height().max(1.0);
    let base_scale = sx.min(sy).max(0.1);

    if app.reset_view {
        *staged = staged.reset_viewport();
        app.reset_view = false;
    }

    // Background: pan with drag, zoom at the cursor with scroll
    let canvas_resp = ui.interact(avail, ui.id().with("canvas"), Sense::drag());
    if canvas_resp.dragged() {
        *staged = staged.with_viewport(staged.zoom, staged.pan + canvas_resp.drag_delta());
    }
    let scroll_y = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_y.abs() > 0.0 && canvas_resp.hovered() {
        let factor = (1.0_f32 + scroll_y * 0.001_f32).max(0.1_f32);
        let old_zoom = staged.zoom;
        let new_zoom = (old_zoom * factor).clamp(0.2, 10.0);
        if (new_zoom - old_zoom).abs() > f32::EPSILON {
            let origin = pos2(avail.left() + CANVAS_MARGIN, avail.top() + CANVAS_MARGIN);
            let s_old = base_scale * old_zoom;
            let s_new = base_scale * new_zoom;
            let cursor = canvas_resp.hover_pos().unwrap_or(avail.center());
            let world_x = (cursor.x - origin.x - staged.pan.x) / s_old + bb.left();
            let world_y = (cursor.y - origin.y - staged.pan.y) / s_old + bb.top();
            let pan = vec2(
                cursor.x - ((world_x - bb.left()) * s_new + origin.x),
                cursor.y - ((world_y - bb.top()) * s_new + origin.y),
            );
            *staged = staged.with_viewport(new_zoom, pan);
        }
    }

    let s = base_scale * staged.zoom;
    let origin = pos2(
        avail.left() + CANVAS_MARGIN + staged.pan.x,
        avail.top() + CANVAS_MARGIN + staged.pan.y,
    );
    let to_screen =
        |p: Pos2| pos2((p.x - bb.left()) * s + origin.x, (p.y - bb.top()) * s + origin.y);
    let from_screen =
        |p: Pos2| pos2((p.x - origin.x) / s + bb.left(), (p.y - origin.y) / s + bb.top());
    let font_scale = s.max(0.01);

    if staged.show_grid {
        let grid_offset = origin.to_vec2() - bb.left_top().to_vec2() * s;
        render_grid(
            ui.painter(),
            avail,
            s,
            grid_offset,
            GRID_SPACING,
            palette.grid_dot,
        );
    }

    // Edges (drawn under the nodes). Dangling endpoints simply skip the
    // edge; the catalog validator reports them, the renderer tolerates them.
    let rect_by_id: HashMap<&str, Rect> = nodes
        .iter()
        .map(|n| (n.id.as_str(), node_rect(n.position)))
        .collect();
    let mut placed_labels: Vec<RectF> = Vec::new();
    for edge in &edges {
        let (Some(src), Some(dst)) = (
            rect_by_id.get(edge.source.as_str()),
            rect_by_id.get(edge.target.as_str()),
        ) else {
            continue;
        };
        let path = edge_path(*src, *dst, edge.source_handle, edge.target_handle);
        let screen_path: Vec<Pos2> = path.iter().map(|p| to_screen(*p)).collect();
        render_edge_path(ui.painter(), &screen_path, edge, palette, s);

        if !edge.label.is_empty() {
            let label_font = FontId::proportional(9.0 * font_scale);
            let measurer = GalleyMeasurer {
                painter: ui.painter(),
                font: label_font,
            };
            let poly: Vec<Vec2f> = screen_path.iter().map(|p| Vec2f::new(p.x, p.y)).collect();
            if let Some(rect) = label_place::place_edge_label(
                &poly,
                &edge.label,
                &measurer,
                label_place::Config::default(),
                &placed_labels,
            ) {
                render_edge_label(
                    ui.painter(),
                    rectf_to_rect(rect),
                    &edge.label,
                    palette,
                    font_scale,
                );
                placed_labels.push(rect);
            }
        }
    }

    // Connection preview while dragging from a handle
    if let DragMode::Connection {
        source,
        source_handle,
        current,
    } = app.drag.clone()
    {
        if let Some(src_rect) = rect_by_id.get(source.as_str()) {
            let from = to_screen(handle_anchor_pos(*src_rect, source_handle));
            let to = to_screen(current);
            ui.painter()
                .line_segment([from, to], Stroke::new(2.0, palette.accent));
            ui.painter().circle_filled(to, 4.0, palette.accent);
        }
    }

    // Nodes
    let dark = staged.theme.is_dark();
    let pointer_world = ui
        .input(|i| i.pointer.interact_pos())
        .map(from_screen);
    for (i, node) in nodes.iter().enumerate() {
        let r = node_rect(node.position);
        let r_screen = Rect::from_min_max(to_screen(r.min), to_screen(r.max));
        render_device_node(ui.painter(), node, r_screen, palette, dark, font_scale);

        let resp = ui.allocate_rect(r_screen, Sense::drag());
        if resp.drag_started() {
            app.drag = DragMode::Node { index: i };
        }
        if resp.dragged() {
            if let DragMode::Node { index } = app.drag {
                let d = resp.drag_delta();
                app.move_node(index, d.x / s, d.y / s);
            }
        }
        if resp.drag_stopped() {
            if let DragMode::Node { .. } = app.drag {
                app.drag = DragMode::None;
            }
        }

        // Handles: visible on hover and while a connection is being drawn
        let connecting = matches!(app.drag, DragMode::Connection { .. });
        if resp.hovered() || connecting {
            for handle in [Handle::Top, Handle::Bottom, Handle::Left, Handle::Right] {
                let anchor = to_screen(handle_anchor_pos(r, handle));
                ui.painter()
                    .circle_stroke(anchor, 4.0, Stroke::new(1.5, palette.accent));
                let grab = Rect::from_center_size(anchor, vec2(12.0, 12.0));
                let hresp = ui.allocate_rect(grab, Sense::drag());
                if hresp.drag_started() {
                    app.drag = DragMode::Connection {
                        source: node.id.clone(),
                        source_handle: handle,
                        current: handle_anchor_pos(r, handle),
                    };
                }
            }
        }
    }

    // Advance or finish an in-progress connection
    if let DragMode::Connection {
        source,
        source_handle,
        ..
    } = app.drag.clone()
    {
        if let Some(world) = pointer_world {
            app.drag = DragMode::Connection {
                source: source.clone(),
                source_handle,
                current: world,
            };
            if ui.input(|i| i.pointer.any_released()) {
                let target = nodes
                    .iter()
                    .filter(|n| n.id != source)
                    .map(|n| {
                        let (h, d) = nearest_handle(node_rect(n.position), world);
                        (n.id.clone(), h, d)
                    })
                    .min_by(|a, b| a.2.total_cmp(&b.2));
                if let Some((target_id, target_handle, dist)) = target {
                    if dist <= CONNECT_SNAP_DISTANCE {
                        app.connect(&source, source_handle, &target_id, target_handle);
                    }
                }
                app.drag = DragMode::None;
            }
        }
    }

    // Floating view controls, top-right of the canvas
    egui::Area::new("view_controls".into())
        .fixed_pos(pos2(avail.right() - 190.0, avail.top() + 8.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.small_button("⟲").on_hover_text("Reset view").clicked() {
                        *do_reset = true;
                    }
                    let grid_label = if staged.show_grid { "▦" } else { "▢" };
                    if ui
                        .small_button(grid_label)
                        .on_hover_text("Toggle grid")
                        .clicked()
                    {
                        *staged = staged.with_grid(!staged.show_grid);
                    }
                    let theme_label = if staged.theme.is_dark() { "☀" } else { "🌙" };
                    if ui
                        .small_button(theme_label)
                        .on_hover_text("Toggle theme")
                        .clicked()
                    {
                        *do_toggle_theme = true;
                    }
                    ui.separator();
                    // Display current zoom level as percent
                    let percent = (staged.zoom * 100.0).round() as i32;
                    ui.label(format!("{}%", percent));
                });
            });
        });
}
