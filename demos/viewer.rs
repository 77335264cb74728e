//! Interactive workstation diagram viewer (requires `--features egui`).
//!
//! Usage:
//!   cargo run --features egui --example viewer [-- --light --no-grid]

#[cfg(feature = "egui")]
use anyhow::Result;
#[cfg(feature = "egui")]
use clap::Parser;

#[cfg(feature = "egui")]
use rigmap::egui_app::{DiagramApp, Theme};
#[cfg(feature = "egui")]
use rigmap::{catalog, graph, layout};

#[cfg(feature = "egui")]
#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive workstation device diagram", long_about = None)]
struct Args {
    /// Start in the light theme (default is dark)
    #[arg(long)]
    light: bool,

    /// Start with the dotted grid hidden
    #[arg(long = "no-grid")]
    no_grid: bool,
}

#[cfg(feature = "egui")]
fn main() -> Result<()> {
    let args = Args::parse();

    // Surface authoring issues before the first frame; none of them are
    // fatal, the diagram just renders degraded.
    let diagram = catalog::workstation_diagram();
    let table = layout::workstation_layout();
    for issue in graph::validate(&diagram, &table) {
        eprintln!("warning: {}", issue);
    }

    let mut app = DiagramApp::workstation();
    if args.light {
        app.set_theme(Theme::Light);
    }
    if args.no_grid {
        app.toggle_grid();
    }

    // Start maximized: some platforms do not support exclusive fullscreen
    // well, and a maximized window fills the screen just the same.
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_maximized(true),
        ..Default::default()
    };
    eframe::run_native(
        "rigmap workstation viewer",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}

#[cfg(not(feature = "egui"))]
fn main() {
    eprintln!("This demo requires the `egui` feature: cargo run --features egui --example viewer");
}
