mod catalog;
mod graph;
mod layout;
mod model;
mod routing;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dump or validate the embedded workstation diagram", long_about = None)]
struct Cli {
    /// Print the built node/edge arrays instead of the raw diagram
    #[arg(long)]
    graph: bool,

    /// Validate the catalog and layout, reporting all authoring issues
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let diagram = catalog::workstation_diagram();
    let layout = layout::workstation_layout();

    if cli.check {
        let issues = graph::validate(&diagram, &layout);
        if issues.is_empty() {
            println!(
                "ok: {} devices, {} connections",
                diagram.devices.len(),
                diagram.connection_count()
            );
            return Ok(());
        }
        for issue in &issues {
            eprintln!("{}", issue);
        }
        anyhow::bail!("{} issue(s) found", issues.len());
    }

    let json = if cli.graph {
        let overrides = catalog::workstation_overrides();
        let built = graph::build_graph(&diagram, &layout, &overrides);
        serde_json::to_string_pretty(&built)?
    } else {
        serde_json::to_string_pretty(&diagram)?
    };
    println!("{}", json);
    Ok(())
}
