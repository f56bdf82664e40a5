use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use campus_panel::artifacts::{clean, CleanOutcome, OutputLayout};
use campus_panel::config::{load_config, PanelConfig};
use campus_panel::navigation::{Resolution, RouteTable, RouteTarget};
use campus_panel::observability::init_logging;

#[derive(Parser)]
#[command(name = "panel-cli")]
#[command(about = "Management CLI for the campus panel tooling", long_about = None)]
struct Cli {
    /// Config file; production defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the compiled route table
    Routes,
    /// Resolve a path against the route table
    Resolve { path: String },
    /// Show the planned build output directories
    Layout,
    /// Delete the shared build output root
    Clean {
        /// Print what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PanelConfig::default(),
    };
    init_logging(&config.observability);

    match cli.command {
        Commands::Routes => {
            let table = RouteTable::from_config(&config.routes, &config.navigation);
            if cli.json {
                let entries: Vec<_> = table
                    .entries()
                    .iter()
                    .map(|entry| match &entry.target {
                        RouteTarget::View(view) => json!({
                            "path": entry.path,
                            "view": view.name,
                            "title": view.title,
                        }),
                        RouteTarget::Redirect(dest) => json!({
                            "path": entry.path,
                            "redirect": dest,
                        }),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in table.entries() {
                    match &entry.target {
                        RouteTarget::View(view) => {
                            println!("{:<16} -> view {}", entry.path, view.name);
                        }
                        RouteTarget::Redirect(dest) => {
                            println!("{:<16} -> redirect {}", entry.path, dest);
                        }
                    }
                }
            }
        }
        Commands::Resolve { path } => {
            let table = RouteTable::from_config(&config.routes, &config.navigation);
            match table.resolve(&path) {
                Resolution::View {
                    view,
                    canonical,
                    redirected,
                } => {
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&json!({
                                "view": view.name,
                                "canonical": canonical,
                                "redirected": redirected,
                            }))?
                        );
                    } else if redirected {
                        println!("{} -> {} (via redirect) -> view {}", path, canonical, view.name);
                    } else {
                        println!("{} -> view {}", path, view.name);
                    }
                }
                Resolution::NotFound { view, path } => {
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&json!({
                                "view": view.name,
                                "canonical": path,
                                "not_found": true,
                            }))?
                        );
                    } else {
                        eprintln!("{} -> no matching route (view {})", path, view.name);
                    }
                    std::process::exit(1);
                }
            }
        }
        Commands::Layout => {
            let layout = OutputLayout::plan(&config.build)?;
            if cli.json {
                let subprojects: Vec<_> = layout
                    .subprojects()
                    .iter()
                    .map(|s| {
                        json!({
                            "name": s.name,
                            "output_dir": s.output_dir.display().to_string(),
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "shared_root": layout.shared_root().display().to_string(),
                        "subprojects": subprojects,
                        "evaluation_order": layout.evaluation_order(),
                        "repositories": layout.repositories(),
                    }))?
                );
            } else {
                println!("shared root:      {}", layout.shared_root().display());
                for subproject in layout.subprojects() {
                    println!(
                        "subproject {:<12} {}",
                        subproject.name,
                        subproject.output_dir.display()
                    );
                }
                println!("evaluation order: {}", layout.evaluation_order().join(", "));
                println!("repositories:     {}", layout.repositories().join(", "));
            }
        }
        Commands::Clean { dry_run } => {
            let layout = OutputLayout::plan(&config.build)?;
            if dry_run {
                println!("would remove {}", layout.shared_root().display());
            } else {
                match clean(&layout)? {
                    CleanOutcome::Removed => {
                        println!("removed {}", layout.shared_root().display());
                    }
                    CleanOutcome::AlreadyClean => {
                        println!("already clean: {}", layout.shared_root().display());
                    }
                }
            }
        }
    }

    Ok(())
}
