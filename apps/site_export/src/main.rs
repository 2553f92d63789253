use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use site_core::{load_settings, view, ViewModel};

mod export;
mod replay;

#[derive(Parser, Debug)]
#[command(name = "site_export", version, about = "Render, export and replay the Kongu × GUVI site")]
struct Cli {
    #[arg(long, global = true, default_value = "site.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one full HTML frame for the given browser state.
    Render {
        #[arg(long, default_value = "")]
        fragment: String,
        #[arg(long, default_value_t = 0.0)]
        scroll_y: f64,
        #[arg(long)]
        menu_open: bool,
        #[arg(long, default_value_t = 0)]
        highlight: usize,
    },
    /// Write one HTML snapshot per route plus a routes.json manifest.
    Export {
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// Drive the shell with a JSON array of browser events.
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long, default_value = "")]
        fragment: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = load_settings(&cli.config)
        .with_context(|| format!("failed to load settings from '{}'", cli.config.display()))?;

    match cli.command {
        Command::Render {
            fragment,
            scroll_y,
            menu_open,
            highlight,
        } => {
            let view = ViewModel::from_inputs(&fragment, scroll_y, menu_open, highlight, &settings);
            let html = view::render_document(&view).context("failed to render frame")?;
            println!("{html}");
        }
        Command::Export { out_dir } => {
            let manifest = export::export_site(&settings, &out_dir).await?;
            println!(
                "exported {} routes to {}",
                manifest.len(),
                out_dir.display()
            );
        }
        Command::Replay { script, fragment } => {
            let raw = tokio::fs::read_to_string(&script)
                .await
                .with_context(|| format!("failed to read replay script '{}'", script.display()))?;
            let events = replay::parse_script(&raw)
                .with_context(|| format!("invalid replay script '{}'", script.display()))?;
            let report = replay::run(settings, &fragment, events)?;
            for step in &report.steps {
                println!("{}", serde_json::to_string(step)?);
            }
            println!("{}", serde_json::to_string(&report.summary)?);
        }
    }

    Ok(())
}
