use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod config;
mod error;
mod format;
mod logging;
mod normalize;
mod rest;
mod store;
mod types;

#[derive(Parser)]
#[command(name = "quakefetch")]
#[command(about = "Fetch a single USGS earthquake event and summarize it")]
struct Cli {
    /// USGS event id (e.g., us6000jllz)
    #[arg(long)]
    event_id: String,

    /// Write the event summary to a JSON file path (e.g., outputs/event.json)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::setup_logging(&cfg.logging)?;

    let client = rest::CatalogClient::new(
        &cfg.catalog.base_url,
        Duration::from_secs(cfg.catalog.timeout_secs),
    )?;

    info!(event_id = %cli.event_id, "fetching event from catalog");
    let doc = client.fetch_event(&cli.event_id).await?;
    let ev = normalize::normalize_event(&cli.event_id, &doc)?;

    print!("{}", format::render_event(&ev));

    if let Some(path) = cli.out.as_deref() {
        store::write_summary(path, &ev)?;
        info!(path = %path.display(), "saved event summary");
        println!("\nSaved JSON -> {}", path.display());
    }

    Ok(())
}
