//! eventmeta - inspect how an event payload is classified
//!
//! Reads a JSON payload and prints its metadata, title, location and search
//! message for the chosen event type.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eventmeta::{EventTypeRegistry, ExtractionConfig};
use tracing_subscriber::EnvFilter;

/// eventmeta - event payload inspector
#[derive(Parser, Debug)]
#[command(name = "eventmeta")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Event type key (unknown keys use the default type)
    #[arg(short = 't', long = "type", default_value = "default")]
    event_type: String,

    /// Text the search message starts from
    #[arg(short, long, default_value = "")]
    seed: String,

    /// Path to a TOML extraction config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List registered event type keys and exit
    #[arg(long)]
    list_types: bool,

    /// Payload file; stdin when omitted or "-"
    payload: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn read_payload(path: Option<&PathBuf>) -> Result<serde_json::Value> {
    let raw = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload from {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read payload from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&raw).context("payload is not valid JSON")
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = ExtractionConfig::load_or_default(cli.config.as_deref())
        .context("failed to load extraction config")?;
    let registry = EventTypeRegistry::new(&config);

    if cli.list_types {
        for key in registry.keys() {
            println!("{key}");
        }
        return Ok(());
    }

    let payload = read_payload(cli.payload.as_ref())?;
    let summary = registry
        .summarize(&cli.event_type, &payload, &cli.seed)
        .with_context(|| format!("failed to summarize payload as '{}'", cli.event_type))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
