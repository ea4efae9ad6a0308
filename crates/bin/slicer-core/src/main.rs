mod config;
mod fixture;
mod orchestrator;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use slicer_types::Micrometer;
use tracing_subscriber::EnvFilter;

/// Runs the polygon layer-processing core over an already-sliced layer
/// fixture: partitions every layer and applies the perimeter modifier.
#[derive(Parser, Debug)]
#[command(name = "slicer-core", version, about = "Polygon layer-processing core")]
struct Args {
    /// Path to a JSON fixture holding the raw layer stack (`Vec<Layer>`).
    input: PathBuf,

    /// Path to a TOML config file deserializing to `SliceConfig`.
    #[arg(long)]
    config: PathBuf,

    /// Nominal layer height in µm, used only to summarize the model for
    /// `Modifier::init`; the core itself is layer-height agnostic.
    #[arg(long, default_value_t = 200)]
    layer_height: Micrometer,

    /// Partition layers with a rayon worker pool instead of sequentially.
    #[arg(long)]
    parallel: bool,
}

fn configure_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    configure_logging();
    let args = Args::parse();

    let config = config::load_config(&args.config)?;
    let layers = fixture::load_layers(&args.input)?;

    let partitioned = orchestrator::run(&layers, config, args.layer_height, args.parallel)?;

    println!("{}", serde_json::to_string_pretty(&partitioned)?);
    Ok(())
}
