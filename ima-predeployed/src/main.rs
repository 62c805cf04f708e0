use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use tracing::info;

use ima_predeployed::{artifact::ArtifactStore, config::GeneratorConfig, genesis};

/// Generate genesis allocations for the IMA predeployed contracts
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the generator config (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// Where to write the allocation JSON; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Generates the allocation described by `args`, writing it to `--output`
/// or to `stdout`.
fn run(args: &Args, stdout: &mut impl Write) -> eyre::Result<()> {
    let config = GeneratorConfig::load_from_path(&args.config)?;
    if config.deposit_boxes.is_empty() {
        eyre::bail!("No deposit boxes configured in {}", args.config.display());
    }

    let base = args
        .config
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    let artifacts = ArtifactStore::new(config.artifacts_path(&base));
    info!("Using artifacts from {}", artifacts.dir().display());

    let allocation = genesis::generate_token_managers(&config, &artifacts)?;
    let json = serde_json::to_string_pretty(&allocation)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Wrote {} accounts to {}", allocation.len(), path.display());
        }
        None => writeln!(stdout, "{}", json)?,
    }

    Ok(())
}

fn main() -> eyre::Result<()> {
    // Initialize logging
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());
    let tracing_sub = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(tracing_sub)?;

    let args = Args::parse();
    run(&args, &mut io::stdout().lock())
}
