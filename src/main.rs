mod compose;
mod draw;
mod export;
mod figure;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "healtiefy-assets",
    about = "Generates the Healtiefy logo and splash screen assets"
)]
struct Cli {
    /// Output directory for the generated PNG files
    #[arg(long, default_value = "assets/images")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("healtiefy_assets=info".parse().unwrap());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("generating Healtiefy logo assets (iOS-style rounded square, green walking figure)");
    export::export_all(&cli.out)
}
