//! Afisz CLI binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = afisz::cli::Cli::parse();

    if let Err(e) = afisz::cli::run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
