use anyhow::Result;
use clap::Parser;
use doc2epub::cli::Cli;
use doc2epub::converter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    converter::convert(&cli)
}
