//! Avagh Media Site - Main Entry Point

use avagh_site::app::{RunOptions, run_site};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = RunOptions::from_env()?;
    tracing::info!("Starting Avagh Media site...");

    run_site(options).await?;
    Ok(())
}
