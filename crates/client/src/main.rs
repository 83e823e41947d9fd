//! Headless client binary.
//!
//! Loads content from `CONTENT_DIR`, assembles a [`runtime::World`] and plays
//! a short scripted encounter, printing every published event.
//!
//! ```bash
//! RUST_LOG=runtime=debug cargo run -p rpg-client
//! ```

mod config;
mod encounter;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{RuntimeConfig, World};

use crate::config::ClientConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(content_dir = %config.content_dir.display(), "starting client");

    let content = ContentFactory::load_dir(&config.content_dir)
        .with_context(|| format!("loading content from {}", config.content_dir.display()))?;

    let world = World::builder()
        .content(&content)
        .config(RuntimeConfig {
            game_config: content.config.clone(),
            event_buffer_size: config.event_buffer_size,
        })
        .build()?;

    encounter::run(world)?;

    tracing::info!("client shutdown complete");
    Ok(())
}
