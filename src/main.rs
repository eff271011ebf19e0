use anyhow::Result;
use tracing_subscriber::EnvFilter;

use clipdeck::{Catalog, Config, Database, Outcome, YouTubeClient};

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clipdeck=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    let db = Database::new(&config.database_file)?;

    if config.readonly {
        tracing::info!("read-only mode enabled, skipping catalog population");
        return Ok(());
    }

    let catalog = Catalog::load(&config.catalog_file)?;
    let provider = YouTubeClient::new(&config.api_key)?;

    match db.populate(&catalog, &provider, config.full_scan)? {
        Outcome::Skipped => {
            tracing::info!("store already populated; nothing to do");
        }
        Outcome::Populated => {
            let counts = db.counts()?;
            tracing::info!(
                "populated store: {} channels, {} videos, {} links",
                counts.channels,
                counts.videos,
                counts.links
            );
        }
    }

    Ok(())
}
