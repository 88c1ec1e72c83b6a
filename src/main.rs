mod config;
mod models;
mod sources;
mod services;
mod api;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use config::Config;
use services::{PhoenixScreener, SimulatedActivity};
use sources::{dexscreener::DexScreenerSource, PairSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,phoenix_finder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        "✓ Config loaded: chain={}, {} watch terms",
        config.screener.chain,
        config.screener.watch_terms.len()
    );

    let source: Arc<dyn PairSource> = Arc::new(DexScreenerSource::new());
    let chain = config.screener.chain.clone();
    let screener = Arc::new(PhoenixScreener::new(source.clone(), config.screener));

    let state = Arc::new(AppState {
        screener,
        source,
        activity: Arc::new(SimulatedActivity),
        chain,
        realtime_enabled: config.realtime.enabled,
        realtime_interval_secs: config.realtime.update_interval_secs,
    });

    if config.realtime.enabled {
        tracing::info!("✓ Realtime push enabled ({}s interval)", config.realtime.update_interval_secs);
    } else {
        tracing::info!("✓ Realtime push disabled, clients poll the REST routes");
    }

    let app = api::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("✓ Server ready on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
