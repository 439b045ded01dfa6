include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::get,
    Router,
};
use crate::catalog::controller::{query_catalog, sample_catalog};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::snapshot::factory::create_snapshot_cache;
use crate::snapshot::SnapshotOrigin;
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    // Without INVENTORY_URL the service runs against the bundled fixture
    // snapshot, which keeps local development network-free.
    let config = Configuration::from_env();
    let origin = if config.upstream_url.is_empty() {
        SnapshotOrigin::Fixture
    } else {
        SnapshotOrigin::Http
    };
    let cache = create_snapshot_cache(&config, origin);
    let state = AppState::new(config, cache);

    let app = Router::new()
        .route("/catalog", get(query_catalog))
        .route("/catalog/random", get(sample_catalog))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("catalog service listening on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
