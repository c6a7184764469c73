// Server entry point - loads the published snapshot and serves lookups
use std::{net::SocketAddr, sync::Arc};

use petro_ip::application::ip_service::IpService;
use petro_ip::application::snapshot_store::SnapshotStore;
use petro_ip::infrastructure::config::load_app_config;
use petro_ip::infrastructure::json_store::JsonSnapshotStore;
use petro_ip::presentation::app_state::AppState;
use petro_ip::presentation::handlers::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_app_config()?;

    let store = JsonSnapshotStore::new(&config.store.dir);
    let snapshot = store.load().await?;
    tracing::info!(
        wells = snapshot.wells.len(),
        watermark = snapshot.most_recent_prod_period,
        "loaded IP snapshot"
    );

    // The snapshot is read-only for the life of the process; a refresh cycle
    // publishes a new blob and the server restarts onto it.
    let state = Arc::new(AppState {
        ip_service: IpService::new(Arc::new(snapshot)),
    });

    let router = build_router(state);

    let addr: SocketAddr = config.server.listen_addr.parse()?;
    tracing::info!("starting petro-ip service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
