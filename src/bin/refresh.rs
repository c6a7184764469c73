// Refresh entry point - one acquisition/compute/publish cycle, then exit.
// Run on a schedule; any failure aborts the cycle without touching the
// previously published snapshot.
use std::sync::Arc;

use petro_ip::application::refresh_service::RefreshService;
use petro_ip::infrastructure::bcogc_client::BcogcClient;
use petro_ip::infrastructure::config::load_app_config;
use petro_ip::infrastructure::json_store::JsonSnapshotStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_app_config()?;

    let source = Arc::new(BcogcClient::new(
        config.source.url,
        config.source.archive_member,
    ));
    let store = Arc::new(JsonSnapshotStore::new(&config.store.dir));

    let snapshot = RefreshService::new(source, store).run().await?;
    tracing::info!(
        wells = snapshot.wells.len(),
        watermark = snapshot.most_recent_prod_period,
        "refresh cycle complete"
    );

    Ok(())
}
