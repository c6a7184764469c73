// Port for publishing and loading the computed IP snapshot
use crate::domain::well_ip::WellIp;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The published unit: every well's IP summary plus the watermark period.
/// Replaced wholesale each refresh cycle, never mutated entry by entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub most_recent_prod_period: i32,
    pub wells: BTreeMap<String, WellIp>,
}

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn publish(&self, snapshot: &Snapshot) -> anyhow::Result<()>;

    async fn load(&self) -> anyhow::Result<Snapshot>;
}
