// IP lookup service - Use case for serving one well's IP summary
use crate::application::snapshot_store::Snapshot;
use crate::domain::well_ip::WellIp;
use std::sync::Arc;

/// Read-only view over the published snapshot, shared by all requests.
/// Refreshing means building a new snapshot and a new service around it,
/// never mutating this one.
#[derive(Clone)]
pub struct IpService {
    snapshot: Arc<Snapshot>,
}

impl IpService {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        Self { snapshot }
    }

    pub fn get(&self, wa: &str) -> Option<&WellIp> {
        self.snapshot.wells.get(wa)
    }

    pub fn most_recent_prod_period(&self) -> i32 {
        self.snapshot.most_recent_prod_period
    }
}
