// Refresh service - Use case for one acquisition/compute/publish cycle
use crate::application::production_source::ProductionSource;
use crate::application::snapshot_store::{Snapshot, SnapshotStore};
use crate::domain::production::PreparedSeries;
use crate::domain::well_ip::calculate_well_ip;
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct RefreshService {
    source: Arc<dyn ProductionSource>,
    store: Arc<dyn SnapshotStore>,
}

impl RefreshService {
    pub fn new(source: Arc<dyn ProductionSource>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { source, store }
    }

    /// Fetch the full feed, calculate IP per well, and publish the snapshot.
    /// Each well's calculation is independent; order across wells does not
    /// matter.
    pub async fn run(&self) -> anyhow::Result<Snapshot> {
        let data = self.source.fetch_production().await?;
        tracing::info!(
            wells = data.wells.len(),
            watermark = data.most_recent_prod_period,
            "fetched production feed"
        );

        let mut wells = BTreeMap::new();
        for (wa, records) in data.wells {
            let series = PreparedSeries::from_records(records);
            if let Some(well_ip) = calculate_well_ip(&series) {
                wells.insert(wa, well_ip);
            }
        }

        let snapshot = Snapshot {
            most_recent_prod_period: data.most_recent_prod_period,
            wells,
        };
        self.store.publish(&snapshot).await?;
        tracing::info!(wells = snapshot.wells.len(), "published snapshot");

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::production_source::ProductionData;
    use crate::domain::production::MonthlyRecord;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedSource {
        data: Mutex<Option<ProductionData>>,
    }

    #[async_trait]
    impl ProductionSource for FixedSource {
        async fn fetch_production(&self) -> anyhow::Result<ProductionData> {
            Ok(self.data.lock().unwrap().take().expect("fetched once"))
        }
    }

    struct RecordingStore {
        published: Mutex<Option<Snapshot>>,
    }

    #[async_trait]
    impl SnapshotStore for RecordingStore {
        async fn publish(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
            *self.published.lock().unwrap() = Some(snapshot.clone());
            Ok(())
        }

        async fn load(&self) -> anyhow::Result<Snapshot> {
            Ok(self.published.lock().unwrap().clone().expect("published"))
        }
    }

    fn record(wa: &str, period: i32, days: f64) -> MonthlyRecord {
        MonthlyRecord {
            wa: wa.to_string(),
            uwi: format!("200{wa}0000000000"),
            prod_period: period,
            prod_days: days,
            gas_vol_e3m3: 10.0,
            oil_vol_m3: 0.0,
            water_vol_m3: 0.0,
            cond_vol_m3: 0.0,
            gas_cum_e3m3: 10.0,
            oil_cum_m3: 0.0,
            water_cum_m3: 0.0,
            cond_cum_m3: 0.0,
        }
    }

    #[tokio::test]
    async fn test_run_publishes_one_well_ip_per_well() {
        let mut wells = BTreeMap::new();
        wells.insert("00001".to_string(), vec![record("00001", 202001, 30.0)]);
        wells.insert(
            "00002".to_string(),
            vec![record("00002", 202001, 30.0), record("00002", 202002, 28.0)],
        );

        let source = Arc::new(FixedSource {
            data: Mutex::new(Some(ProductionData {
                wells,
                most_recent_prod_period: 202002,
            })),
        });
        let store = Arc::new(RecordingStore {
            published: Mutex::new(None),
        });

        let service = RefreshService::new(source, store.clone());
        let snapshot = service.run().await.unwrap();

        assert_eq!(snapshot.most_recent_prod_period, 202002);
        assert_eq!(snapshot.wells.len(), 2);
        assert_eq!(snapshot.wells["00001"].first_prod_month, 202001);

        let published = store.load().await.unwrap();
        assert_eq!(published.wells.len(), 2);
    }
}
