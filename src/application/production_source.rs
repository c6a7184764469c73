// Port for the regulatory production data feed
use crate::domain::production::MonthlyRecord;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// One refresh cycle's worth of source data: every well's monthly records,
/// keyed by WA, in source file order within each well (the feed is sorted
/// ascending by period per well), plus the most recent reporting period
/// seen anywhere in the feed.
#[derive(Debug)]
pub struct ProductionData {
    pub wells: BTreeMap<String, Vec<MonthlyRecord>>,
    pub most_recent_prod_period: i32,
}

#[async_trait]
pub trait ProductionSource: Send + Sync {
    /// Fetch and parse the full historical feed. Any failure here is fatal
    /// for the refresh cycle; there is no partial result.
    async fn fetch_production(&self) -> anyhow::Result<ProductionData>;
}
