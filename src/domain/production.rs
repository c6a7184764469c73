// Monthly production report domain models

/// Gas volumes are reported in e3m3 while the liquid streams are in m3.
pub const GAS_E3M3_TO_M3: f64 = 1000.0;

/// One row of the regulatory monthly production report for a single well.
///
/// Rows for a well are expected to arrive already sorted ascending by
/// `prod_period`; nothing downstream re-sorts them.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRecord {
    pub wa: String,
    pub uwi: String,
    /// Reporting period as YYYYMM.
    pub prod_period: i32,
    pub prod_days: f64,
    pub gas_vol_e3m3: f64,
    pub oil_vol_m3: f64,
    pub water_vol_m3: f64,
    pub cond_vol_m3: f64,
    pub gas_cum_e3m3: f64,
    pub oil_cum_m3: f64,
    pub water_cum_m3: f64,
    pub cond_cum_m3: f64,
}

/// A monthly record plus the fields derived from its position in the series.
#[derive(Debug, Clone)]
pub struct PreparedMonth {
    pub record: MonthlyRecord,
    /// Running total of producing days up to and including this month.
    pub cum_prod_days: f64,
    /// Total volume produced this month across all four streams, in m3.
    pub total_vol_m3: f64,
}

/// One well's monthly series with cumulative producing days and per-month
/// total volume derived. Consumed once by the IP calculation.
#[derive(Debug, Clone)]
pub struct PreparedSeries {
    pub months: Vec<PreparedMonth>,
}

impl PreparedSeries {
    /// Derive cumulative producing days and total monthly volume.
    ///
    /// No filtering, reordering, or deduplication happens here; data-quality
    /// decisions belong to the IP calculation's eligibility gate.
    pub fn from_records(records: Vec<MonthlyRecord>) -> Self {
        let mut months = Vec::with_capacity(records.len());
        let mut cum_prod_days = 0.0;

        for record in records {
            cum_prod_days += record.prod_days;
            let total_vol_m3 = record.gas_vol_e3m3 * GAS_E3M3_TO_M3
                + record.oil_vol_m3
                + record.water_vol_m3
                + record.cond_vol_m3;
            months.push(PreparedMonth {
                record,
                cum_prod_days,
                total_vol_m3,
            });
        }

        Self { months }
    }
}
