// Initial production (IP) calculation for a single well
use crate::domain::interp::interp_one;
use crate::domain::production::PreparedSeries;
use serde::{Deserialize, Serialize};

/// Cumulative-producing-day milestones at which IP rates are reported.
pub const IP_MILESTONE_DAYS: [f64; 4] = [30.0, 90.0, 180.0, 365.0];

/// Interpolated average daily rates per milestone, indexed in
/// [`IP_MILESTONE_DAYS`] order. `None` means the rate is not available,
/// never an implicit zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpRates {
    pub gas_e3m3d: [Option<f64>; 4],
    pub oil_m3d: [Option<f64>; 4],
    pub cond_m3d: [Option<f64>; 4],
    pub water_m3d: [Option<f64>; 4],
}

/// Initial production summary for one well. Immutable once calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellIp {
    pub wa: String,
    pub uwi: String,
    pub first_prod_month: i32,
    pub last_prod_month: i32,
    pub cum_prod_gas_e6m3: f64,
    pub cum_prod_oil_e3m3: f64,
    pub cum_prod_cond_e3m3: f64,
    pub cum_prod_water_e3m3: f64,
    pub cum_prod_days: f64,
    pub ip: IpRates,
}

/// Calculate initial production information for a single well.
///
/// Identity and cumulative fields always populate from the series; the
/// sixteen IP rates populate only when the eligibility gate passes. Returns
/// `None` only for a series with no months at all.
pub fn calculate_well_ip(series: &PreparedSeries) -> Option<WellIp> {
    let first = series.months.first()?;
    let last = series.months.last()?;

    let mut well_ip = WellIp {
        wa: first.record.wa.clone(),
        uwi: first.record.uwi.clone(),
        first_prod_month: first.record.prod_period,
        last_prod_month: last.record.prod_period,
        cum_prod_gas_e6m3: last.record.gas_cum_e3m3 / 1000.0,
        cum_prod_oil_e3m3: last.record.oil_cum_m3 / 1000.0,
        cum_prod_cond_e3m3: last.record.cond_cum_m3 / 1000.0,
        cum_prod_water_e3m3: last.record.water_cum_m3 / 1000.0,
        cum_prod_days: last.cum_prod_days,
        ip: IpRates::default(),
    };

    if is_eligible(series) {
        well_ip.ip = interpolate_rates(series);
    }

    Some(well_ip)
}

/// Interpolation needs at least two months of data, and any month within the
/// first cumulative 365 producing days that reports volume without any
/// producing days disqualifies the whole well. Such months would corrupt a
/// day-based interpolation; the well still gets its cumulative fields.
fn is_eligible(series: &PreparedSeries) -> bool {
    series.months.len() >= 2
        && !series.months.iter().any(|m| {
            m.cum_prod_days <= 365.0 && m.record.prod_days == 0.0 && m.total_vol_m3 > 0.0
        })
}

fn interpolate_rates(series: &PreparedSeries) -> IpRates {
    let days: Vec<f64> = series.months.iter().map(|m| m.cum_prod_days).collect();
    let gas: Vec<f64> = series.months.iter().map(|m| m.record.gas_cum_e3m3).collect();
    let oil: Vec<f64> = series.months.iter().map(|m| m.record.oil_cum_m3).collect();
    let cond: Vec<f64> = series.months.iter().map(|m| m.record.cond_cum_m3).collect();
    let water: Vec<f64> = series.months.iter().map(|m| m.record.water_cum_m3).collect();

    let mut rates = IpRates::default();
    for (i, &milestone) in IP_MILESTONE_DAYS.iter().enumerate() {
        rates.gas_e3m3d[i] = interp_one(milestone, &days, &gas).map(|v| v / milestone);
        rates.oil_m3d[i] = interp_one(milestone, &days, &oil).map(|v| v / milestone);
        rates.cond_m3d[i] = interp_one(milestone, &days, &cond).map(|v| v / milestone);
        rates.water_m3d[i] = interp_one(milestone, &days, &water).map(|v| v / milestone);
    }
    rates
}
