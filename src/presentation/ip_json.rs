// WellIp to JSON response mapping
//
// Builds the response object with keys in the documented order (serde_json's
// preserve_order feature keeps insertion order). Every float is rounded to
// one decimal place; unavailable IP values serialize as null, never NaN.
use crate::domain::units::{BBL_M3, MCF_E3M3, Units, round1};
use crate::domain::well_ip::WellIp;
use serde_json::{Map, Value};

const MILESTONES: [i32; 4] = [30, 90, 180, 365];

pub fn well_ip_to_json(well_ip: &WellIp, units: Units) -> Value {
    let mut map = Map::new();
    map.insert("WA".to_string(), Value::String(well_ip.wa.clone()));
    map.insert("UWI".to_string(), Value::String(well_ip.uwi.clone()));
    map.insert(
        "First prod month".to_string(),
        well_ip.first_prod_month.into(),
    );
    map.insert(
        "Last prod month".to_string(),
        well_ip.last_prod_month.into(),
    );

    match units {
        Units::Metric => {
            put(&mut map, "Cum prod gas (E6m3)", well_ip.cum_prod_gas_e6m3);
            put(&mut map, "Cum prod oil (E3m3)", well_ip.cum_prod_oil_e3m3);
            put(&mut map, "Cum prod cond (E3m3)", well_ip.cum_prod_cond_e3m3);
            put(
                &mut map,
                "Cum prod water (E3m3)",
                well_ip.cum_prod_water_e3m3,
            );
            put(&mut map, "Cum prod days", well_ip.cum_prod_days);
            for (i, d) in MILESTONES.iter().enumerate() {
                put_opt(
                    &mut map,
                    format!("Gas IP {d} (E3m3/d)"),
                    well_ip.ip.gas_e3m3d[i],
                );
                put_opt(&mut map, format!("Oil IP {d} (m3/d)"), well_ip.ip.oil_m3d[i]);
                put_opt(
                    &mut map,
                    format!("Cond IP {d} (m3/d)"),
                    well_ip.ip.cond_m3d[i],
                );
                put_opt(
                    &mut map,
                    format!("Water IP {d} (m3/d)"),
                    well_ip.ip.water_m3d[i],
                );
            }
        }
        Units::Field => {
            // Gas cumulative additionally scales by 0.001 to report in Bcf
            put(
                &mut map,
                "Cum prod gas (Bcf)",
                well_ip.cum_prod_gas_e6m3 * MCF_E3M3 * 0.001,
            );
            put(
                &mut map,
                "Cum prod oil (Mbbl)",
                well_ip.cum_prod_oil_e3m3 * BBL_M3,
            );
            put(
                &mut map,
                "Cum prod cond (Mbbl)",
                well_ip.cum_prod_cond_e3m3 * BBL_M3,
            );
            put(
                &mut map,
                "Cum prod water (Mbbl)",
                well_ip.cum_prod_water_e3m3 * BBL_M3,
            );
            put(&mut map, "Cum prod days", well_ip.cum_prod_days);
            for (i, d) in MILESTONES.iter().enumerate() {
                put_opt(
                    &mut map,
                    format!("Gas IP {d} (Mcf/d)"),
                    well_ip.ip.gas_e3m3d[i].map(|v| v * MCF_E3M3),
                );
                put_opt(
                    &mut map,
                    format!("Oil IP {d} (bbl/d)"),
                    well_ip.ip.oil_m3d[i].map(|v| v * BBL_M3),
                );
                put_opt(
                    &mut map,
                    format!("Cond IP {d} (bbl/d)"),
                    well_ip.ip.cond_m3d[i].map(|v| v * BBL_M3),
                );
                put_opt(
                    &mut map,
                    format!("Water IP {d} (bbl/d)"),
                    well_ip.ip.water_m3d[i].map(|v| v * BBL_M3),
                );
            }
        }
    }

    Value::Object(map)
}

fn put(map: &mut Map<String, Value>, key: &str, value: f64) {
    map.insert(key.to_string(), float_value(Some(value)));
}

fn put_opt(map: &mut Map<String, Value>, key: String, value: Option<f64>) {
    map.insert(key, float_value(value));
}

fn float_value(value: Option<f64>) -> Value {
    // from_f64 rejects non-finite values, which also guards the null contract
    value
        .and_then(|v| serde_json::Number::from_f64(round1(v)))
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::well_ip::IpRates;

    fn sample_well_ip() -> WellIp {
        WellIp {
            wa: "39167".to_string(),
            uwi: "203A044J094B1600".to_string(),
            first_prod_month: 202006,
            last_prod_month: 202012,
            cum_prod_gas_e6m3: 18.234,
            cum_prod_oil_e3m3: 0.0,
            cum_prod_cond_e3m3: 0.87,
            cum_prod_water_e3m3: 8.41,
            cum_prod_days: 210.0,
            ip: IpRates {
                gas_e3m3d: [Some(113.08), Some(79.77), Some(62.21), None],
                oil_m3d: [Some(0.0), Some(0.0), Some(0.0), None],
                cond_m3d: [Some(4.81), Some(3.75), Some(2.84), None],
                water_m3d: [Some(114.42), Some(48.66), Some(28.31), None],
            },
        }
    }

    #[test]
    fn test_metric_keys_in_documented_order() {
        let value = well_ip_to_json(&sample_well_ip(), Units::Metric);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();

        assert_eq!(
            &keys[..10],
            &[
                "WA",
                "UWI",
                "First prod month",
                "Last prod month",
                "Cum prod gas (E6m3)",
                "Cum prod oil (E3m3)",
                "Cum prod cond (E3m3)",
                "Cum prod water (E3m3)",
                "Cum prod days",
                "Gas IP 30 (E3m3/d)",
            ]
        );
        assert_eq!(keys.len(), 25);
        assert_eq!(keys[24], "Water IP 365 (m3/d)");
    }

    #[test]
    fn test_metric_values_round_to_one_decimal() {
        let value = well_ip_to_json(&sample_well_ip(), Units::Metric);

        assert_eq!(value["Gas IP 30 (E3m3/d)"], 113.1);
        assert_eq!(value["Cum prod gas (E6m3)"], 18.2);
        assert_eq!(value["First prod month"], 202006);
        assert_eq!(value["WA"], "39167");
    }

    #[test]
    fn test_unavailable_ip_serializes_as_null() {
        let value = well_ip_to_json(&sample_well_ip(), Units::Metric);

        assert!(value["Gas IP 365 (E3m3/d)"].is_null());
        assert!(value["Water IP 365 (m3/d)"].is_null());
        // The key is present, not omitted
        assert!(value.as_object().unwrap().contains_key("Oil IP 365 (m3/d)"));
    }

    #[test]
    fn test_field_units_apply_documented_factors() {
        let well_ip = sample_well_ip();
        let value = well_ip_to_json(&well_ip, Units::Field);

        assert_eq!(
            value["Gas IP 30 (Mcf/d)"],
            round1(113.08 * MCF_E3M3)
        );
        assert_eq!(value["Cond IP 30 (bbl/d)"], round1(4.81 * BBL_M3));
        assert_eq!(
            value["Cum prod gas (Bcf)"],
            round1(18.234 * MCF_E3M3 * 0.001)
        );
        assert_eq!(value["Cum prod oil (Mbbl)"], 0.0);
        assert!(value["Gas IP 365 (Mcf/d)"].is_null());
    }
}
