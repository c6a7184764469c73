// BCOGC bulk production feed client
//
// Downloads the zip-compressed monthly production table from the regulator's
// bulk-data endpoint and parses it into per-well record sequences. The table
// is a comma-delimited file with a one-line preamble above the header row.
use crate::application::production_source::{ProductionData, ProductionSource};
use crate::domain::production::MonthlyRecord;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};

pub struct BcogcClient {
    url: String,
    archive_member: String,
}

impl BcogcClient {
    pub fn new(url: String, archive_member: String) -> Self {
        Self {
            url,
            archive_member,
        }
    }

    async fn download_table(&self) -> Result<String> {
        let client = reqwest::Client::new();
        let response = client
            .get(&self.url)
            .send()
            .await
            .context("Failed to download production archive")?;

        if !response.status().is_success() {
            bail!(
                "Production archive download failed with status {}",
                response.status()
            );
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read production archive body")?;
        tracing::debug!(bytes = bytes.len(), "downloaded production archive");

        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes)).context("Failed to open zip archive")?;
        let mut member = archive
            .by_name(&self.archive_member)
            .with_context(|| format!("Archive member {:?} not found", self.archive_member))?;

        let mut text = String::new();
        member
            .read_to_string(&mut text)
            .context("Failed to read archive member")?;
        Ok(text)
    }

    fn parse_table(text: &str) -> Result<ProductionData> {
        let mut lines = text.lines();
        // One-line preamble above the real header row
        lines.next();
        let header = lines.next().context("Production table missing header row")?;
        let columns = ColumnMap::from_header(header)?;

        let mut wells: BTreeMap<String, Vec<MonthlyRecord>> = BTreeMap::new();
        let mut most_recent_prod_period = i32::MIN;

        for (i, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = columns
                .parse_row(line)
                .with_context(|| format!("Bad production row at line {}", i + 3))?;
            most_recent_prod_period = most_recent_prod_period.max(record.prod_period);
            wells.entry(record.wa.clone()).or_default().push(record);
        }

        if wells.is_empty() {
            bail!("Production table contained no data rows");
        }

        Ok(ProductionData {
            wells,
            most_recent_prod_period,
        })
    }
}

#[async_trait]
impl ProductionSource for BcogcClient {
    async fn fetch_production(&self) -> Result<ProductionData> {
        let text = self.download_table().await?;
        let data = Self::parse_table(&text)?;
        tracing::info!(
            wells = data.wells.len(),
            watermark = data.most_recent_prod_period,
            "parsed production table"
        );
        Ok(data)
    }
}

/// Column indices resolved from the header row by name. The source header
/// carries stray whitespace in some names ("Prod_days "), so names are
/// matched trimmed.
#[derive(Debug)]
struct ColumnMap {
    wa: usize,
    prod_period: usize,
    uwi: usize,
    prod_days: usize,
    gas_vol: usize,
    oil_vol: usize,
    water_vol: usize,
    cond_vol: usize,
    gas_cum: usize,
    oil_cum: usize,
    water_cum: usize,
    cond_cum: usize,
}

impl ColumnMap {
    fn from_header(header: &str) -> Result<Self> {
        let columns = csv_split(header);
        let find = |name: &str| -> Result<usize> {
            columns
                .iter()
                .position(|c| c.trim() == name)
                .with_context(|| format!("Column {name:?} not found in production table header"))
        };

        Ok(Self {
            wa: find("Wa_num")?,
            prod_period: find("Prod_period")?,
            uwi: find("UWI")?,
            prod_days: find("Prod_days")?,
            gas_vol: find("Gas_prod_vol (e3m3)")?,
            oil_vol: find("Oil_prod_vol (m3)")?,
            water_vol: find("Water_prod_vol (m3)")?,
            cond_vol: find("Cond_prod_vol (m3)")?,
            gas_cum: find("Gas_prod_cum (e3m3)")?,
            oil_cum: find("Oil_prod_cum (m3)")?,
            water_cum: find("Water_prod_cum (m3)")?,
            cond_cum: find("Cond_prod_cum (m3)")?,
        })
    }

    fn parse_row(&self, line: &str) -> Result<MonthlyRecord> {
        let fields = csv_split(line);
        let text = |idx: usize| -> Result<&str> {
            fields
                .get(idx)
                .map(|f| f.trim())
                .with_context(|| format!("Row has {} fields, needed column {}", fields.len(), idx + 1))
        };
        // Blank cells read as zero
        let num = |idx: usize| -> Result<f64> {
            let raw = text(idx)?;
            if raw.is_empty() {
                return Ok(0.0);
            }
            raw.parse()
                .with_context(|| format!("Invalid numeric value {raw:?}"))
        };

        let period = text(self.prod_period)?;
        Ok(MonthlyRecord {
            wa: text(self.wa)?.to_string(),
            uwi: text(self.uwi)?.to_string(),
            prod_period: period
                .parse()
                .with_context(|| format!("Invalid production period {period:?}"))?,
            prod_days: num(self.prod_days)?,
            gas_vol_e3m3: num(self.gas_vol)?,
            oil_vol_m3: num(self.oil_vol)?,
            water_vol_m3: num(self.water_vol)?,
            cond_vol_m3: num(self.cond_vol)?,
            gas_cum_e3m3: num(self.gas_cum)?,
            oil_cum_m3: num(self.oil_cum)?,
            water_cum_m3: num(self.water_cum)?,
            cond_cum_m3: num(self.cond_cum)?,
        })
    }
}

/// Split a delimited line respecting quoted fields. Returns owned strings
/// because quoted fields need unquoting.
fn csv_split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
BC Oil and Gas Commission - Monthly Production
Wa_num,Prod_period,UWI,Zone,Gas_prod_vol (e3m3),Oil_prod_vol (m3),Water_prod_vol (m3),Cond_prod_vol (m3),Prod_days ,Gas_prod_cum (e3m3),Oil_prod_cum (m3),Water_prod_cum (m3),Cond_prod_cum (m3)
00001,202001,200A011B094H0300,\"Montney, Upper\",100.0,0,50,5,30,100.0,0,50,5
00001,202002,200A011B094H0300,\"Montney, Upper\",120.0,0,60,6,30,220.0,0,110,11
00002,202002,200B022C094H0400,Montney,5.5,1.5,,0,12,5.5,1.5,0,0
";

    #[test]
    fn test_parse_table_groups_by_wa() {
        let data = BcogcClient::parse_table(TABLE).unwrap();

        assert_eq!(data.wells.len(), 2);
        assert_eq!(data.most_recent_prod_period, 202002);

        let first = &data.wells["00001"];
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].prod_period, 202001);
        assert_eq!(first[0].gas_vol_e3m3, 100.0);
        assert_eq!(first[1].gas_cum_e3m3, 220.0);
        assert_eq!(first[0].uwi, "200A011B094H0300");
    }

    #[test]
    fn test_parse_table_blank_cell_reads_as_zero() {
        let data = BcogcClient::parse_table(TABLE).unwrap();
        assert_eq!(data.wells["00002"][0].water_vol_m3, 0.0);
    }

    #[test]
    fn test_parse_table_rejects_bad_numeric() {
        let table = TABLE.replace("5.5,1.5", "5.5,abc");
        let err = BcogcClient::parse_table(&table).unwrap_err();
        assert!(format!("{err:#}").contains("Bad production row"));
    }

    #[test]
    fn test_parse_table_missing_column_fails() {
        let table = TABLE.replace("Wa_num", "Well_num");
        assert!(BcogcClient::parse_table(&table).is_err());
    }

    #[test]
    fn test_csv_split_quoted_comma() {
        let fields = csv_split("a,\"b, c\",d");
        assert_eq!(fields, vec!["a", "b, c", "d"]);
    }
}
