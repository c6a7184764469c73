// Unit systems for reporting IP results

/// Barrels per cubic metre.
pub const BBL_M3: f64 = 6.29;
/// Thousand cubic feet per thousand cubic metres.
pub const MCF_E3M3: f64 = 35.315;

/// Unit system requested by the API consumer. Metric reports native units
/// (E3m3, m3, m3/d); field rescales and relabels every volumetric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Field,
}

impl Units {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "metric" => Some(Units::Metric),
            "field" => Some(Units::Field),
            _ => None,
        }
    }
}

/// Round to one decimal place, the precision every float field is reported at.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(Units::parse("metric"), Some(Units::Metric));
        assert_eq!(Units::parse("field"), Some(Units::Field));
        assert_eq!(Units::parse("imperial"), None);
        assert_eq!(Units::parse("Metric"), None);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(113.14999), 113.1);
        assert_eq!(round1(3.3333333), 3.3);
        assert_eq!(round1(0.05), 0.1);
    }
}
