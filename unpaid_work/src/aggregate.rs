use comfy_table::{Cell, Table};
use getset::Getters;
use serde::Serialize;

use crate::economics::compute_country_economics;
use crate::format::{format_currency, format_hours, format_percentage};
use crate::record::CountryRecord;
use crate::{Result, UnpaidWorkError};

/// Unweighted averages and totals over a set of countries.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct GlobalStats {
    total_countries: usize,
    average_female_hours: f64,
    average_male_hours: f64,
    total_economic_value: f64,
    average_gdp_percentage: f64,
}

/// Aggregates per-country economics over `records`.
///
/// Every country counts once regardless of population. Sums are accumulated
/// in input order.
///
/// # Errors
///
/// Returns [`UnpaidWorkError::InvalidInput`] for an empty slice, and
/// propagates any error from computing a single country's economics.
pub fn compute_global_stats(records: &[CountryRecord]) -> Result<GlobalStats> {
    if records.is_empty() {
        return Err(UnpaidWorkError::InvalidInput(
            "cannot compute global statistics over zero countries".to_string(),
        ));
    }

    let mut female_hours = 0.0;
    let mut male_hours = 0.0;
    let mut economic_value = 0.0;
    let mut gdp_percentage = 0.0;
    for record in records {
        let economics = compute_country_economics(record)?;
        female_hours += *record.female_unpaid_hours();
        male_hours += *record.male_unpaid_hours();
        economic_value += *economics.economic_value();
        gdp_percentage += *economics.gdp_percentage();
    }

    let n = records.len() as f64;
    Ok(GlobalStats {
        total_countries: records.len(),
        average_female_hours: female_hours / n,
        average_male_hours: male_hours / n,
        total_economic_value: economic_value,
        average_gdp_percentage: gdp_percentage / n,
    })
}

impl GlobalStats {
    /// Prints the statistics as a table.
    pub fn summary(&self) {
        println!("Global Unpaid Work Statistics");
        println!("========================================");
        let mut table = Table::new();
        table.set_header(vec!["Metric", "Value"]);
        table.add_row(vec![Cell::new("Countries"), Cell::new(self.total_countries)]);
        table.add_row(vec![
            Cell::new("Average female unpaid hours"),
            Cell::new(format_hours(self.average_female_hours)),
        ]);
        table.add_row(vec![
            Cell::new("Average male unpaid hours"),
            Cell::new(format_hours(self.average_male_hours)),
        ]);
        table.add_row(vec![
            Cell::new("Total economic value"),
            Cell::new(format_currency(self.total_economic_value)),
        ]);
        table.add_row(vec![
            Cell::new("Average share of GDP"),
            Cell::new(format_percentage(self.average_gdp_percentage)),
        ]);
        println!("{}", table);
    }

    /// Exports the statistics to a Markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("### Global Unpaid Work Statistics\n\n");
        md.push_str("| Metric | Value |\n");
        md.push_str("|---|---|\n");
        md.push_str(&format!("| Countries | {} |\n", self.total_countries));
        md.push_str(&format!("| Average female unpaid hours | {} |\n", format_hours(self.average_female_hours)));
        md.push_str(&format!("| Average male unpaid hours | {} |\n", format_hours(self.average_male_hours)));
        md.push_str(&format!("| Total economic value | {} |\n", format_currency(self.total_economic_value)));
        md.push_str(&format!("| Average share of GDP | {} |\n", format_percentage(self.average_gdp_percentage)));
        md
    }

    /// Exports the statistics to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, female: f64, male: f64, female_pop: f64) -> CountryRecord {
        CountryRecord::builder(code, code)
            .unpaid_hours(female, male)
            .population(10_000_000, female_pop)
            .gdp(1.0e12)
            .average_wage(20.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(compute_global_stats(&[]), Err(UnpaidWorkError::InvalidInput(_))));
    }

    #[test]
    fn test_means_are_unweighted() {
        let records = vec![record("A", 4.0, 2.0, 5_000_000.0), record("B", 2.0, 1.0, 100.0)];
        let stats = compute_global_stats(&records).unwrap();
        assert_eq!(*stats.total_countries(), 2);
        assert!((stats.average_female_hours() - 3.0).abs() < 1e-12);
        assert!((stats.average_male_hours() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_totals_match_per_country_economics() {
        let records = vec![record("A", 4.0, 2.0, 5_000_000.0), record("B", 3.0, 1.5, 4_000_000.0)];
        let a = compute_country_economics(&records[0]).unwrap();
        let b = compute_country_economics(&records[1]).unwrap();
        let stats = compute_global_stats(&records).unwrap();
        assert_eq!(*stats.total_economic_value(), a.economic_value() + b.economic_value());
        let mean_pct = (a.gdp_percentage() + b.gdp_percentage()) / 2.0;
        assert!((stats.average_gdp_percentage() - mean_pct).abs() < 1e-12);
    }

    #[test]
    fn test_zero_male_hours_propagates() {
        let records = vec![record("A", 4.0, 2.0, 1.0), record("B", 3.0, 0.0, 1.0)];
        assert!(compute_global_stats(&records).is_err());
    }

    #[test]
    fn test_exports() {
        let stats = compute_global_stats(&[record("A", 4.0, 2.0, 5_000_000.0)]).unwrap();
        let json = stats.to_json().unwrap();
        assert!(json.contains("\"total_countries\": 1"));
        let md = stats.to_markdown();
        assert!(md.contains("| Countries | 1 |"));
        assert!(md.contains("4.0 hrs/day"));
    }
}
