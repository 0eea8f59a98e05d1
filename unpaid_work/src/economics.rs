use getset::Getters;
use rayon::prelude::*;
use serde::Serialize;

use crate::record::CountryRecord;
use crate::{Result, UnpaidWorkError};

pub(crate) const DAYS_PER_YEAR: f64 = 365.0;

/// Metrics derived from a single [`CountryRecord`].
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct CountryEconomics {
    record: CountryRecord,
    /// Hours of unpaid work performed by women in a year.
    annual_unpaid_hours: f64,
    /// `annual_unpaid_hours` valued at the record's average wage.
    economic_value: f64,
    /// `economic_value` as a percentage of GDP.
    gdp_percentage: f64,
    /// Female minus male daily hours.
    gender_gap_hours: f64,
    /// Female over male daily hours.
    gender_gap_ratio: f64,
}

/// Computes the derived metrics for one country.
///
/// # Errors
///
/// Returns [`UnpaidWorkError::InvalidInput`] when the record reports zero
/// male unpaid hours, since the gender gap ratio is then undefined.
pub fn compute_country_economics(record: &CountryRecord) -> Result<CountryEconomics> {
    let female = *record.female_unpaid_hours();
    let male = *record.male_unpaid_hours();
    if male == 0.0 {
        return Err(UnpaidWorkError::InvalidInput(format!(
            "{}: male unpaid hours are zero, gender gap ratio is undefined",
            record.code()
        )));
    }

    let annual_unpaid_hours = female * DAYS_PER_YEAR * record.female_population();
    let economic_value = annual_unpaid_hours * record.average_wage();
    let gdp_percentage = economic_value / record.gdp() * 100.0;

    tracing::debug!(
        code = %record.code(),
        economic_value,
        gdp_percentage,
        "computed country economics"
    );

    Ok(CountryEconomics {
        record: record.clone(),
        annual_unpaid_hours,
        economic_value,
        gdp_percentage,
        gender_gap_hours: female - male,
        gender_gap_ratio: female / male,
    })
}

/// Computes economics for every record in parallel.
///
/// Output order follows input order. When several records fail, the error
/// reported is the one for the earliest record.
pub fn compute_all(records: &[CountryRecord]) -> Result<Vec<CountryEconomics>> {
    let results: Vec<Result<CountryEconomics>> = records.par_iter().map(compute_country_economics).collect();
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, female: f64, male: f64) -> CountryRecord {
        CountryRecord::builder(code, code)
            .unpaid_hours(female, male)
            .population(1_000_000, 500_000.0)
            .gdp(1.0e10)
            .average_wage(10.0)
            .year(2020)
            .build()
            .unwrap()
    }

    #[test]
    fn test_metrics() {
        let econ = compute_country_economics(&record("AA", 4.0, 2.0)).unwrap();
        assert_eq!(*econ.annual_unpaid_hours(), 4.0 * 365.0 * 500_000.0);
        assert_eq!(*econ.economic_value(), 4.0 * 365.0 * 500_000.0 * 10.0);
        assert!((econ.gdp_percentage() - 73.0).abs() < 1e-9);
        assert_eq!(*econ.gender_gap_hours(), 2.0);
        assert_eq!(*econ.gender_gap_ratio(), 2.0);
    }

    #[test]
    fn test_zero_male_hours_is_rejected() {
        let err = compute_country_economics(&record("ZZ", 3.0, 0.0)).unwrap_err();
        assert!(matches!(err, UnpaidWorkError::InvalidInput(ref msg) if msg.contains("ZZ")));
    }

    #[test]
    fn test_compute_all_preserves_order() {
        let records: Vec<CountryRecord> = (1..=20).map(|i| record(&format!("C{}", i), i as f64 / 2.0, 1.0)).collect();
        let all = compute_all(&records).unwrap();
        assert_eq!(all.len(), 20);
        for (econ, rec) in all.iter().zip(&records) {
            assert_eq!(econ.record().code(), rec.code());
        }
    }

    #[test]
    fn test_compute_all_reports_first_failure() {
        let records = vec![
            record("OK", 3.0, 1.0),
            record("FIRST", 3.0, 0.0),
            record("SECOND", 3.0, 0.0),
        ];
        match compute_all(&records) {
            Err(UnpaidWorkError::InvalidInput(msg)) => assert!(msg.starts_with("FIRST")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
