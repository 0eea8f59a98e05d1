//! Loading engine inputs from polars DataFrames.
//!
//! Numeric columns are cast to `Float64` so integer and float CSV columns are
//! both accepted. Rows with a null in any required column are skipped.

use polars::prelude::*;
use std::collections::HashMap;

use crate::data::{EconomicIndicators, SurveyEntry};
use crate::record::CountryRecord;
use crate::{Result, UnpaidWorkError};

fn require<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| UnpaidWorkError::ColumnNotFound(name.to_string()))
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = require(df, name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require(df, name)?.cast(&DataType::String)?;
    Ok(column.str()?.into_iter().map(|v| v.map(str::to_string)).collect())
}

fn whole_number(value: f64, column: &str, row: usize) -> Result<u64> {
    if value.fract() != 0.0 || value < 0.0 {
        return Err(UnpaidWorkError::InvalidInput(format!(
            "row {}: {} must be a non-negative integer, got {}",
            row, column, value
        )));
    }
    Ok(value as u64)
}

fn whole_year(value: f64, column: &str, row: usize) -> Result<i32> {
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(UnpaidWorkError::InvalidInput(format!(
            "row {}: {} must be a whole year, got {}",
            row, column, value
        )));
    }
    Ok(value as i32)
}

/// Reads country records from a table with the columns `code`, `name`,
/// `female_unpaid_hours`, `male_unpaid_hours`, `population`,
/// `female_population_percent`, `gdp` and `year`.
///
/// Average wages are derived with [`crate::data::wage_proxy`].
///
/// # Errors
///
/// [`UnpaidWorkError::ColumnNotFound`] when a column is missing and
/// [`UnpaidWorkError::InvalidInput`] when a complete row fails validation.
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<CountryRecord>> {
    let codes = string_column(df, "code")?;
    let names = string_column(df, "name")?;
    let female_hours = float_column(df, "female_unpaid_hours")?;
    let male_hours = float_column(df, "male_unpaid_hours")?;
    let population = float_column(df, "population")?;
    let female_percent = float_column(df, "female_population_percent")?;
    let gdp = float_column(df, "gdp")?;
    let year = float_column(df, "year")?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let (Some(code), Some(name), Some(f), Some(m), Some(pop), Some(pct), Some(g), Some(y)) = (
            codes[row].as_deref(),
            names[row].as_deref(),
            female_hours[row],
            male_hours[row],
            population[row],
            female_percent[row],
            gdp[row],
            year[row],
        ) else {
            tracing::warn!(row, "missing values, skipping row");
            continue;
        };

        let survey = SurveyEntry {
            country_code: code.to_string(),
            country_name: name.to_string(),
            female_unpaid_hours: f,
            male_unpaid_hours: m,
            survey_year: whole_year(y, "year", row)?,
            source: String::new(),
        };
        let indicators = EconomicIndicators {
            gdp: g,
            population: whole_number(pop, "population", row)?,
            female_population_percent: pct,
            year: whole_year(y, "year", row)?,
        };
        records.push(crate::data::assemble_record(&survey, &indicators)?);
    }
    tracing::debug!(rows = df.height(), records = records.len(), "loaded country records");
    Ok(records)
}

/// Reads survey entries from a table with the columns `code`, `name`,
/// `female_unpaid_hours`, `male_unpaid_hours` and `survey_year`, plus an
/// optional `source` column.
pub fn surveys_from_frame(df: &DataFrame) -> Result<Vec<SurveyEntry>> {
    let codes = string_column(df, "code")?;
    let names = string_column(df, "name")?;
    let female_hours = float_column(df, "female_unpaid_hours")?;
    let male_hours = float_column(df, "male_unpaid_hours")?;
    let years = float_column(df, "survey_year")?;
    let sources = match df.column("source") {
        Ok(_) => string_column(df, "source")?,
        Err(_) => vec![None; df.height()],
    };

    let mut entries = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let (Some(code), Some(name), Some(f), Some(m), Some(y)) = (
            codes[row].as_deref(),
            names[row].as_deref(),
            female_hours[row],
            male_hours[row],
            years[row],
        ) else {
            tracing::warn!(row, "missing survey values, skipping row");
            continue;
        };
        entries.push(SurveyEntry {
            country_code: code.to_string(),
            country_name: name.to_string(),
            female_unpaid_hours: f,
            male_unpaid_hours: m,
            survey_year: whole_year(y, "survey_year", row)?,
            source: sources[row].clone().unwrap_or_default(),
        });
    }
    Ok(entries)
}

/// Reads indicators keyed by country code from a table with the columns
/// `code`, `gdp`, `population`, `female_population_percent` and `year`.
///
/// The result implements [`crate::data::IndicatorSource`].
pub fn indicators_from_frame(df: &DataFrame) -> Result<HashMap<String, EconomicIndicators>> {
    let codes = string_column(df, "code")?;
    let gdp = float_column(df, "gdp")?;
    let population = float_column(df, "population")?;
    let female_percent = float_column(df, "female_population_percent")?;
    let years = float_column(df, "year")?;

    let mut indicators = HashMap::with_capacity(df.height());
    for row in 0..df.height() {
        let (Some(code), Some(g), Some(pop), Some(pct), Some(y)) = (
            codes[row].as_deref(),
            gdp[row],
            population[row],
            female_percent[row],
            years[row],
        ) else {
            tracing::warn!(row, "missing indicator values, skipping row");
            continue;
        };
        indicators.insert(
            code.to_string(),
            EconomicIndicators {
                gdp: g,
                population: whole_number(pop, "population", row)?,
                female_population_percent: pct,
                year: whole_year(y, "year", row)?,
            },
        );
    }
    Ok(indicators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{assemble_records, IndicatorSource};

    fn records_df() -> DataFrame {
        df!(
            "code" => &["US", "JP", "IN"],
            "name" => &["United States", "Japan", "India"],
            "female_unpaid_hours" => &[Some(4.0), Some(5.6), None],
            "male_unpaid_hours" => &[2.5, 1.3, 1.6],
            "population" => &[340_110_988i64, 123_975_371, 1_438_069_596],
            "female_population_percent" => &[50.8, 51.3, 48.4],
            "gdp" => &[28_750_956_130_731.2, 4_027_597_523_550.7, 3_567_551_674_623.0],
            "year" => &[2023i64, 2023, 2023]
        )
        .unwrap()
    }

    #[test]
    fn test_records_from_frame_skips_null_rows() {
        let records = records_from_frame(&records_df()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code(), "US");
        assert_eq!(*records[1].population(), 123_975_371);
        assert_eq!(*records[1].year(), 2023);
    }

    #[test]
    fn test_fractional_or_overflowing_year_is_rejected() {
        for year in [2023.7, 1e12] {
            let df = df!(
                "code" => &["US"],
                "name" => &["United States"],
                "female_unpaid_hours" => &[4.0],
                "male_unpaid_hours" => &[2.5],
                "population" => &[340_110_988i64],
                "female_population_percent" => &[50.8],
                "gdp" => &[2.875e13],
                "year" => &[year]
            )
            .unwrap();
            match records_from_frame(&df) {
                Err(UnpaidWorkError::InvalidInput(msg)) => assert!(msg.contains("year"), "{}", msg),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
            assert!(indicators_from_frame(&df).is_err());
        }
    }

    #[test]
    fn test_missing_column() {
        let df = records_df().drop("gdp").unwrap();
        match records_from_frame(&df) {
            Err(UnpaidWorkError::ColumnNotFound(name)) => assert_eq!(name, "gdp"),
            other => panic!("expected ColumnNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_split_tables() {
        let surveys = df!(
            "code" => &["US", "DE"],
            "name" => &["United States", "Germany"],
            "female_unpaid_hours" => &[4.0, 4.1],
            "male_unpaid_hours" => &[2.5, 2.5],
            "survey_year" => &[2019i64, 2013]
        )
        .unwrap();
        let indicators = df!(
            "code" => &["US"],
            "gdp" => &[28_750_956_130_731.2],
            "population" => &[340_110_988i64],
            "female_population_percent" => &[50.8],
            "year" => &[2023i64]
        )
        .unwrap();

        let surveys = surveys_from_frame(&surveys).unwrap();
        assert_eq!(surveys.len(), 2);
        assert_eq!(surveys[1].survey_year, 2013);
        assert!(surveys[0].source.is_empty());

        let source = indicators_from_frame(&indicators).unwrap();
        assert!(source.indicators("US").is_some());
        assert!(source.indicators("DE").is_none());

        let records = assemble_records(&surveys, &source);
        assert_eq!(records.len(), 1);
        assert_eq!(*records[0].year(), 2019);
    }
}
