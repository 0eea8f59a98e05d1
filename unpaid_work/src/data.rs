//! Assembly of [`CountryRecord`]s from survey hours and economic indicators.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::record::CountryRecord;
use crate::Result;

/// Share of GDP per capita attributed to labor when deriving a wage.
const LABOR_SHARE: f64 = 0.4;
/// Working hours per year used to turn annual income into an hourly wage.
const ANNUAL_WORKING_HOURS: f64 = 2000.0;

/// Time-use survey result for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyEntry {
    pub country_code: String,
    pub country_name: String,
    pub female_unpaid_hours: f64,
    pub male_unpaid_hours: f64,
    pub survey_year: i32,
    pub source: String,
}

/// Indicators supplied by the country data provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicators {
    pub gdp: f64,
    pub population: u64,
    pub female_population_percent: f64,
    pub year: i32,
}

/// Source of economic indicators keyed by country code.
///
/// Returning `None` means the provider has no usable data for the country.
pub trait IndicatorSource {
    fn indicators(&self, code: &str) -> Option<EconomicIndicators>;
}

impl IndicatorSource for HashMap<String, EconomicIndicators> {
    fn indicators(&self, code: &str) -> Option<EconomicIndicators> {
        self.get(code).copied()
    }
}

/// Hourly wage derived from GDP per capita.
pub fn wage_proxy(gdp: f64, population: u64) -> f64 {
    gdp / population as f64 * LABOR_SHARE / ANNUAL_WORKING_HOURS
}

/// Combines a survey entry with the matching indicators into a validated
/// record. The record's year is the survey year.
pub fn assemble_record(survey: &SurveyEntry, indicators: &EconomicIndicators) -> Result<CountryRecord> {
    let female_population = indicators.population as f64 * indicators.female_population_percent / 100.0;
    CountryRecord::builder(&survey.country_code, &survey.country_name)
        .unpaid_hours(survey.female_unpaid_hours, survey.male_unpaid_hours)
        .population(indicators.population, female_population)
        .gdp(indicators.gdp)
        .average_wage(wage_proxy(indicators.gdp, indicators.population))
        .year(survey.survey_year)
        .build()
}

/// Assembles records for every survey entry the source has indicators for.
///
/// Countries without indicators, or whose combined data fails validation,
/// are skipped with a warning so that a partially available provider still
/// yields a usable set.
pub fn assemble_records<S: IndicatorSource + ?Sized>(surveys: &[SurveyEntry], source: &S) -> Vec<CountryRecord> {
    let mut records = Vec::with_capacity(surveys.len());
    for survey in surveys {
        let Some(indicators) = source.indicators(&survey.country_code) else {
            tracing::warn!(code = %survey.country_code, "no economic indicators, skipping country");
            continue;
        };
        match assemble_record(survey, &indicators) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(code = %survey.country_code, error = %e, "invalid country data, skipping"),
        }
    }
    tracing::info!(assembled = records.len(), requested = surveys.len(), "assembled country records");
    records
}
