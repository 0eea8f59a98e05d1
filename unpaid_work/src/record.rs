//! Input records consumed by the engine.
//!
//! Records are built through validating builders so that malformed values are
//! rejected before they reach any calculation.

use getset::Getters;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::{Result, UnpaidWorkError};

/// Immutable per-country snapshot combining time-use survey hours with
/// economic indicators.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct CountryRecord {
    /// ISO-style country code, unique per record.
    code: String,
    name: String,
    /// Daily unpaid work hours reported by women.
    female_unpaid_hours: f64,
    /// Daily unpaid work hours reported by men.
    male_unpaid_hours: f64,
    population: u64,
    female_population: f64,
    /// GDP in current currency units.
    gdp: f64,
    /// Hourly wage used to monetize unpaid time.
    average_wage: f64,
    year: i32,
}

impl CountryRecord {
    /// Starts a builder for the country identified by `code`.
    pub fn builder(code: &str, name: &str) -> CountryRecordBuilder {
        CountryRecordBuilder::new(code, name)
    }
}

/// Builder for [`CountryRecord`].
#[derive(Debug, Clone)]
pub struct CountryRecordBuilder {
    code: String,
    name: String,
    female_unpaid_hours: f64,
    male_unpaid_hours: f64,
    population: u64,
    female_population: f64,
    gdp: f64,
    average_wage: f64,
    year: i32,
}

impl CountryRecordBuilder {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            female_unpaid_hours: 0.0,
            male_unpaid_hours: 0.0,
            population: 0,
            female_population: 0.0,
            gdp: 0.0,
            average_wage: 0.0,
            year: 0,
        }
    }

    /// Sets daily unpaid hours for women and men.
    pub fn unpaid_hours(&mut self, female: f64, male: f64) -> &mut Self {
        self.female_unpaid_hours = female;
        self.male_unpaid_hours = male;
        self
    }

    /// Sets the total population and the female population.
    pub fn population(&mut self, total: u64, female: f64) -> &mut Self {
        self.population = total;
        self.female_population = female;
        self
    }

    pub fn gdp(&mut self, gdp: f64) -> &mut Self {
        self.gdp = gdp;
        self
    }

    pub fn average_wage(&mut self, wage: f64) -> &mut Self {
        self.average_wage = wage;
        self
    }

    pub fn year(&mut self, year: i32) -> &mut Self {
        self.year = year;
        self
    }

    /// Validates the collected values and produces the record.
    ///
    /// Zero male hours are accepted here; the gap ratio calculation is where
    /// that case is rejected.
    pub fn build(&self) -> Result<CountryRecord> {
        let invalid = |msg: String| Err(UnpaidWorkError::InvalidInput(format!("{}: {}", self.code, msg)));

        if self.code.trim().is_empty() {
            return Err(UnpaidWorkError::InvalidInput("country code is empty".to_string()));
        }
        for (label, hours) in [("female", self.female_unpaid_hours), ("male", self.male_unpaid_hours)] {
            if !hours.is_finite() || !(0.0..=24.0).contains(&hours) {
                return invalid(format!("{} unpaid hours must lie in [0, 24], got {}", label, hours));
            }
        }
        if self.population == 0 {
            return invalid("population must be positive".to_string());
        }
        if !self.female_population.is_finite()
            || self.female_population < 0.0
            || self.female_population > self.population as f64
        {
            return invalid(format!(
                "female population {} must lie in [0, {}]",
                self.female_population, self.population
            ));
        }
        if !self.gdp.is_finite() || self.gdp <= 0.0 {
            return invalid(format!("gdp must be positive, got {}", self.gdp));
        }
        if !self.average_wage.is_finite() || self.average_wage <= 0.0 {
            return invalid(format!("average wage must be positive, got {}", self.average_wage));
        }

        Ok(CountryRecord {
            code: self.code.clone(),
            name: self.name.clone(),
            female_unpaid_hours: self.female_unpaid_hours,
            male_unpaid_hours: self.male_unpaid_hours,
            population: self.population,
            female_population: self.female_population,
            gdp: self.gdp,
            average_wage: self.average_wage,
            year: self.year,
        })
    }
}

/// Development context of an economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EconomicContext {
    Developed,
    Emerging,
    Frontier,
}

impl EconomicContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            EconomicContext::Developed => "developed",
            EconomicContext::Emerging => "emerging",
            EconomicContext::Frontier => "frontier",
        }
    }

    /// Hourly wage used to monetize unpaid hours in scenario projections.
    pub fn hourly_wage(&self) -> f64 {
        match self {
            EconomicContext::Developed => 25.0,
            EconomicContext::Emerging => 18.0,
            EconomicContext::Frontier => 12.0,
        }
    }

    /// Data quality score in [0, 1] assumed for statistics from this context.
    pub fn data_quality(&self) -> f64 {
        match self {
            EconomicContext::Developed => 0.85,
            EconomicContext::Emerging => 0.75,
            EconomicContext::Frontier => 0.65,
        }
    }

    pub(crate) fn political_penalty(&self) -> f64 {
        match self {
            EconomicContext::Developed => 0.0,
            EconomicContext::Emerging => 1.0,
            EconomicContext::Frontier => 3.0,
        }
    }

    pub(crate) fn ministry_influence(&self) -> f64 {
        match self {
            EconomicContext::Developed => 8.0,
            EconomicContext::Emerging => 6.0,
            EconomicContext::Frontier => 4.0,
        }
    }
}

impl fmt::Display for EconomicContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EconomicContext {
    type Err = UnpaidWorkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "developed" => Ok(EconomicContext::Developed),
            "emerging" => Ok(EconomicContext::Emerging),
            "frontier" => Ok(EconomicContext::Frontier),
            other => Err(UnpaidWorkError::InvalidInput(format!(
                "unknown economic context '{}', expected developed, emerging or frontier",
                other
            ))),
        }
    }
}

/// Category of care or domestic work a policy targets.
///
/// Tags outside the known set are kept verbatim in [`PolicyFocus::Other`] and
/// receive the default technical complexity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PolicyFocus {
    Childcare,
    Eldercare,
    Comprehensive,
    Healthcare,
    Education,
    Mental,
    Financial,
    Cooking,
    Cleaning,
    Other(String),
}

impl PolicyFocus {
    pub fn as_str(&self) -> &str {
        match self {
            PolicyFocus::Childcare => "childcare",
            PolicyFocus::Eldercare => "eldercare",
            PolicyFocus::Comprehensive => "comprehensive",
            PolicyFocus::Healthcare => "healthcare",
            PolicyFocus::Education => "education",
            PolicyFocus::Mental => "mental",
            PolicyFocus::Financial => "financial",
            PolicyFocus::Cooking => "cooking",
            PolicyFocus::Cleaning => "cleaning",
            PolicyFocus::Other(tag) => tag,
        }
    }

    /// Technical complexity (1-10) of delivering services in this category.
    pub fn technical_complexity(&self) -> f64 {
        match self {
            PolicyFocus::Childcare => 4.0,
            PolicyFocus::Eldercare => 6.0,
            PolicyFocus::Comprehensive => 9.0,
            PolicyFocus::Healthcare => 7.0,
            PolicyFocus::Education => 5.0,
            PolicyFocus::Mental => 6.0,
            PolicyFocus::Financial => 3.0,
            PolicyFocus::Cooking => 2.0,
            PolicyFocus::Cleaning => 2.0,
            PolicyFocus::Other(_) => 5.0,
        }
    }

    /// The tag with its first character upper-cased, as used in titles.
    pub fn capitalized(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for PolicyFocus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyFocus {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        let tag = s.trim().to_ascii_lowercase();
        Ok(match tag.as_str() {
            "childcare" => PolicyFocus::Childcare,
            "eldercare" => PolicyFocus::Eldercare,
            "comprehensive" => PolicyFocus::Comprehensive,
            "healthcare" => PolicyFocus::Healthcare,
            "education" => PolicyFocus::Education,
            "mental" => PolicyFocus::Mental,
            "financial" => PolicyFocus::Financial,
            "cooking" => PolicyFocus::Cooking,
            "cleaning" => PolicyFocus::Cleaning,
            _ => PolicyFocus::Other(tag),
        })
    }
}

impl From<String> for PolicyFocus {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(focus) => focus,
            Err(never) => match never {},
        }
    }
}

impl From<PolicyFocus> for String {
    fn from(focus: PolicyFocus) -> Self {
        focus.as_str().to_string()
    }
}

/// Political, institutional and labor-market profile of a country used by
/// the policy components. Population is in millions and GDP in billions.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct CountryProfile {
    name: String,
    population: f64,
    gdp: f64,
    unpaid_hours: f64,
    /// Female labor force participation, in percent.
    female_labor: f64,
    context: EconomicContext,
    success_model: String,
    priority: PolicyFocus,
    /// 0-10 scale.
    political_stability: f64,
    /// 0-10 scale.
    institutional_capacity: f64,
    /// Share of GDP available for new spending, in percent.
    fiscal_space: f64,
}

impl CountryProfile {
    pub fn builder(name: &str, context: EconomicContext) -> CountryProfileBuilder {
        CountryProfileBuilder::new(name, context)
    }
}

/// Builder for [`CountryProfile`].
#[derive(Debug, Clone)]
pub struct CountryProfileBuilder {
    name: String,
    population: f64,
    gdp: f64,
    unpaid_hours: f64,
    female_labor: f64,
    context: EconomicContext,
    success_model: String,
    priority: PolicyFocus,
    political_stability: f64,
    institutional_capacity: f64,
    fiscal_space: f64,
}

impl CountryProfileBuilder {
    pub fn new(name: &str, context: EconomicContext) -> Self {
        Self {
            name: name.to_string(),
            population: 0.0,
            gdp: 0.0,
            unpaid_hours: 0.0,
            female_labor: 0.0,
            context,
            success_model: String::new(),
            priority: PolicyFocus::Comprehensive,
            political_stability: 5.0,
            institutional_capacity: 5.0,
            fiscal_space: 10.0,
        }
    }

    /// Population in millions.
    pub fn population(&mut self, millions: f64) -> &mut Self {
        self.population = millions;
        self
    }

    /// GDP in billions.
    pub fn gdp(&mut self, billions: f64) -> &mut Self {
        self.gdp = billions;
        self
    }

    pub fn unpaid_hours(&mut self, hours: f64) -> &mut Self {
        self.unpaid_hours = hours;
        self
    }

    pub fn female_labor(&mut self, percent: f64) -> &mut Self {
        self.female_labor = percent;
        self
    }

    pub fn success_model(&mut self, model: &str) -> &mut Self {
        self.success_model = model.to_string();
        self
    }

    pub fn priority(&mut self, focus: PolicyFocus) -> &mut Self {
        self.priority = focus;
        self
    }

    pub fn political_stability(&mut self, score: f64) -> &mut Self {
        self.political_stability = score;
        self
    }

    pub fn institutional_capacity(&mut self, score: f64) -> &mut Self {
        self.institutional_capacity = score;
        self
    }

    pub fn fiscal_space(&mut self, percent: f64) -> &mut Self {
        self.fiscal_space = percent;
        self
    }

    pub fn build(&self) -> Result<CountryProfile> {
        let invalid = |msg: String| Err(UnpaidWorkError::InvalidInput(format!("{}: {}", self.name, msg)));

        if !self.population.is_finite() || self.population <= 0.0 {
            return invalid(format!("population must be positive, got {}", self.population));
        }
        if !self.gdp.is_finite() || self.gdp <= 0.0 {
            return invalid(format!("gdp must be positive, got {}", self.gdp));
        }
        if !self.unpaid_hours.is_finite() || !(0.0..=24.0).contains(&self.unpaid_hours) {
            return invalid(format!("unpaid hours must lie in [0, 24], got {}", self.unpaid_hours));
        }
        if !self.female_labor.is_finite() || !(0.0..=100.0).contains(&self.female_labor) {
            return invalid(format!("female labor participation must lie in [0, 100], got {}", self.female_labor));
        }
        for (label, score) in [
            ("political stability", self.political_stability),
            ("institutional capacity", self.institutional_capacity),
        ] {
            if !score.is_finite() || !(0.0..=10.0).contains(&score) {
                return invalid(format!("{} must lie in [0, 10], got {}", label, score));
            }
        }
        if !self.fiscal_space.is_finite() || self.fiscal_space <= 0.0 {
            return invalid(format!("fiscal space must be positive, got {}", self.fiscal_space));
        }

        Ok(CountryProfile {
            name: self.name.clone(),
            population: self.population,
            gdp: self.gdp,
            unpaid_hours: self.unpaid_hours,
            female_labor: self.female_labor,
            context: self.context,
            success_model: self.success_model.clone(),
            priority: self.priority.clone(),
            political_stability: self.political_stability,
            institutional_capacity: self.institutional_capacity,
            fiscal_space: self.fiscal_space,
        })
    }
}

/// User-selected scenario. Population is in millions and GDP in billions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyScenario {
    pub country: String,
    pub policy_focus: PolicyFocus,
    pub unpaid_hours: f64,
    pub population: f64,
    pub gdp: f64,
    pub country_context: EconomicContext,
}

impl PolicyScenario {
    /// Seeds a scenario from a country profile.
    pub fn for_country(code: &str, profile: &CountryProfile, focus: PolicyFocus) -> Self {
        Self {
            country: code.to_string(),
            policy_focus: focus,
            unpaid_hours: profile.unpaid_hours,
            population: profile.population,
            gdp: profile.gdp,
            country_context: profile.context,
        }
    }

    /// Checks the fields a scenario can carry in from deserialization or
    /// direct edits after [`PolicyScenario::for_country`].
    ///
    /// # Errors
    ///
    /// Returns [`UnpaidWorkError::InvalidInput`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(UnpaidWorkError::InvalidInput(format!("{}: {}", self.country, msg)));

        if !self.population.is_finite() || self.population <= 0.0 {
            return invalid(format!("population must be positive, got {}", self.population));
        }
        if !self.gdp.is_finite() || self.gdp <= 0.0 {
            return invalid(format!("gdp must be positive, got {}", self.gdp));
        }
        if !self.unpaid_hours.is_finite() || !(0.0..=24.0).contains(&self.unpaid_hours) {
            return invalid(format!("unpaid hours must lie in [0, 24], got {}", self.unpaid_hours));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder_accepts_valid_input() {
        let record = CountryRecord::builder("JP", "Japan")
            .unpaid_hours(5.6, 1.3)
            .population(123_975_371, 63_599_365.3)
            .gdp(4.0276e12)
            .average_wage(6.5)
            .year(2023)
            .build()
            .unwrap();
        assert_eq!(record.code(), "JP");
        assert_eq!(*record.population(), 123_975_371);
    }

    #[test]
    fn test_record_builder_rejects_female_population_above_total() {
        let result = CountryRecord::builder("XX", "Nowhere")
            .unpaid_hours(3.0, 1.0)
            .population(100, 150.0)
            .gdp(1.0e9)
            .average_wage(5.0)
            .build();
        assert!(matches!(result, Err(UnpaidWorkError::InvalidInput(_))));
    }

    #[test]
    fn test_record_builder_allows_zero_male_hours() {
        let result = CountryRecord::builder("XX", "Nowhere")
            .unpaid_hours(3.0, 0.0)
            .population(100, 50.0)
            .gdp(1.0e9)
            .average_wage(5.0)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_record_builder_rejects_non_positive_gdp() {
        let result = CountryRecord::builder("XX", "Nowhere")
            .unpaid_hours(3.0, 1.0)
            .population(100, 50.0)
            .gdp(0.0)
            .average_wage(5.0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_scenario_validation_names_the_field() {
        let profile = CountryProfile::builder("Japan", EconomicContext::Developed)
            .population(125.0)
            .gdp(4900.0)
            .unpaid_hours(3.6)
            .female_labor(53.2)
            .build()
            .unwrap();
        let scenario = PolicyScenario::for_country("JP", &profile, PolicyFocus::Childcare);
        assert!(scenario.validate().is_ok());

        let mut edited = scenario.clone();
        edited.gdp = 0.0;
        assert!(edited.validate().unwrap_err().to_string().contains("gdp"));

        let mut edited = scenario.clone();
        edited.unpaid_hours = -3.0;
        assert!(edited.validate().unwrap_err().to_string().contains("unpaid hours"));

        let mut edited = scenario;
        edited.population = f64::NAN;
        assert!(edited.validate().unwrap_err().to_string().contains("population"));
    }

    #[test]
    fn test_context_parsing() {
        assert_eq!("Developed".parse::<EconomicContext>().unwrap(), EconomicContext::Developed);
        assert_eq!(" frontier ".parse::<EconomicContext>().unwrap(), EconomicContext::Frontier);
        assert!("transitional".parse::<EconomicContext>().is_err());
    }

    #[test]
    fn test_policy_focus_unknown_tag_is_kept() {
        let focus: PolicyFocus = "Transport".parse().unwrap();
        assert_eq!(focus, PolicyFocus::Other("transport".to_string()));
        assert_eq!(focus.technical_complexity(), 5.0);
        assert_eq!(focus.capitalized(), "Transport");
    }

    #[test]
    fn test_policy_focus_serde_uses_tag() {
        let json = serde_json::to_string(&PolicyFocus::Eldercare).unwrap();
        assert_eq!(json, "\"eldercare\"");
        let back: PolicyFocus = serde_json::from_str("\"cooking\"").unwrap();
        assert_eq!(back, PolicyFocus::Cooking);
    }

    #[test]
    fn test_profile_builder_validates_ranges() {
        let err = CountryProfile::builder("Atlantis", EconomicContext::Emerging)
            .population(10.0)
            .gdp(100.0)
            .unpaid_hours(4.0)
            .female_labor(140.0)
            .build();
        assert!(err.is_err());

        let ok = CountryProfile::builder("Atlantis", EconomicContext::Emerging)
            .population(10.0)
            .gdp(100.0)
            .unpaid_hours(4.0)
            .female_labor(40.0)
            .political_stability(0.0)
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_scenario_for_country_copies_profile() {
        let profile = CountryProfile::builder("India", EconomicContext::Emerging)
            .population(1380.0)
            .gdp(3700.0)
            .unpaid_hours(5.2)
            .female_labor(20.3)
            .build()
            .unwrap();
        let scenario = PolicyScenario::for_country("IN", &profile, PolicyFocus::Childcare);
        assert_eq!(scenario.country, "IN");
        assert_eq!(scenario.unpaid_hours, 5.2);
        assert_eq!(scenario.population, 1380.0);
        assert_eq!(scenario.country_context, EconomicContext::Emerging);
    }
}
