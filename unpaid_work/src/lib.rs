//! Valuation of unpaid domestic and care work.
//!
//! This library turns time-use survey hours, GDP and population figures into
//! derived economic metrics: the annual volume and monetary value of unpaid
//! work, its share of GDP, and the gender gap in hours. On the policy side it
//! projects the economic impact of a policy scenario with deterministic
//! confidence bands and sensitivity ranges, scores implementation complexity,
//! maps stakeholders and assembles tiered recommendations.
//!
//! Every calculation is a pure function of its inputs. Nothing here performs
//! I/O apart from the optional DataFrame loaders in [`frame`].
//!
//! # Example
//!
//! ```ignore
//! use unpaid_work::{compute_country_economics, compute_global_stats, CountryRecord};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let us = CountryRecord::builder("US", "United States")
//!         .unpaid_hours(4.0, 2.5)
//!         .population(340_110_988, 172_776_381.9)
//!         .gdp(2.875e13)
//!         .average_wage(16.9)
//!         .year(2023)
//!         .build()?;
//!
//!     let economics = compute_country_economics(&us)?;
//!     println!("{:.1}% of GDP", economics.gdp_percentage());
//!
//!     let stats = compute_global_stats(&[us])?;
//!     stats.summary();
//!     Ok(())
//! }
//! ```
//!
//! ### Policy impact
//!
//! ```ignore
//! use unpaid_work::{compute_economic_impact, CountryProfile, EconomicContext, PolicyFocus, PolicyScenario};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let profile = CountryProfile::builder("Germany", EconomicContext::Developed)
//!         .population(83.0)
//!         .gdp(4200.0)
//!         .unpaid_hours(3.1)
//!         .female_labor(55.4)
//!         .political_stability(9.0)
//!         .institutional_capacity(9.0)
//!         .fiscal_space(12.0)
//!         .build()?;
//!
//!     let scenario = PolicyScenario::for_country("DE", &profile, PolicyFocus::Eldercare);
//!     let impact = compute_economic_impact(&scenario, &profile)?;
//!     impact.summary();
//!     Ok(())
//! }
//! ```

use polars::prelude::PolarsError;
use thiserror::Error;

pub mod aggregate;
pub mod data;
pub mod economics;
pub mod format;
pub mod frame;
pub mod interval;
pub mod policy;
pub mod prompt;
pub mod ranking;
pub mod record;
pub mod sensitivity;

pub use crate::aggregate::{compute_global_stats, GlobalStats};
pub use crate::data::{assemble_record, assemble_records, wage_proxy, EconomicIndicators, IndicatorSource, SurveyEntry};
pub use crate::economics::{compute_all, compute_country_economics, CountryEconomics};
pub use crate::interval::{build_interval, build_interval_default, ConfidenceInterval, DEFAULT_DATA_QUALITY};
pub use crate::policy::complexity::{score_complexity, ComplexityCategory, ComplexityFactor, ImplementationComplexity};
pub use crate::policy::impact::{compute_economic_impact, EconomicImpact, ImpactSensitivity};
pub use crate::policy::recommendation::{build_recommendations, PolicyRecommendation, RecommendationTier, Risk};
pub use crate::policy::stakeholders::{map_stakeholders, Champion, NeutralParty, Opponent, StakeholderAnalysis};
pub use crate::prompt::advisory_prompt;
pub use crate::ranking::{rank_countries, top_countries, RankedCountry, RankingMetric};
pub use crate::record::{
    CountryProfile, CountryProfileBuilder, CountryRecord, CountryRecordBuilder, EconomicContext, PolicyFocus,
    PolicyScenario,
};
pub use crate::sensitivity::{analyze_sensitivity, FactorImpact, SensitivityAnalysis, SensitivityFactor};

/// Error type for the `unpaid_work` library.
#[derive(Error, Debug)]
pub enum UnpaidWorkError {
    /// Input that the engine refuses to compute on: an empty collection, a
    /// zero denominator, or a record that failed builder validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A required column is missing from a DataFrame.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    /// Wraps a `PolarsError`.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, UnpaidWorkError>;
