use serde::{Deserialize, Serialize};
use unpaid_work::{
    EconomicImpact, ImplementationComplexity, PolicyRecommendation, PolicyScenario, StakeholderAnalysis,
};

/// One country as sent by the presentation layer.
#[derive(Deserialize, Debug, Clone)]
pub struct CountryRow {
    pub code: String,
    pub name: String,
    pub female_unpaid_hours: f64,
    pub male_unpaid_hours: f64,
    pub population: u64,
    pub female_population_percent: f64,
    pub gdp: f64,
    pub average_wage: Option<f64>, // Derived from GDP per capita when absent
    pub year: Option<i32>,
}

#[derive(Deserialize, Debug)]
pub struct GlobalStatsRequest {
    pub rows: Option<Vec<CountryRow>>,
    pub csv_data: Option<Vec<u8>>, // Same columns as CountryRow, used when rows is absent
    pub rank_by: Option<String>,   // "gap", "gdp", "hours", "value"
    pub top: Option<usize>,
}

#[derive(Serialize, Debug)]
pub struct CountryMetrics {
    pub code: String,
    pub name: String,
    pub annual_unpaid_hours: f64,
    pub economic_value: f64,
    pub gdp_percentage: f64,
    pub gender_gap_hours: f64,
    pub gender_gap_ratio: f64,
}

#[derive(Serialize, Debug)]
pub struct RankingEntry {
    pub rank: usize,
    pub code: String,
    pub name: String,
    pub value: f64,
}

#[derive(Serialize, Debug)]
pub struct GlobalStatsResponse {
    pub total_countries: usize,
    pub average_female_hours: f64,
    pub average_male_hours: f64,
    pub total_economic_value: f64,
    pub average_gdp_percentage: f64,
    pub rank_by: String,
    pub ranking: Vec<RankingEntry>,
    pub countries: Vec<CountryMetrics>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioRequest {
    pub country: String,
    pub code: Option<String>,
    pub context: String, // "developed", "emerging", "frontier"
    pub population: f64, // Millions
    pub gdp: f64,        // Billions
    pub unpaid_hours: f64,
    pub female_labor: f64,
    pub political_stability: Option<f64>,
    pub institutional_capacity: Option<f64>,
    pub fiscal_space: Option<f64>,
    pub policy_focus: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct SimulationResponse {
    pub scenario: PolicyScenario,
    pub impact: EconomicImpact,
    pub complexity: ImplementationComplexity,
    pub stakeholders: StakeholderAnalysis,
    pub recommendations: Vec<PolicyRecommendation>,
    pub prompt: String,
}
