//! Economic impact of recognising and servicing unpaid work under a policy
//! scenario.

use comfy_table::{Cell, Table};
use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::economics::DAYS_PER_YEAR;
use crate::format::{format_currency, format_percentage};
use crate::interval::{build_interval, ConfidenceInterval};
use crate::record::{CountryProfile, PolicyScenario};
use crate::sensitivity::{analyze_sensitivity, SensitivityAnalysis, SensitivityFactor};
use crate::Result;

/// Share of the population assumed to be female in scenario projections.
const FEMALE_SHARE: f64 = 0.49;
/// Hours in a full-time working year: 250 days of 8 hours.
const FULL_TIME_HOURS: f64 = 8.0 * 250.0;
/// Fraction of the unpaid-work GDP share assumed to convert into productivity.
const PRODUCTIVITY_CONVERSION: f64 = 0.43;

/// The three named sensitivity sub-analyses of an impact projection.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct ImpactSensitivity {
    wage_assumption: SensitivityAnalysis,
    participation_rate: SensitivityAnalysis,
    hours_reduction: SensitivityAnalysis,
}

/// Projected impact of a scenario, every headline figure carrying its band.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct EconomicImpact {
    /// Annual value of unpaid work, in currency units.
    hidden_value: ConfidenceInterval,
    /// Hidden value as a percentage of GDP.
    gdp_percentage: ConfidenceInterval,
    /// Full-time job equivalents of the unpaid hours. Because the scenario
    /// population is already in millions, this figure is scaled down by a
    /// further million.
    workforce_equivalent: ConfidenceInterval,
    /// GDP percentage points attainable through productivity gains.
    productivity_gain: ConfidenceInterval,
    sensitivity: ImpactSensitivity,
}

fn wage_factors() -> Vec<SensitivityFactor> {
    vec![
        SensitivityFactor::new("Regional wage variation", 0.3, 0.8),
        SensitivityFactor::new("Skill premium adjustments", 0.2, 0.6),
        SensitivityFactor::new("Productivity differentials", 0.25, 0.7),
    ]
}

fn participation_factors() -> Vec<SensitivityFactor> {
    vec![
        SensitivityFactor::new("Cultural acceptance rates", 0.4, 0.6),
        SensitivityFactor::new("Service accessibility", 0.3, 0.8),
        SensitivityFactor::new("Economic incentives", 0.2, 0.9),
    ]
}

fn hours_factors() -> Vec<SensitivityFactor> {
    vec![
        SensitivityFactor::new("Service substitution rates", 0.5, 0.7),
        SensitivityFactor::new("Quality preferences", 0.3, -0.4),
        SensitivityFactor::new("Behavioral adaptation", 0.4, 0.5),
    ]
}

/// Projects the economic impact of `scenario` for `country`.
///
/// Hours, population and GDP come from the scenario. Wage level and data
/// quality follow the country's economic context, and the participation
/// analysis is based on the country's female labor participation.
///
/// # Errors
///
/// Returns [`crate::UnpaidWorkError::InvalidInput`] when the scenario fails
/// [`PolicyScenario::validate`].
pub fn compute_economic_impact(scenario: &PolicyScenario, country: &CountryProfile) -> Result<EconomicImpact> {
    scenario.validate()?;

    let context = *country.context();
    let hourly_wage = context.hourly_wage();
    let data_quality = context.data_quality();

    let female_population = scenario.population * FEMALE_SHARE;
    let base_value = female_population * 1e6 * scenario.unpaid_hours * DAYS_PER_YEAR * hourly_wage;

    let hidden_value = build_interval(base_value, 0.3, data_quality);
    let gdp_percentage = build_interval(base_value / (scenario.gdp * 1e9) * 100.0, 0.25, data_quality);
    let workforce_equivalent = build_interval(
        scenario.unpaid_hours * female_population * DAYS_PER_YEAR / FULL_TIME_HOURS / 1e6,
        0.2,
        data_quality,
    );
    let productivity_gain = build_interval(
        gdp_percentage.mid() * PRODUCTIVITY_CONVERSION,
        0.4,
        data_quality * 0.8,
    );

    tracing::debug!(
        country = %scenario.country,
        focus = %scenario.policy_focus,
        hidden_value = base_value,
        "computed economic impact"
    );

    Ok(EconomicImpact {
        hidden_value,
        gdp_percentage,
        workforce_equivalent,
        productivity_gain,
        sensitivity: ImpactSensitivity {
            wage_assumption: analyze_sensitivity(hourly_wage, &wage_factors()),
            participation_rate: analyze_sensitivity(*country.female_labor(), &participation_factors()),
            hours_reduction: analyze_sensitivity(scenario.unpaid_hours, &hours_factors()),
        },
    })
}

fn spread(ci: &ConfidenceInterval) -> String {
    match ci.relative_spread() {
        Some(pct) => format!("±{:.0}%", pct),
        None => "n/a".to_string(),
    }
}

impl EconomicImpact {
    /// Prints the headline figures and sensitivity ranges as tables.
    pub fn summary(&self) {
        println!("Economic Impact Projection");
        println!("========================================");
        let mut table = Table::new();
        table.set_header(vec!["Metric", "Low", "Mid", "High", "Spread", "Confidence"]);
        let rows: [(&str, &ConfidenceInterval, fn(f64) -> String); 4] = [
            ("Hidden value", &self.hidden_value, format_currency),
            ("Share of GDP", &self.gdp_percentage, format_percentage),
            ("Workforce equivalent", &self.workforce_equivalent, |v| format!("{:.4}", v)),
            ("Productivity gain", &self.productivity_gain, format_percentage),
        ];
        for (name, ci, fmt) in rows {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(fmt(*ci.low())),
                Cell::new(fmt(*ci.mid())),
                Cell::new(fmt(*ci.high())),
                Cell::new(spread(ci)),
                Cell::new(format!("{:.0}%", ci.confidence() * 100.0)),
            ]);
        }
        println!("{}", table);

        let mut sensitivity_table = Table::new();
        sensitivity_table.set_header(vec!["Assumption", "Pessimistic", "Base", "Optimistic", "Key factors"]);
        for (name, analysis) in self.sensitivity.named() {
            sensitivity_table.add_row(vec![
                Cell::new(name),
                Cell::new(format!("{:.2}", analysis.pessimistic())),
                Cell::new(format!("{:.2}", analysis.base_case())),
                Cell::new(format!("{:.2}", analysis.optimistic())),
                Cell::new(analysis.key_assumptions().join(", ")),
            ]);
        }
        println!("\nSensitivity Analysis");
        println!("{}", sensitivity_table);
    }

    /// Exports the projection to a Markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("### Economic Impact Projection\n\n");
        md.push_str("| Metric | Low | Mid | High | Confidence |\n");
        md.push_str("|---|---|---|---|---|\n");
        for (name, ci) in [
            ("Hidden value", &self.hidden_value),
            ("Share of GDP (%)", &self.gdp_percentage),
            ("Workforce equivalent", &self.workforce_equivalent),
            ("Productivity gain (%)", &self.productivity_gain),
        ] {
            md.push_str(&format!(
                "| {} | {:.4} | {:.4} | {:.4} | {:.2} |\n",
                name,
                ci.low(),
                ci.mid(),
                ci.high(),
                ci.confidence()
            ));
        }
        md.push_str("\n| Assumption | Pessimistic | Base | Optimistic |\n");
        md.push_str("|---|---|---|---|\n");
        for (name, analysis) in self.sensitivity.named() {
            md.push_str(&format!(
                "| {} | {:.4} | {:.4} | {:.4} |\n",
                name,
                analysis.pessimistic(),
                analysis.base_case(),
                analysis.optimistic()
            ));
        }
        md
    }

    /// Exports the projection to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl ImpactSensitivity {
    fn named(&self) -> [(&'static str, &SensitivityAnalysis); 3] {
        [
            ("Wage assumption", &self.wage_assumption),
            ("Participation rate", &self.participation_rate),
            ("Hours reduction", &self.hours_reduction),
        ]
    }
}
