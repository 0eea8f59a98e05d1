use comfy_table::{Cell, Table};
use getset::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::{format_currency, format_percentage};
use crate::interval::{build_interval, ConfidenceInterval};
use crate::policy::complexity::{score_complexity, ImplementationComplexity};
use crate::policy::impact::EconomicImpact;
use crate::policy::stakeholders::{map_stakeholders, StakeholderAnalysis};
use crate::record::{CountryProfile, PolicyScenario};
use crate::sensitivity::{analyze_sensitivity, SensitivityAnalysis, SensitivityFactor};

/// Ambition level of a recommendation, from the largest national program to
/// the longer-horizon leadership play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationTier {
    Critical,
    High,
    Strategic,
}

impl RecommendationTier {
    pub const ALL: [RecommendationTier; 3] =
        [RecommendationTier::Critical, RecommendationTier::High, RecommendationTier::Strategic];

    fn index(&self) -> u32 {
        match self {
            RecommendationTier::Critical => 0,
            RecommendationTier::High => 1,
            RecommendationTier::Strategic => 2,
        }
    }

    pub fn priority(&self) -> &'static str {
        match self {
            RecommendationTier::Critical => "CRITICAL - NATIONAL PRIORITY",
            RecommendationTier::High => "HIGH - STRATEGIC IMPERATIVE",
            RecommendationTier::Strategic => "STRATEGIC - GLOBAL LEADERSHIP",
        }
    }

    fn title_suffix(&self) -> &'static str {
        match self {
            RecommendationTier::Critical => "Revolution",
            RecommendationTier::High => "Transformation",
            RecommendationTier::Strategic => "Leadership Initiative",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RecommendationTier::Critical => "Critical",
            RecommendationTier::High => "High",
            RecommendationTier::Strategic => "Strategic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Risk {
    kind: String,
    /// In [0, 1].
    probability: f64,
    /// 1-10 severity.
    impact: f64,
    mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct PolicyRecommendation {
    tier: RecommendationTier,
    title: String,
    priority: String,
    /// Program investment in currency units.
    investment: ConfidenceInterval,
    /// Return on investment in percent.
    roi: ConfidenceInterval,
    jobs_created: ConfidenceInterval,
    /// GDP percentage points gained.
    gdp_impact: ConfidenceInterval,
    sensitivity_analysis: SensitivityAnalysis,
    implementation_complexity: ImplementationComplexity,
    stakeholder_analysis: StakeholderAnalysis,
    timeline: String,
    /// 3-10 scale.
    political_feasibility: f64,
    risks: Vec<Risk>,
    /// Three rollout phases.
    implementation: Vec<String>,
    competitive_advantage: Vec<String>,
}

fn gdp_impact_factors() -> Vec<SensitivityFactor> {
    vec![
        SensitivityFactor::new("Policy adoption rate", 0.3, 0.8),
        SensitivityFactor::new("Economic conditions", 0.2, 0.6),
        SensitivityFactor::new("Implementation quality", 0.4, 0.9),
    ]
}

/// Builds one recommendation per [`RecommendationTier`].
///
/// Higher tiers commit a larger share of the hidden value, create
/// proportionally fewer jobs and target a smaller GDP gain over a longer
/// timeline.
pub fn build_recommendations(
    scenario: &PolicyScenario,
    country: &CountryProfile,
    impact: &EconomicImpact,
) -> Vec<PolicyRecommendation> {
    let focus = &scenario.policy_focus;
    let hidden_mid = *impact.hidden_value().mid();

    // Complexity and stakeholders do not vary by tier.
    let complexity = score_complexity(country, focus, hidden_mid);
    let stakeholders = map_stakeholders(country, focus);

    RecommendationTier::ALL
        .iter()
        .map(|&tier| {
            let i = tier.index() as f64;
            let base_investment = hidden_mid * (0.02 + i * 0.01);
            let base_jobs = impact.workforce_equivalent().mid() * (0.15 - i * 0.02);
            let base_gdp = impact.gdp_percentage().mid() * (0.4 - i * 0.1);
            let base_roi = 400.0 - i * 50.0;

            let stability = *country.political_stability();
            let political_feasibility = (stability - complexity.political() + 5.0).clamp(3.0, 10.0);
            let fiscal_capacity = country.gdp() * 1e9 * country.fiscal_space() / 100.0;

            let risks = vec![
                Risk {
                    kind: "Political Opposition".to_string(),
                    probability: (10.0 - stability) / 10.0,
                    impact: 8.0,
                    mitigation: "Build cross-party consensus through economic evidence".to_string(),
                },
                Risk {
                    kind: "Implementation Delays".to_string(),
                    probability: complexity.technical() / 10.0,
                    impact: 6.0,
                    mitigation: "Phased rollout with international technical assistance".to_string(),
                },
                Risk {
                    kind: "Budget Constraints".to_string(),
                    probability: (base_investment / fiscal_capacity).min(0.9),
                    impact: 9.0,
                    mitigation: "Multi-year funding with international co-financing".to_string(),
                },
            ];

            let implementation = vec![
                format!(
                    "Phase 1 (Months 1-6): Establish {} {} Authority with ${}B budget",
                    country.name(),
                    focus,
                    (country.gdp() * 0.002).round()
                ),
                format!(
                    "Phase 2 (Months 7-18): Deploy pilot programs in {} major cities",
                    (scenario.population / 15.0).round()
                ),
                "Phase 3 (Months 19-36): Scale to universal coverage with international partnerships".to_string(),
            ];

            let competitive_advantage = vec![
                format!("First-mover advantage in {} innovation", focus),
                format!(
                    "Export market creation worth ${}B+ annually",
                    (hidden_mid / 1e9 * 0.1).round()
                ),
            ];

            let tier_offset = tier.index() * 6;
            PolicyRecommendation {
                tier,
                title: format!("{} {} {}", country.name(), focus.capitalized(), tier.title_suffix()),
                priority: tier.priority().to_string(),
                investment: build_interval(base_investment, 0.3, 0.8),
                roi: build_interval(base_roi, 0.4, 0.7),
                jobs_created: build_interval(base_jobs, 0.25, 0.8),
                gdp_impact: build_interval(base_gdp, 0.35, 0.75),
                sensitivity_analysis: analyze_sensitivity(base_gdp, &gdp_impact_factors()),
                implementation_complexity: complexity.clone(),
                stakeholder_analysis: stakeholders.clone(),
                timeline: format!("{}-{} months", 12 + tier_offset, 24 + tier_offset),
                political_feasibility,
                risks,
                implementation,
                competitive_advantage,
            }
        })
        .collect()
}

impl PolicyRecommendation {
    pub fn summary(&self) {
        println!("{} [{}]", self.title, self.priority);
        let mut table = Table::new();
        table.set_header(vec!["Metric", "Low", "Mid", "High"]);
        table.add_row(vec![
            Cell::new("Investment"),
            Cell::new(format_currency(*self.investment.low())),
            Cell::new(format_currency(*self.investment.mid())),
            Cell::new(format_currency(*self.investment.high())),
        ]);
        table.add_row(vec![
            Cell::new("ROI"),
            Cell::new(format_percentage(*self.roi.low())),
            Cell::new(format_percentage(*self.roi.mid())),
            Cell::new(format_percentage(*self.roi.high())),
        ]);
        table.add_row(vec![
            Cell::new("GDP impact"),
            Cell::new(format_percentage(*self.gdp_impact.low())),
            Cell::new(format_percentage(*self.gdp_impact.mid())),
            Cell::new(format_percentage(*self.gdp_impact.high())),
        ]);
        println!("{}", table);
        println!(
            "Timeline: {} | Political feasibility: {:.1}/10 | Complexity: {}/10",
            self.timeline,
            self.political_feasibility,
            self.implementation_complexity.overall()
        );

        let mut risk_table = Table::new();
        risk_table.set_header(vec!["Risk", "Probability", "Impact", "Mitigation"]);
        for risk in &self.risks {
            risk_table.add_row(vec![
                Cell::new(&risk.kind),
                Cell::new(format!("{:.0}%", risk.probability * 100.0)),
                Cell::new(format!("{:.0}", risk.impact)),
                Cell::new(&risk.mitigation),
            ]);
        }
        println!("{}", risk_table);
        for phase in &self.implementation {
            println!("  - {}", phase);
        }
    }
}
